//! Player errors

/// Errors raised while constructing a player
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayerError {
    #[error("Container {0} not found")]
    MountNotFound(String),

    #[error("Control #{0} not found")]
    ControlNotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("DOM error: {0}")]
    Dom(#[from] fos_dom::DomError),
}

pub type Result<T> = std::result::Result<T, PlayerError>;
