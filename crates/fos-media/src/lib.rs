//! fOS Media
//!
//! Media element APIs for the fOS player controls.
//!
//! Features:
//! - HTMLVideoElement, HTMLAudioElement
//! - Buffered/seekable time ranges
//! - Media events queued for the host event loop
//! - Fullscreen presentation
//! - `MediaControl`, the surface a player controller drives

pub mod control;
pub mod element;
pub mod events;
pub mod fullscreen;

pub use control::MediaControl;
pub use element::{
    HTMLAudioElement, HTMLMediaElement, HTMLVideoElement, MediaError, MediaErrorCode,
    NetworkState, ReadyState, TimeRanges,
};
pub use events::MediaEvent;
pub use fullscreen::{FullscreenError, FullscreenManager, FullscreenOptions, NavigationUI};

/// Errors thrown by media element commands
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MediaApiError {
    #[error("Not supported: {0}")]
    NotSupported(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Index size: {0} is outside the range [0, 1]")]
    IndexSize(f64),
}
