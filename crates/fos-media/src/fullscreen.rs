//! Fullscreen API
//!
//! Fullscreen presentation of media elements.

/// Fullscreen options
#[derive(Debug, Clone, Default)]
pub struct FullscreenOptions {
    pub navigation_ui: NavigationUI,
}

/// Navigation UI visibility
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavigationUI {
    #[default]
    Auto,
    Show,
    Hide,
}

/// Fullscreen manager
#[derive(Debug)]
pub struct FullscreenManager {
    pub fullscreen_element: Option<u64>, // Element ID
    pub fullscreen_enabled: bool,
    pub navigation_ui: NavigationUI,
}

impl FullscreenManager {
    pub fn new() -> Self {
        Self {
            fullscreen_element: None,
            fullscreen_enabled: true,
            navigation_ui: NavigationUI::Auto,
        }
    }

    /// Manager that refuses every request, e.g. inside a sandboxed frame
    pub fn disabled() -> Self {
        Self {
            fullscreen_enabled: false,
            ..Self::new()
        }
    }

    /// Request fullscreen
    pub fn request_fullscreen(&mut self, element_id: u64, options: FullscreenOptions) -> Result<(), FullscreenError> {
        if !self.fullscreen_enabled {
            return Err(FullscreenError::NotAllowed);
        }
        self.fullscreen_element = Some(element_id);
        self.navigation_ui = options.navigation_ui;
        Ok(())
    }

    /// Exit fullscreen
    pub fn exit_fullscreen(&mut self) -> Result<(), FullscreenError> {
        if self.fullscreen_element.take().is_none() {
            return Err(FullscreenError::NotInFullscreen);
        }
        Ok(())
    }

    /// Check if in fullscreen
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen_element.is_some()
    }
}

impl Default for FullscreenManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Fullscreen error
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FullscreenError {
    #[error("Fullscreen not allowed")]
    NotAllowed,
    #[error("Fullscreen not supported")]
    NotSupported,
    #[error("Document is not in fullscreen")]
    NotInFullscreen,
}
