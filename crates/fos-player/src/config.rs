//! Player Configuration

use fos_dom::ElementData;
use serde::Deserialize;

use crate::{PlayerError, Result};

/// Default player width in pixels
pub const DEFAULT_WIDTH: u32 = 640;

/// Default arrow-key seek step in seconds
pub const DEFAULT_SEEK_STEP_SECS: f64 = 5.0;

/// Text shown in the time display when playback fails
pub const DEFAULT_ERROR_MESSAGE: &str = "Playback error";

/// Which key presses a player reacts to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyboardScope {
    /// Every key press in the document, unless focus is in a text field
    #[default]
    Document,
    /// Only while focus is inside the player's mount or on one of its controls
    MountSubtree,
}

/// How a media error is shown to the user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorPresentation {
    /// Disable the play control and print the message in the time display
    #[default]
    Inline,
    /// Queue a blocking alert on the document
    Alert,
}

/// Player configuration, immutable once the player is built
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerConfig {
    /// Media URL
    pub src: String,
    /// Container width in pixels
    pub width: u32,
    /// Start playback as soon as metadata is loaded
    pub autoplay: bool,
    /// Seconds moved by ArrowLeft/ArrowRight
    pub seek_step: f64,
    /// Clamp seeks to `[0, duration]` and volume to `[0, 1]`
    pub clamp: bool,
    pub keyboard_scope: KeyboardScope,
    pub error_presentation: ErrorPresentation,
    pub error_message: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            src: String::new(),
            width: DEFAULT_WIDTH,
            autoplay: false,
            seek_step: DEFAULT_SEEK_STEP_SECS,
            clamp: true,
            keyboard_scope: KeyboardScope::Document,
            error_presentation: ErrorPresentation::Inline,
            error_message: DEFAULT_ERROR_MESSAGE.to_string(),
        }
    }
}

impl PlayerConfig {
    /// Configuration for `src` with every other option at its default
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            ..Self::default()
        }
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn with_seek_step(mut self, seconds: f64) -> Self {
        self.seek_step = seconds;
        self
    }

    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    pub fn with_keyboard_scope(mut self, scope: KeyboardScope) -> Self {
        self.keyboard_scope = scope;
        self
    }

    pub fn with_error_presentation(mut self, presentation: ErrorPresentation) -> Self {
        self.error_presentation = presentation;
        self
    }

    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }

    /// Read `data-src`, `data-width` and `data-autoplay` from a mount element
    ///
    /// Attributes that are missing or unparseable keep their defaults.
    pub fn from_element(element: &ElementData) -> Self {
        let mut config = Self::default();
        if let Some(src) = element.get_attr("data-src") {
            config.src = src.to_string();
        }
        if let Some(width) = element.get_attr("data-width").and_then(|w| w.trim().parse().ok()) {
            config.width = width;
        }
        if let Some(autoplay) = element.get_attr("data-autoplay") {
            config.autoplay = autoplay != "false";
        }
        config
    }

    /// Reject values the controller cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(PlayerError::InvalidConfig("width must be positive".into()));
        }
        if !self.seek_step.is_finite() || self.seek_step <= 0.0 {
            return Err(PlayerError::InvalidConfig(format!(
                "seek step must be a positive number of seconds, got {}",
                self.seek_step
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlayerConfig::new("sample.mp4");
        assert_eq!(config.src, "sample.mp4");
        assert_eq!(config.width, 640);
        assert!(!config.autoplay);
        assert_eq!(config.seek_step, 5.0);
        assert!(config.clamp);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: PlayerConfig =
            serde_json::from_str(r#"{ "src": "sample.mp4", "width": 800 }"#).unwrap();
        assert_eq!(config.width, 800);
        assert!(!config.autoplay);
        assert_eq!(config.keyboard_scope, KeyboardScope::Document);
    }

    #[test]
    fn test_deserialize_extended_options() {
        let json = r#"{
            "src": "clip.webm",
            "autoplay": true,
            "seekStep": 10,
            "keyboardScope": "mount-subtree",
            "errorPresentation": "alert",
            "unknownOption": 1
        }"#;
        let config: PlayerConfig = serde_json::from_str(json).unwrap();
        assert!(config.autoplay);
        assert_eq!(config.seek_step, 10.0);
        assert_eq!(config.keyboard_scope, KeyboardScope::MountSubtree);
        assert_eq!(config.error_presentation, ErrorPresentation::Alert);
        assert_eq!(config.width, DEFAULT_WIDTH);
    }

    #[test]
    fn test_from_element_attributes() {
        let mut el = ElementData::new("div");
        el.set_attr("data-src", "movie.mp4");
        el.set_attr("data-width", "1024");
        el.set_attr("data-autoplay", "");

        let config = PlayerConfig::from_element(&el);
        assert_eq!(config.src, "movie.mp4");
        assert_eq!(config.width, 1024);
        assert!(config.autoplay);

        el.set_attr("data-width", "wide");
        el.set_attr("data-autoplay", "false");
        let config = PlayerConfig::from_element(&el);
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert!(!config.autoplay);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(matches!(
            PlayerConfig::new("a.mp4").with_width(0).validate(),
            Err(PlayerError::InvalidConfig(_))
        ));
        assert!(PlayerConfig::new("a.mp4").with_seek_step(f64::NAN).validate().is_err());
        assert!(PlayerConfig::new("a.mp4").with_seek_step(-1.0).validate().is_err());
    }
}
