//! UI Events
//!
//! Pointer, form and keyboard events delivered to page scripts.

use crate::NodeId;

/// Event type identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Click,
    Input,
    KeyDown,
}

impl EventType {
    /// Check if the default action can be prevented
    pub fn cancelable(&self) -> bool {
        matches!(self, EventType::Click | EventType::KeyDown)
    }
}

/// Physical key, as reported by `KeyboardEvent.code`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Space,
    ArrowLeft,
    ArrowRight,
    Enter,
    Other(String),
}

impl KeyCode {
    /// Parse from a `KeyboardEvent.code` string
    pub fn from_code(code: &str) -> Self {
        match code {
            "Space" => Self::Space,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "Enter" | "NumpadEnter" => Self::Enter,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_code(&self) -> &str {
        match self {
            Self::Space => "Space",
            Self::ArrowLeft => "ArrowLeft",
            Self::ArrowRight => "ArrowRight",
            Self::Enter => "Enter",
            Self::Other(code) => code,
        }
    }
}

/// UI event dispatched to a target node
#[derive(Debug, Clone)]
pub struct UiEvent {
    pub event_type: EventType,
    pub target: NodeId,
    /// Key for keyboard events
    pub key: Option<KeyCode>,
    pub cancelable: bool,
    default_prevented: bool,
}

impl UiEvent {
    fn new(event_type: EventType, target: NodeId, key: Option<KeyCode>) -> Self {
        Self {
            event_type,
            target,
            key,
            cancelable: event_type.cancelable(),
            default_prevented: false,
        }
    }

    /// Create click event
    pub fn click(target: NodeId) -> Self {
        Self::new(EventType::Click, target, None)
    }

    /// Create input event (fired while a range/text control changes)
    pub fn input(target: NodeId) -> Self {
        Self::new(EventType::Input, target, None)
    }

    /// Create keydown event; `target` is the focused element or the document
    pub fn key_down(target: NodeId, key: KeyCode) -> Self {
        Self::new(EventType::KeyDown, target, Some(key))
    }

    /// Prevent default action
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    /// Check if default was prevented
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}
