//! Keyboard shortcuts

use fos_dom::{Document, KeyCode, NodeId};

use crate::config::KeyboardScope;

/// What a key press asks the player to do
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyCommand {
    TogglePlayback,
    /// Relative seek in seconds
    SeekBy(f64),
}

/// Map a key to a command
pub fn command_for(key: &KeyCode, seek_step: f64) -> Option<KeyCommand> {
    match key {
        KeyCode::Space => Some(KeyCommand::TogglePlayback),
        KeyCode::ArrowRight => Some(KeyCommand::SeekBy(seek_step)),
        KeyCode::ArrowLeft => Some(KeyCommand::SeekBy(-seek_step)),
        _ => None,
    }
}

/// Check if a key press with focus on `focused` belongs to this player
///
/// `owned` lists the player's own nodes (mount and controls). Text-entry
/// fields never forward shortcuts.
pub fn accepts_focus(
    document: &Document,
    focused: NodeId,
    scope: KeyboardScope,
    owned: &[NodeId],
) -> bool {
    if document
        .tree()
        .element(focused)
        .is_some_and(|el| el.is_text_entry())
    {
        return false;
    }
    match scope {
        KeyboardScope::Document => true,
        KeyboardScope::MountSubtree => owned.iter().any(|&node| document.contains(node, focused)),
    }
}
