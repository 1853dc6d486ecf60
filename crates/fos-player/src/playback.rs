//! Playback toggle
//!
//! Click on the play control and the Space key both go through [`toggle`].

use crate::glyph::PlayGlyph;

/// Command the toggle issues to the media element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackAction {
    Play,
    Pause,
}

/// Decide the command and the resulting glyph from the paused state
pub fn toggle(paused: bool) -> (PlaybackAction, PlayGlyph) {
    if paused {
        (PlaybackAction::Play, PlayGlyph::Pause)
    } else {
        (PlaybackAction::Pause, PlayGlyph::Play)
    }
}
