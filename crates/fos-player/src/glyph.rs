//! Control glyphs

/// Play control glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayGlyph {
    /// Media is paused; clicking plays
    Play,
    /// Media is playing; clicking pauses
    Pause,
}

impl PlayGlyph {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Play => "▶",
            Self::Pause => "❚❚",
        }
    }

    /// Glyph matching a paused state
    pub fn for_paused(paused: bool) -> Self {
        if paused { Self::Play } else { Self::Pause }
    }
}

/// Mute control glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MuteGlyph {
    Unmuted,
    Muted,
}

impl MuteGlyph {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unmuted => "🔊",
            Self::Muted => "🔇",
        }
    }

    pub fn for_muted(muted: bool) -> Self {
        if muted { Self::Muted } else { Self::Unmuted }
    }
}

pub const FULLSCREEN_GLYPH: &str = "⛶";
