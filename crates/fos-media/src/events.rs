//! Media Events
//!
//! Notifications fired by a media element, in the order they happened.

/// Media element event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaEvent {
    /// `loadedmetadata`: duration and dimensions are known
    LoadedMetadata,
    /// `timeupdate`: current playback position changed
    TimeUpdate,
    /// `progress`: more media data was buffered
    Progress,
    /// `play`
    Play,
    /// `pause`
    Pause,
    /// `volumechange`: volume or muted changed
    VolumeChange,
    /// `ended`
    Ended,
    /// `error`: the engine failed to fetch or decode the resource
    Error,
}

impl MediaEvent {
    /// DOM event name
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadedMetadata => "loadedmetadata",
            Self::TimeUpdate => "timeupdate",
            Self::Progress => "progress",
            Self::Play => "play",
            Self::Pause => "pause",
            Self::VolumeChange => "volumechange",
            Self::Ended => "ended",
            Self::Error => "error",
        }
    }
}
