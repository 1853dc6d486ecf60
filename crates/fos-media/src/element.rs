//! Media Elements
//!
//! HTMLVideoElement and HTMLAudioElement.
//!
//! Decoding happens elsewhere; these types hold the state a page can
//! observe and queue the events a real engine would fire when it changes.

use std::fmt;

use crate::fullscreen::{FullscreenError, FullscreenManager, FullscreenOptions};
use crate::{MediaApiError, MediaEvent};

/// Network state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NetworkState {
    #[default]
    Empty = 0,
    Idle = 1,
    Loading = 2,
    NoSource = 3,
}

/// Ready state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReadyState {
    #[default]
    HaveNothing = 0,
    HaveMetadata = 1,
    HaveCurrentData = 2,
    HaveFutureData = 3,
    HaveEnoughData = 4,
}

/// Media error (`HTMLMediaElement.error`)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{code}: {message}")]
pub struct MediaError {
    pub code: MediaErrorCode,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaErrorCode {
    Aborted = 1,
    Network = 2,
    Decode = 3,
    SrcNotSupported = 4,
}

impl fmt::Display for MediaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Aborted => "MEDIA_ERR_ABORTED",
            Self::Network => "MEDIA_ERR_NETWORK",
            Self::Decode => "MEDIA_ERR_DECODE",
            Self::SrcNotSupported => "MEDIA_ERR_SRC_NOT_SUPPORTED",
        };
        f.write_str(name)
    }
}

/// Time ranges
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeRanges {
    ranges: Vec<(f64, f64)>,
}

impl TimeRanges {
    pub fn new() -> Self { Self::default() }

    /// Add a range, keeping ranges sorted and merging overlaps
    pub fn add(&mut self, start: f64, end: f64) {
        if !(start.is_finite() && end.is_finite()) || end < start {
            return;
        }
        self.ranges.push((start, end));
        self.ranges.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut merged: Vec<(f64, f64)> = Vec::with_capacity(self.ranges.len());
        for (s, e) in self.ranges.drain(..) {
            match merged.last_mut() {
                Some(last) if s <= last.1 => last.1 = last.1.max(e),
                _ => merged.push((s, e)),
            }
        }
        self.ranges = merged;
    }

    pub fn length(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn start(&self, index: usize) -> Option<f64> {
        self.ranges.get(index).map(|(s, _)| *s)
    }

    pub fn end(&self, index: usize) -> Option<f64> {
        self.ranges.get(index).map(|(_, e)| *e)
    }

    /// End of the last range
    pub fn last_end(&self) -> Option<f64> {
        self.ranges.last().map(|(_, e)| *e)
    }

    pub fn clear(&mut self) {
        self.ranges.clear();
    }
}

/// Base media element (shared between video/audio)
#[derive(Debug)]
pub struct HTMLMediaElement {
    // Source
    pub src: String,
    pub current_src: String,

    // State
    pub network_state: NetworkState,
    pub ready_state: ReadyState,
    pub error: Option<MediaError>,

    // Playback
    pub current_time: f64,
    pub duration: f64,
    pub paused: bool,
    pub ended: bool,
    pub seeking: bool,
    pub loop_: bool,

    // Volume
    pub volume: f64,
    pub muted: bool,

    // Buffering
    pub buffered: TimeRanges,
    pub seekable: TimeRanges,

    pub playback_rate: f64,

    /// Events fired but not yet dispatched by the host
    events: Vec<MediaEvent>,
}

impl HTMLMediaElement {
    pub fn new() -> Self {
        Self {
            src: String::new(),
            current_src: String::new(),
            network_state: NetworkState::Empty,
            ready_state: ReadyState::HaveNothing,
            error: None,
            current_time: 0.0,
            duration: f64::NAN,
            paused: true,
            ended: false,
            seeking: false,
            loop_: false,
            volume: 1.0,
            muted: false,
            buffered: TimeRanges::new(),
            seekable: TimeRanges::new(),
            playback_rate: 1.0,
            events: Vec::new(),
        }
    }

    /// Create from URL
    pub fn from_url(src: &str) -> Self {
        let mut media = Self::new();
        media.src = src.to_string();
        media
    }

    fn fire(&mut self, event: MediaEvent) {
        tracing::trace!("media event: {}", event.name());
        self.events.push(event);
    }

    /// Drain queued events in firing order
    pub fn take_events(&mut self) -> Vec<MediaEvent> {
        std::mem::take(&mut self.events)
    }

    /// Play media
    pub fn play(&mut self) -> Result<(), MediaApiError> {
        if let Some(err) = &self.error {
            return Err(MediaApiError::NotSupported(err.to_string()));
        }
        if self.ready_state < ReadyState::HaveFutureData {
            return Err(MediaApiError::InvalidState("Not enough data".into()));
        }
        if self.ended && !self.loop_ {
            self.current_time = 0.0;
        }
        if self.paused {
            self.paused = false;
            self.fire(MediaEvent::Play);
        }
        self.ended = false;
        Ok(())
    }

    /// Pause media
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            self.fire(MediaEvent::Pause);
        }
    }

    /// Load media
    pub fn load(&mut self) {
        self.current_src = self.src.clone();
        self.network_state = NetworkState::Loading;
        self.ready_state = ReadyState::HaveNothing;
        self.error = None;
        self.current_time = 0.0;
        self.duration = f64::NAN;
        self.buffered.clear();
        self.seekable.clear();
        self.paused = true;
        self.ended = false;
    }

    /// Seek to time, clamped to the known duration
    pub fn seek(&mut self, time: f64) {
        if !time.is_finite() {
            return;
        }
        self.seeking = true;
        let mut target = time.max(0.0);
        if self.duration.is_finite() {
            target = target.min(self.duration);
        }
        self.current_time = target;
        self.ended = self.duration.is_finite() && target >= self.duration && !self.loop_;
        self.seeking = false;
        self.fire(MediaEvent::TimeUpdate);
    }

    /// Set volume; values outside `[0, 1]` are rejected
    pub fn set_volume(&mut self, volume: f64) -> Result<(), MediaApiError> {
        if !(0.0..=1.0).contains(&volume) {
            return Err(MediaApiError::IndexSize(volume));
        }
        if self.volume != volume {
            self.volume = volume;
            self.fire(MediaEvent::VolumeChange);
        }
        Ok(())
    }

    pub fn set_muted(&mut self, muted: bool) {
        if self.muted != muted {
            self.muted = muted;
            self.fire(MediaEvent::VolumeChange);
        }
    }

    /// Engine learned the duration
    pub fn set_duration(&mut self, duration: f64) {
        self.duration = duration;
        if self.ready_state < ReadyState::HaveMetadata {
            self.ready_state = ReadyState::HaveMetadata;
        }
        self.seekable.clear();
        if duration.is_finite() {
            self.seekable.add(0.0, duration);
        }
        self.fire(MediaEvent::LoadedMetadata);
    }

    pub fn set_ready_state(&mut self, state: ReadyState) {
        self.ready_state = state;
        if state >= ReadyState::HaveEnoughData {
            self.network_state = NetworkState::Idle;
        }
    }

    /// Engine buffered another span
    pub fn add_buffered(&mut self, start: f64, end: f64) {
        self.buffered.add(start, end);
        self.fire(MediaEvent::Progress);
    }

    /// Engine advanced the playback position while playing
    pub fn advance(&mut self, seconds: f64) {
        if self.paused || !seconds.is_finite() {
            return;
        }
        let mut next = self.current_time + seconds * self.playback_rate;
        if self.duration.is_finite() && next >= self.duration {
            if self.loop_ {
                next %= self.duration;
            } else {
                next = self.duration;
                self.paused = true;
                self.ended = true;
            }
        }
        self.current_time = next;
        self.fire(MediaEvent::TimeUpdate);
        if self.ended {
            self.fire(MediaEvent::Pause);
            self.fire(MediaEvent::Ended);
        }
    }

    /// Engine failed to fetch or decode the resource
    pub fn fail(&mut self, code: MediaErrorCode, message: &str) {
        self.error = Some(MediaError {
            code,
            message: message.to_string(),
        });
        self.network_state = NetworkState::NoSource;
        self.paused = true;
        self.fire(MediaEvent::Error);
    }
}

impl Default for HTMLMediaElement {
    fn default() -> Self {
        Self::new()
    }
}

/// HTML Video Element
#[derive(Debug, Default)]
pub struct HTMLVideoElement {
    pub base: HTMLMediaElement,
    /// Identity used by the fullscreen manager
    pub element_id: u64,
    pub fullscreen: FullscreenManager,
}

impl HTMLVideoElement {
    pub fn new() -> Self {
        Self {
            base: HTMLMediaElement::new(),
            element_id: 0,
            fullscreen: FullscreenManager::new(),
        }
    }

    /// Create from URL
    pub fn from_url(src: &str) -> Self {
        let mut video = Self::new();
        video.base.src = src.to_string();
        video
    }

    /// `element.requestFullscreen()`
    pub fn request_fullscreen(&mut self, options: FullscreenOptions) -> Result<(), FullscreenError> {
        self.fullscreen.request_fullscreen(self.element_id, options)
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.fullscreen_element == Some(self.element_id)
    }
}

/// HTML Audio Element
#[derive(Debug, Default)]
pub struct HTMLAudioElement {
    pub base: HTMLMediaElement,
}

impl HTMLAudioElement {
    pub fn new() -> Self {
        Self {
            base: HTMLMediaElement::new(),
        }
    }

    /// Create from URL
    pub fn from_url(src: &str) -> Self {
        Self {
            base: HTMLMediaElement::from_url(src),
        }
    }
}
