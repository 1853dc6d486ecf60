//! Media Control
//!
//! The state and commands a page-level player sees on a media element.

use crate::element::{HTMLAudioElement, HTMLMediaElement, HTMLVideoElement, MediaError, TimeRanges};
use crate::fullscreen::{FullscreenError, FullscreenOptions};
use crate::MediaApiError;

/// Observable state and commands of a media element
///
/// Implemented by the element models in this crate; hosts embedding another
/// engine implement it over their own element handle.
pub trait MediaControl {
    fn paused(&self) -> bool;

    /// Playback position in seconds
    fn current_time(&self) -> f64;

    /// Duration in seconds, `NaN` while unknown
    fn duration(&self) -> f64;

    fn volume(&self) -> f64;

    fn muted(&self) -> bool;

    fn buffered(&self) -> &TimeRanges;

    fn error(&self) -> Option<&MediaError>;

    fn play(&mut self) -> Result<(), MediaApiError>;

    fn pause(&mut self);

    /// Seek
    fn set_current_time(&mut self, time: f64);

    fn set_volume(&mut self, volume: f64) -> Result<(), MediaApiError>;

    fn set_muted(&mut self, muted: bool);

    fn request_fullscreen(&mut self) -> Result<(), FullscreenError> {
        Err(FullscreenError::NotSupported)
    }
}

impl MediaControl for HTMLMediaElement {
    fn paused(&self) -> bool {
        self.paused
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn muted(&self) -> bool {
        self.muted
    }

    fn buffered(&self) -> &TimeRanges {
        &self.buffered
    }

    fn error(&self) -> Option<&MediaError> {
        self.error.as_ref()
    }

    fn play(&mut self) -> Result<(), MediaApiError> {
        HTMLMediaElement::play(self)
    }

    fn pause(&mut self) {
        HTMLMediaElement::pause(self)
    }

    fn set_current_time(&mut self, time: f64) {
        self.seek(time)
    }

    fn set_volume(&mut self, volume: f64) -> Result<(), MediaApiError> {
        HTMLMediaElement::set_volume(self, volume)
    }

    fn set_muted(&mut self, muted: bool) {
        HTMLMediaElement::set_muted(self, muted)
    }
}

impl MediaControl for HTMLVideoElement {
    fn paused(&self) -> bool {
        self.base.paused()
    }

    fn current_time(&self) -> f64 {
        self.base.current_time()
    }

    fn duration(&self) -> f64 {
        self.base.duration()
    }

    fn volume(&self) -> f64 {
        self.base.volume()
    }

    fn muted(&self) -> bool {
        self.base.muted()
    }

    fn buffered(&self) -> &TimeRanges {
        self.base.buffered()
    }

    fn error(&self) -> Option<&MediaError> {
        self.base.error()
    }

    fn play(&mut self) -> Result<(), MediaApiError> {
        self.base.play()
    }

    fn pause(&mut self) {
        self.base.pause()
    }

    fn set_current_time(&mut self, time: f64) {
        self.base.seek(time)
    }

    fn set_volume(&mut self, volume: f64) -> Result<(), MediaApiError> {
        self.base.set_volume(volume)
    }

    fn set_muted(&mut self, muted: bool) {
        self.base.set_muted(muted)
    }

    fn request_fullscreen(&mut self) -> Result<(), FullscreenError> {
        HTMLVideoElement::request_fullscreen(self, FullscreenOptions::default())
    }
}

impl MediaControl for HTMLAudioElement {
    fn paused(&self) -> bool {
        self.base.paused
    }

    fn current_time(&self) -> f64 {
        self.base.current_time
    }

    fn duration(&self) -> f64 {
        self.base.duration
    }

    fn volume(&self) -> f64 {
        self.base.volume
    }

    fn muted(&self) -> bool {
        self.base.muted
    }

    fn buffered(&self) -> &TimeRanges {
        &self.base.buffered
    }

    fn error(&self) -> Option<&MediaError> {
        self.base.error.as_ref()
    }

    fn play(&mut self) -> Result<(), MediaApiError> {
        self.base.play()
    }

    fn pause(&mut self) {
        self.base.pause()
    }

    fn set_current_time(&mut self, time: f64) {
        self.base.seek(time)
    }

    fn set_volume(&mut self, volume: f64) -> Result<(), MediaApiError> {
        self.base.set_volume(volume)
    }

    fn set_muted(&mut self, muted: bool) {
        self.base.set_muted(muted)
    }
}
