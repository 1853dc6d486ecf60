//! Player Controller
//!
//! Mirrors media element state into the Control Set and turns control
//! interaction into media commands. The host event loop hands every UI and
//! media event to the controller together with the document and the media
//! element; the controller itself only keeps node handles.

use fos_dom::{Document, EventType, KeyCode, NodeId, UiEvent};
use fos_media::{MediaControl, MediaEvent};

use crate::config::{ErrorPresentation, PlayerConfig};
use crate::controls::{ControlResolver, ControlSet};
use crate::glyph::{MuteGlyph, PlayGlyph};
use crate::keyboard::{self, KeyCommand};
use crate::playback::{self, PlaybackAction};
use crate::time;
use crate::{PlayerError, Result};

/// Where a player is mounted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mount<'a> {
    /// Simple selector, e.g. `#player-container`
    Selector(&'a str),
    Element(NodeId),
}

impl<'a> From<&'a str> for Mount<'a> {
    fn from(selector: &'a str) -> Self {
        Mount::Selector(selector)
    }
}

impl From<NodeId> for Mount<'_> {
    fn from(node: NodeId) -> Self {
        Mount::Element(node)
    }
}

impl Mount<'_> {
    /// Resolve to a connected element
    fn resolve(&self, document: &Document) -> Result<NodeId> {
        let node = match self {
            Mount::Selector(selector) => document.query_selector(document.tree().root(), selector),
            Mount::Element(node) => Some(*node),
        };
        node.filter(|&id| document.tree().element(id).is_some() && document.tree().is_connected(id))
            .ok_or_else(|| PlayerError::MountNotFound(self.to_string()))
    }
}

impl std::fmt::Display for Mount<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mount::Selector(selector) => f.write_str(selector),
            Mount::Element(node) => write!(f, "node {}", node.index()),
        }
    }
}

/// Whether an event was consumed
///
/// Handled key presses also get their default action prevented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Handled,
    Ignored,
}

/// What the controls currently show
#[derive(Debug, Clone, PartialEq)]
pub struct ControlState {
    pub play_glyph: String,
    pub play_disabled: bool,
    pub scrubber: f64,
    /// `--progress` on the scrubber
    pub progress: String,
    /// `--buffered` on the scrubber
    pub buffered: String,
    pub mute_glyph: String,
    pub volume: f64,
    pub time_text: String,
}

/// Player controller bound to one media element
#[derive(Debug)]
pub struct PlayerController {
    config: PlayerConfig,
    mount: NodeId,
    controls: ControlSet,
    synthesized: bool,
    /// A media error was surfaced; playback controls stay off
    failed: bool,
}

impl PlayerController {
    /// Build controls under `mount` and reset them
    pub fn create<'a>(document: &mut Document, mount: impl Into<Mount<'a>>, config: PlayerConfig) -> Result<Self> {
        Self::create_with(document, mount, config, ControlResolver::Synthesize)
    }

    /// Like [`create`](Self::create) with an explicit control resolution strategy
    pub fn create_with<'a>(
        document: &mut Document,
        mount: impl Into<Mount<'a>>,
        config: PlayerConfig,
        resolver: ControlResolver,
    ) -> Result<Self> {
        config.validate()?;
        let mount = mount.into().resolve(document)?;
        let controls = resolver.resolve(document, mount, &config)?;

        let player = Self {
            config,
            mount,
            controls,
            synthesized: resolver.is_synthesized(),
            failed: false,
        };
        player.reset_controls(document);

        tracing::info!(
            "Player mounted: src={} width={} synthesized={}",
            player.config.src,
            player.config.width,
            player.synthesized
        );
        Ok(player)
    }

    fn reset_controls(&self, document: &mut Document) {
        let c = self.controls;
        if let Some(el) = document.tree_mut().element_mut(c.container) {
            el.style.set_property("width", format!("{}px", self.config.width));
        }
        if let Some(el) = document.tree_mut().element_mut(c.scrubber) {
            el.set_attr("min", "0");
            el.set_attr("max", "100");
            el.set_value_as_number(0.0);
            el.style.set_property("--progress", "0%");
            el.style.set_property("--buffered", "0%");
        }
        self.set_text(document, c.play_button, PlayGlyph::Play.as_str());
        self.set_text(document, c.mute_button, MuteGlyph::Unmuted.as_str());
        self.set_text(document, c.time_display, &time::time_display(0.0, f64::NAN));
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn controls(&self) -> &ControlSet {
        &self.controls
    }

    pub fn mount(&self) -> NodeId {
        self.mount
    }

    /// Check if a media error was surfaced
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    // ------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------

    /// Route a click, input or keydown event
    pub fn handle_ui_event<M: MediaControl + ?Sized>(
        &mut self,
        document: &mut Document,
        media: &mut M,
        event: &mut UiEvent,
    ) -> EventOutcome {
        let outcome = match event.event_type {
            EventType::Click => self.handle_click(document, media, event.target),
            EventType::Input => self.handle_input(document, media, event.target),
            EventType::KeyDown => match event.key.clone() {
                Some(key) => self.handle_key(document, media, event.target, &key),
                None => EventOutcome::Ignored,
            },
        };
        if outcome == EventOutcome::Handled && event.event_type == EventType::KeyDown {
            event.prevent_default();
        }
        outcome
    }

    /// Route a media element notification
    pub fn handle_media_event<M: MediaControl + ?Sized>(
        &mut self,
        document: &mut Document,
        media: &mut M,
        event: MediaEvent,
    ) {
        match event {
            MediaEvent::LoadedMetadata => self.sync_metadata(document, media),
            MediaEvent::TimeUpdate => self.sync_time(document, media),
            MediaEvent::Progress => self.sync_buffered(document, media),
            MediaEvent::Play | MediaEvent::Pause | MediaEvent::Ended => self.sync_play_glyph(document, media),
            MediaEvent::VolumeChange => self.sync_volume(document, media),
            MediaEvent::Error => self.surface_error(document, media),
        }
    }

    fn handle_click<M: MediaControl + ?Sized>(
        &mut self,
        document: &mut Document,
        media: &mut M,
        target: NodeId,
    ) -> EventOutcome {
        let c = self.controls;
        if document.contains(c.play_button, target) {
            self.toggle_playback(document, media)
        } else if document.contains(c.mute_button, target) {
            self.toggle_mute(document, media);
            EventOutcome::Handled
        } else if document.contains(c.fullscreen_button, target) {
            self.request_fullscreen(media);
            EventOutcome::Handled
        } else {
            EventOutcome::Ignored
        }
    }

    fn handle_input<M: MediaControl + ?Sized>(
        &mut self,
        document: &mut Document,
        media: &mut M,
        target: NodeId,
    ) -> EventOutcome {
        if target == self.controls.scrubber {
            self.seek_from_scrubber(document, media);
            EventOutcome::Handled
        } else if target == self.controls.volume_slider {
            self.set_volume_from_slider(document, media);
            EventOutcome::Handled
        } else {
            EventOutcome::Ignored
        }
    }

    fn handle_key<M: MediaControl + ?Sized>(
        &mut self,
        document: &mut Document,
        media: &mut M,
        target: NodeId,
        key: &KeyCode,
    ) -> EventOutcome {
        let Some(command) = keyboard::command_for(key, self.config.seek_step) else {
            return EventOutcome::Ignored;
        };
        let owned = [self.mount, self.controls.container];
        if !keyboard::accepts_focus(document, target, self.config.keyboard_scope, &owned) {
            return EventOutcome::Ignored;
        }
        match command {
            KeyCommand::TogglePlayback => self.toggle_playback(document, media),
            KeyCommand::SeekBy(delta) => {
                self.step(media, delta);
                EventOutcome::Handled
            }
        }
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Play if paused, pause otherwise; no-op once the play control is disabled
    pub fn toggle_playback<M: MediaControl + ?Sized>(&mut self, document: &mut Document, media: &mut M) -> EventOutcome {
        if self.play_disabled(document) {
            tracing::debug!("Play control disabled, ignoring toggle");
            return EventOutcome::Ignored;
        }

        let (action, glyph) = playback::toggle(media.paused());
        let glyph = match action {
            PlaybackAction::Play => match media.play() {
                Ok(()) => glyph,
                Err(err) => {
                    tracing::warn!("play() rejected: {}", err);
                    PlayGlyph::Play
                }
            },
            PlaybackAction::Pause => {
                media.pause();
                glyph
            }
        };
        tracing::debug!("Playback toggled: {:?}", action);
        self.set_text(document, self.controls.play_button, glyph.as_str());
        EventOutcome::Handled
    }

    /// Seek to the scrubber position
    pub fn seek_from_scrubber<M: MediaControl + ?Sized>(&mut self, document: &Document, media: &mut M) {
        let duration = media.duration();
        if !(duration.is_finite() && duration > 0.0) {
            tracing::debug!("Ignoring seek, duration unknown");
            return;
        }
        let value = self.value_of(document, self.controls.scrubber);
        let target = self.bound_time(value / 100.0 * duration, duration);
        tracing::debug!("Seek to {:.3}s", target);
        media.set_current_time(target);
    }

    /// Relative seek, as bound to the arrow keys
    pub fn step<M: MediaControl + ?Sized>(&mut self, media: &mut M, delta: f64) {
        let target = self.bound_time(media.current_time() + delta, media.duration());
        tracing::debug!("Step {:+}s to {:.3}s", delta, target);
        media.set_current_time(target);
    }

    /// Apply the volume slider and unmute
    pub fn set_volume_from_slider<M: MediaControl + ?Sized>(&mut self, document: &mut Document, media: &mut M) {
        let mut volume = self.value_of(document, self.controls.volume_slider);
        if self.config.clamp {
            volume = volume.clamp(0.0, 1.0);
        }
        if let Err(err) = media.set_volume(volume) {
            tracing::warn!("Volume rejected: {}", err);
            return;
        }
        media.set_muted(false);
        self.set_text(document, self.controls.mute_button, MuteGlyph::Unmuted.as_str());
    }

    /// Flip `muted` and mirror it into the mute glyph and volume slider
    pub fn toggle_mute<M: MediaControl + ?Sized>(&mut self, document: &mut Document, media: &mut M) {
        let muted = !media.muted();
        media.set_muted(muted);
        self.sync_volume(document, media);
    }

    pub fn request_fullscreen<M: MediaControl + ?Sized>(&mut self, media: &mut M) {
        if let Err(err) = media.request_fullscreen() {
            tracing::debug!("Fullscreen request rejected: {}", err);
        }
    }

    // ------------------------------------------------------------------
    // Media -> controls
    // ------------------------------------------------------------------

    /// Scrubber, `--progress` and time display from the playback position
    pub fn sync_time<M: MediaControl + ?Sized>(&mut self, document: &mut Document, media: &M) {
        let current = media.current_time();
        let duration = media.duration();
        let progress = time::percent(current, duration);

        if let Some(el) = document.tree_mut().element_mut(self.controls.scrubber) {
            el.set_value_as_number(progress);
            el.style.set_property("--progress", time::css_percent(progress));
        }
        if !self.failed {
            self.set_text(document, self.controls.time_display, &time::time_display(current, duration));
        }
    }

    /// `--buffered` from the end of the last buffered range
    pub fn sync_buffered<M: MediaControl + ?Sized>(&mut self, document: &mut Document, media: &M) {
        let duration = media.duration();
        let Some(end) = media.buffered().last_end() else {
            return;
        };
        if !(duration.is_finite() && duration > 0.0) {
            return;
        }
        let buffered = time::css_percent(time::percent(end, duration));
        if let Some(el) = document.tree_mut().element_mut(self.controls.scrubber) {
            el.style.set_property("--buffered", buffered);
        }
    }

    /// Refresh after metadata loads, then honor `autoplay`
    pub fn sync_metadata<M: MediaControl + ?Sized>(&mut self, document: &mut Document, media: &mut M) {
        self.sync_time(document, media);
        if self.config.autoplay && media.paused() && !self.failed {
            tracing::debug!("Autoplay");
            self.toggle_playback(document, media);
        }
    }

    /// Mute glyph and volume slider from `muted`/`volume`
    pub fn sync_volume<M: MediaControl + ?Sized>(&mut self, document: &mut Document, media: &M) {
        let muted = media.muted();
        self.set_text(document, self.controls.mute_button, MuteGlyph::for_muted(muted).as_str());
        let slider = if muted { 0.0 } else { media.volume() };
        if let Some(el) = document.tree_mut().element_mut(self.controls.volume_slider) {
            el.set_value_as_number(slider);
        }
    }

    /// Play glyph from `paused`, e.g. after the media ends on its own
    pub fn sync_play_glyph<M: MediaControl + ?Sized>(&mut self, document: &mut Document, media: &M) {
        if self.failed {
            return;
        }
        let glyph = PlayGlyph::for_paused(media.paused());
        self.set_text(document, self.controls.play_button, glyph.as_str());
    }

    /// Show a media error and turn off the play control
    pub fn surface_error<M: MediaControl + ?Sized>(&mut self, document: &mut Document, media: &M) {
        let detail = media
            .error()
            .map(|err| err.to_string())
            .unwrap_or_else(|| "unknown media error".to_string());
        tracing::error!("Video error: {}", detail);

        self.failed = true;
        if let Some(el) = document.tree_mut().element_mut(self.controls.play_button) {
            el.set_attr("disabled", "");
        }
        match self.config.error_presentation {
            ErrorPresentation::Inline => {
                self.set_text(document, self.controls.time_display, &self.config.error_message);
            }
            ErrorPresentation::Alert => document.alert(&self.config.error_message),
        }
    }

    // ------------------------------------------------------------------
    // Teardown and inspection
    // ------------------------------------------------------------------

    /// Remove synthesized controls; looked-up controls stay in the page
    pub fn destroy(self, document: &mut Document) {
        if self.synthesized {
            document.tree_mut().remove_children(self.mount);
        }
        tracing::info!("Player unmounted: src={}", self.config.src);
    }

    /// Read back what the controls show
    pub fn state(&self, document: &Document) -> ControlState {
        let tree = document.tree();
        let c = self.controls;
        let scrubber = tree.element(c.scrubber);
        let style = |name: &str| {
            scrubber
                .and_then(|el| el.style.get_property(name))
                .unwrap_or_default()
                .to_string()
        };
        ControlState {
            play_glyph: tree.text_content(c.play_button),
            play_disabled: self.play_disabled(document),
            scrubber: scrubber.map_or(0.0, |el| el.value_as_number()),
            progress: style("--progress"),
            buffered: style("--buffered"),
            mute_glyph: tree.text_content(c.mute_button),
            volume: self.value_of(document, c.volume_slider),
            time_text: tree.text_content(c.time_display),
        }
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    fn play_disabled(&self, document: &Document) -> bool {
        self.failed
            || document
                .tree()
                .element(self.controls.play_button)
                .is_some_and(|el| el.disabled)
    }

    fn bound_time(&self, time: f64, duration: f64) -> f64 {
        if !self.config.clamp {
            return time;
        }
        let time = time.max(0.0);
        if duration.is_finite() { time.min(duration) } else { time }
    }

    fn value_of(&self, document: &Document, node: NodeId) -> f64 {
        document
            .tree()
            .element(node)
            .map_or(0.0, |el| el.value_as_number())
    }

    fn set_text(&self, document: &mut Document, node: NodeId, text: &str) {
        if let Err(err) = document.tree_mut().set_text_content(node, text) {
            tracing::warn!("Cannot update control: {}", err);
        }
    }
}
