//! Player controller tests
//!
//! Drive a simulated video element through the same events a page would
//! see and check what the controls show.

use fos_dom::{Document, KeyCode, NodeId, UiEvent};
use fos_media::{HTMLVideoElement, MediaErrorCode, MediaEvent, ReadyState};
use fos_player::{
    ControlIds, ControlResolver, ErrorPresentation, EventOutcome, KeyboardScope, PlayerConfig,
    PlayerController, PlayerError,
};

struct Harness {
    document: Document,
    video: HTMLVideoElement,
    player: PlayerController,
}

impl Harness {
    fn new(config: PlayerConfig) -> Self {
        let mut document = Document::default();
        mount_point(&mut document, "player-container");
        let player = fos_player::create(&mut document, "#player-container", config).unwrap();
        Self {
            document,
            video: HTMLVideoElement::from_url("sample.mp4"),
            player,
        }
    }

    /// Player with metadata for a 130s clip already delivered
    fn loaded() -> Self {
        Self::loaded_with(PlayerConfig::new("sample.mp4").with_width(800))
    }

    fn loaded_with(config: PlayerConfig) -> Self {
        let mut h = Self::new(config);
        h.video.base.load();
        h.video.base.set_ready_state(ReadyState::HaveEnoughData);
        h.video.base.set_duration(130.0);
        h.pump();
        h
    }

    fn pump(&mut self) {
        for event in self.video.base.take_events() {
            self.player.handle_media_event(&mut self.document, &mut self.video, event);
        }
    }

    fn dispatch(&mut self, mut event: UiEvent) -> (EventOutcome, bool) {
        let outcome = self
            .player
            .handle_ui_event(&mut self.document, &mut self.video, &mut event);
        self.pump();
        (outcome, event.is_default_prevented())
    }

    fn click(&mut self, target: NodeId) -> EventOutcome {
        self.dispatch(UiEvent::click(target)).0
    }

    fn key(&mut self, key: KeyCode) -> EventOutcome {
        let body = self.document.body();
        self.dispatch(UiEvent::key_down(body, key)).0
    }

    fn input(&mut self, target: NodeId, value: f64) -> EventOutcome {
        self.document
            .tree_mut()
            .element_mut(target)
            .unwrap()
            .set_value_as_number(value);
        self.dispatch(UiEvent::input(target)).0
    }

    fn state(&self) -> fos_player::ControlState {
        self.player.state(&self.document)
    }
}

fn mount_point(document: &mut Document, id: &str) -> NodeId {
    let body = document.body();
    let mount = document.append_element(body, "div").unwrap();
    document.tree_mut().element_mut(mount).unwrap().set_attr("id", id);
    mount
}

#[test]
fn test_construction_resets_indicators() {
    let h = Harness::new(PlayerConfig::new("sample.mp4").with_width(800));
    let state = h.state();

    assert_eq!(state.progress, "0%");
    assert_eq!(state.buffered, "0%");
    assert_eq!(state.scrubber, 0.0);
    assert_eq!(state.play_glyph, "▶");
    assert_eq!(state.mute_glyph, "🔊");
    assert_eq!(state.time_text, "00:00 / 00:00");
    assert!(!state.play_disabled);

    let container = h.player.controls().container;
    let width = h.document.tree().element(container).unwrap().style.get_property("width");
    assert_eq!(width, Some("800px"));
}

#[test]
fn test_missing_mount_creates_nothing() {
    let mut document = Document::default();
    let before = document.tree().len();

    let err = fos_player::create(&mut document, "#player-container", PlayerConfig::new("sample.mp4"))
        .unwrap_err();

    assert_eq!(err, PlayerError::MountNotFound("#player-container".into()));
    assert_eq!(document.tree().len(), before);
}

#[test]
fn test_detached_mount_is_not_found() {
    let mut document = Document::default();
    let detached = document.tree_mut().create_element("div");

    let err = PlayerController::create(&mut document, detached, PlayerConfig::default()).unwrap_err();
    assert!(matches!(err, PlayerError::MountNotFound(_)));
}

#[test]
fn test_invalid_config_rejected_before_mounting() {
    let mut document = Document::default();
    mount_point(&mut document, "player-container");
    let before = document.tree().len();

    let err = fos_player::create(
        &mut document,
        "#player-container",
        PlayerConfig::new("sample.mp4").with_width(0),
    )
    .unwrap_err();
    assert!(matches!(err, PlayerError::InvalidConfig(_)));
    assert_eq!(document.tree().len(), before);
}

#[test]
fn test_time_update_formats_display_and_progress() {
    let mut h = Harness::loaded();
    h.video.base.seek(65.0);
    h.pump();

    let state = h.state();
    assert_eq!(state.time_text, "01:05 / 02:10");
    assert_eq!(state.progress, "50%");
    assert_eq!(state.scrubber, 50.0);
}

#[test]
fn test_time_updates_do_not_grow_document() {
    let mut h = Harness::loaded();
    h.video.base.play().unwrap();
    h.pump();
    let nodes = h.document.tree().len();

    for _ in 0..400 {
        h.video.base.advance(0.25);
        h.pump();
    }
    assert_eq!(h.document.tree().len(), nodes);
    assert_eq!(h.state().time_text, "01:40 / 02:10");

    let mute = h.player.controls().mute_button;
    h.click(mute);
    h.click(mute);
    assert_eq!(h.document.tree().len(), nodes);
}

#[test]
fn test_scrubber_tracks_position() {
    let mut h = Harness::loaded();
    for current in [0.0, 1.3, 32.5, 97.75, 130.0] {
        h.video.base.seek(current);
        h.pump();
        let expected = 100.0 * current / 130.0;
        assert!((h.state().scrubber - expected).abs() < 1e-9, "at {current}");
    }
}

#[test]
fn test_unknown_or_zero_duration_reads_zero() {
    let mut h = Harness::new(PlayerConfig::new("sample.mp4"));
    h.video.base.current_time = 12.0;
    h.player.handle_media_event(&mut h.document, &mut h.video, MediaEvent::TimeUpdate);
    assert_eq!(h.state().scrubber, 0.0);
    assert_eq!(h.state().progress, "0%");
    assert_eq!(h.state().time_text, "00:12 / 00:00");

    h.video.base.duration = 0.0;
    h.player.handle_media_event(&mut h.document, &mut h.video, MediaEvent::TimeUpdate);
    assert_eq!(h.state().scrubber, 0.0);
    assert_eq!(h.state().progress, "0%");
}

#[test]
fn test_buffered_indicator() {
    let mut h = Harness::loaded();
    h.video.base.add_buffered(0.0, 20.0);
    h.video.base.add_buffered(25.0, 39.0);
    h.pump();
    assert_eq!(h.state().buffered, "30%");
}

#[test]
fn test_buffered_ignored_without_ranges_or_duration() {
    let mut h = Harness::new(PlayerConfig::new("sample.mp4"));
    h.player.handle_media_event(&mut h.document, &mut h.video, MediaEvent::Progress);
    assert_eq!(h.state().buffered, "0%");

    h.video.base.add_buffered(0.0, 10.0);
    h.pump();
    assert_eq!(h.state().buffered, "0%");
}

#[test]
fn test_toggle_twice_is_identity() {
    let mut h = Harness::loaded();
    let play = h.player.controls().play_button;

    assert_eq!(h.click(play), EventOutcome::Handled);
    assert!(!h.video.base.paused);
    assert_eq!(h.state().play_glyph, "❚❚");

    assert_eq!(h.click(play), EventOutcome::Handled);
    assert!(h.video.base.paused);
    assert_eq!(h.state().play_glyph, "▶");
}

#[test]
fn test_space_and_click_share_toggle() {
    let mut h = Harness::loaded();
    let play = h.player.controls().play_button;

    h.click(play);
    let body = h.document.body();
    let (outcome, prevented) = h.dispatch(UiEvent::key_down(body, KeyCode::Space));

    assert_eq!(outcome, EventOutcome::Handled);
    assert!(prevented);
    assert!(h.video.base.paused);
    assert_eq!(h.state().play_glyph, "▶");
}

#[test]
fn test_rejected_play_keeps_play_glyph() {
    let mut h = Harness::new(PlayerConfig::new("sample.mp4"));
    let play = h.player.controls().play_button;

    h.click(play);
    assert!(h.video.base.paused);
    assert_eq!(h.state().play_glyph, "▶");
}

#[test]
fn test_glyph_follows_media_end() {
    let mut h = Harness::loaded();
    h.click(h.player.controls().play_button);
    h.video.base.advance(500.0);
    h.pump();

    assert!(h.video.base.ended);
    assert_eq!(h.state().play_glyph, "▶");
    assert_eq!(h.state().time_text, "02:10 / 02:10");
}

#[test]
fn test_scrubber_input_seeks() {
    let mut h = Harness::loaded();
    let scrubber = h.player.controls().scrubber;

    assert_eq!(h.input(scrubber, 25.0), EventOutcome::Handled);
    assert_eq!(h.video.base.current_time, 32.5);
    assert_eq!(h.state().time_text, "00:32 / 02:10");
}

#[test]
fn test_scrubber_input_without_duration_is_noop() {
    let mut h = Harness::new(PlayerConfig::new("sample.mp4"));
    let scrubber = h.player.controls().scrubber;

    h.input(scrubber, 40.0);
    assert_eq!(h.video.base.current_time, 0.0);
}

#[test]
fn test_arrow_keys_step_and_clamp() {
    let mut h = Harness::loaded();
    h.video.base.seek(127.0);

    assert_eq!(h.key(KeyCode::ArrowRight), EventOutcome::Handled);
    assert_eq!(h.video.base.current_time, 130.0);

    h.video.base.seek(3.0);
    h.key(KeyCode::ArrowLeft);
    assert_eq!(h.video.base.current_time, 0.0);

    h.video.base.seek(60.0);
    h.key(KeyCode::ArrowRight);
    assert_eq!(h.video.base.current_time, 65.0);
    assert_eq!(h.state().time_text, "01:05 / 02:10");
}

#[test]
fn test_unclamped_seeks_are_bounded_by_media() {
    let mut h = Harness::loaded_with(PlayerConfig::new("sample.mp4").with_clamp(false));
    let scrubber = h.player.controls().scrubber;

    h.input(scrubber, 150.0);
    assert_eq!(h.video.base.current_time, 130.0);
    assert_eq!(h.state().progress, "100%");

    h.video.base.seek(2.0);
    h.key(KeyCode::ArrowLeft);
    assert_eq!(h.video.base.current_time, 0.0);
    assert_eq!(h.state().time_text, "00:00 / 02:10");

    h.video.base.seek(128.0);
    h.key(KeyCode::ArrowRight);
    assert_eq!(h.video.base.current_time, 130.0);
}

#[test]
fn test_custom_seek_step() {
    let mut h = Harness::new(PlayerConfig::new("sample.mp4").with_seek_step(10.0));
    h.video.base.set_duration(130.0);
    h.pump();

    h.key(KeyCode::ArrowRight);
    assert_eq!(h.video.base.current_time, 10.0);
}

#[test]
fn test_unrelated_key_ignored() {
    let mut h = Harness::loaded();
    let body = h.document.body();
    let (outcome, prevented) = h.dispatch(UiEvent::key_down(body, KeyCode::Enter));
    assert_eq!(outcome, EventOutcome::Ignored);
    assert!(!prevented);
}

#[test]
fn test_shortcuts_ignored_in_text_fields() {
    let mut h = Harness::loaded();
    let body = h.document.body();
    let search = h.document.append_element(body, "input").unwrap();
    h.document.focus(search);

    let (outcome, _) = h.dispatch(UiEvent::key_down(search, KeyCode::Space));
    assert_eq!(outcome, EventOutcome::Ignored);
    assert!(h.video.base.paused);
}

#[test]
fn test_mount_subtree_scope_isolates_players() {
    let mut document = Document::default();
    let first_mount = mount_point(&mut document, "first");
    mount_point(&mut document, "second");

    let scoped = PlayerConfig::new("a.mp4").with_keyboard_scope(KeyboardScope::MountSubtree);
    let mut first = fos_player::create(&mut document, "#first", scoped.clone()).unwrap();
    let mut second = fos_player::create(&mut document, "#second", scoped).unwrap();

    let mut first_video = HTMLVideoElement::from_url("a.mp4");
    let mut second_video = HTMLVideoElement::from_url("a.mp4");
    for video in [&mut first_video, &mut second_video] {
        video.base.set_ready_state(ReadyState::HaveEnoughData);
        video.base.set_duration(60.0);
    }

    let focus = first.controls().play_button;
    assert!(document.contains(first_mount, focus));
    document.focus(focus);

    let mut event = UiEvent::key_down(focus, KeyCode::Space);
    assert_eq!(first.handle_ui_event(&mut document, &mut first_video, &mut event), EventOutcome::Handled);
    let mut event = UiEvent::key_down(focus, KeyCode::Space);
    assert_eq!(second.handle_ui_event(&mut document, &mut second_video, &mut event), EventOutcome::Ignored);

    assert!(!first_video.base.paused);
    assert!(second_video.base.paused);
}

#[test]
fn test_volume_round_trip() {
    let mut h = Harness::loaded();
    let slider = h.player.controls().volume_slider;

    assert_eq!(h.input(slider, 0.3), EventOutcome::Handled);
    assert_eq!(h.video.base.volume, 0.3);
    assert!(!h.video.base.muted);
    assert_eq!(h.state().mute_glyph, "🔊");
}

#[test]
fn test_volume_input_unmutes() {
    let mut h = Harness::loaded();
    let mute = h.player.controls().mute_button;
    let slider = h.player.controls().volume_slider;

    h.click(mute);
    assert!(h.video.base.muted);

    h.input(slider, 0.6);
    assert!(!h.video.base.muted);
    assert_eq!(h.state().mute_glyph, "🔊");
    assert_eq!(h.state().volume, 0.6);
}

#[test]
fn test_volume_clamped() {
    let mut h = Harness::loaded();
    let slider = h.player.controls().volume_slider;

    h.input(slider, 1.7);
    assert_eq!(h.video.base.volume, 1.0);
}

#[test]
fn test_unclamped_volume_rejected_by_media() {
    let mut h = Harness::new(PlayerConfig::new("sample.mp4").with_clamp(false));
    let mute = h.player.controls().mute_button;
    let slider = h.player.controls().volume_slider;
    h.click(mute);

    h.input(slider, 1.7);
    assert_eq!(h.video.base.volume, 1.0);
    assert!(h.video.base.muted);
}

#[test]
fn test_mute_then_unmute_restores_slider() {
    let mut h = Harness::loaded();
    let mute = h.player.controls().mute_button;
    let slider = h.player.controls().volume_slider;
    h.input(slider, 0.7);

    h.click(mute);
    assert!(h.video.base.muted);
    assert_eq!(h.state().mute_glyph, "🔇");
    assert_eq!(h.state().volume, 0.0);

    h.click(mute);
    assert!(!h.video.base.muted);
    assert_eq!(h.state().mute_glyph, "🔊");
    assert_eq!(h.state().volume, 0.7);
}

#[test]
fn test_fullscreen_click() {
    let mut h = Harness::loaded();
    let fullscreen = h.player.controls().fullscreen_button;

    assert_eq!(h.click(fullscreen), EventOutcome::Handled);
    assert!(h.video.is_fullscreen());
}

#[test]
fn test_fullscreen_rejection_is_ignored() {
    let mut h = Harness::loaded();
    h.video.fullscreen = fos_media::FullscreenManager::disabled();
    let fullscreen = h.player.controls().fullscreen_button;

    assert_eq!(h.click(fullscreen), EventOutcome::Handled);
    assert!(!h.video.is_fullscreen());
}

#[test]
fn test_error_disables_play_inline() {
    let mut h = Harness::loaded();
    let play = h.player.controls().play_button;

    h.video.base.fail(MediaErrorCode::Decode, "bad frame");
    h.pump();

    let state = h.state();
    assert!(state.play_disabled);
    assert_eq!(state.time_text, "Playback error");
    assert!(h.player.is_failed());

    assert_eq!(h.click(play), EventOutcome::Ignored);
    assert_eq!(h.key(KeyCode::Space), EventOutcome::Ignored);
    assert!(h.video.base.paused);

    h.video.base.current_time = 10.0;
    h.player.handle_media_event(&mut h.document, &mut h.video, MediaEvent::TimeUpdate);
    assert_eq!(h.state().time_text, "Playback error");
}

#[test]
fn test_error_alert_presentation() {
    let mut h = Harness::new(
        PlayerConfig::new("sample.mp4")
            .with_error_presentation(ErrorPresentation::Alert)
            .with_error_message("Could not play video"),
    );
    h.video.base.fail(MediaErrorCode::Network, "reset");
    h.pump();

    assert_eq!(h.document.take_alerts(), vec!["Could not play video".to_string()]);
    assert!(h.state().play_disabled);
    assert_eq!(h.state().time_text, "00:00 / 00:00");
}

#[test]
fn test_autoplay_on_metadata() {
    let mut h = Harness::new(PlayerConfig::new("sample.mp4").with_autoplay(true));
    h.video.base.set_ready_state(ReadyState::HaveEnoughData);
    h.video.base.set_duration(130.0);
    h.pump();

    assert!(!h.video.base.paused);
    assert_eq!(h.state().play_glyph, "❚❚");
    assert_eq!(h.state().time_text, "00:00 / 02:10");
}

#[test]
fn test_clicks_on_glyph_text_reach_control() {
    let mut h = Harness::loaded();
    let play = h.player.controls().play_button;
    let (glyph_text, _) = h.document.tree().children(play).next().unwrap();

    assert_eq!(h.click(glyph_text), EventOutcome::Handled);
    assert!(!h.video.base.paused);
}

#[test]
fn test_lookup_by_id_variant() {
    let mut document = Document::default();
    let mount = mount_point(&mut document, "player");
    let ids = ControlIds::default();
    let mut by_id = |tag: &str, id: &str| {
        let node = document.append_element(mount, tag).unwrap();
        document.tree_mut().element_mut(node).unwrap().set_attr("id", id);
        node
    };
    let video = by_id("video", ids.video.as_str());
    let play = by_id("button", ids.play_button.as_str());
    by_id("input", ids.scrubber.as_str());
    by_id("button", ids.mute_button.as_str());
    by_id("input", ids.volume_slider.as_str());
    by_id("span", ids.time_display.as_str());
    by_id("button", ids.fullscreen_button.as_str());

    let player = PlayerController::create_with(
        &mut document,
        "#player",
        PlayerConfig::new("sample.mp4"),
        ControlResolver::LookupById(ids),
    )
    .unwrap();

    assert_eq!(player.controls().video, video);
    assert_eq!(player.controls().play_button, play);
    assert_eq!(player.controls().container, mount);
    assert_eq!(player.state(&document).progress, "0%");
    assert_eq!(player.state(&document).play_glyph, "▶");

    player.destroy(&mut document);
    assert!(document.contains(mount, play));
}

#[test]
fn test_destroy_removes_synthesized_controls() {
    let mut h = Harness::loaded();
    let mount = h.player.mount();
    let play = h.player.controls().play_button;

    h.player.destroy(&mut h.document);
    assert!(!h.document.contains(mount, play));
    assert_eq!(h.document.tree().children(mount).count(), 0);
}
