//! fOS Player demo
//!
//! Mounts a player on `#player-container` and replays a short session
//! against a simulated video element, logging what the controls show.

use fos_dom::{Document, KeyCode, UiEvent};
use fos_media::{HTMLVideoElement, MediaErrorCode, ReadyState};
use fos_player::{PlayerConfig, PlayerController};
use tracing_subscriber::EnvFilter;

/// Deliver every queued media event to the player
fn pump(player: &mut PlayerController, document: &mut Document, video: &mut HTMLVideoElement) {
    for event in video.base.take_events() {
        player.handle_media_event(document, video, event);
    }
}

fn dispatch(player: &mut PlayerController, document: &mut Document, video: &mut HTMLVideoElement, mut event: UiEvent) {
    player.handle_ui_event(document, video, &mut event);
    pump(player, document, video);
}

fn log_state(step: &str, player: &PlayerController, document: &Document) {
    let state = player.state(document);
    tracing::info!(
        "{:<14} play={} time=\"{}\" progress={} buffered={} mute={} volume={} disabled={}",
        step,
        state.play_glyph,
        state.time_text,
        state.progress,
        state.buffered,
        state.mute_glyph,
        state.volume,
        state.play_disabled
    );
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let src = std::env::args().nth(1).unwrap_or_else(|| "sample.mp4".to_string());

    let mut document = Document::new("about:blank");
    let body = document.body();
    let mount = document.append_element(body, "div")?;
    if let Some(el) = document.tree_mut().element_mut(mount) {
        el.set_attr("id", "player-container");
    }

    let mut player = fos_player::create(
        &mut document,
        "#player-container",
        PlayerConfig::new(src.as_str()).with_width(800),
    )?;
    let controls = *player.controls();
    log_state("mounted", &player, &document);

    let mut video = HTMLVideoElement::from_url(&src);
    video.base.load();
    video.base.set_ready_state(ReadyState::HaveEnoughData);
    video.base.set_duration(130.0);
    video.base.add_buffered(0.0, 39.0);
    pump(&mut player, &mut document, &mut video);
    log_state("metadata", &player, &document);

    dispatch(&mut player, &mut document, &mut video, UiEvent::click(controls.play_button));
    video.base.advance(65.0);
    pump(&mut player, &mut document, &mut video);
    log_state("playing", &player, &document);

    dispatch(&mut player, &mut document, &mut video, UiEvent::key_down(body, KeyCode::ArrowRight));
    log_state("arrow right", &player, &document);

    if let Some(el) = document.tree_mut().element_mut(controls.volume_slider) {
        el.set_value_as_number(0.4);
    }
    dispatch(&mut player, &mut document, &mut video, UiEvent::input(controls.volume_slider));
    dispatch(&mut player, &mut document, &mut video, UiEvent::click(controls.mute_button));
    log_state("muted", &player, &document);

    dispatch(&mut player, &mut document, &mut video, UiEvent::key_down(body, KeyCode::Space));
    log_state("space", &player, &document);

    video.base.fail(MediaErrorCode::Network, "connection reset");
    pump(&mut player, &mut document, &mut video);
    log_state("error", &player, &document);

    player.destroy(&mut document);
    Ok(())
}
