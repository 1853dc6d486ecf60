//! fOS Player
//!
//! Custom-skinned controls for a video element: play/pause, scrubber with
//! progress and buffered indicators, mute, volume, time display, fullscreen
//! and keyboard shortcuts.
//!
//! ```no_run
//! use fos_dom::Document;
//! use fos_media::HTMLVideoElement;
//! use fos_player::PlayerConfig;
//!
//! let mut document = Document::default();
//! let body = document.body();
//! let mount = document.append_element(body, "div").unwrap();
//! document.tree_mut().element_mut(mount).unwrap().set_attr("id", "player-container");
//!
//! let mut video = HTMLVideoElement::from_url("sample.mp4");
//! let mut player = fos_player::create(
//!     &mut document,
//!     "#player-container",
//!     PlayerConfig::new("sample.mp4").with_width(800),
//! ).unwrap();
//! player.toggle_playback(&mut document, &mut video);
//! ```

pub mod config;
pub mod controller;
pub mod controls;
mod error;
pub mod glyph;
pub mod keyboard;
pub mod playback;
pub mod time;

pub use config::{ErrorPresentation, KeyboardScope, PlayerConfig};
pub use controller::{ControlState, EventOutcome, Mount, PlayerController};
pub use controls::{ControlIds, ControlResolver, ControlSet};
pub use error::{PlayerError, Result};
pub use glyph::{MuteGlyph, PlayGlyph};
pub use playback::PlaybackAction;

/// Mount a player with synthesized controls
pub fn create<'a>(
    document: &mut fos_dom::Document,
    mount: impl Into<Mount<'a>>,
    config: PlayerConfig,
) -> Result<PlayerController> {
    PlayerController::create(document, mount, config)
}
