//! Control Set resolution
//!
//! A player either builds its own markup under the mount
//! ([`ControlResolver::Synthesize`]) or binds to controls already in the
//! page by id ([`ControlResolver::LookupById`]). Both produce a
//! [`ControlSet`]; nothing downstream knows which one ran.

use fos_dom::{Document, NodeId};

use crate::config::PlayerConfig;
use crate::glyph::{FULLSCREEN_GLYPH, MuteGlyph, PlayGlyph};
use crate::{PlayerError, Result};

/// Node handles of one player's controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlSet {
    /// Element sized to the configured width
    pub container: NodeId,
    pub video: NodeId,
    pub play_button: NodeId,
    /// Seek/progress range input, 0..=100
    pub scrubber: NodeId,
    pub mute_button: NodeId,
    /// Volume range input, 0..=1
    pub volume_slider: NodeId,
    pub time_display: NodeId,
    pub fullscreen_button: NodeId,
}

impl ControlSet {
    /// Every node, container first
    pub fn nodes(&self) -> [NodeId; 8] {
        [
            self.container,
            self.video,
            self.play_button,
            self.scrubber,
            self.mute_button,
            self.volume_slider,
            self.time_display,
            self.fullscreen_button,
        ]
    }
}

/// Element ids used by [`ControlResolver::LookupById`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlIds {
    pub video: String,
    pub play_button: String,
    pub scrubber: String,
    pub mute_button: String,
    pub volume_slider: String,
    pub time_display: String,
    pub fullscreen_button: String,
}

impl Default for ControlIds {
    fn default() -> Self {
        Self {
            video: "video".into(),
            play_button: "play-pause".into(),
            scrubber: "progress".into(),
            mute_button: "mute".into(),
            volume_slider: "volume".into(),
            time_display: "time".into(),
            fullscreen_button: "fullscreen".into(),
        }
    }
}

/// How the Control Set is obtained
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ControlResolver {
    /// Replace the mount's children with freshly built controls
    #[default]
    Synthesize,
    /// Use existing elements with these ids; the mount is the container
    LookupById(ControlIds),
}

impl ControlResolver {
    /// Produce the Control Set for `mount`
    ///
    /// Lookup failures leave the document untouched.
    pub fn resolve(&self, document: &mut Document, mount: NodeId, config: &PlayerConfig) -> Result<ControlSet> {
        match self {
            Self::Synthesize => synthesize(document, mount, config),
            Self::LookupById(ids) => look_up(document, mount, ids),
        }
    }

    pub fn is_synthesized(&self) -> bool {
        matches!(self, Self::Synthesize)
    }
}

fn look_up(document: &Document, mount: NodeId, ids: &ControlIds) -> Result<ControlSet> {
    let find = |id: &str| {
        document
            .get_element_by_id(id)
            .ok_or_else(|| PlayerError::ControlNotFound(id.to_string()))
    };
    Ok(ControlSet {
        container: mount,
        video: find(&ids.video)?,
        play_button: find(&ids.play_button)?,
        scrubber: find(&ids.scrubber)?,
        mute_button: find(&ids.mute_button)?,
        volume_slider: find(&ids.volume_slider)?,
        time_display: find(&ids.time_display)?,
        fullscreen_button: find(&ids.fullscreen_button)?,
    })
}

/// Append `<tag class="..." attrs...>` with optional text to `parent`
fn append(
    document: &mut Document,
    parent: NodeId,
    tag: &str,
    class: &str,
    attrs: &[(&str, &str)],
    text: Option<&str>,
) -> Result<NodeId> {
    let id = document.append_element(parent, tag)?;
    if let Some(el) = document.tree_mut().element_mut(id) {
        el.set_attr("class", class);
        for (name, value) in attrs {
            el.set_attr(name, *value);
        }
    }
    if let Some(text) = text {
        document.tree_mut().set_text_content(id, text)?;
    }
    Ok(id)
}

fn synthesize(document: &mut Document, mount: NodeId, config: &PlayerConfig) -> Result<ControlSet> {
    document.tree_mut().remove_children(mount);

    let container = append(document, mount, "div", "video-container", &[], None)?;
    if let Some(el) = document.tree_mut().element_mut(container) {
        el.style.set_property("width", format!("{}px", config.width));
    }

    let video = append(document, container, "video", "video-element", &[], None)?;
    append(
        document,
        video,
        "source",
        "",
        &[("src", config.src.as_str()), ("type", "video/mp4")],
        None,
    )?;
    let fallback = document.tree_mut().create_text("Your browser does not support HTML5 video.");
    document.tree_mut().append_child(video, fallback)?;

    let bar = append(document, container, "div", "video-controls", &[], None)?;
    let play_button = append(document, bar, "button", "play-button", &[], Some(PlayGlyph::Play.as_str()))?;
    let scrubber = append(
        document,
        bar,
        "input",
        "progress-bar",
        &[("type", "range"), ("min", "0"), ("max", "100"), ("value", "0")],
        None,
    )?;
    let mute_button = append(document, bar, "button", "mute-button", &[], Some(MuteGlyph::Unmuted.as_str()))?;
    let volume_slider = append(
        document,
        bar,
        "input",
        "volume-bar",
        &[("type", "range"), ("min", "0"), ("max", "1"), ("step", "0.1"), ("value", "1")],
        None,
    )?;
    let time_display = append(document, bar, "span", "time-display", &[], Some("00:00 / 00:00"))?;
    let fullscreen_button = append(document, bar, "span", "full-screen-button", &[], Some(FULLSCREEN_GLYPH))?;

    Ok(ControlSet {
        container,
        video,
        play_button,
        scrubber,
        mute_button,
        volume_slider,
        time_display,
        fullscreen_button,
    })
}
