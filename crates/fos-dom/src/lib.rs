//! fOS DOM - Document Object Model
//!
//! Arena-based DOM tree used by the fOS player controls.
//!
//! Features:
//! - Element and text nodes with attributes, class lists and inline style
//! - Simple selector queries (`#id`, `.class`, `tag`, `*`)
//! - Focus tracking and a queue of pending `alert()` dialogs
//! - UI events (click, input, keydown)

mod classlist;
mod document;
mod events;
mod node;
mod query;
mod tree;

pub use classlist::DOMTokenList;
pub use document::Document;
pub use events::{EventType, KeyCode, UiEvent};
pub use node::{Attribute, ElementData, Node, NodeData, StyleDeclaration};
pub use query::SimpleSelector;
pub use tree::{Children, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this ID refers to a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Raw arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// DOM error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("Node not found: {0:?}")]
    NotFound(NodeId),

    #[error("Hierarchy request error: {0}")]
    HierarchyRequest(String),
}
