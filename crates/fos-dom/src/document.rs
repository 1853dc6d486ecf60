//! Document - High-level document API

use crate::{DomError, DomTree, NodeId, SimpleSelector};

/// HTML Document
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Document URL
    url: String,
    html_element: NodeId,
    head_element: NodeId,
    body_element: NodeId,
    /// Focused element (`document.activeElement`), NONE means body
    focused: NodeId,
    /// Messages passed to `alert()` not yet shown by the host
    alerts: Vec<String>,
}

impl Document {
    /// Create a new document with `<html><head></head><body></body></html>`
    pub fn new(url: &str) -> Self {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        // Freshly created nodes under a fresh root cannot fail
        let _ = tree.append_child(tree.root(), html);
        let _ = tree.append_child(html, head);
        let _ = tree.append_child(html, body);

        Self {
            tree,
            url: url.to_string(),
            html_element: html,
            head_element: head,
            body_element: body,
            focused: NodeId::NONE,
            alerts: Vec::new(),
        }
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <head> element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Create an element and append it to `parent`
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> Result<NodeId, DomError> {
        let id = self.tree.create_element(tag);
        self.tree.append_child(parent, id)?;
        Ok(id)
    }

    /// Get connected element by ID
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.query_selector(self.tree.root(), &format!("#{id}"))
    }

    /// First descendant of `root` matching `selector`, in document order
    pub fn query_selector(&self, root: NodeId, selector: &str) -> Option<NodeId> {
        let selector = SimpleSelector::parse(selector)?;
        self.tree.descendants(root).into_iter().find(|&id| {
            self.tree
                .element(id)
                .is_some_and(|el| selector.matches(el))
        })
    }

    /// Every descendant of `root` matching `selector`
    pub fn query_selector_all(&self, root: NodeId, selector: &str) -> Vec<NodeId> {
        let Some(selector) = SimpleSelector::parse(selector) else {
            return Vec::new();
        };
        self.tree
            .descendants(root)
            .into_iter()
            .filter(|&id| self.tree.element(id).is_some_and(|el| selector.matches(el)))
            .collect()
    }

    /// Check if `node` is `ancestor` or inside it
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.tree.is_inclusive_ancestor(ancestor, node)
    }

    /// Focus a connected element
    pub fn focus(&mut self, id: NodeId) -> bool {
        if self.tree.element(id).is_some() && self.tree.is_connected(id) {
            self.focused = id;
            true
        } else {
            false
        }
    }

    /// Drop focus back to the body
    pub fn blur(&mut self) {
        self.focused = NodeId::NONE;
    }

    /// `document.activeElement`
    pub fn active_element(&self) -> NodeId {
        if self.focused.is_valid() && self.tree.is_connected(self.focused) {
            self.focused
        } else {
            self.body_element
        }
    }

    /// `window.alert()`: queue a blocking dialog for the host to show
    pub fn alert(&mut self, message: &str) {
        tracing::debug!("alert(): {}", message);
        self.alerts.push(message.to_string());
    }

    /// Pending alerts, oldest first
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Drain pending alerts
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}
