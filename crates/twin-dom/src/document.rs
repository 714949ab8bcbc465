//! Document - high-level read-only document API

use crate::{DomTree, ElementData, Node, NodeId};

/// Parsed HTML document
///
/// Owns its tree for the full run; nothing mutates it after parsing.
#[derive(Debug)]
pub struct Document {
    tree: DomTree,
    base_uri: String,
}

impl Document {
    /// Wrap a finished tree
    pub fn new(tree: DomTree, base_uri: &str) -> Self {
        tracing::debug!("document built: {} nodes ({})", tree.len(), base_uri);
        Self {
            tree,
            base_uri: base_uri.to_string(),
        }
    }

    /// Base URI the document was loaded from
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// All elements in document order
    pub fn elements(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.tree
            .descendants(self.tree.root())
            .filter(|(_, node)| node.is_element())
            .map(|(id, _)| id)
    }

    /// Element data for a node, `None` for non-elements
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.tree.get(id).and_then(Node::as_element)
    }

    /// First element with the given id, in document order
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        self.elements()
            .find(|&el| self.element(el).is_some_and(|e| e.id() == id))
    }

    /// Rendered text of a subtree: descendant text nodes concatenated with
    /// whitespace runs collapsed to single spaces, surrounding whitespace
    /// trimmed
    pub fn text(&self, id: NodeId) -> String {
        let mut raw = String::new();
        for (_, node) in self.tree.descendants(id) {
            if let Some(text) = node.as_text() {
                raw.push_str(text);
                raw.push(' ');
            }
        }
        let words: Vec<&str> = raw.split_whitespace().collect();
        words.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> (Document, NodeId, NodeId) {
        // <html><body><a id="login">Log <b>in</b></a></body></html>
        let mut tree = DomTree::new();
        let html = tree.create_element(ElementData::new("html"));
        let body = tree.create_element(ElementData::new("body"));

        let mut link = ElementData::new("a");
        link.set_attr("id", "login".to_string());
        let a = tree.create_element(link);
        let t1 = tree.create_text("Log  ");
        let b = tree.create_element(ElementData::new("b"));
        let t2 = tree.create_text("in");

        tree.append_child(tree.root(), html);
        tree.append_child(html, body);
        tree.append_child(body, a);
        tree.append_child(a, t1);
        tree.append_child(a, b);
        tree.append_child(b, t2);

        (Document::new(tree, "about:blank"), a, body)
    }

    #[test]
    fn test_get_element_by_id() {
        let (doc, a, _) = sample_document();
        assert_eq!(doc.get_element_by_id("login"), Some(a));
        assert_eq!(doc.get_element_by_id("missing"), None);
    }

    #[test]
    fn test_get_element_by_empty_id() {
        let (doc, _, _) = sample_document();
        // elements without an id report "" - must not match a blank query
        assert_eq!(doc.get_element_by_id(""), None);
    }

    #[test]
    fn test_text_collapses_whitespace() {
        let (doc, a, _) = sample_document();
        assert_eq!(doc.text(a), "Log in");
    }

    #[test]
    fn test_elements_document_order() {
        let (doc, a, body) = sample_document();
        let elements: Vec<NodeId> = doc.elements().collect();
        assert!(elements.contains(&a));
        assert!(elements.contains(&body));
        // body precedes the link it contains
        let body_pos = elements.iter().position(|&e| e == body).unwrap();
        let a_pos = elements.iter().position(|&e| e == a).unwrap();
        assert!(body_pos < a_pos);
    }
}
