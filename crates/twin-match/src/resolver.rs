//! Similarity resolver
//!
//! Priority cascade over the candidate document. Each tier selects
//! elements in document order; the first tier with a non-empty selection
//! is the result and later tiers are never evaluated. The title tier is
//! unconditional - its output, empty or not, is final.

use twin_dom::{Document, NodeId};

/// Tag considered by the text/class/title tiers. Id matching spans all
/// tags; the weaker signals only track link-like elements.
const ANCHOR_TAG: &str = "a";

/// Heuristic tier that produced a resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Exact id match, any tag
    Id,
    /// Link text contains the target's first-child text
    Text,
    /// Link class string exactly equals the target's
    Class,
    /// Link title exactly equals the target's
    Title,
}

/// One resolver run: the tier that fired and its candidates in document order
#[derive(Debug)]
pub struct Resolution {
    pub tier: Tier,
    pub elements: Vec<NodeId>,
}

/// Find the elements in `candidate` most similar to `target` from `original`.
///
/// An empty element list is a valid outcome: nothing matched even the
/// unconditional title tier.
pub fn similar_elements(original: &Document, target: NodeId, candidate: &Document) -> Resolution {
    let resolution = if let Some(elements) = by_id(original, target, candidate) {
        Resolution { tier: Tier::Id, elements }
    } else if let Some(elements) = by_text(original, target, candidate) {
        Resolution { tier: Tier::Text, elements }
    } else if let Some(elements) = by_class(original, target, candidate) {
        Resolution { tier: Tier::Class, elements }
    } else {
        Resolution {
            tier: Tier::Title,
            elements: by_title(original, target, candidate),
        }
    };

    tracing::debug!(
        "tier {:?} selected {} candidate(s)",
        resolution.tier,
        resolution.elements.len()
    );
    resolution
}

/// All elements whose id equals the target's id. Inapplicable when the
/// target has no id.
fn by_id(original: &Document, target: NodeId, candidate: &Document) -> Option<Vec<NodeId>> {
    let id = original.element(target)?.id();
    if id.is_empty() {
        return None;
    }
    non_empty(
        candidate
            .elements()
            .filter(|&el| candidate.element(el).is_some_and(|e| e.id() == id))
            .collect(),
    )
}

/// Links whose rendered text contains the target's first-child text.
/// Inapplicable when the target has no usable text (see
/// [`first_child_text`]).
fn by_text(original: &Document, target: NodeId, candidate: &Document) -> Option<Vec<NodeId>> {
    let needle = first_child_text(original, target)?;
    non_empty(
        anchors(candidate)
            .filter(|&el| candidate.text(el).contains(&needle))
            .collect(),
    )
}

/// Links whose class string equals the target's; a missing class attribute
/// reads as "" and empty matches empty.
fn by_class(original: &Document, target: NodeId, candidate: &Document) -> Option<Vec<NodeId>> {
    let class = original.element(target)?.class_name();
    non_empty(
        anchors(candidate)
            .filter(|&el| candidate.element(el).is_some_and(|e| e.class_name() == class))
            .collect(),
    )
}

/// Links whose title equals the target's, same empty-string semantics as
/// the class tier. Unconditional: the result stands even when empty.
fn by_title(original: &Document, target: NodeId, candidate: &Document) -> Vec<NodeId> {
    let Some(target_el) = original.element(target) else {
        return Vec::new();
    };
    let title = target_el.title();
    anchors(candidate)
        .filter(|&el| candidate.element(el).is_some_and(|e| e.title() == title))
        .collect()
}

/// Trimmed text of the target's first child, when that child is a text
/// node. `None` when the target has no children, the first child is not
/// text, or the trimmed text is empty - an empty needle would match every
/// link in the document.
fn first_child_text(doc: &Document, target: NodeId) -> Option<String> {
    let first = doc.tree().first_child(target)?;
    let text = doc.tree().get(first)?.as_text()?.trim();
    if text.is_empty() {
        return None;
    }
    Some(text.to_string())
}

fn anchors(doc: &Document) -> impl Iterator<Item = NodeId> + '_ {
    doc.elements()
        .filter(|&el| doc.element(el).is_some_and(|e| e.name == ANCHOR_TAG))
}

fn non_empty(elements: Vec<NodeId>) -> Option<Vec<NodeId>> {
    if elements.is_empty() { None } else { Some(elements) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use twin_dom::{DomTree, ElementData};

    fn element_with(tree: &mut DomTree, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let mut data = ElementData::new(tag);
        for (name, value) in attrs {
            data.set_attr(name, value.to_string());
        }
        tree.create_element(data)
    }

    fn doc_with_body(build: impl FnOnce(&mut DomTree, NodeId)) -> Document {
        let mut tree = DomTree::new();
        let html = element_with(&mut tree, "html", &[]);
        let body = element_with(&mut tree, "body", &[]);
        tree.append_child(NodeId::ROOT, html);
        tree.append_child(html, body);
        build(&mut tree, body);
        Document::new(tree, "about:blank")
    }

    #[test]
    fn test_first_child_text_trims() {
        let doc = doc_with_body(|tree, body| {
            let div = element_with(tree, "div", &[("id", "t")]);
            let text = tree.create_text("  Click here \n");
            tree.append_child(body, div);
            tree.append_child(div, text);
        });
        let target = doc.get_element_by_id("t").unwrap();

        assert_eq!(first_child_text(&doc, target), Some("Click here".to_string()));
    }

    #[test]
    fn test_first_child_text_childless() {
        let doc = doc_with_body(|tree, body| {
            let div = element_with(tree, "div", &[("id", "t")]);
            tree.append_child(body, div);
        });
        let target = doc.get_element_by_id("t").unwrap();

        assert_eq!(first_child_text(&doc, target), None);
    }

    #[test]
    fn test_first_child_text_element_child() {
        let doc = doc_with_body(|tree, body| {
            let div = element_with(tree, "div", &[("id", "t")]);
            let span = element_with(tree, "span", &[]);
            tree.append_child(body, div);
            tree.append_child(div, span);
        });
        let target = doc.get_element_by_id("t").unwrap();

        assert_eq!(first_child_text(&doc, target), None);
    }

    #[test]
    fn test_anchors_only_anchor_tags() {
        let doc = doc_with_body(|tree, body| {
            let a = element_with(tree, "a", &[]);
            let div = element_with(tree, "div", &[]);
            tree.append_child(body, a);
            tree.append_child(body, div);
        });

        assert_eq!(anchors(&doc).count(), 1);
    }
}
