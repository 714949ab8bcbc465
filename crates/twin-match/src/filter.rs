//! Visibility filter
//!
//! Drops candidates whose inline style explicitly hides them.

use twin_dom::{Document, NodeId};

/// Check whether an element is shown.
///
/// Hidden means the `style` attribute text contains `display:none`
/// anywhere, checked with all whitespace stripped so `display : none`
/// hides too. Elements without a style attribute are always shown.
pub fn is_shown(doc: &Document, element: NodeId) -> bool {
    match doc.element(element).and_then(|e| e.style()) {
        Some(style) => !hides(style),
        None => true,
    }
}

/// Keep the shown elements, preserving input order
pub fn filter_hidden(doc: &Document, elements: &[NodeId]) -> Vec<NodeId> {
    elements
        .iter()
        .copied()
        .filter(|&el| is_shown(doc, el))
        .collect()
}

fn hides(style: &str) -> bool {
    let compact: String = style.chars().filter(|c| !c.is_whitespace()).collect();
    compact.contains("display:none")
}
