//! Path describer
//!
//! Renders an element and its ancestor chain as human-readable
//! descriptors for reporting.

use twin_dom::{Document, NodeId};

/// Describe one element: `[tag = 'div'; id = 'x'; class = 'c']`
///
/// Fixed order tag, id, class; the id and class segments are omitted when
/// empty.
pub fn describe_element(doc: &Document, element: NodeId) -> String {
    let Some(el) = doc.element(element) else {
        return String::new();
    };

    let mut out = format!("[tag = '{}'", el.name);
    if !el.id().is_empty() {
        out.push_str(&format!("; id = '{}'", el.id()));
    }
    if !el.class_name().is_empty() {
        out.push_str(&format!("; class = '{}'", el.class_name()));
    }
    out.push(']');
    out
}

/// Ancestor chain of an element in root-to-element order, each ancestor
/// rendered with [`describe_element`], joined with ` > `. The element
/// itself and the synthetic document node are excluded.
pub fn element_path(doc: &Document, element: NodeId) -> String {
    let mut ancestors: Vec<NodeId> = doc
        .tree()
        .ancestors(element)
        .filter(|(_, node)| node.is_element())
        .map(|(id, _)| id)
        .collect();
    ancestors.reverse();

    let described: Vec<String> = ancestors
        .iter()
        .map(|&id| describe_element(doc, id))
        .collect();
    described.join(" > ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use twin_dom::{DomTree, ElementData};

    fn nested_document() -> (Document, NodeId) {
        // <html><body><div id="wrap" class="outer box"><a id="e">x</a></div></body></html>
        let mut tree = DomTree::new();
        let html = tree.create_element(ElementData::new("html"));
        let body = tree.create_element(ElementData::new("body"));

        let mut wrap = ElementData::new("div");
        wrap.set_attr("id", "wrap".to_string());
        wrap.set_attr("class", "outer box".to_string());
        let div = tree.create_element(wrap);

        let mut link = ElementData::new("a");
        link.set_attr("id", "e".to_string());
        let a = tree.create_element(link);

        tree.append_child(tree.root(), html);
        tree.append_child(html, body);
        tree.append_child(body, div);
        tree.append_child(div, a);

        (Document::new(tree, "about:blank"), a)
    }

    #[test]
    fn test_describe_full() {
        let (doc, a) = nested_document();
        let div = doc.get_element_by_id("wrap").unwrap();

        assert_eq!(doc.element(a).unwrap().name, "a");
        assert_eq!(
            describe_element(&doc, div),
            "[tag = 'div'; id = 'wrap'; class = 'outer box']"
        );
    }

    #[test]
    fn test_describe_omits_empty() {
        let (doc, a) = nested_document();
        assert_eq!(describe_element(&doc, a), "[tag = 'a'; id = 'e']");
    }

    #[test]
    fn test_path_root_to_element() {
        let (doc, a) = nested_document();

        assert_eq!(
            element_path(&doc, a),
            "[tag = 'html'] > [tag = 'body'] > [tag = 'div'; id = 'wrap'; class = 'outer box']"
        );
    }
}
