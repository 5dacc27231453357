//! Navigation helpers over a roxmltree DOM.
//!
//! Fiscal documents declare a default namespace; all matching here is on the
//! local tag name so the same code handles namespaced and plain input.

use roxmltree::Node;

/// Tag name without any namespace prefix.
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// First child element with the given tag name.
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && get_tag_name(*child) == tag)
}

/// All child elements with the given tag name, in document order.
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| child.is_element() && get_tag_name(*child) == tag)
}

/// Descendant element addressed by a slash-separated path of tag names.
pub fn find_by_path<'a, 'input>(node: Node<'a, 'input>, path: &str) -> Option<Node<'a, 'input>> {
    let mut current = node;
    for part in path.split('/') {
        current = find_child(current, part)?;
    }
    Some(current)
}

/// Trimmed text content of a node, or the empty string.
pub fn get_text(node: Node<'_, '_>) -> String {
    node.text().map(|s| s.trim().to_string()).unwrap_or_default()
}

/// Attribute value, if present.
pub fn get_attribute<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_tag_name_strips_namespace() {
        let xml = r#"<ns:root xmlns:ns="http://example.com"/>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(get_tag_name(doc.root_element()), "root");
    }

    #[test]
    fn test_find_child() {
        let xml = r#"<root><a/><b/></root>"#;
        let doc = Document::parse(xml).unwrap();
        let root = doc.root_element();

        assert!(find_child(root, "a").is_some());
        assert!(find_child(root, "c").is_none());
    }

    #[test]
    fn test_find_children_keeps_document_order() {
        let xml = r#"<root><item>1</item><other/><item>2</item></root>"#;
        let doc = Document::parse(xml).unwrap();

        let texts: Vec<String> = find_children(doc.root_element(), "item")
            .map(get_text)
            .collect();
        assert_eq!(texts, vec!["1", "2"]);
    }

    #[test]
    fn test_find_by_path() {
        let xml = r#"<root><level1><level2>found</level2></level1></root>"#;
        let doc = Document::parse(xml).unwrap();
        let root = doc.root_element();

        assert_eq!(get_text(find_by_path(root, "level1/level2").unwrap()), "found");
        assert!(find_by_path(root, "level1/missing").is_none());
    }

    #[test]
    fn test_get_text_trims() {
        let xml = r#"<root>  padded  </root>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(get_text(doc.root_element()), "padded");
    }

    #[test]
    fn test_get_attribute() {
        let xml = r#"<root Id="NFe123"/>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(get_attribute(doc.root_element(), "Id"), Some("NFe123"));
        assert_eq!(get_attribute(doc.root_element(), "missing"), None);
    }
}
