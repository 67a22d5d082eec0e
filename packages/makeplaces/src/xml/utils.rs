//! XML utility functions for navigating and extracting data from DOM trees.

use roxmltree::Node;

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use makeplaces::xml::get_tag_name;
///
/// let xml = r#"<osm><node id="1"/></osm>"#;
/// let doc = Document::parse(xml).unwrap();
/// let node = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(node), "node");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Whether a node is an element named exactly `tag` with no namespace.
///
/// `<x:node xmlns:x="urn:x">` is not a `node`.
fn is_named(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && node.tag_name().namespace().is_none() && get_tag_name(node) == tag
}

/// Find the first child element with the given tag name.
///
/// Only direct children are searched, never deeper descendants.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use makeplaces::xml::find_child;
///
/// let xml = r#"<node id="1"><tag k="name" v="x"/></node>"#;
/// let doc = Document::parse(xml).unwrap();
/// let node = doc.root_element();
///
/// assert!(find_child(node, "tag").is_some());
/// assert!(find_child(node, "nd").is_none());
/// ```
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| is_named(*child, tag))
}

/// Find all child elements with the given tag name, in document order.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use makeplaces::xml::find_children;
///
/// let xml = r#"<node><tag k="a" v="1"/><nd/><tag k="b" v="2"/></node>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// let tags: Vec<_> = find_children(doc.root_element(), "tag").collect();
/// assert_eq!(tags.len(), 2);
/// ```
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| is_named(*child, tag))
}

/// Get an attribute value from a node.
pub fn get_attribute<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute(name)
}

/// Check if a node is an element with a specific tag name and no namespace.
pub fn has_tag(node: Node<'_, '_>, tag: &str) -> bool {
    is_named(node, tag)
}

/// Check if a node has at least one direct child element with the tag name.
pub fn has_child(node: Node<'_, '_>, tag: &str) -> bool {
    find_child(node, tag).is_some()
}
