//! Loading an OSM extract and lifting `node` elements out of the tree.

use std::fs;
use std::path::Path;

use roxmltree::{Document, Node, ParsingOptions};

use super::utils::{find_children, get_attribute, has_child, has_tag};
use crate::config::{NODE_TAG, TAG_TAG};
use crate::error::{MakePlacesError, Result};
use crate::types::{OsmNode, Tag};

/// Read an OSM XML file fully into memory.
pub fn read_osm_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| MakePlacesError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse OSM XML text into a document tree.
///
/// A doctype is accepted; any other malformation is an error.
pub fn parse_osm(xml: &str) -> Result<Document<'_>> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Ok(Document::parse_with_options(xml, options)?)
}

/// Whether an element is a `node` with at least one direct `tag` child.
pub fn is_tagged_node(node: Node<'_, '_>) -> bool {
    has_tag(node, NODE_TAG) && has_child(node, TAG_TAG)
}

/// Collect the attributes and direct child tags of a `node` element.
pub fn read_node<'a>(node: Node<'a, '_>) -> OsmNode<'a> {
    let pos = node.document().text_pos_at(node.range().start);
    let tags = find_children(node, TAG_TAG)
        .map(|tag| Tag {
            key: get_attribute(tag, "k"),
            value: get_attribute(tag, "v"),
        })
        .collect();

    OsmNode {
        id: get_attribute(node, "id"),
        lat: get_attribute(node, "lat"),
        lon: get_attribute(node, "lon"),
        timestamp: get_attribute(node, "timestamp"),
        tags,
        position: format!("{}:{}", pos.row, pos.col),
    }
}
