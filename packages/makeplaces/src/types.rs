//! Core data types for makeplaces.
//!
//! `OsmNode` and `Tag` borrow from the parsed input document; `Place` is
//! the owned ActivityStreams object written to disk.

use serde::{Deserialize, Serialize};

use crate::config::{place_id, AS_CONTEXT, PLACE_TYPE};

/// A key/value annotation on an OSM element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a> {
    /// The `k` attribute.
    pub key: Option<&'a str>,

    /// The `v` attribute.
    pub value: Option<&'a str>,
}

/// An OSM `node` element and its direct child tags, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsmNode<'a> {
    /// The `id` attribute.
    pub id: Option<&'a str>,

    /// The `lat` attribute, unparsed.
    pub lat: Option<&'a str>,

    /// The `lon` attribute, unparsed.
    pub lon: Option<&'a str>,

    /// The `timestamp` attribute, kept verbatim.
    pub timestamp: Option<&'a str>,

    /// Direct child `tag` elements.
    pub tags: Vec<Tag<'a>>,

    /// `row:col` of the element in the source document.
    pub position: String,
}

impl<'a> OsmNode<'a> {
    /// Value of the first tag with the given key.
    ///
    /// Returns `None` when no tag matches or the matching tag has no value.
    #[must_use]
    pub fn tag_value(&self, key: &str) -> Option<&'a str> {
        self.tags
            .iter()
            .find(|tag| tag.key == Some(key))
            .and_then(|tag| tag.value)
    }
}

/// An ActivityStreams 2.0 Place derived from one OSM node.
///
/// Field order matches the serialized document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    #[serde(rename = "@context")]
    pub context: String,

    #[serde(rename = "type")]
    pub kind: String,

    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    /// Always serialized, as `null` when the node has no timestamp.
    pub updated: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Place {
    /// Create a Place for a node id with only the constant fields set.
    #[must_use]
    pub fn new(node_id: &str) -> Self {
        Self {
            context: AS_CONTEXT.to_string(),
            kind: PLACE_TYPE.to_string(),
            id: place_id(node_id),
            latitude: None,
            longitude: None,
            updated: None,
            name: None,
        }
    }

    /// The last path segment of the id, used as the output file name.
    ///
    /// # Examples
    /// ```
    /// use makeplaces::types::Place;
    ///
    /// assert_eq!(Place::new("123").file_name(), "n123");
    /// ```
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.id
            .rsplit_once('/')
            .map_or(self.id.as_str(), |(_, tail)| tail)
    }
}

/// Totals for one conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Place files written.
    pub places_written: usize,
}
