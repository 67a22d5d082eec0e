//! Configuration constants for makeplaces.

/// JSON-LD context for every generated document.
pub const AS_CONTEXT: &str = "https://www.w3.org/ns/activitystreams";

/// ActivityStreams object type of every generated document.
pub const PLACE_TYPE: &str = "Place";

/// Prefix for Place identifiers; the OSM node id is appended directly.
pub const PLACE_ID_PREFIX: &str = "https://places.pub/osm/n";

/// OSM element name that can produce a Place.
pub const NODE_TAG: &str = "node";

/// OSM child element carrying a key/value pair.
pub const TAG_TAG: &str = "tag";

/// Tag key whose value becomes the Place name.
pub const NAME_KEY: &str = "name";

/// Build the Place identifier for an OSM node id.
///
/// # Examples
/// ```
/// use makeplaces::config::place_id;
///
/// assert_eq!(place_id("123"), "https://places.pub/osm/n123");
/// ```
#[must_use]
pub fn place_id(node_id: &str) -> String {
    format!("{PLACE_ID_PREFIX}{node_id}")
}
