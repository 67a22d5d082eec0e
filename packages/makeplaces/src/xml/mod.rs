//! Reading OSM XML extracts into an in-memory tree.

mod reader;
mod utils;

pub use reader::{is_tagged_node, parse_osm, read_node, read_osm_file};
pub use utils::{find_child, find_children, get_attribute, get_tag_name, has_child, has_tag};
