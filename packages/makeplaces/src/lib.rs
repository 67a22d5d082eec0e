//! makeplaces - Convert OpenStreetMap nodes into ActivityStreams Places.
//!
//! Reads an OSM XML extract and writes one ActivityStreams 2.0 `Place`
//! JSON document per `node` element that carries at least one tag.
//!
//! # Example
//!
//! ```
//! use makeplaces::make_places_from_str;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let xml = r#"<osm><node id="1"><tag k="name" v="Here"/></node><node id="2"/></osm>"#;
//!
//! let summary = make_places_from_str(xml, dir.path()).unwrap();
//! assert_eq!(summary.places_written, 1);
//! assert!(dir.path().join("n1").exists());
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants and output directory validation
//! - [`types`]: Core data types (OsmNode, Tag, Place, Summary)
//! - [`error`]: Error types and Result alias
//! - [`xml`]: Reading and navigating the OSM tree
//! - [`place`]: Node to Place mapping
//! - [`json`]: JSON output generation
//! - [`places`]: Driver over a whole extract
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod json;
pub mod place;
pub mod places;
pub mod types;
pub mod xml;

// Re-export main functions
pub use places::{make_places, make_places_from_str};

// Re-export commonly used items
pub use error::{MakePlacesError, Result};
pub use place::make_place;
pub use types::{OsmNode, Place, Summary, Tag};
