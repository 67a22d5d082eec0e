//! Error types for makeplaces.
//!
//! Every error is fatal to a run: nothing is retried or skipped per node,
//! the first failure propagates to the caller.

use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the makeplaces library.
#[derive(Debug, Error)]
pub enum MakePlacesError {
    /// The input file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// A tagged node has no `id` attribute.
    #[error("Node at {position} has no id attribute")]
    MissingNodeId { position: String },

    /// A `lat` or `lon` attribute is not a finite decimal number.
    ///
    /// `source` is `None` when the value parsed but is NaN or infinite.
    #[error("Invalid {attribute} '{value}' on node {node_id}")]
    InvalidCoordinate {
        node_id: String,
        attribute: &'static str,
        value: String,
        #[source]
        source: Option<ParseFloatError>,
    },

    /// A Place file could not be created or written.
    #[error("Failed to write {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for makeplaces operations.
pub type Result<T> = std::result::Result<T, MakePlacesError>;
