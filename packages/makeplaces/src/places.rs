//! Driver that ties reading, mapping and writing together.

use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::json::save_place;
use crate::place::make_place;
use crate::types::Summary;
use crate::xml::{is_tagged_node, parse_osm, read_node, read_osm_file};

/// Convert every tagged node in an OSM XML file into a Place file.
///
/// # Arguments
/// * `input` - Path to the OSM XML extract
/// * `output_dir` - Existing directory for the Place files
///
/// # Returns
/// Totals for the run. The first error aborts the run; files written
/// before it are left in place. The output directory is only touched
/// when a Place is written.
pub fn make_places(input: &Path, output_dir: &Path) -> Result<Summary> {
    let xml = read_osm_file(input)?;
    make_places_from_str(&xml, output_dir)
}

/// Convert every tagged node in OSM XML text into a Place file.
///
/// Elements are visited depth-first in document order at any nesting
/// depth. Untagged nodes and all other elements are skipped.
pub fn make_places_from_str(xml: &str, output_dir: &Path) -> Result<Summary> {
    let doc = parse_osm(xml)?;
    let mut summary = Summary::default();

    for element in doc.descendants().filter(|n| is_tagged_node(*n)) {
        let place = make_place(&read_node(element))?;
        save_place(&place, output_dir)?;
        summary.places_written += 1;
    }

    info!(
        places = summary.places_written,
        output = %output_dir.display(),
        "finished writing places"
    );
    Ok(summary)
}
