//! JSON writer for Place files.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{MakePlacesError, Result};
use crate::types::Place;

/// Generate the JSON document for a Place.
///
/// Two-space indentation, no trailing newline.
pub fn generate_json(place: &Place) -> Result<String> {
    Ok(serde_json::to_string_pretty(place)?)
}

/// Save a Place as a JSON file named after the last segment of its id.
///
/// An existing file with the same name is truncated and overwritten. The
/// directory is not created; a missing one fails with `WriteOutput`.
///
/// # Arguments
/// * `place` - The Place to save
/// * `output_dir` - Existing directory to write into
///
/// # Returns
/// Path to the saved file
pub fn save_place(place: &Place, output_dir: &Path) -> Result<PathBuf> {
    let output_file = output_dir.join(place.file_name());
    let content = generate_json(place)?;

    File::create(&output_file)
        .and_then(|mut file| file.write_all(content.as_bytes()))
        .map_err(|source| MakePlacesError::WriteOutput {
            path: output_file.clone(),
            source,
        })?;

    debug!(id = %place.id, path = %output_file.display(), "wrote place");
    Ok(output_file)
}
