//! Command-line interface for makeplaces.

use std::path::{Path, PathBuf};

use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::Result;
use crate::places::make_places;

/// makeplaces - Convert tagged OpenStreetMap nodes into ActivityStreams Places.
#[derive(Parser)]
#[command(name = "makeplaces")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// OSM XML extract to read
    pub input: PathBuf,

    /// Existing directory to write one JSON file per tagged node into
    pub output_dir: PathBuf,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    convert_command(&cli.input, &cli.output_dir)
}

/// Execute the conversion.
fn convert_command(input: &Path, output_dir: &Path) -> Result<()> {
    println!(
        "{} {} into {}",
        style("Converting").bold(),
        style(input.display()).cyan(),
        style(output_dir.display()).green()
    );

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Writing places...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let summary = match make_places(input, output_dir) {
        Ok(summary) => summary,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    println!(
        "{} {} places",
        style("Wrote").green().bold(),
        summary.places_written
    );

    Ok(())
}
