//! joins a GTFS stops table with a directory of per-stop schematic diagrams,
//! producing the JSON marker document consumed by the schematic map viewer.
use std::path::Path;

use super::{
    diagram_ops, marker_ops, schematic_error::SchematicError, serialize_ops, MarkerSummary,
    SchematicConfiguration, StopLookup,
};

/// runs the full load, scan, resolve and write sequence for one configuration.
///
/// a missing or malformed stops table, an unreadable schematics directory and
/// an unwritable output file all abort the run. diagrams that do not resolve
/// to a stop are skipped. an empty schematics directory still writes an empty
/// marker document.
pub fn run(conf: &SchematicConfiguration) -> Result<MarkerSummary, SchematicError> {
    let lookup = StopLookup::try_from_csv(&conf.stops_file)?;
    let diagrams = diagram_ops::scan_diagrams(&conf.schematics_directory)?;
    if diagrams.is_empty() {
        log::info!("{}", no_diagrams_message(&conf.schematics_directory));
    }

    let resolution = marker_ops::resolve_markers(&diagrams, &lookup);
    let written = serialize_ops::write_markers(&resolution.markers, &conf.output_file)?;
    log::info!("{}", written_message(written, &conf.output_file));

    let summary = MarkerSummary {
        diagrams: diagrams.len(),
        written,
        unresolved: resolution.unresolved.len(),
        skipped: resolution.skipped,
    };
    log::debug!("schematic run summary: {summary}");
    Ok(summary)
}

fn no_diagrams_message(schematics_directory: &Path) -> String {
    format!(
        "no .svg files found in the schematics directory '{}'",
        schematics_directory.display()
    )
}

fn written_message(written: usize, output_file: &Path) -> String {
    format!(
        "wrote {written} marker entries to '{}'",
        output_file.display()
    )
}
