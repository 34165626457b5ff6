use super::{schematic_error::SchematicError, MarkerRecord};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// writes markers to `output_file` as a pretty-printed JSON array, replacing
/// any previous file at that path. the document is rendered in full and
/// written to a sibling temporary file before it is moved into place, so a
/// failed run leaves the previous output untouched.
///
/// returns the number of markers written.
pub fn write_markers(
    markers: &[MarkerRecord],
    output_file: &Path,
) -> Result<usize, SchematicError> {
    let document = serde_json::to_string_pretty(markers)?;
    let staging_file = staging_path(output_file);
    let to_error = |source: std::io::Error| SchematicError::MarkerWriteError {
        path: output_file.to_path_buf(),
        source,
    };

    fs::write(&staging_file, document).map_err(to_error)?;
    if let Err(e) = fs::rename(&staging_file, output_file) {
        let _ = fs::remove_file(&staging_file);
        return Err(to_error(e));
    }
    Ok(markers.len())
}

/// hidden sibling of the output file used while writing
fn staging_path(output_file: &Path) -> PathBuf {
    let filename = output_file
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    output_file.with_file_name(format!(".{filename}.tmp"))
}
