use super::{schematic_error::SchematicError, DiagramFile};
use itertools::Itertools;
use std::{fs, path::Path};

/// file extension of schematic diagrams
pub const DIAGRAM_EXTENSION: &str = "svg";

/// lists the `.svg` diagrams directly inside `schematics_directory`, sorted by
/// filename so that repeated runs see the same order on every platform.
/// subdirectories and hidden files (names starting with `.`, such as macOS
/// `._` resource forks) are not included.
pub fn scan_diagrams(schematics_directory: &Path) -> Result<Vec<DiagramFile>, SchematicError> {
    let to_error = |source: std::io::Error| SchematicError::SchematicsDirectoryError {
        path: schematics_directory.to_path_buf(),
        source,
    };
    let mut paths = vec![];
    for entry in fs::read_dir(schematics_directory).map_err(to_error)? {
        let entry = entry.map_err(to_error)?;
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|e| e == DIAGRAM_EXTENSION) {
            paths.push(path);
        }
    }
    let diagrams = paths
        .into_iter()
        .sorted_by(|a, b| a.file_name().cmp(&b.file_name()))
        .map(DiagramFile::new)
        .collect_vec();
    Ok(diagrams)
}
