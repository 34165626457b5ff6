use std::path::{Path, PathBuf};

/// a schematic diagram discovered on disk. diagram filenames follow the
/// convention `<seg0>_<seg1>_<stop_id>[-<suffix>].svg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramFile {
    path: PathBuf,
}

impl DiagramFile {
    pub fn new(path: PathBuf) -> DiagramFile {
        DiagramFile { path }
    }

    /// the path as discovered by the scanner
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// the final component of the path, for diagnostics
    pub fn filename(&self) -> String {
        self.path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// the stop id encoded in the filename, if the filename follows the
    /// naming convention. this id has not yet been checked against any
    /// stops table.
    pub fn candidate_stop_id(&self) -> Option<&str> {
        let stem = self.path.file_stem()?.to_str()?;
        candidate_stop_id(stem)
    }
}

/// extracts the candidate stop id from a diagram file stem: the third
/// underscore-delimited segment, truncated at its first hyphen.
///
/// # Examples
///
/// ```
/// use bambam_schematic::schematic::candidate_stop_id;
///
/// assert_eq!(candidate_stop_id("line_A_123-north"), Some("123"));
/// assert_eq!(candidate_stop_id("line_A"), None);
/// ```
pub fn candidate_stop_id(stem: &str) -> Option<&str> {
    let segment = stem.split('_').nth(2)?;
    segment.split('-').next()
}

#[cfg(test)]
mod test {
    use super::{candidate_stop_id, DiagramFile};
    use std::path::PathBuf;

    #[test]
    fn test_candidate_from_hyphenated_segment() {
        assert_eq!(candidate_stop_id("line_A_123-north"), Some("123"));
        assert_eq!(candidate_stop_id("line_A_123-north-2"), Some("123"));
    }

    #[test]
    fn test_candidate_without_suffix() {
        assert_eq!(candidate_stop_id("line_A_123"), Some("123"));
    }

    #[test]
    fn test_candidate_ignores_segments_after_third() {
        assert_eq!(candidate_stop_id("line_A_123_extra_parts"), Some("123"));
    }

    #[test]
    fn test_fewer_than_three_segments_has_no_candidate() {
        assert_eq!(candidate_stop_id("line_A"), None);
        assert_eq!(candidate_stop_id("line"), None);
        assert_eq!(candidate_stop_id(""), None);
    }

    #[test]
    fn test_empty_third_segment_is_an_empty_candidate() {
        assert_eq!(candidate_stop_id("line_A_"), Some(""));
        assert_eq!(candidate_stop_id("line_A_-north"), Some(""));
    }

    #[test]
    fn test_diagram_file_strips_extension_and_directories() {
        let diagram = DiagramFile::new(PathBuf::from("schematics/line_A_123-north.svg"));
        assert_eq!(diagram.candidate_stop_id(), Some("123"));
        assert_eq!(diagram.filename(), "line_A_123-north.svg");
    }

    #[test]
    fn test_diagram_file_only_strips_final_extension() {
        let diagram = DiagramFile::new(PathBuf::from("line_A_12.5-x.svg"));
        assert_eq!(diagram.candidate_stop_id(), Some("12.5"));
    }
}
