use std::fmt::Display;

/// counts reported at the end of a schematic marker run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MarkerSummary {
    /// `.svg` files found in the schematics directory
    pub diagrams: usize,
    /// marker entries in the written document
    pub written: usize,
    /// diagrams whose stop id was not in the stops table
    pub unresolved: usize,
    /// diagrams whose filename carried no stop id
    pub skipped: usize,
}

impl Display for MarkerSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "diagrams={},written={},unresolved={},skipped={}",
            self.diagrams, self.written, self.unresolved, self.skipped
        )
    }
}
