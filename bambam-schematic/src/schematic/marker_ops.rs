use super::{DiagramFile, MarkerRecord, StopLookup};
use std::fmt::Display;

/// a diagram whose filename carried a stop id that is missing from
/// the stops table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedDiagram {
    pub stop_id: String,
    pub filename: String,
}

impl Display for UnresolvedDiagram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID '{}' not found in stops table (filename: {})",
            self.stop_id, self.filename
        )
    }
}

/// outcome of joining a set of diagrams against a stops table
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MarkerResolution {
    /// one marker per resolved diagram, in diagram order
    pub markers: Vec<MarkerRecord>,
    /// diagrams with a stop id that did not resolve
    pub unresolved: Vec<UnresolvedDiagram>,
    /// count of diagrams whose filename has no stop id segment
    pub skipped: usize,
}

/// joins each diagram with the stop named by its filename.
///
/// a diagram whose filename yields no stop id is not one of ours and is
/// skipped without comment. a diagram whose stop id is missing from the
/// lookup is logged as a warning and skipped. neither case fails the run.
pub fn resolve_markers(diagrams: &[DiagramFile], lookup: &StopLookup) -> MarkerResolution {
    let mut resolution = MarkerResolution::default();
    for diagram in diagrams {
        let Some(stop_id) = diagram.candidate_stop_id() else {
            resolution.skipped += 1;
            continue;
        };
        match lookup.get(stop_id) {
            Some(stop) => resolution.markers.push(MarkerRecord::new(stop, diagram)),
            None => {
                let unresolved = UnresolvedDiagram {
                    stop_id: stop_id.to_string(),
                    filename: diagram.filename(),
                };
                log::warn!("{unresolved}");
                resolution.unresolved.push(unresolved);
            }
        }
    }
    resolution
}
