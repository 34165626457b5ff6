pub mod app;
mod diagram_file;
pub mod diagram_ops;
mod marker_ops;
mod marker_record;
mod marker_summary;
mod schematic_config;
mod schematic_error;
pub mod schematic_ops;
mod serialize_ops;
mod stop_lookup;
mod stop_record;

pub use diagram_file::{candidate_stop_id, DiagramFile};
pub use marker_ops::{resolve_markers, MarkerResolution, UnresolvedDiagram};
pub use marker_record::MarkerRecord;
pub use marker_summary::MarkerSummary;
pub use schematic_config::SchematicConfiguration;
pub use schematic_error::SchematicError;
pub use serialize_ops::write_markers;
pub use stop_lookup::StopLookup;
pub use stop_record::StopRecord;
