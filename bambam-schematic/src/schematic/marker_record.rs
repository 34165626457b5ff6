use super::{DiagramFile, StopRecord};
use serde::{Deserialize, Serialize};

/// a schematic diagram joined with the stop it depicts. field names
/// match the keys expected by the map front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerRecord {
    #[serde(rename = "stopID")]
    pub stop_id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    /// diagram path as discovered, relative or absolute depending on the
    /// configured schematics directory
    #[serde(rename = "svgFile")]
    pub svg_file: String,
}

impl MarkerRecord {
    pub fn new(stop: &StopRecord, diagram: &DiagramFile) -> MarkerRecord {
        MarkerRecord {
            stop_id: stop.id.clone(),
            name: stop.name.clone(),
            lat: stop.lat,
            lng: stop.lon,
            svg_file: diagram.path().to_string_lossy().into_owned(),
        }
    }
}
