use serde::{Deserialize, Serialize};

/// a single row from a GTFS `stops.txt` file, limited to the columns
/// needed to place a schematic marker. any other columns are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopRecord {
    /// unique stop identifier
    #[serde(rename = "stop_id")]
    pub id: String,
    /// display name of the stop
    #[serde(rename = "stop_name")]
    pub name: String,
    /// WGS84 latitude in decimal degrees
    #[serde(rename = "stop_lat")]
    pub lat: f64,
    /// WGS84 longitude in decimal degrees
    #[serde(rename = "stop_lon")]
    pub lon: f64,
}
