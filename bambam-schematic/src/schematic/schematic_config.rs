use super::schematic_error::SchematicError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_STOPS_FILE: &str = "stops.txt";
pub const DEFAULT_SCHEMATICS_DIRECTORY: &str = "schematics";
pub const DEFAULT_OUTPUT_FILE: &str = "markers.json";

/// input and output locations for a schematic marker run. the defaults are
/// relative to the working directory.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct SchematicConfiguration {
    /// GTFS `stops.txt` file
    pub stops_file: PathBuf,
    /// directory containing `.svg` schematic diagrams
    pub schematics_directory: PathBuf,
    /// destination of the JSON marker document
    pub output_file: PathBuf,
}

impl Default for SchematicConfiguration {
    fn default() -> Self {
        Self {
            stops_file: PathBuf::from(DEFAULT_STOPS_FILE),
            schematics_directory: PathBuf::from(DEFAULT_SCHEMATICS_DIRECTORY),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl TryFrom<&String> for SchematicConfiguration {
    type Error = SchematicError;

    /// reads a configuration file, choosing the decoder by extension
    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            decode_file(f, |s| toml::from_str(s).map_err(|e| e.to_string()))
        } else if f.ends_with(".json") {
            decode_file(f, |s| serde_json::from_str(s).map_err(|e| e.to_string()))
        } else {
            Err(SchematicError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}

fn decode_file<F>(f: &str, decode: F) -> Result<SchematicConfiguration, SchematicError>
where
    F: FnOnce(&str) -> Result<SchematicConfiguration, String>,
{
    let text = std::fs::read_to_string(f)
        .map_err(|e| SchematicError::ConfigurationError(format!("failure reading {f}: {e}")))?;
    decode(&text)
        .map_err(|e| SchematicError::ConfigurationError(format!("failure decoding {f}: {e}")))
}
