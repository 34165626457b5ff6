use super::{schematic_error::SchematicError, StopRecord};
use std::{collections::HashMap, io::Read, path::Path};

/// stop records keyed by stop id, built once from a `stops.txt` table
/// and read-only afterward.
#[derive(Debug, Default, Clone)]
pub struct StopLookup {
    stops: HashMap<String, StopRecord>,
}

impl StopLookup {
    /// reads a GTFS `stops.txt` file into a lookup. a missing file, a missing
    /// column or a non-numeric coordinate fails the whole read.
    pub fn try_from_csv(stops_file: &Path) -> Result<StopLookup, SchematicError> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(stops_file)
            .map_err(|source| SchematicError::StopsFileReadError {
                path: stops_file.to_path_buf(),
                source,
            })?;
        Self::from_csv_reader(reader, stops_file)
    }

    /// reads stop rows from any reader over `stops.txt`-formatted text.
    /// `source_path` is only used for error messages.
    pub fn try_from_reader<R: Read>(
        reader: R,
        source_path: &Path,
    ) -> Result<StopLookup, SchematicError> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);
        Self::from_csv_reader(reader, source_path)
    }

    fn from_csv_reader<R: Read>(
        mut reader: csv::Reader<R>,
        source_path: &Path,
    ) -> Result<StopLookup, SchematicError> {
        let mut stops = HashMap::new();
        for row in reader.deserialize::<StopRecord>() {
            let record = row.map_err(|source| SchematicError::StopsRowDecodeError {
                path: source_path.to_path_buf(),
                source,
            })?;
            // duplicate ids: the later row replaces the earlier one
            stops.insert(record.id.clone(), record);
        }
        log::debug!(
            "read {} stops from '{}'",
            stops.len(),
            source_path.display()
        );
        Ok(StopLookup { stops })
    }

    pub fn get(&self, stop_id: &str) -> Option<&StopRecord> {
        self.stops.get(stop_id)
    }

    pub fn contains(&self, stop_id: &str) -> bool {
        self.stops.contains_key(stop_id)
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

impl FromIterator<StopRecord> for StopLookup {
    fn from_iter<T: IntoIterator<Item = StopRecord>>(iter: T) -> Self {
        let stops = iter
            .into_iter()
            .map(|record| (record.id.clone(), record))
            .collect();
        StopLookup { stops }
    }
}
