use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum SchematicError {
    #[error("failure reading stops file '{path}': {source}")]
    StopsFileReadError { path: PathBuf, source: csv::Error },
    #[error("failure decoding stops file row in '{path}': {source}")]
    StopsRowDecodeError { path: PathBuf, source: csv::Error },
    #[error("failure reading schematics directory '{path}': {source}")]
    SchematicsDirectoryError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failure encoding markers as JSON: {0}")]
    MarkerEncodeError(#[from] serde_json::Error),
    #[error("failure writing markers file '{path}': {source}")]
    MarkerWriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
}
