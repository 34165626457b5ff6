use crate::schematic::{SchematicConfiguration, SchematicError};
use clap::Parser;

/// command line tool that joins a GTFS stops table with a directory of
/// per-stop schematic diagrams and writes a JSON marker document.
/// with no arguments, reads `stops.txt` and `schematics/` and writes
/// `markers.json` in the working directory.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct SchematicApp {
    #[arg(long, help = "path to a .toml or .json file with schematic run parameters")]
    pub configuration_file: Option<String>,
    #[arg(long, help = "path to the GTFS stops.txt file")]
    pub stops_file: Option<String>,
    #[arg(long, help = "directory containing .svg schematic diagrams")]
    pub schematics_directory: Option<String>,
    #[arg(long, help = "output path for the JSON marker document")]
    pub output_file: Option<String>,
}

impl SchematicApp {
    /// builds the run configuration. explicit arguments take precedence
    /// over the configuration file, which takes precedence over defaults.
    pub fn configuration(&self) -> Result<SchematicConfiguration, SchematicError> {
        let mut conf = match &self.configuration_file {
            None => SchematicConfiguration::default(),
            Some(f) => {
                log::info!("reading schematic configuration from {f}");
                SchematicConfiguration::try_from(f)?
            }
        };
        if let Some(f) = &self.stops_file {
            conf.stops_file = f.into();
        }
        if let Some(d) = &self.schematics_directory {
            conf.schematics_directory = d.into();
        }
        if let Some(f) = &self.output_file {
            conf.output_file = f.into();
        }
        Ok(conf)
    }
}

#[cfg(test)]
mod test {
    use super::SchematicApp;
    use crate::schematic::SchematicConfiguration;
    use clap::Parser;
    use std::{fs, path::PathBuf};

    #[test]
    fn test_no_arguments_uses_defaults() {
        let app = SchematicApp::try_parse_from(["bambam_schematic"]).expect("should parse");
        let conf = app.configuration().expect("should build configuration");
        assert_eq!(conf, SchematicConfiguration::default());
    }

    #[test]
    fn test_arguments_override_configuration_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let f = dir.path().join("schematic.toml");
        fs::write(
            &f,
            "stops_file = \"from_file/stops.txt\"\noutput_file = \"from_file/markers.json\"\n",
        )
        .expect("write fixture");
        let f = f.to_string_lossy().into_owned();
        let app = SchematicApp::try_parse_from([
            "bambam_schematic",
            "--configuration-file",
            f.as_str(),
            "--output-file",
            "cli/markers.json",
        ])
        .expect("should parse");
        let conf = app.configuration().expect("should build configuration");
        assert_eq!(conf.stops_file, PathBuf::from("from_file/stops.txt"));
        assert_eq!(conf.schematics_directory, PathBuf::from("schematics"));
        assert_eq!(conf.output_file, PathBuf::from("cli/markers.json"));
    }
}
