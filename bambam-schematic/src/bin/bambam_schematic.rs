//! joins a GTFS stops.txt table with a directory of per-stop .svg schematic
//! diagrams and writes the marker document used by the schematic map viewer.
use bambam_schematic::schematic::{app::SchematicApp, schematic_ops, SchematicError};
use clap::Parser;
use std::process::ExitCode;

fn run(args: &SchematicApp) -> Result<(), SchematicError> {
    let conf = args.configuration()?;
    schematic_ops::run(&conf)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = SchematicApp::parse();
    match run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("bambam-schematic failed: {e}");
            ExitCode::FAILURE
        }
    }
}
