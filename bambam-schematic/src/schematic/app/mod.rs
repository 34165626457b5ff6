mod schematic_app;

pub use schematic_app::SchematicApp;
