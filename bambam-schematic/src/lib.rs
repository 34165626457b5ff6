pub mod schematic;
