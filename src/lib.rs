//! Terrainview library - layered-noise heightmaps rendered as tile terrain

pub mod cli;
pub mod heightmap;
pub mod pacing;
pub mod params;
pub mod rendering;
pub mod terrain;
pub mod ui;
pub mod viewer;
