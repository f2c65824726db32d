//! Parameter definitions with units and documented semantics.
//!
//! Window geometry, octave layering and terrain tables live here as plain
//! structs and are handed to the generator and renderer at construction.

mod octaves;
mod preset;
mod window;

// Re-export all types
pub use octaves::NoiseParams;
pub use preset::WorldPreset;
pub use window::{ConfigError, InputBoxConfig, WindowConfig};
