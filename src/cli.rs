//! Command-line argument parsing.
//!
//! Every flag is optional; running without arguments opens the coarse preset
//! with a random seed.

use clap::Parser;
use log::{info, warn};

use crate::params::WorldPreset;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "terrainview")]
#[command(about = "Procedural tile terrain viewer", long_about = None)]
pub struct Args {
    /// World preset: coarse (default, 10 tiers) or fine (7 tiers)
    #[arg(long, value_name = "PRESET", default_value = "coarse")]
    pub preset: String,

    /// Seed for the first world (random in 1..=10000 when omitted)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Override the preset's frame-rate throttle
    #[arg(long, value_name = "FPS")]
    pub fps: Option<u32>,
}

impl Args {
    /// Resolve the preset name and apply overrides
    pub fn world_preset(&self) -> WorldPreset {
        let mut preset = match self.preset.to_lowercase().as_str() {
            "coarse" => WorldPreset::coarse(),
            "fine" => WorldPreset::fine(),
            other => {
                warn!("Unknown preset '{}', using coarse", other);
                WorldPreset::coarse()
            }
        };

        if let Some(fps) = self.fps {
            preset.window.target_fps = fps;
        }

        info!(
            "Preset: {} ({}x{} window, {}px tiles, {} tiers, {} fps)",
            preset.name,
            preset.window.window_width,
            preset.window.window_height,
            preset.window.tile_size_px,
            preset.scheme.tier_count(),
            preset.window.target_fps
        );
        preset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let args = Args::try_parse_from(["terrainview"]).unwrap();
        assert_eq!(args.seed, None);
        assert_eq!(args.fps, None);
        assert_eq!(args.world_preset().name, "coarse");
    }

    #[test]
    fn test_fine_preset_with_overrides() {
        let args =
            Args::try_parse_from(["terrainview", "--preset", "FINE", "--seed", "42", "--fps", "24"])
                .unwrap();
        let preset = args.world_preset();
        assert_eq!(preset.name, "fine");
        assert_eq!(preset.window.target_fps, 24);
        assert_eq!(args.seed, Some(42));
    }

    #[test]
    fn test_unknown_preset_falls_back() {
        let args = Args::try_parse_from(["terrainview", "--preset", "huge"]).unwrap();
        assert_eq!(args.world_preset().name, "coarse");
    }

    #[test]
    fn test_rejects_non_numeric_seed() {
        assert!(Args::try_parse_from(["terrainview", "--seed", "abc"]).is_err());
    }
}
