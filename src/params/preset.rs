//! Named bundles of window, noise and terrain configuration.

use super::{ConfigError, InputBoxConfig, NoiseParams, WindowConfig};
use crate::terrain::{TerrainPalette, TerrainScheme};

/// Everything the generator and renderer need, fixed at startup
#[derive(Debug, Clone)]
pub struct WorldPreset {
    pub name: &'static str,
    pub window: WindowConfig,
    pub noise: NoiseParams,
    pub scheme: TerrainScheme,
    pub palette: TerrainPalette,
    pub input_box: InputBoxConfig,
}

impl Default for WorldPreset {
    fn default() -> Self {
        Self::coarse()
    }
}

impl WorldPreset {
    /// 1000x1000 window, 4px tiles, ten tiers, 30 fps
    pub fn coarse() -> Self {
        Self {
            name: "coarse",
            window: WindowConfig::default(),
            noise: NoiseParams::default(),
            scheme: TerrainScheme::classic(),
            palette: TerrainPalette::classic(),
            input_box: InputBoxConfig::default(),
        }
    }

    /// 1920x1080 window, 16px tiles, seven tiers, 60 fps
    pub fn fine() -> Self {
        Self {
            name: "fine",
            window: WindowConfig {
                window_width: 1920,
                window_height: 1080,
                tile_size_px: 16,
                target_fps: 60,
            },
            noise: NoiseParams::default(),
            scheme: TerrainScheme::compact(),
            palette: TerrainPalette::classic(),
            input_box: InputBoxConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.window.validate()
    }
}
