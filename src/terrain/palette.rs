//! Tier to display color lookup.

use std::collections::HashMap;

use super::TerrainTier;

/// RGB color triple
pub type Rgb = [u8; 3];

/// Color used for any tier the palette does not map
pub const FALLBACK_GRAY: Rgb = [128, 128, 128];

/// Tier colors with a gray default
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerrainPalette {
    colors: HashMap<TerrainTier, Rgb>,
}

impl Default for TerrainPalette {
    fn default() -> Self {
        Self::classic()
    }
}

impl TerrainPalette {
    pub fn new(colors: HashMap<TerrainTier, Rgb>) -> Self {
        Self { colors }
    }

    /// Blues for water, sand, greens, browns and grays, white snow
    pub fn classic() -> Self {
        use TerrainTier::*;
        let colors = [
            (OceanDeep, [0, 0, 139]),
            (OceanMid, [0, 0, 205]),
            (OceanShallow, [0, 191, 255]),
            (Beach, [238, 214, 175]),
            (GrassLow, [11, 176, 30]),
            (GrassMid, [42, 156, 48]),
            (GrassHigh, [34, 139, 34]),
            (MountainLow, [139, 69, 19]),
            (MountainHigh, [84, 82, 82]),
            (Snow, [255, 250, 250]),
        ];
        Self::new(colors.into_iter().collect())
    }

    pub fn color(&self, tier: TerrainTier) -> Rgb {
        self.colors.get(&tier).copied().unwrap_or(FALLBACK_GRAY)
    }

    pub fn with_color(mut self, tier: TerrainTier, color: Rgb) -> Self {
        self.colors.insert(tier, color);
        self
    }
}
