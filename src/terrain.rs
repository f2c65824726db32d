//! Terrain classification: height normalization, tier thresholds and colors.

mod palette;
mod scheme;

pub use palette::{Rgb, TerrainPalette, FALLBACK_GRAY};
pub use scheme::{SchemeError, TerrainScheme, TierBand};

/// Discrete terrain class, ordered from lowest to highest ground
///
/// The declaration order is load-bearing: schemes must list tiers in this
/// order, and classification relies on it being monotonic in height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TerrainTier {
    OceanDeep,
    OceanMid,
    OceanShallow,
    Beach,
    GrassLow,
    GrassMid,
    GrassHigh,
    MountainLow,
    MountainHigh,
    Snow,
}

impl TerrainTier {
    /// Every tier, lowest first
    pub const ALL: [TerrainTier; 10] = [
        TerrainTier::OceanDeep,
        TerrainTier::OceanMid,
        TerrainTier::OceanShallow,
        TerrainTier::Beach,
        TerrainTier::GrassLow,
        TerrainTier::GrassMid,
        TerrainTier::GrassHigh,
        TerrainTier::MountainLow,
        TerrainTier::MountainHigh,
        TerrainTier::Snow,
    ];
}

/// Map a raw sample into [0, 1] against the field's observed range
///
/// A flat field (`max <= min`) maps every sample to 0.0, which classifies as
/// the lowest tier of any scheme.
pub fn normalize(sample: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    if !(range > 0.0) {
        return 0.0;
    }
    ((sample - min) / range).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_spans_unit_interval() {
        assert_eq!(normalize(-2.0, -2.0, 2.0), 0.0);
        assert_eq!(normalize(0.0, -2.0, 2.0), 0.5);
        assert_eq!(normalize(2.0, -2.0, 2.0), 1.0);
    }

    #[test]
    fn test_normalize_clamps_outliers() {
        assert_eq!(normalize(3.0, 0.0, 1.0), 1.0);
        assert_eq!(normalize(-3.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_normalize_flat_field_is_zero() {
        assert_eq!(normalize(5.0, 5.0, 5.0), 0.0);
        assert_eq!(normalize(5.0, 6.0, 5.0), 0.0);
    }

    #[test]
    fn test_tier_order_matches_all() {
        let mut sorted = TerrainTier::ALL;
        sorted.sort();
        assert_eq!(sorted, TerrainTier::ALL);
    }
}
