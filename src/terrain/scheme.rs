//! Ordered height thresholds that turn a normalized height into a tier.

use thiserror::Error;

use super::TerrainTier;

/// Invalid threshold table
#[derive(Debug, Error, PartialEq)]
pub enum SchemeError {
    #[error("threshold {bound} of band {index} is outside (0, 1]")]
    BoundOutOfRange { index: usize, bound: f64 },

    #[error("threshold {bound} of band {index} does not exceed the previous threshold")]
    UnorderedBounds { index: usize, bound: f64 },

    #[error("tier {tier:?} is not above the tier of the band below it")]
    UnorderedTiers { tier: TerrainTier },
}

/// Half-open band `[previous bound, upper_bound)` assigned to one tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierBand {
    pub upper_bound: f64,
    pub tier: TerrainTier,
}

impl TierBand {
    pub const fn new(upper_bound: f64, tier: TerrainTier) -> Self {
        Self { upper_bound, tier }
    }
}

/// Ascending threshold table plus the tier for everything above the last bound
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainScheme {
    bands: Vec<TierBand>,
    top: TerrainTier,
}

impl TerrainScheme {
    /// Build a scheme, checking that bounds and tiers both strictly increase
    pub fn new(bands: Vec<TierBand>, top: TerrainTier) -> Result<Self, SchemeError> {
        let mut previous: Option<&TierBand> = None;
        for (index, band) in bands.iter().enumerate() {
            if !(band.upper_bound > 0.0 && band.upper_bound <= 1.0) {
                return Err(SchemeError::BoundOutOfRange {
                    index,
                    bound: band.upper_bound,
                });
            }
            if let Some(prev) = previous {
                if band.upper_bound <= prev.upper_bound {
                    return Err(SchemeError::UnorderedBounds {
                        index,
                        bound: band.upper_bound,
                    });
                }
                if band.tier <= prev.tier {
                    return Err(SchemeError::UnorderedTiers { tier: band.tier });
                }
            }
            previous = Some(band);
        }
        if let Some(last) = bands.last() {
            if top <= last.tier {
                return Err(SchemeError::UnorderedTiers { tier: top });
            }
        }
        Ok(Self { bands, top })
    }

    /// Ten-tier table: three ocean depths, beach, three grass and two
    /// mountain bands, snow on top
    pub fn classic() -> Self {
        use TerrainTier::*;
        Self {
            bands: vec![
                TierBand::new(0.10, OceanDeep),
                TierBand::new(0.20, OceanMid),
                TierBand::new(0.30, OceanShallow),
                TierBand::new(0.35, Beach),
                TierBand::new(0.55, GrassLow),
                TierBand::new(0.60, GrassMid),
                TierBand::new(0.65, GrassHigh),
                TierBand::new(0.83, MountainLow),
                TierBand::new(0.90, MountainHigh),
            ],
            top: Snow,
        }
    }

    /// Seven-tier table used with larger tiles
    pub fn compact() -> Self {
        use TerrainTier::*;
        Self {
            bands: vec![
                TierBand::new(0.25, OceanDeep),
                TierBand::new(0.40, OceanShallow),
                TierBand::new(0.45, Beach),
                TierBand::new(0.60, GrassLow),
                TierBand::new(0.70, GrassHigh),
                TierBand::new(0.85, MountainLow),
            ],
            top: Snow,
        }
    }

    /// First band whose bound is strictly above `normalized`, else the top tier
    pub fn classify(&self, normalized: f64) -> TerrainTier {
        self.bands
            .iter()
            .find(|band| normalized < band.upper_bound)
            .map_or(self.top, |band| band.tier)
    }

    /// Tiers this scheme can produce, lowest first
    pub fn tiers(&self) -> impl Iterator<Item = TerrainTier> + '_ {
        self.bands
            .iter()
            .map(|band| band.tier)
            .chain(std::iter::once(self.top))
    }

    pub fn tier_count(&self) -> usize {
        self.bands.len() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_schemes_pass_validation() {
        for scheme in [TerrainScheme::classic(), TerrainScheme::compact()] {
            let bands = scheme.bands.clone();
            assert_eq!(TerrainScheme::new(bands, scheme.top), Ok(scheme));
        }
        assert_eq!(TerrainScheme::classic().tier_count(), 10);
        assert_eq!(TerrainScheme::compact().tier_count(), 7);
    }

    #[test]
    fn test_classic_bands() {
        let scheme = TerrainScheme::classic();
        assert_eq!(scheme.classify(0.0), TerrainTier::OceanDeep);
        assert_eq!(scheme.classify(0.15), TerrainTier::OceanMid);
        assert_eq!(scheme.classify(0.25), TerrainTier::OceanShallow);
        assert_eq!(scheme.classify(0.5), TerrainTier::GrassLow);
        assert_eq!(scheme.classify(0.7), TerrainTier::MountainLow);
        assert_eq!(scheme.classify(0.95), TerrainTier::Snow);
        assert_eq!(scheme.classify(1.0), TerrainTier::Snow);
    }

    #[test]
    fn test_boundary_belongs_to_upper_band() {
        let scheme = TerrainScheme::classic();
        assert_eq!(scheme.classify(0.35), TerrainTier::GrassLow);
        assert_eq!(scheme.classify(0.3), TerrainTier::Beach);
        assert_eq!(scheme.classify(0.1), TerrainTier::OceanMid);
        assert_eq!(scheme.classify(0.9), TerrainTier::Snow);
    }

    #[test]
    fn test_classification_is_total_and_monotonic() {
        for scheme in [TerrainScheme::classic(), TerrainScheme::compact()] {
            let tiers: Vec<_> = scheme.tiers().collect();
            let mut previous = scheme.classify(0.0);
            for step in 0..=10_000 {
                let tier = scheme.classify(step as f64 / 10_000.0);
                assert!(tiers.contains(&tier));
                assert!(tier >= previous, "tier dropped at step {}", step);
                previous = tier;
            }
            assert_eq!(scheme.classify(1.0), *tiers.last().unwrap());
        }
    }

    #[test]
    fn test_rejects_unordered_bounds() {
        let bands = vec![
            TierBand::new(0.5, TerrainTier::OceanDeep),
            TierBand::new(0.4, TerrainTier::Beach),
        ];
        assert_eq!(
            TerrainScheme::new(bands, TerrainTier::Snow),
            Err(SchemeError::UnorderedBounds {
                index: 1,
                bound: 0.4
            })
        );
    }

    #[test]
    fn test_rejects_unordered_tiers() {
        let bands = vec![
            TierBand::new(0.2, TerrainTier::Beach),
            TierBand::new(0.4, TerrainTier::OceanDeep),
        ];
        assert!(matches!(
            TerrainScheme::new(bands, TerrainTier::Snow),
            Err(SchemeError::UnorderedTiers {
                tier: TerrainTier::OceanDeep
            })
        ));

        let bands = vec![TierBand::new(0.2, TerrainTier::Snow)];
        assert!(TerrainScheme::new(bands, TerrainTier::Beach).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_bound() {
        let bands = vec![TierBand::new(1.5, TerrainTier::OceanDeep)];
        assert!(matches!(
            TerrainScheme::new(bands, TerrainTier::Snow),
            Err(SchemeError::BoundOutOfRange { index: 0, .. })
        ));
    }

    #[test]
    fn test_single_tier_scheme() {
        let scheme = TerrainScheme::new(Vec::new(), TerrainTier::GrassMid).unwrap();
        assert_eq!(scheme.classify(0.0), TerrainTier::GrassMid);
        assert_eq!(scheme.classify(1.0), TerrainTier::GrassMid);
    }
}
