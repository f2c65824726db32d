//! Heightmap generation from layered Perlin noise.
//!
//! Each layer samples the same seeded noise source at a higher frequency and
//! lower amplitude (fractal Brownian motion). Coordinates are normalized to
//! the unit square before sampling so a layer's frequency is the number of
//! noise cells it spans across the whole map.

use noise::{NoiseFn, Perlin};
use thiserror::Error;

use crate::params::NoiseParams;

/// Failure to build a noise field
#[derive(Debug, Error, PartialEq)]
pub enum FieldError {
    #[error("tile grid {width}x{height} has no cells")]
    EmptyGrid { width: usize, height: usize },

    #[error("expected {expected} samples, got {actual}")]
    SampleCountMismatch { expected: usize, actual: usize },

    #[error("sample {index} is not a finite number")]
    NonFiniteSample { index: usize },
}

/// Immutable 2D grid of summed noise samples with its observed range
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseField {
    columns: usize,
    rows: usize,
    samples: Vec<f64>,
    min_value: f64,
    max_value: f64,
}

impl NoiseField {
    /// Wrap row-major samples, scanning them once for min/max
    pub fn from_samples(
        columns: usize,
        rows: usize,
        samples: Vec<f64>,
    ) -> Result<Self, FieldError> {
        if columns == 0 || rows == 0 {
            return Err(FieldError::EmptyGrid {
                width: columns,
                height: rows,
            });
        }
        let expected = columns * rows;
        if samples.len() != expected {
            return Err(FieldError::SampleCountMismatch {
                expected,
                actual: samples.len(),
            });
        }
        if let Some(index) = samples.iter().position(|s| !s.is_finite()) {
            return Err(FieldError::NonFiniteSample { index });
        }

        let (min_value, max_value) = samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &s| {
                (lo.min(s), hi.max(s))
            });

        Ok(Self {
            columns,
            rows,
            samples,
            min_value,
            max_value,
        })
    }

    /// Sample at column `x`, row `y`; `None` outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        if x >= self.columns || y >= self.rows {
            return None;
        }
        self.samples.get(y * self.columns + x).copied()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// Row-major sample slice
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }
}

/// One noise layer: a source sampled at `frequency`, scaled by `amplitude`
struct Octave<N> {
    source: N,
    frequency: f64,
    amplitude: f64,
}

/// Layered noise sampler
pub struct FieldGenerator<N = Perlin> {
    octaves: Vec<Octave<N>>,
}

impl FieldGenerator<Perlin> {
    /// Create one identically-seeded Perlin source per layer
    pub fn new(params: &NoiseParams, seed: u64) -> Self {
        let noise_seed = fold_seed(seed);
        Self::from_layers(
            params
                .layers()
                .map(|(frequency, amplitude)| (Perlin::new(noise_seed), frequency, amplitude)),
        )
    }
}

impl<N: NoiseFn<f64, 2>> FieldGenerator<N> {
    /// Build from explicit `(source, frequency, amplitude)` layers
    pub fn from_layers(layers: impl IntoIterator<Item = (N, f64, f64)>) -> Self {
        let octaves = layers
            .into_iter()
            .map(|(source, frequency, amplitude)| Octave {
                source,
                frequency,
                amplitude,
            })
            .collect();
        Self { octaves }
    }

    /// Sum of all layers at unit-square coordinates `(u, v)`
    pub fn sample(&self, u: f64, v: f64) -> f64 {
        self.octaves
            .iter()
            .map(|octave| {
                octave.amplitude * octave.source.get([u * octave.frequency, v * octave.frequency])
            })
            .sum()
    }

    /// Fill a `(width + 1) x (height + 1)` field for a `width x height` tile grid
    pub fn generate(&self, width: usize, height: usize) -> Result<NoiseField, FieldError> {
        if width == 0 || height == 0 {
            return Err(FieldError::EmptyGrid { width, height });
        }

        let (columns, rows) = (width + 1, height + 1);
        let mut samples = Vec::with_capacity(columns * rows);
        for y in 0..rows {
            let v = y as f64 / rows as f64;
            for x in 0..columns {
                let u = x as f64 / columns as f64;
                samples.push(self.sample(u, v));
            }
        }

        NoiseField::from_samples(columns, rows, samples)
    }
}

/// Generate the noise field for a tile grid and seed
pub fn generate(
    width: usize,
    height: usize,
    seed: u64,
    params: &NoiseParams,
) -> Result<NoiseField, FieldError> {
    FieldGenerator::new(params, seed).generate(width, height)
}

/// Fold a 64-bit user seed into the 32-bit seed the noise source takes
pub fn fold_seed(seed: u64) -> u32 {
    (seed ^ (seed >> 32)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Noise source returning the same value everywhere
    struct Flat(f64);

    impl NoiseFn<f64, 2> for Flat {
        fn get(&self, _point: [f64; 2]) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_field_dimensions() {
        let field = generate(10, 7, 42, &NoiseParams::default()).unwrap();
        assert_eq!(field.columns(), 11);
        assert_eq!(field.rows(), 8);
        assert_eq!(field.samples().len(), 88);
        assert!(field.get(10, 7).is_some());
        assert!(field.get(11, 0).is_none());
        assert!(field.get(0, 8).is_none());
    }

    #[test]
    fn test_min_max_bound_every_sample() {
        let field = generate(32, 24, 1234, &NoiseParams::default()).unwrap();
        for &sample in field.samples() {
            assert!(field.min_value() <= sample && sample <= field.max_value());
        }
        assert!(field.samples().contains(&field.min_value()));
        assert!(field.samples().contains(&field.max_value()));
    }

    #[test]
    fn test_same_seed_is_deterministic() {
        let params = NoiseParams::default();
        let a = generate(10, 10, 42, &params).unwrap();
        let b = generate(10, 10, 42, &params).unwrap();
        assert_eq!(a.columns(), 11);
        assert_eq!(a.rows(), 11);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let params = NoiseParams::default();
        let a = generate(16, 16, 1, &params).unwrap();
        let b = generate(16, 16, 2, &params).unwrap();
        assert_ne!(a.samples(), b.samples());
    }

    #[test]
    fn test_field_has_relief() {
        let field = generate(64, 64, 7, &NoiseParams::default()).unwrap();
        assert!(field.max_value() > field.min_value());
    }

    #[test]
    fn test_zero_dimension_is_error() {
        let params = NoiseParams::default();
        assert_eq!(
            generate(0, 10, 1, &params),
            Err(FieldError::EmptyGrid {
                width: 0,
                height: 10
            })
        );
        assert!(generate(10, 0, 1, &params).is_err());
    }

    #[test]
    fn test_layers_sum_with_amplitudes() {
        let generator = FieldGenerator::from_layers([
            (Flat(1.0), 3.0, 1.0),
            (Flat(1.0), 6.0, 0.5),
            (Flat(-2.0), 12.0, 0.25),
        ]);
        assert_eq!(generator.sample(0.3, 0.7), 1.0);
    }

    #[test]
    fn test_flat_source_gives_flat_field() {
        let generator = FieldGenerator::from_layers([(Flat(5.0), 3.0, 1.0)]);
        let field = generator.generate(4, 4).unwrap();
        assert_eq!(field.min_value(), 5.0);
        assert_eq!(field.max_value(), 5.0);
    }

    #[test]
    fn test_from_samples_validation() {
        assert_eq!(
            NoiseField::from_samples(2, 2, vec![0.0; 3]),
            Err(FieldError::SampleCountMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            NoiseField::from_samples(2, 1, vec![0.0, f64::NAN]),
            Err(FieldError::NonFiniteSample { index: 1 })
        );
        assert!(matches!(
            NoiseField::from_samples(0, 3, Vec::new()),
            Err(FieldError::EmptyGrid { .. })
        ));
    }

    #[test]
    fn test_fold_seed() {
        assert_eq!(fold_seed(42), 42);
        assert_eq!(fold_seed(1 << 32), 1);
        assert_eq!(fold_seed(9_999_999_999), (9_999_999_999u64 ^ 2) as u32);
    }
}
