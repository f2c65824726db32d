//! Octave layering parameters for the heightmap generator.

/// Fractal noise layering (fBm) parameters
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseParams {
    /// Octave count of the first layer; used as its spatial frequency
    pub octave_base: u32,

    /// Frequency multiplier between successive layers
    pub octave_factor: u32,

    /// Number of summed layers
    pub octave_count: u32,

    /// Amplitude multiplier between successive layers
    pub persistence: f64,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            octave_base: 3,
            octave_factor: 2,
            octave_count: 4,
            persistence: 0.5,
        }
    }
}

impl NoiseParams {
    /// (frequency, amplitude) for every layer, lowest frequency first
    pub fn layers(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        (0..self.octave_count).map(move |i| {
            let frequency = self.octave_base as f64 * (self.octave_factor as f64).powi(i as i32);
            let amplitude = self.persistence.powi(i as i32);
            (frequency, amplitude)
        })
    }
}
