//! Field-to-tile painting with a cached composite image.

use image::{Rgba, RgbaImage};
use log::debug;
use std::time::Instant;

use super::cache::{fill_rect, CacheState, RenderCache};
use super::Presenter;
use crate::heightmap::NoiseField;
use crate::params::WorldPreset;
use crate::terrain::{normalize, TerrainPalette, TerrainScheme, TerrainTier};

/// Paints a noise field as colored terrain tiles
///
/// Classification runs once per field: `draw` repaints the cache only after
/// `replace_field`, and otherwise re-presents the cached image.
pub struct TerrainRenderer {
    field: NoiseField,
    scheme: TerrainScheme,
    palette: TerrainPalette,
    tile_size: u32,
    grid_width: usize,
    grid_height: usize,
    cache: RenderCache,
}

impl TerrainRenderer {
    /// Create a renderer with a window-sized cache awaiting its first paint
    pub fn new(field: NoiseField, preset: &WorldPreset) -> Self {
        let window = &preset.window;
        Self {
            field,
            scheme: preset.scheme.clone(),
            palette: preset.palette.clone(),
            tile_size: window.tile_size_px,
            grid_width: window.grid_width(),
            grid_height: window.grid_height(),
            cache: RenderCache::new(window.window_width, window.window_height),
        }
    }

    /// Swap in a new world; the next draw repaints every tile
    pub fn replace_field(&mut self, field: NoiseField) {
        self.field = field;
        self.cache.invalidate();
    }

    pub fn field(&self) -> &NoiseField {
        &self.field
    }

    pub fn cache_state(&self) -> CacheState {
        self.cache.state()
    }

    pub fn is_dirty(&self) -> bool {
        self.cache.is_dirty()
    }

    /// Cached terrain image (stale while dirty)
    pub fn image(&self) -> &RgbaImage {
        self.cache.image()
    }

    /// Tier of tile `(x, y)`, or `None` if the field does not cover it
    pub fn tier_at(&self, x: usize, y: usize) -> Option<TerrainTier> {
        classify_cell(&self.field, &self.scheme, x, y)
    }

    /// Repaint and upload the cache if stale, then present a frame
    ///
    /// Returns whether the cache was repainted.
    pub fn draw<P: Presenter>(&mut self, presenter: &mut P) -> Result<bool, P::Error> {
        let Self {
            field,
            scheme,
            palette,
            tile_size,
            grid_width,
            grid_height,
            cache,
        } = self;

        let start = Instant::now();
        let repainted = cache.refresh(|image| {
            for y in 0..*grid_height {
                for x in 0..*grid_width {
                    paint_tile(image, field, scheme, palette, *tile_size, x, y);
                }
            }
        });

        if repainted {
            debug!(
                "Repainted {}x{} tiles in {:.1}ms",
                grid_width,
                grid_height,
                start.elapsed().as_secs_f64() * 1000.0
            );
            presenter.upload_world(cache.image());
        }

        presenter.present()?;
        Ok(repainted)
    }
}

fn classify_cell(
    field: &NoiseField,
    scheme: &TerrainScheme,
    x: usize,
    y: usize,
) -> Option<TerrainTier> {
    let sample = field.get(x, y)?;
    let normalized = normalize(sample, field.min_value(), field.max_value());
    Some(scheme.classify(normalized))
}

/// Fill one tile's footprint with its tier color; tiles the field does not
/// cover are skipped
fn paint_tile(
    image: &mut RgbaImage,
    field: &NoiseField,
    scheme: &TerrainScheme,
    palette: &TerrainPalette,
    tile_size: u32,
    x: usize,
    y: usize,
) {
    let Some(tier) = classify_cell(field, scheme, x, y) else {
        return;
    };
    let [r, g, b] = palette.color(tier);
    let (Ok(px), Ok(py)) = (
        u32::try_from(x * tile_size as usize),
        u32::try_from(y * tile_size as usize),
    ) else {
        return;
    };
    fill_rect(image, px, py, tile_size, tile_size, Rgba([r, g, b, 255]));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::WindowConfig;
    use crate::rendering::RecordingPresenter;

    fn small_preset() -> WorldPreset {
        WorldPreset {
            window: WindowConfig {
                window_width: 40,
                window_height: 30,
                tile_size_px: 4,
                target_fps: 30,
            },
            ..WorldPreset::coarse()
        }
    }

    fn small_field(seed: u64) -> NoiseField {
        let preset = small_preset();
        crate::heightmap::generate(
            preset.window.grid_width(),
            preset.window.grid_height(),
            seed,
            &preset.noise,
        )
        .unwrap()
    }

    #[test]
    fn test_cache_lifecycle() {
        let mut renderer = TerrainRenderer::new(small_field(1), &small_preset());
        let mut presenter = RecordingPresenter::default();

        assert_eq!(renderer.cache_state(), CacheState::Dirty);
        assert!(renderer.draw(&mut presenter).unwrap());
        assert_eq!(renderer.cache_state(), CacheState::Clean);

        for _ in 0..5 {
            assert!(!renderer.draw(&mut presenter).unwrap());
            assert!(!renderer.is_dirty());
        }
        assert_eq!(presenter.world_uploads, 1);
        assert_eq!(presenter.presents, 6);

        renderer.replace_field(small_field(2));
        assert!(renderer.is_dirty());
        assert!(renderer.draw(&mut presenter).unwrap());
        assert_eq!(presenter.world_uploads, 2);
        assert_eq!(presenter.overlay_uploads, 0);
    }

    #[test]
    fn test_tiles_take_palette_colors() {
        let preset = small_preset();
        let mut renderer = TerrainRenderer::new(small_field(3), &preset);
        renderer.draw(&mut RecordingPresenter::default()).unwrap();

        for (ty, tx) in [(0, 0), (3, 5), (6, 9)] {
            let tier = renderer.tier_at(tx, ty).unwrap();
            let [r, g, b] = preset.palette.color(tier);
            let tile = preset.window.tile_size_px;
            for (dx, dy) in [(0, 0), (tile - 1, tile - 1)] {
                let pixel = renderer
                    .image()
                    .get_pixel(tx as u32 * tile + dx, ty as u32 * tile + dy);
                assert_eq!(*pixel, Rgba([r, g, b, 255]));
            }
        }
    }

    #[test]
    fn test_extreme_samples_hit_end_tiers() {
        let preset = small_preset();
        let (columns, rows) = (preset.window.grid_width() + 1, preset.window.grid_height() + 1);
        let mut samples = vec![0.5; columns * rows];
        samples[0] = -1.0;
        samples[1] = 2.0;
        let field = NoiseField::from_samples(columns, rows, samples).unwrap();
        let renderer = TerrainRenderer::new(field, &preset);

        assert_eq!(renderer.tier_at(0, 0), Some(TerrainTier::OceanDeep));
        assert_eq!(renderer.tier_at(1, 0), Some(TerrainTier::Snow));
    }

    #[test]
    fn test_flat_field_renders_lowest_tier() {
        let preset = small_preset();
        let (columns, rows) = (preset.window.grid_width() + 1, preset.window.grid_height() + 1);
        let field = NoiseField::from_samples(columns, rows, vec![5.0; columns * rows]).unwrap();
        let mut renderer = TerrainRenderer::new(field, &preset);
        renderer.draw(&mut RecordingPresenter::default()).unwrap();

        let [r, g, b] = preset.palette.color(TerrainTier::OceanDeep);
        for pixel in renderer.image().pixels() {
            assert_eq!(*pixel, Rgba([r, g, b, 255]));
        }
    }

    #[test]
    fn test_field_smaller_than_grid_skips_missing_tiles() {
        let preset = small_preset();
        let field = NoiseField::from_samples(2, 2, vec![0.0, 1.0, 0.0, 1.0]).unwrap();
        let mut renderer = TerrainRenderer::new(field, &preset);
        renderer.draw(&mut RecordingPresenter::default()).unwrap();

        assert!(renderer.tier_at(1, 1).is_some());
        assert!(renderer.tier_at(2, 0).is_none());
        assert_eq!(*renderer.image().get_pixel(20, 20), Rgba([0, 0, 0, 255]));
    }
}
