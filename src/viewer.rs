//! Viewer session: current world, seed entry and drawing, without a window.

use std::ops::RangeInclusive;
use std::time::Instant;

use image::RgbaImage;
use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::Rng;

use crate::heightmap::{self, FieldError, NoiseField};
use crate::params::WorldPreset;
use crate::rendering::{Presenter, TerrainRenderer};
use crate::ui::{EntryAction, Keystroke, SeedEntry};

/// Seeds picked by the random-world key
pub const RANDOM_SEED_RANGE: RangeInclusive<u64> = 1..=10_000;

/// Whether the event loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerCommand {
    Continue,
    Exit,
}

/// One interactive terrain viewing session
pub struct Viewer {
    preset: WorldPreset,
    seed: u64,
    renderer: TerrainRenderer,
    entry: SeedEntry,
    overlay: RgbaImage,
    rng: StdRng,
}

impl Viewer {
    /// Generate the first world from `initial_seed`, or a random one
    pub fn new(
        preset: WorldPreset,
        initial_seed: Option<u64>,
        mut rng: StdRng,
    ) -> Result<Self, FieldError> {
        let seed = initial_seed.unwrap_or_else(|| rng.gen_range(RANDOM_SEED_RANGE));
        info!("Using seed: {}", seed);

        let field = generate_world(&preset, seed)?;
        let renderer = TerrainRenderer::new(field, &preset);
        let overlay = RgbaImage::new(preset.window.window_width, preset.window.window_height);

        Ok(Self {
            preset,
            seed,
            renderer,
            entry: SeedEntry::new(),
            overlay,
            rng,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn preset(&self) -> &WorldPreset {
        &self.preset
    }

    pub fn field(&self) -> &NoiseField {
        self.renderer.field()
    }

    pub fn renderer(&self) -> &TerrainRenderer {
        &self.renderer
    }

    pub fn entry(&self) -> &SeedEntry {
        &self.entry
    }

    pub fn handle_key(&mut self, key: Keystroke) -> ViewerCommand {
        match self.entry.handle_key(key) {
            EntryAction::None => {}
            EntryAction::Quit => return ViewerCommand::Exit,
            EntryAction::RandomSeed => {
                let seed = self.rng.gen_range(RANDOM_SEED_RANGE);
                self.reseed_or_log(seed);
            }
            EntryAction::Submit(seed) => self.reseed_or_log(seed),
            EntryAction::Rejected(err) => {
                warn!("Ignoring seed entry: {}", err);
            }
        }
        ViewerCommand::Continue
    }

    /// Click at a point in window pixels
    pub fn handle_click(&mut self, x: f64, y: f64) {
        self.entry.click(&self.preset.input_box, x, y);
    }

    /// Replace the world with the one generated from `seed`
    pub fn reseed(&mut self, seed: u64) -> Result<(), FieldError> {
        let field = generate_world(&self.preset, seed)?;
        self.renderer.replace_field(field);
        self.seed = seed;
        self.entry.mark_overlay_dirty();
        info!("New world generated (seed {})", seed);
        Ok(())
    }

    fn reseed_or_log(&mut self, seed: u64) {
        if let Err(err) = self.reseed(seed) {
            error!("Failed to generate world for seed {}: {}", seed, err);
        }
    }

    /// Upload the overlay if it changed, then draw the terrain frame
    pub fn draw<P: Presenter>(&mut self, presenter: &mut P) -> Result<(), P::Error> {
        if self.entry.take_overlay_dirty() {
            self.entry
                .paint_overlay(&mut self.overlay, &self.preset.input_box, self.seed);
            presenter.upload_overlay(&self.overlay);
        }
        self.renderer.draw(presenter)?;
        Ok(())
    }
}

fn generate_world(preset: &WorldPreset, seed: u64) -> Result<NoiseField, FieldError> {
    let start = Instant::now();
    let window = &preset.window;
    let field = heightmap::generate(
        window.grid_width(),
        window.grid_height(),
        seed,
        &preset.noise,
    )?;
    info!(
        "Generated {}x{} field in {:.1}ms",
        field.columns(),
        field.rows(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(field)
}
