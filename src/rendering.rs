//! Terrain rendering: tile painting into a cached image and presentation.

mod cache;
mod gpu;
mod tiles;

use image::RgbaImage;

pub use cache::{fill_rect, CacheState, RenderCache};
pub use gpu::{GpuError, GpuPresenter};
pub use tiles::TerrainRenderer;

/// Display that composites a terrain layer and a UI overlay each frame
///
/// Uploads are only issued when a layer changed; `present` is called once per
/// frame and shows whatever was last uploaded.
pub trait Presenter {
    type Error;

    /// Replace the terrain layer
    fn upload_world(&mut self, image: &RgbaImage);

    /// Replace the overlay layer (alpha-blended over the terrain)
    fn upload_overlay(&mut self, image: &RgbaImage);

    /// Composite both layers and show the frame
    fn present(&mut self) -> Result<(), Self::Error>;
}

/// Presenter that records calls instead of touching a display
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingPresenter {
    pub world_uploads: usize,
    pub overlay_uploads: usize,
    pub presents: usize,
}

#[cfg(test)]
impl Presenter for RecordingPresenter {
    type Error = std::convert::Infallible;

    fn upload_world(&mut self, _image: &RgbaImage) {
        self.world_uploads += 1;
    }

    fn upload_overlay(&mut self, _image: &RgbaImage) {
        self.overlay_uploads += 1;
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        self.presents += 1;
        Ok(())
    }
}
