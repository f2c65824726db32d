//! Offscreen terrain image that is only repainted after invalidation.

use image::{Rgba, RgbaImage};

const CLEAR_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Whether the cached image still matches the current field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    Clean,
    Dirty,
}

/// Window-sized pixel buffer plus its staleness flag
pub struct RenderCache {
    image: RgbaImage,
    state: CacheState,
}

impl RenderCache {
    /// Create a black buffer that still needs its first repaint
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, CLEAR_COLOR),
            state: CacheState::Dirty,
        }
    }

    pub fn state(&self) -> CacheState {
        self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.state == CacheState::Dirty
    }

    /// Mark the image stale; the next `refresh` repaints it
    pub fn invalidate(&mut self) {
        self.state = CacheState::Dirty;
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Clear and repaint if dirty; returns whether a repaint happened
    pub fn refresh(&mut self, paint: impl FnOnce(&mut RgbaImage)) -> bool {
        if self.state == CacheState::Clean {
            return false;
        }
        fill_rect(&mut self.image, 0, 0, u32::MAX, u32::MAX, CLEAR_COLOR);
        paint(&mut self.image);
        self.state = CacheState::Clean;
        true
    }
}

/// Fill a rectangle, clipped to the image bounds
pub fn fill_rect(
    image: &mut RgbaImage,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    color: Rgba<u8>,
) {
    let (image_width, image_height) = image.dimensions();
    let x_end = x.saturating_add(width).min(image_width);
    let y_end = y.saturating_add(height).min(image_height);
    for py in y..y_end {
        for px in x..x_end {
            image.put_pixel(px, py, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cache_is_dirty() {
        let cache = RenderCache::new(8, 8);
        assert_eq!(cache.state(), CacheState::Dirty);
        assert_eq!(cache.image().dimensions(), (8, 8));
    }

    #[test]
    fn test_refresh_only_when_dirty() {
        let mut cache = RenderCache::new(4, 4);
        let mut paints = 0;

        assert!(cache.refresh(|_| paints += 1));
        assert!(!cache.is_dirty());
        assert!(!cache.refresh(|_| paints += 1));
        assert_eq!(paints, 1);

        cache.invalidate();
        assert!(cache.refresh(|_| paints += 1));
        assert_eq!(paints, 2);
    }

    #[test]
    fn test_refresh_clears_previous_contents() {
        let mut cache = RenderCache::new(4, 4);
        cache.refresh(|image| fill_rect(image, 0, 0, 4, 4, Rgba([9, 9, 9, 255])));
        cache.invalidate();
        cache.refresh(|image| fill_rect(image, 0, 0, 1, 1, Rgba([1, 2, 3, 255])));

        assert_eq!(*cache.image().get_pixel(0, 0), Rgba([1, 2, 3, 255]));
        assert_eq!(*cache.image().get_pixel(3, 3), CLEAR_COLOR);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut image = RgbaImage::new(5, 5);
        let red = Rgba([255, 0, 0, 255]);
        fill_rect(&mut image, 3, 3, 4, 4, red);
        assert_eq!(*image.get_pixel(4, 4), red);
        assert_eq!(*image.get_pixel(3, 3), red);
        assert_eq!(*image.get_pixel(2, 2), Rgba([0, 0, 0, 0]));

        // Entirely outside is a no-op
        fill_rect(&mut image, 10, 10, 2, 2, red);
    }
}
