//! Window, tile grid and frame-rate configuration.

use thiserror::Error;

/// Rejected configuration values
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("window dimensions must be non-zero, got {width}x{height}")]
    EmptyWindow { width: u32, height: u32 },

    #[error("tile size must be at least 1 pixel")]
    ZeroTileSize,

    #[error("target frame rate must be at least 1 fps")]
    ZeroFrameRate,
}

/// Window and tile grid configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Edge length of one terrain tile (pixels)
    pub tile_size_px: u32,

    /// Frame-rate throttle (frames per second)
    pub target_fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            window_width: 1000,
            window_height: 1000,
            tile_size_px: 4,
            target_fps: 30,
        }
    }
}

impl WindowConfig {
    /// Tiles per row; the last column may hang past the window edge
    pub fn grid_width(&self) -> usize {
        self.window_width.div_ceil(self.tile_size_px.max(1)) as usize
    }

    /// Tiles per column
    pub fn grid_height(&self) -> usize {
        self.window_height.div_ceil(self.tile_size_px.max(1)) as usize
    }

    /// Validate configuration (non-zero window, tiles and frame rate)
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::EmptyWindow {
                width: self.window_width,
                height: self.window_height,
            });
        }
        if self.tile_size_px == 0 {
            return Err(ConfigError::ZeroTileSize);
        }
        if self.target_fps == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        Ok(())
    }
}

/// Seed input box placement, in window pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBoxConfig {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,

    /// Pixel size of one glyph cell (glyphs are 3x5 cells)
    pub glyph_scale: u32,
}

impl Default for InputBoxConfig {
    fn default() -> Self {
        Self {
            x: 10,
            y: 10,
            width: 180,
            height: 36,
            glyph_scale: 4,
        }
    }
}

impl InputBoxConfig {
    /// Whether a window-space point lies inside the box
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x as f64
            && y >= self.y as f64
            && x < (self.x + self.width) as f64
            && y < (self.y + self.height) as f64
    }
}
