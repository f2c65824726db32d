//! Seed entry box: focus, text buffer and key handling.
//!
//! The entry is pure state; the window layer translates platform key events
//! into [`Keystroke`]s and paints the box with [`SeedEntry::paint_overlay`].

mod glyphs;

use std::num::ParseIntError;

use image::{Rgba, RgbaImage};
use thiserror::Error;

use crate::params::InputBoxConfig;
use crate::rendering::fill_rect;

/// Longest accepted seed text
pub const MAX_SEED_CHARS: usize = 10;

/// Rejected seed text
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeedError {
    #[error("seed entry is empty")]
    Empty,

    #[error("'{input}' is not a valid seed: {source}")]
    NotNumeric {
        input: String,
        #[source]
        source: ParseIntError,
    },
}

/// Parse seed text as a non-negative integer, leading zeros allowed
pub fn parse_seed(text: &str) -> Result<u64, SeedError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SeedError::Empty);
    }
    trimmed.parse::<u64>().map_err(|source| SeedError::NotNumeric {
        input: trimmed.to_string(),
        source,
    })
}

/// Platform-independent key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    Escape,
    Space,
    Enter,
    Backspace,
    Char(char),
}

/// What the session should do in response to input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryAction {
    None,
    Quit,
    RandomSeed,
    Submit(u64),
    Rejected(SeedError),
}

/// Seed text box state
#[derive(Debug)]
pub struct SeedEntry {
    focused: bool,
    buffer: String,
    overlay_dirty: bool,
}

impl Default for SeedEntry {
    fn default() -> Self {
        Self::new()
    }
}

impl SeedEntry {
    pub fn new() -> Self {
        Self {
            focused: false,
            buffer: String::new(),
            overlay_dirty: true,
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Focus on a click inside the box, unfocus on a click anywhere else
    pub fn click(&mut self, input_box: &InputBoxConfig, x: f64, y: f64) {
        self.set_focus(input_box.contains(x, y));
    }

    pub fn handle_key(&mut self, key: Keystroke) -> EntryAction {
        if !self.focused {
            return match key {
                Keystroke::Escape => EntryAction::Quit,
                Keystroke::Space => EntryAction::RandomSeed,
                _ => EntryAction::None,
            };
        }

        match key {
            Keystroke::Escape => {
                self.buffer.clear();
                self.set_focus(false);
                EntryAction::None
            }
            Keystroke::Backspace => {
                if self.buffer.pop().is_some() {
                    self.overlay_dirty = true;
                }
                EntryAction::None
            }
            Keystroke::Char(c) => {
                if !c.is_control()
                    && !c.is_whitespace()
                    && self.buffer.chars().count() < MAX_SEED_CHARS
                {
                    self.buffer.push(c);
                    self.overlay_dirty = true;
                }
                EntryAction::None
            }
            Keystroke::Enter => match parse_seed(&self.buffer) {
                Ok(seed) => {
                    self.buffer.clear();
                    self.set_focus(false);
                    EntryAction::Submit(seed)
                }
                // Keep the text so it can be corrected
                Err(err) => EntryAction::Rejected(err),
            },
            Keystroke::Space => EntryAction::None,
        }
    }

    /// Whether the overlay changed since the last call; clears the flag
    pub fn take_overlay_dirty(&mut self) -> bool {
        std::mem::take(&mut self.overlay_dirty)
    }

    /// Force an overlay repaint (e.g. the displayed seed changed)
    pub fn mark_overlay_dirty(&mut self) {
        self.overlay_dirty = true;
    }

    fn set_focus(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            self.overlay_dirty = true;
        }
    }

    /// Paint the box into a transparent window-sized overlay
    ///
    /// While unfocused and empty the box shows `current_seed` dimmed.
    pub fn paint_overlay(
        &self,
        overlay: &mut RgbaImage,
        input_box: &InputBoxConfig,
        current_seed: u64,
    ) {
        const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
        const BACKGROUND: Rgba<u8> = Rgba([16, 16, 24, 200]);
        const BORDER_FOCUSED: Rgba<u8> = Rgba([255, 255, 255, 255]);
        const BORDER_IDLE: Rgba<u8> = Rgba([120, 120, 120, 255]);
        const TEXT: Rgba<u8> = Rgba([255, 255, 255, 255]);
        const TEXT_DIM: Rgba<u8> = Rgba([150, 150, 150, 255]);
        const BORDER_PX: u32 = 2;

        fill_rect(overlay, 0, 0, u32::MAX, u32::MAX, TRANSPARENT);

        let InputBoxConfig {
            x,
            y,
            width,
            height,
            glyph_scale,
        } = *input_box;
        let border = if self.focused {
            BORDER_FOCUSED
        } else {
            BORDER_IDLE
        };
        fill_rect(overlay, x, y, width, height, border);
        fill_rect(
            overlay,
            x + BORDER_PX,
            y + BORDER_PX,
            width.saturating_sub(2 * BORDER_PX),
            height.saturating_sub(2 * BORDER_PX),
            BACKGROUND,
        );

        let shown_seed;
        let (text, color) = if !self.focused && self.buffer.is_empty() {
            shown_seed = current_seed.to_string();
            (shown_seed.as_str(), TEXT_DIM)
        } else {
            (self.buffer.as_str(), TEXT)
        };

        let text_x = x + BORDER_PX + glyph_scale * 2;
        let text_y = y + height.saturating_sub(glyphs::GLYPH_HEIGHT * glyph_scale) / 2;
        let end_x = glyphs::draw_text(overlay, text, text_x, text_y, glyph_scale, color);

        if self.focused {
            fill_rect(
                overlay,
                end_x,
                text_y,
                glyph_scale.max(1),
                glyphs::GLYPH_HEIGHT * glyph_scale,
                TEXT,
            );
        }
    }
}
