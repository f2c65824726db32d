//! 3x5 bitmap glyphs for the seed box.

use image::{Rgba, RgbaImage};

use crate::rendering::fill_rect;

pub const GLYPH_WIDTH: u32 = 3;
pub const GLYPH_HEIGHT: u32 = 5;

/// Rows top to bottom, bit 2 = left column
const DIGITS: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111], // 0
    [0b010, 0b110, 0b010, 0b010, 0b111], // 1
    [0b111, 0b001, 0b111, 0b100, 0b111], // 2
    [0b111, 0b001, 0b011, 0b001, 0b111], // 3
    [0b101, 0b101, 0b111, 0b001, 0b001], // 4
    [0b111, 0b100, 0b111, 0b001, 0b111], // 5
    [0b111, 0b100, 0b111, 0b101, 0b111], // 6
    [0b111, 0b001, 0b010, 0b010, 0b010], // 7
    [0b111, 0b101, 0b111, 0b101, 0b111], // 8
    [0b111, 0b101, 0b111, 0b001, 0b111], // 9
];

/// Shown for anything that is not a digit
const UNKNOWN: [u8; 5] = [0b111, 0b001, 0b011, 0b000, 0b010];

fn glyph(c: char) -> &'static [u8; 5] {
    match c.to_digit(10) {
        Some(d) => &DIGITS[d as usize],
        None => &UNKNOWN,
    }
}

/// Draw `text` with its top-left at `(x, y)`; returns the x just past the
/// last glyph
pub fn draw_text(
    image: &mut RgbaImage,
    text: &str,
    x: u32,
    y: u32,
    scale: u32,
    color: Rgba<u8>,
) -> u32 {
    let advance = (GLYPH_WIDTH + 1) * scale;
    let mut cursor = x;
    for c in text.chars() {
        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (0b100 >> col) != 0 {
                    fill_rect(
                        image,
                        cursor + col * scale,
                        y + row as u32 * scale,
                        scale,
                        scale,
                        color,
                    );
                }
            }
        }
        cursor += advance;
    }
    cursor
}
