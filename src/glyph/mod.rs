//! Glyph storage and lookup.
//!
//! ASCII glyphs come from a preset immutable table. Graphic glyphs live in a
//! separate namespace: uppercase slots hold the preset block graphics,
//! lowercase slots are programmable by game code.

mod font_data;

use std::collections::HashMap;

use thiserror::Error;

use crate::types::CELL_HEIGHT;

/// An 8x8 monochrome bitmap, one byte per row, MSB leftmost.
pub type GlyphBitmap = [u8; CELL_HEIGHT as usize];

/// Rejected glyph registrations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GlyphError {
    #[error("graphic glyphs can only be stored against a lowercase letter slot (got {0:?})")]
    InvalidSlot(char),
    #[error("glyph pattern must be eight rows of eight '0' or '1' characters")]
    InvalidPattern,
}

/// Maps characters to glyph bitmaps.
#[derive(Debug, Clone)]
pub struct GlyphStore {
    graphics: HashMap<char, GlyphBitmap>,
}

const FALLBACK_CHAR: char = '?';
const ASCII_FIRST: char = ' ';
const ASCII_LAST: char = '~';

impl GlyphStore {
    pub fn new() -> Self {
        Self {
            graphics: font_data::PRESET_GRAPHIC_GLYPHS.iter().copied().collect(),
        }
    }

    /// Looks up the bitmap for a character. Unknown characters (in either
    /// namespace) resolve to the `'?'` fallback glyph.
    pub fn lookup(&self, ch: char, is_graphic: bool) -> GlyphBitmap {
        if is_graphic {
            return self
                .graphics
                .get(&ch)
                .copied()
                .unwrap_or_else(|| ascii_bitmap(FALLBACK_CHAR));
        }

        if (ASCII_FIRST..=ASCII_LAST).contains(&ch) {
            ascii_bitmap(ch)
        } else {
            ascii_bitmap(FALLBACK_CHAR)
        }
    }

    /// Registers a programmable graphic glyph.
    ///
    /// `ch` must be a lowercase letter (the uppercase slots hold the preset
    /// block graphics) and `pattern` must be exactly eight rows of eight
    /// `'0'`/`'1'` characters. Nothing is stored on error.
    pub fn set_graphic_glyph(&mut self, ch: char, pattern: &[&str]) -> Result<(), GlyphError> {
        if !ch.is_ascii_lowercase() {
            return Err(GlyphError::InvalidSlot(ch));
        }

        if pattern.len() != 8 {
            return Err(GlyphError::InvalidPattern);
        }

        let mut bitmap = GlyphBitmap::default();
        for (row, line) in pattern.iter().enumerate() {
            if line.len() != 8 {
                return Err(GlyphError::InvalidPattern);
            }
            let mut bits = 0u8;
            for c in line.chars() {
                bits <<= 1;
                match c {
                    '1' => bits |= 1,
                    '0' => {}
                    _ => return Err(GlyphError::InvalidPattern),
                }
            }
            bitmap[row] = bits;
        }

        self.graphics.insert(ch, bitmap);
        Ok(())
    }
}

impl Default for GlyphStore {
    fn default() -> Self {
        Self::new()
    }
}

fn ascii_bitmap(ch: char) -> GlyphBitmap {
    font_data::ASCII_GLYPHS[(ch as usize) - (ASCII_FIRST as usize)]
}
