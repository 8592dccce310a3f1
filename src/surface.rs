//! Fixed-size pixel canvas backing the cell grid and drawing primitives.

use crate::types::Color;

/// W x H colour buffer. All coordinate-based writes are bounds-checked and
/// silently ignored outside the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: i32,
    height: i32,
    pixels: Vec<Color>,
}

impl Surface {
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "surface dimensions must be positive");
        Self {
            width,
            height,
            pixels: vec![Color::default(); (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.idx(x, y).is_some()
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    /// Writes one pixel; no-op outside the canvas.
    pub fn put(&mut self, x: i32, y: i32, colour: Color) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = colour;
        }
    }

    /// Fills the whole canvas with one colour.
    pub fn fill(&mut self, colour: Color) {
        self.pixels.fill(colour);
    }

    /// Shifts the whole canvas up by `dy` rows. The bottom `dy` rows keep
    /// their previous content and are expected to be cleared by the caller.
    pub fn shift_up(&mut self, dy: i32) {
        if dy <= 0 {
            return;
        }
        if dy >= self.height {
            return;
        }
        let row = self.width as usize;
        let offset = (dy as usize) * row;
        self.pixels.copy_within(offset.., 0);
    }

    /// Counts pixels currently set to `colour`. Intended for tests and the
    /// demo harness, not per-frame use.
    pub fn count_pixels(&self, colour: Color) -> usize {
        self.pixels.iter().filter(|&&p| p == colour).count()
    }
}
