//! The text cell grid: fixed rows x cols of 8x8 glyph cells rendered onto the
//! pixel surface.
//!
//! Cells keep their rendered pixels in sync with their state: every attribute
//! or glyph change triggers a redraw of the cell's pixel block, unless the
//! cell is locked, in which case the redraw is coalesced into the unlock.

use crate::glyph::GlyphStore;
use crate::surface::Surface;
use crate::types::{Attrs, Color, GRAPHIC_ESCAPE, CELL_HEIGHT, CELL_WIDTH};

/// One text cell's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    ch: char,
    is_graphic: bool,
    pen: Color,
    paper: Color,
    invert: bool,
    flash: bool,
    locked: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            is_graphic: false,
            pen: Color::BLACK,
            paper: Color::WHITE,
            invert: false,
            flash: false,
            locked: false,
        }
    }
}

/// Read-only view of a cell handed out to game code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSnapshot {
    pub character: char,
    pub is_graphic: bool,
    pub pen: Color,
    pub paper: Color,
    pub invert: bool,
    pub flash: bool,
}

impl From<&Cell> for CellSnapshot {
    fn from(cell: &Cell) -> Self {
        Self {
            character: cell.ch,
            is_graphic: cell.is_graphic,
            pen: cell.pen,
            paper: cell.paper,
            invert: cell.invert,
            flash: cell.flash,
        }
    }
}

/// Fixed rows x cols grid of cells, each owning an 8x8 block of the surface.
#[derive(Debug, Clone)]
pub struct CellGrid {
    rows: i32,
    cols: i32,
    cells: Vec<Cell>,
    redraws: u64,
}

impl CellGrid {
    pub fn new(rows: i32, cols: i32) -> Self {
        assert!(rows > 0 && cols > 0, "grid dimensions must be positive");
        Self {
            rows,
            cols,
            cells: vec![Cell::default(); (rows as usize) * (cols as usize)],
            redraws: 0,
        }
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Number of cell redraws performed so far. Lets tests observe redraw
    /// coalescing and the idempotent fast paths.
    pub fn redraw_count(&self) -> u64 {
        self.redraws
    }

    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row >= self.rows || col >= self.cols {
            return None;
        }
        Some((row as usize) * (self.cols as usize) + (col as usize))
    }

    pub fn cell(&self, row: i32, col: i32) -> Option<CellSnapshot> {
        self.index(row, col).map(|i| (&self.cells[i]).into())
    }

    /// Prints `text` starting at `(row, col)` with the given attributes.
    ///
    /// A graphic-escape character in the stream occupies no cell; it marks
    /// the next character as a graphic-glyph lookup. Out-of-range columns are
    /// skipped but still advance. Returns the column of the last drawn
    /// character, or `col` when the row is out of range or the text is empty.
    pub fn print(
        &mut self,
        glyphs: &GlyphStore,
        surface: &mut Surface,
        row: i32,
        col: i32,
        text: &str,
        attrs: Attrs,
    ) -> i32 {
        if row < 0 || row >= self.rows || text.is_empty() {
            return col;
        }

        let mut c = col;
        let mut is_graphic = false;
        for ch in text.chars() {
            if ch == GRAPHIC_ESCAPE {
                is_graphic = true;
                continue;
            }

            if let Some(i) = self.index(row, c) {
                let cell = &mut self.cells[i];
                cell.ch = ch;
                cell.is_graphic = is_graphic;
                cell.pen = attrs.pen;
                cell.paper = attrs.paper;
                cell.invert = attrs.invert;
                cell.flash = attrs.flash;
                self.redraw(glyphs, surface, row, c);
            }

            is_graphic = false;
            c += 1;
        }

        c - 1
    }

    /// Sets a cell's glyph. No-op (and no redraw) when both the character and
    /// the graphic flag are unchanged.
    pub fn set_character(
        &mut self,
        glyphs: &GlyphStore,
        surface: &mut Surface,
        row: i32,
        col: i32,
        ch: char,
        is_graphic: bool,
    ) {
        let Some(i) = self.index(row, col) else {
            return;
        };
        let cell = &mut self.cells[i];
        if cell.ch == ch && cell.is_graphic == is_graphic {
            return;
        }
        cell.ch = ch;
        cell.is_graphic = is_graphic;
        self.redraw(glyphs, surface, row, col);
    }

    /// Sets a cell's flash attribute, redrawing on change.
    pub fn set_flash(
        &mut self,
        glyphs: &GlyphStore,
        surface: &mut Surface,
        row: i32,
        col: i32,
        flash: bool,
    ) {
        let Some(i) = self.index(row, col) else {
            return;
        };
        if self.cells[i].flash == flash {
            return;
        }
        self.cells[i].flash = flash;
        self.redraw(glyphs, surface, row, col);
    }

    /// Sets a cell's invert attribute, redrawing on change.
    pub fn set_invert(
        &mut self,
        glyphs: &GlyphStore,
        surface: &mut Surface,
        row: i32,
        col: i32,
        invert: bool,
    ) {
        let Some(i) = self.index(row, col) else {
            return;
        };
        if self.cells[i].invert == invert {
            return;
        }
        self.cells[i].invert = invert;
        self.redraw(glyphs, surface, row, col);
    }

    /// Resets one cell to a blank glyph with default pen, the given paper and
    /// no invert/flash, then redraws it.
    pub fn clear_cell(
        &mut self,
        glyphs: &GlyphStore,
        surface: &mut Surface,
        row: i32,
        col: i32,
        paper: Color,
    ) {
        let Some(i) = self.index(row, col) else {
            return;
        };
        let locked = self.cells[i].locked;
        self.cells[i] = Cell {
            paper,
            locked,
            ..Cell::default()
        };
        self.redraw(glyphs, surface, row, col);
    }

    /// Clears the whole screen: every cell is reset to a blank glyph on the
    /// given paper, and the entire pixel surface is wiped uniformly so ad-hoc
    /// pixel drawings do not survive.
    pub fn clear(&mut self, surface: &mut Surface, paper: Color) {
        surface.fill(paper);
        for cell in &mut self.cells {
            *cell = Cell {
                paper,
                ..Cell::default()
            };
        }
    }

    /// Scrolls the screen up by one cell row.
    ///
    /// The pixel surface below row 0 is block-copied up one cell height first
    /// (preserving pixel-level drawings), then cell metadata is copied up for
    /// bookkeeping without redrawing, and finally the bottom row is cleared
    /// outright.
    pub fn scroll(&mut self, glyphs: &GlyphStore, surface: &mut Surface, paper: Color) {
        surface.shift_up(CELL_HEIGHT);

        let cols = self.cols as usize;
        for r in 0..(self.rows - 1) as usize {
            let (upper, lower) = self.cells.split_at_mut((r + 1) * cols);
            upper[r * cols..(r + 1) * cols].clone_from_slice(&lower[..cols]);
        }

        for c in 0..self.cols {
            self.clear_cell(glyphs, surface, self.rows - 1, c, paper);
        }
    }

    /// Redraws every flashing cell for the given flash phase.
    ///
    /// The effective pen/paper swap composes with the invert attribute so a
    /// flashing inverted cell and a flashing plain cell always display
    /// complementary phases. Non-flashing cells are untouched.
    pub fn toggle_flash(
        &mut self,
        glyphs: &GlyphStore,
        surface: &mut Surface,
        flash_inverted: bool,
    ) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let i = self.index(row, col).unwrap();
                let cell = &self.cells[i];
                if !cell.flash {
                    continue;
                }

                let (pen, paper) = match (cell.invert, flash_inverted) {
                    (true, true) | (false, false) => (cell.pen, cell.paper),
                    (true, false) | (false, true) => (cell.paper, cell.pen),
                };
                self.draw_glyph(glyphs, surface, row, col, pen, paper);
            }
        }
    }

    /// Suppresses redraws for a cell until [`CellGrid::unlock`]. State
    /// mutations still apply while locked.
    pub fn lock(&mut self, row: i32, col: i32) {
        if let Some(i) = self.index(row, col) {
            self.cells[i].locked = true;
        }
    }

    /// Unlocks a cell and performs the single coalesced redraw.
    ///
    /// Unlocking a cell that is not locked is an engine bug, not a
    /// recoverable condition.
    pub fn unlock(&mut self, glyphs: &GlyphStore, surface: &mut Surface, row: i32, col: i32) {
        let Some(i) = self.index(row, col) else {
            return;
        };
        assert!(self.cells[i].locked, "unlock of a cell that is not locked");
        self.cells[i].locked = false;
        self.redraw(glyphs, surface, row, col);
    }

    /// Redraws a cell from its current state, honouring the lock flag and the
    /// invert attribute.
    fn redraw(&mut self, glyphs: &GlyphStore, surface: &mut Surface, row: i32, col: i32) {
        let i = match self.index(row, col) {
            Some(i) => i,
            None => return,
        };
        let cell = &self.cells[i];
        if cell.locked {
            return;
        }
        let (pen, paper) = if cell.invert {
            (cell.paper, cell.pen)
        } else {
            (cell.pen, cell.paper)
        };
        self.draw_glyph(glyphs, surface, row, col, pen, paper);
    }

    /// Rasterizes a cell's glyph into its 8x8 pixel block with explicit
    /// colours. Set bits paint pen; clear bits paint paper unless the paper
    /// is the transparent sentinel.
    fn draw_glyph(
        &mut self,
        glyphs: &GlyphStore,
        surface: &mut Surface,
        row: i32,
        col: i32,
        pen: Color,
        paper: Color,
    ) {
        let i = self.index(row, col).expect("cell coordinates in range");
        let cell = &self.cells[i];
        let bitmap = glyphs.lookup(cell.ch, cell.is_graphic);

        let x0 = col * CELL_WIDTH;
        let y0 = row * CELL_HEIGHT;
        for (dy, bits) in bitmap.iter().enumerate() {
            for dx in 0..CELL_WIDTH {
                let set = bits & (0x80 >> dx) != 0;
                if set {
                    surface.put(x0 + dx, y0 + dy as i32, pen);
                } else if !paper.is_transparent() {
                    surface.put(x0 + dx, y0 + dy as i32, paper);
                }
            }
        }
        self.redraws += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SCREEN_COLS, SCREEN_ROWS};

    fn fixture() -> (GlyphStore, Surface, CellGrid) {
        let glyphs = GlyphStore::new();
        let mut surface = Surface::new(SCREEN_COLS * CELL_WIDTH, SCREEN_ROWS * CELL_HEIGHT);
        let grid = CellGrid::new(SCREEN_ROWS, SCREEN_COLS);
        surface.fill(Color::WHITE);
        (glyphs, surface, grid)
    }

    #[test]
    fn print_returns_last_drawn_column() {
        let (glyphs, mut surface, mut grid) = fixture();
        let end = grid.print(&glyphs, &mut surface, 3, 5, "hello", Attrs::default());
        assert_eq!(end, 9);
        assert_eq!(grid.cell(3, 5).unwrap().character, 'h');
        assert_eq!(grid.cell(3, 9).unwrap().character, 'o');
    }

    #[test]
    fn print_out_of_range_row_returns_col_unchanged() {
        let (glyphs, mut surface, mut grid) = fixture();
        assert_eq!(grid.print(&glyphs, &mut surface, -1, 4, "x", Attrs::default()), 4);
        assert_eq!(
            grid.print(&glyphs, &mut surface, SCREEN_ROWS, 4, "x", Attrs::default()),
            4
        );
        assert_eq!(grid.redraw_count(), 0);
    }

    #[test]
    fn print_escape_marks_next_character_as_graphic() {
        let (glyphs, mut surface, mut grid) = fixture();
        let end = grid.print(&glyphs, &mut surface, 0, 0, "x¬Ay", Attrs::default());
        assert_eq!(end, 2);
        let mid = grid.cell(0, 1).unwrap();
        assert_eq!(mid.character, 'A');
        assert!(mid.is_graphic);
        assert!(!grid.cell(0, 0).unwrap().is_graphic);
        assert!(!grid.cell(0, 2).unwrap().is_graphic);
    }

    #[test]
    fn print_trailing_escape_draws_nothing() {
        let (glyphs, mut surface, mut grid) = fixture();
        let before = grid.redraw_count();
        let end = grid.print(&glyphs, &mut surface, 0, 0, "ab¬", Attrs::default());
        assert_eq!(end, 1);
        assert_eq!(grid.redraw_count(), before + 2);
    }

    #[test]
    fn print_skips_out_of_range_columns_but_advances() {
        let (glyphs, mut surface, mut grid) = fixture();
        let end = grid.print(&glyphs, &mut surface, 0, SCREEN_COLS - 2, "abcd", Attrs::default());
        assert_eq!(end, SCREEN_COLS + 1);
        assert_eq!(grid.cell(0, SCREEN_COLS - 1).unwrap().character, 'b');
        // Only two cells were in range, so only two redraws.
        assert_eq!(grid.redraw_count(), 2);
    }

    #[test]
    fn set_character_is_idempotent() {
        let (glyphs, mut surface, mut grid) = fixture();
        grid.set_character(&glyphs, &mut surface, 2, 2, 'Q', false);
        assert_eq!(grid.redraw_count(), 1);
        grid.set_character(&glyphs, &mut surface, 2, 2, 'Q', false);
        assert_eq!(grid.redraw_count(), 1);
        // Same character but different namespace is a real change.
        grid.set_character(&glyphs, &mut surface, 2, 2, 'Q', true);
        assert_eq!(grid.redraw_count(), 2);
    }

    #[test]
    fn lock_coalesces_mutations_into_one_redraw() {
        let (glyphs, mut surface, mut grid) = fixture();
        grid.lock(1, 1);
        grid.set_character(&glyphs, &mut surface, 1, 1, 'A', false);
        grid.set_flash(&glyphs, &mut surface, 1, 1, true);
        grid.set_invert(&glyphs, &mut surface, 1, 1, true);
        assert_eq!(grid.redraw_count(), 0);

        grid.unlock(&glyphs, &mut surface, 1, 1);
        assert_eq!(grid.redraw_count(), 1);
        let cell = grid.cell(1, 1).unwrap();
        assert_eq!(cell.character, 'A');
        assert!(cell.flash);
        assert!(cell.invert);
    }

    #[test]
    #[should_panic(expected = "not locked")]
    fn unlock_without_lock_panics() {
        let (glyphs, mut surface, mut grid) = fixture();
        grid.unlock(&glyphs, &mut surface, 0, 0);
    }

    #[test]
    fn clear_resets_cells_and_wipes_surface() {
        let (glyphs, mut surface, mut grid) = fixture();
        grid.print(&glyphs, &mut surface, 0, 0, "junk", Attrs::default());
        surface.put(200, 200, Color::RED); // ad-hoc pixel drawing

        grid.clear(&mut surface, Color::CYAN);

        assert_eq!(grid.cell(0, 0).unwrap().character, ' ');
        assert_eq!(grid.cell(0, 0).unwrap().paper, Color::CYAN);
        assert_eq!(surface.get(200, 200), Some(Color::CYAN));
        assert_eq!(
            surface.count_pixels(Color::CYAN),
            (surface.width() * surface.height()) as usize
        );
    }

    #[test]
    fn toggle_flash_swaps_only_flashing_cells() {
        let (glyphs, mut surface, mut grid) = fixture();
        let flashing = Attrs {
            pen: Color::BLACK,
            paper: Color::WHITE,
            invert: false,
            flash: true,
        };
        grid.print(&glyphs, &mut surface, 0, 0, "F", flashing);
        grid.print(&glyphs, &mut surface, 1, 0, "S", Attrs::default());

        let flashing_pen_pixels = |s: &Surface| {
            let mut n = 0;
            for y in 0..CELL_HEIGHT {
                for x in 0..CELL_WIDTH {
                    if s.get(x, y) == Some(Color::BLACK) {
                        n += 1;
                    }
                }
            }
            n
        };
        let set_bits = flashing_pen_pixels(&surface);
        assert!(set_bits > 0);

        // Inverted phase: the glyph's set bits now paint paper (white), so
        // black pixel count in the block flips to the complement.
        grid.toggle_flash(&glyphs, &mut surface, true);
        assert_eq!(flashing_pen_pixels(&surface), 64 - set_bits);

        // Non-flashing cell is untouched: 'S' still drawn with black pen.
        assert_eq!(grid.cell(1, 0).unwrap().character, 'S');

        // Back to the normal phase.
        grid.toggle_flash(&glyphs, &mut surface, false);
        assert_eq!(flashing_pen_pixels(&surface), set_bits);
    }

    #[test]
    fn flashing_inverted_and_plain_cells_show_complementary_phases() {
        let (glyphs, mut surface, mut grid) = fixture();
        let plain = Attrs {
            flash: true,
            ..Attrs::default()
        };
        let inverted = Attrs {
            flash: true,
            invert: true,
            ..Attrs::default()
        };
        grid.print(&glyphs, &mut surface, 0, 0, "X", plain);
        grid.print(&glyphs, &mut surface, 0, 1, "X", inverted);

        for phase in [true, false, true] {
            grid.toggle_flash(&glyphs, &mut surface, phase);
            for dy in 0..CELL_HEIGHT {
                for dx in 0..CELL_WIDTH {
                    let a = surface.get(dx, dy).unwrap();
                    let b = surface.get(CELL_WIDTH + dx, dy).unwrap();
                    assert_ne!(a, b, "pixel ({dx},{dy}) should differ between phases");
                }
            }
        }
    }

    #[test]
    fn scroll_moves_cells_and_pixels_up_and_blanks_bottom_row() {
        let (glyphs, mut surface, mut grid) = fixture();
        grid.print(&glyphs, &mut surface, 1, 0, "AB", Attrs::default());
        // Ad-hoc pixel inside row 1's band.
        surface.put(100, CELL_HEIGHT + 3, Color::RED);
        let bottom = SCREEN_ROWS - 1;
        grid.print(&glyphs, &mut surface, bottom, 0, "Z", Attrs::default());

        grid.scroll(&glyphs, &mut surface, Color::WHITE);

        assert_eq!(grid.cell(0, 0).unwrap().character, 'A');
        assert_eq!(grid.cell(0, 1).unwrap().character, 'B');
        assert_eq!(surface.get(100, 3), Some(Color::RED));
        assert_eq!(grid.cell(bottom - 1, 0).unwrap().character, 'Z');
        assert_eq!(grid.cell(bottom, 0).unwrap().character, ' ');
        // Bottom row's pixel band is clean paper.
        for x in 0..surface.width() {
            for y in (bottom * CELL_HEIGHT)..((bottom + 1) * CELL_HEIGHT) {
                assert_eq!(surface.get(x, y), Some(Color::WHITE));
            }
        }
    }

    #[test]
    fn transparent_paper_leaves_background_pixels_untouched() {
        let (glyphs, mut surface, mut grid) = fixture();
        surface.fill(Color::GREEN);
        let attrs = Attrs {
            pen: Color::BLACK,
            paper: Color::TRANSPARENT,
            ..Attrs::default()
        };
        grid.print(&glyphs, &mut surface, 0, 0, "!", attrs);

        let bitmap = glyphs.lookup('!', false);
        for (dy, bits) in bitmap.iter().enumerate() {
            for dx in 0..8 {
                let expected = if bits & (0x80 >> dx) != 0 {
                    Color::BLACK
                } else {
                    Color::GREEN
                };
                assert_eq!(surface.get(dx, dy as i32), Some(expected));
            }
        }
    }
}
