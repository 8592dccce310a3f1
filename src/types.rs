//! Core types and constants shared across the engine.
//! This module contains pure data types with no external dependencies.

/// Fixed text grid dimensions.
pub const SCREEN_COLS: i32 = 60;
pub const SCREEN_ROWS: i32 = 40;

/// Pixel size of one text cell.
pub const CELL_WIDTH: i32 = 8;
pub const CELL_HEIGHT: i32 = 8;

/// Pixel canvas dimensions.
pub const SURFACE_WIDTH: i32 = SCREEN_COLS * CELL_WIDTH;
pub const SURFACE_HEIGHT: i32 = SCREEN_ROWS * CELL_HEIGHT;

/// Timing constants (milliseconds).
pub const FLASH_INTERVAL_MS: u64 = 500;
pub const DEFAULT_FPS: u32 = 4;

/// Longest accepted line of user input (one column is reserved for the cursor).
pub const MAX_INPUT_LEN: usize = (SCREEN_COLS - 1) as usize;

/// Escape character marking the next printed character as a graphic glyph.
pub const GRAPHIC_ESCAPE: char = '¬';

/// 24-bit RGB colour with an alpha channel used only for the transparent paper
/// sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Paper sentinel: glyph background pixels are left untouched.
    pub const TRANSPARENT: Color = Color { r: 0, g: 0, b: 0, a: 0 };

    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }
}

/// The standard Spectrum palette, in BASIC colour-number order.
pub const SPECTRUM_COLOURS: [Color; 8] = [
    Color::BLACK,
    Color::BLUE,
    Color::RED,
    Color::MAGENTA,
    Color::GREEN,
    Color::CYAN,
    Color::YELLOW,
    Color::WHITE,
];

/// Rendering attributes applied to subsequently printed text and primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attrs {
    pub pen: Color,
    pub paper: Color,
    pub invert: bool,
    pub flash: bool,
}

impl Default for Attrs {
    fn default() -> Self {
        Self {
            pen: Color::BLACK,
            paper: Color::WHITE,
            invert: false,
            flash: false,
        }
    }
}

/// Abstract identity of a pressed key, as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Space,
    Enter,
    Escape,
    Char(char),
    Function(u8),
    Other,
}

/// Text-composition events feeding an input session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEvent {
    /// A printable character.
    Char(char),
    /// Remove the last buffered character.
    Delete,
    /// End the session and resolve the buffered text.
    Terminator,
}
