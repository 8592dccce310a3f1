//! retroscreen: a retro home-computer style screen engine.
//!
//! A fixed 60x40 grid of 8x8 glyph cells is rendered onto a 480x320 pixel
//! canvas, with pixel-exact drawing primitives layered over it. Game logic
//! plugs in through the [`engine::Game`] trait and is driven one logical
//! frame at a time by a throttled scheduler; flashing attributes and
//! text-entry sessions run on their own timelines and are marshalled onto
//! the single render timeline by the [`engine::Engine`].

pub mod draw;
pub mod engine;
pub mod flash;
pub mod glyph;
pub mod grid;
pub mod input;
pub mod scheduler;
pub mod surface;
pub mod term;
pub mod types;

pub use engine::{Engine, Game, Presenter};
pub use glyph::{GlyphBitmap, GlyphError, GlyphStore};
pub use grid::CellSnapshot;
pub use input::InputPrompt;
pub use types::{Attrs, Color, Key, TextEvent};
