//! Engine orchestration: one render timeline tying together the scheduler,
//! the cell grid, the flash ticker and input capture.
//!
//! The engine owns the glyph store, the grid and the pixel surface outright;
//! every mutation path funnels through `&mut Engine` on the render timeline.
//! Background timelines (the flash ticker) post events into a channel that is
//! drained here, never touching pixels from their own threads.

use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use anyhow::Result;

use crate::draw;
use crate::flash::{EngineEvent, FlashTicker};
use crate::glyph::{GlyphError, GlyphStore};
use crate::grid::{CellGrid, CellSnapshot};
use crate::input::{InputPrompt, InputSession};
use crate::scheduler::FrameScheduler;
use crate::surface::Surface;
use crate::types::{
    Attrs, Color, Key, TextEvent, DEFAULT_FPS, FLASH_INTERVAL_MS, SCREEN_COLS, SCREEN_ROWS,
    SURFACE_HEIGHT, SURFACE_WIDTH,
};

/// Game logic plugged into the engine.
pub trait Game {
    /// Called once before the first frame.
    fn init(&mut self, _screen: &mut Engine) {}

    /// Called once per due logical frame.
    fn frame(&mut self, screen: &mut Engine);
}

/// Host presentation boundary: something that can show the pixel surface.
pub trait Presenter {
    fn present(&mut self, surface: &Surface) -> Result<()>;
}

/// The screen engine.
pub struct Engine {
    glyphs: GlyphStore,
    surface: Surface,
    grid: CellGrid,
    scheduler: FrameScheduler,
    attrs: Attrs,
    last_key: Option<Key>,
    session: Option<InputSession>,
    flash_inverted: bool,
    events_tx: Sender<EngineEvent>,
    events_rx: Receiver<EngineEvent>,
    _flash_ticker: Option<FlashTicker>,
    presenter: Option<Box<dyn Presenter>>,
    frame_running: bool,
    detached: bool,
    dirty: bool,
}

impl Engine {
    /// Creates an engine with the background flash ticker running.
    pub fn new() -> Self {
        let mut engine = Self::without_flash_ticker();
        let ticker = FlashTicker::spawn(
            Duration::from_millis(FLASH_INTERVAL_MS),
            engine.events_tx.clone(),
        );
        engine._flash_ticker = Some(ticker);
        engine
    }

    /// Creates an engine without the background ticker. Flash ticks can still
    /// be posted through [`Engine::event_sender`]; used by tests and hosts
    /// that drive flashing themselves.
    pub fn without_flash_ticker() -> Self {
        let (events_tx, events_rx) = mpsc::channel();
        let mut surface = Surface::new(SURFACE_WIDTH, SURFACE_HEIGHT);
        surface.fill(Color::WHITE);
        Self {
            glyphs: GlyphStore::new(),
            surface,
            grid: CellGrid::new(SCREEN_ROWS, SCREEN_COLS),
            scheduler: FrameScheduler::new(),
            attrs: Attrs::default(),
            last_key: None,
            session: None,
            flash_inverted: true,
            events_tx,
            events_rx,
            _flash_ticker: None,
            presenter: None,
            frame_running: false,
            detached: false,
            dirty: false,
        }
    }

    /// Attaches the host's presentation surface. Fired once by the host when
    /// a presentable surface exists.
    pub fn set_presenter(&mut self, presenter: Box<dyn Presenter>) {
        self.presenter = Some(presenter);
        self.dirty = true;
    }

    /// Runs the game's one-time init and presents the initial screen.
    pub fn start(&mut self, game: &mut dyn Game) {
        game.init(self);
        self.present();
    }

    // --- attributes -----------------------------------------------------

    pub fn pen(&self) -> Color {
        self.attrs.pen
    }

    pub fn set_pen(&mut self, pen: Color) {
        self.attrs.pen = pen;
    }

    pub fn paper(&self) -> Color {
        self.attrs.paper
    }

    pub fn set_paper(&mut self, paper: Color) {
        self.attrs.paper = paper;
    }

    pub fn invert(&self) -> bool {
        self.attrs.invert
    }

    pub fn set_invert(&mut self, invert: bool) {
        self.attrs.invert = invert;
    }

    pub fn flash(&self) -> bool {
        self.attrs.flash
    }

    pub fn set_flash(&mut self, flash: bool) {
        self.attrs.flash = flash;
    }

    // --- drawing and text -----------------------------------------------

    /// Clears the whole screen to the given paper colour.
    pub fn clear(&mut self, paper: Color) {
        self.grid.clear(&mut self.surface, paper);
        self.dirty = true;
    }

    /// Prints text at `(row, col)` with the current attributes; returns the
    /// column of the last drawn character.
    pub fn print(&mut self, row: i32, col: i32, text: &str) -> i32 {
        let end = self
            .grid
            .print(&self.glyphs, &mut self.surface, row, col, text, self.attrs);
        self.dirty = true;
        end
    }

    /// Plots one pixel in the current pen colour.
    pub fn plot(&mut self, x: i32, y: i32) {
        draw::plot(&mut self.surface, x, y, self.attrs.pen);
        self.dirty = true;
    }

    /// Draws a clipped line in the current pen colour.
    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        draw::line(&mut self.surface, x1, y1, x2, y2, self.attrs.pen);
        self.dirty = true;
    }

    /// Draws an ellipse outline in the current pen colour.
    pub fn ellipse(&mut self, cx: i32, cy: i32, rx: i32, ry: i32) {
        draw::ellipse(&mut self.surface, cx, cy, rx, ry, self.attrs.pen);
        self.dirty = true;
    }

    /// Draws a circle outline in the current pen colour.
    pub fn circle(&mut self, cx: i32, cy: i32, r: i32) {
        draw::circle(&mut self.surface, cx, cy, r, self.attrs.pen);
        self.dirty = true;
    }

    /// Scrolls the screen up one text row, clearing the bottom row to the
    /// current paper colour.
    pub fn scroll(&mut self) {
        self.grid
            .scroll(&self.glyphs, &mut self.surface, self.attrs.paper);
        self.dirty = true;
    }

    /// Registers a programmable graphic glyph against a lowercase slot.
    pub fn set_graphic_glyph(&mut self, ch: char, pattern: &[&str]) -> Result<(), GlyphError> {
        self.glyphs.set_graphic_glyph(ch, pattern)
    }

    // --- queries --------------------------------------------------------

    /// Snapshot of the cell at `(row, col)`, or `None` outside the grid.
    pub fn cell(&self, row: i32, col: i32) -> Option<CellSnapshot> {
        self.grid.cell(row, col)
    }

    /// Colour of the pixel at `(x, y)`; black outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Color {
        self.surface.get(x, y).unwrap_or(Color::BLACK)
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Total cell redraws so far; an observability hook for tests.
    pub fn redraw_count(&self) -> u64 {
        self.grid.redraw_count()
    }

    /// The most recent raw key press, cleared after every completed frame.
    pub fn last_key(&self) -> Option<Key> {
        self.last_key
    }

    // --- scheduling -----------------------------------------------------

    pub fn fps(&self) -> u32 {
        self.scheduler.fps()
    }

    /// Sets the logical frame rate. Accumulated lag is kept.
    pub fn set_fps(&mut self, fps: u32) {
        self.scheduler.set_fps(fps);
    }

    /// Restores the default frame rate.
    pub fn restore_fps(&mut self) {
        self.scheduler.set_fps(DEFAULT_FPS);
    }

    /// Feeds the host's high-frequency timing signal and dispatches due
    /// frames to the game, then presents once.
    ///
    /// Due ticks are dropped, not queued, while a frame is already running,
    /// while an input session is active, or while detached.
    pub fn on_timing_signal(&mut self, now_ms: u64, game: &mut dyn Game) {
        self.pump_events();

        let due = self.scheduler.advance(now_ms);
        for _ in 0..due {
            if self.frame_running || self.session.is_some() || self.detached {
                continue;
            }
            self.frame_running = true;
            game.frame(self);
            // Keys are edge-triggered: observed by at most one frame.
            self.last_key = None;
            self.frame_running = false;
        }

        self.present_if_dirty();
    }

    /// Drains marshalled background events on the render timeline. A flash
    /// pass batches all affected cell redraws before the next present.
    pub fn pump_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            match event {
                EngineEvent::FlashTick => {
                    self.grid
                        .toggle_flash(&self.glyphs, &mut self.surface, self.flash_inverted);
                    self.flash_inverted = !self.flash_inverted;
                    self.dirty = true;
                }
            }
        }
    }

    /// Sender for posting engine events from other timelines.
    pub fn event_sender(&self) -> Sender<EngineEvent> {
        self.events_tx.clone()
    }

    /// Detaches the scheduler while `action` performs manual draws. The
    /// action should call [`Engine::force_present`] after each step. The
    /// scheduler is re-baselined afterwards so the detached period does not
    /// produce a burst of catch-up frames.
    pub fn run_detached<F: FnOnce(&mut Engine)>(&mut self, action: F) {
        self.detached = true;
        action(self);
        self.detached = false;
        self.scheduler.rebaseline();
    }

    /// Presents the surface immediately.
    pub fn force_present(&mut self) {
        self.present();
    }

    // --- host input -----------------------------------------------------

    /// Records a raw key-down event from the host.
    pub fn on_key_down(&mut self, key: Key) {
        self.last_key = Some(key);
    }

    /// Starts a text-entry session at `(row, col)`.
    ///
    /// Frame delivery is suspended until the terminator event resolves the
    /// returned prompt. Starting a session while one is active is a
    /// programming error.
    pub fn input_session(&mut self, row: i32, col: i32, max_len: usize) -> InputPrompt {
        assert!(self.session.is_none(), "input session already active");
        let (session, prompt) = InputSession::begin(row, col, max_len);
        self.session = Some(session);
        self.refresh_input_echo();
        self.present_if_dirty();
        prompt
    }

    /// Whether an input session is currently capturing text.
    pub fn awaiting_input(&self) -> bool {
        self.session.is_some()
    }

    /// Feeds a text-composition event from the host into the active session.
    /// Ignored when no session is active.
    pub fn on_text_input(&mut self, event: TextEvent) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match event {
            TextEvent::Char(ch) => {
                if session.push_char(ch) {
                    self.refresh_input_echo();
                }
            }
            TextEvent::Delete => {
                if session.delete_last() {
                    self.refresh_input_echo();
                }
            }
            TextEvent::Terminator => {
                let mut session = self.session.take().expect("session checked above");
                // Blank the whole input area, coalescing each cell's resets
                // into a single redraw.
                for col in session.start_col..=session.cursor_col {
                    self.grid.lock(session.row, col);
                    self.grid.clear_cell(
                        &self.glyphs,
                        &mut self.surface,
                        session.row,
                        col,
                        self.attrs.paper,
                    );
                    self.grid
                        .unlock(&self.glyphs, &mut self.surface, session.row, col);
                }
                session.resolve();
                // The terminator key press must not leak into the next frame.
                self.last_key = None;
                self.dirty = true;
            }
        }

        self.present_if_dirty();
    }

    // --- internals ------------------------------------------------------

    /// Redraws the buffered text plus the flashing cursor cell after it.
    fn refresh_input_echo(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let (row, start_col, old_cursor) = (session.row, session.start_col, session.cursor_col);
        let text = session.text();

        // Clear the previous cursor, if any.
        self.grid
            .set_flash(&self.glyphs, &mut self.surface, row, old_cursor, false);

        let mut cursor_col = start_col;
        if !text.is_empty() {
            cursor_col = self
                .grid
                .print(&self.glyphs, &mut self.surface, row, start_col, &text, self.attrs)
                + 1;
        }
        let cursor_attrs = Attrs {
            flash: true,
            ..self.attrs
        };
        self.grid
            .print(&self.glyphs, &mut self.surface, row, cursor_col, " ", cursor_attrs);

        if let Some(session) = self.session.as_mut() {
            session.cursor_col = cursor_col;
        }
        self.dirty = true;
    }

    fn present_if_dirty(&mut self) {
        if self.dirty {
            self.present();
        }
    }

    /// Pushes the surface to the host. Presentation failures (e.g. a surface
    /// torn down during shutdown) are logged and swallowed; they must never
    /// propagate into the frame or flash timelines.
    fn present(&mut self) {
        self.dirty = false;
        if let Some(presenter) = self.presenter.as_mut() {
            if let Err(err) = presenter.present(&self.surface) {
                log::warn!("presentation failed, ignoring: {err:#}");
            }
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
