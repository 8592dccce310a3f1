//! TermPresenter: flushes the pixel surface to a real terminal.
//!
//! Two vertically stacked pixels map onto one terminal cell using the upper
//! half block glyph (foreground = upper pixel, background = lower pixel).
//! Frames are diffed against the previous one and only changed runs are
//! rewritten.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color as TermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::engine::Presenter;
use crate::surface::Surface;
use crate::types::Color;

const HALF_BLOCK: char = '\u{2580}';

/// One terminal cell: upper and lower pixel colours.
type PixelPair = (Color, Color);

pub struct TermPresenter {
    stdout: io::Stdout,
    /// Pixel sampling step; 1 renders full resolution, 2 halves it, etc.
    step: i32,
    last: Option<Vec<PixelPair>>,
    cols: usize,
}

impl TermPresenter {
    pub fn new(step: i32) -> Self {
        Self {
            stdout: io::stdout(),
            step: step.max(1),
            last: None,
            cols: 0,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next present to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    fn sample(&self, surface: &Surface) -> (usize, usize, Vec<PixelPair>) {
        let cols = (surface.width() / self.step) as usize;
        let rows = (surface.height() / (self.step * 2)) as usize;
        let mut cells = Vec::with_capacity(cols * rows);
        for row in 0..rows as i32 {
            let upper_y = row * self.step * 2;
            let lower_y = upper_y + self.step;
            for col in 0..cols as i32 {
                let x = col * self.step;
                let upper = surface.get(x, upper_y).unwrap_or(Color::BLACK);
                let lower = surface.get(x, lower_y).unwrap_or(Color::BLACK);
                cells.push((upper, lower));
            }
        }
        (cols, rows, cells)
    }

    fn draw_run(&mut self, cells: &[PixelPair], col: usize, row: usize, len: usize) -> Result<()> {
        self.stdout
            .queue(cursor::MoveTo(col as u16, row as u16))?;
        let mut current: Option<PixelPair> = None;
        for i in col..col + len {
            let pair = cells[row * self.cols + i];
            if current != Some(pair) {
                self.stdout.queue(SetForegroundColor(term_color(pair.0)))?;
                self.stdout.queue(SetBackgroundColor(term_color(pair.1)))?;
                current = Some(pair);
            }
            self.stdout.queue(Print(HALF_BLOCK))?;
        }
        Ok(())
    }
}

impl Presenter for TermPresenter {
    fn present(&mut self, surface: &Surface) -> Result<()> {
        let (cols, rows, cells) = self.sample(surface);
        let full = match &self.last {
            Some(prev) => prev.len() != cells.len(),
            None => true,
        };
        self.cols = cols;

        if full {
            self.stdout
                .queue(terminal::Clear(terminal::ClearType::All))?;
            for row in 0..rows {
                self.draw_run(&cells, 0, row, cols)?;
            }
        } else {
            let prev = self.last.take().expect("checked above");
            for row in 0..rows {
                let base = row * cols;
                let mut col = 0;
                while col < cols {
                    if prev[base + col] == cells[base + col] {
                        col += 1;
                        continue;
                    }
                    let start = col;
                    while col < cols && prev[base + col] != cells[base + col] {
                        col += 1;
                    }
                    self.draw_run(&cells, start, row, col - start)?;
                }
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        self.last = Some(cells);
        Ok(())
    }
}

fn term_color(colour: Color) -> TermColor {
    TermColor::Rgb {
        r: colour.r,
        g: colour.g,
        b: colour.b,
    }
}
