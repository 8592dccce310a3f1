//! Cooperative text-entry sessions.
//!
//! A session buffers printable characters, echoes them onto the grid (the
//! engine drives the echo drawing) and resolves a one-shot prompt when the
//! terminator event arrives. The waiting caller sees a blocking-style call;
//! the render timeline itself never blocks.

use anyhow::{anyhow, Result};
use arrayvec::ArrayVec;
use tokio::sync::oneshot;

use crate::types::MAX_INPUT_LEN;

/// The caller's half of an input session: a single-resolution handoff.
///
/// Resolved exactly once by the terminator event. There is no cancellation or
/// timeout; an abandoned engine is the only way the wait can fail.
#[derive(Debug)]
pub struct InputPrompt {
    rx: oneshot::Receiver<String>,
}

impl InputPrompt {
    /// Awaits the resolved input text.
    pub async fn wait(self) -> Result<String> {
        self.rx.await.map_err(|_| anyhow!("input session abandoned"))
    }

    /// Blocks the calling thread until the input resolves. Must not be
    /// called from the render timeline.
    pub fn blocking_wait(self) -> Result<String> {
        self.rx
            .blocking_recv()
            .map_err(|_| anyhow!("input session abandoned"))
    }

    /// Non-blocking poll; returns the text once resolved.
    pub fn try_resolve(&mut self) -> Option<String> {
        self.rx.try_recv().ok()
    }
}

/// Engine-side session state. Exists only while capture is active.
#[derive(Debug)]
pub(crate) struct InputSession {
    pub row: i32,
    pub start_col: i32,
    pub cursor_col: i32,
    max_len: usize,
    buffer: ArrayVec<char, MAX_INPUT_LEN>,
    resolve: Option<oneshot::Sender<String>>,
}

impl InputSession {
    pub fn begin(row: i32, col: i32, max_len: usize) -> (Self, InputPrompt) {
        let (tx, rx) = oneshot::channel();
        let session = Self {
            row,
            start_col: col,
            cursor_col: col,
            max_len: max_len.min(MAX_INPUT_LEN),
            buffer: ArrayVec::new(),
            resolve: Some(tx),
        };
        (session, InputPrompt { rx })
    }

    /// Appends a character; ignored once the buffer is at max length.
    pub fn push_char(&mut self, ch: char) -> bool {
        if self.buffer.len() >= self.max_len {
            return false;
        }
        self.buffer.push(ch);
        true
    }

    /// Removes the last buffered character, if any.
    pub fn delete_last(&mut self) -> bool {
        self.buffer.pop().is_some()
    }

    pub fn text(&self) -> String {
        self.buffer.iter().collect()
    }

    /// Resolves the prompt with the buffered text. The session is spent
    /// afterwards.
    pub fn resolve(&mut self) {
        if let Some(tx) = self.resolve.take() {
            // The caller may have dropped the prompt; nothing to do then.
            let _ = tx.send(self.text());
        }
    }
}
