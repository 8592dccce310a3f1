//! Fixed-rate frame scheduler with lag accumulation.

use crate::types::DEFAULT_FPS;

/// Converts a high-frequency timing signal into a throttled sequence of
/// frame-due events.
///
/// Elapsed time accumulates into a lag counter; each call drains whole frame
/// intervals out of it, so the number of due frames is proportional to
/// elapsed wall time regardless of whether time arrives as one large jump or
/// many small ticks, and leftover lag never drifts away.
#[derive(Debug, Clone)]
pub struct FrameScheduler {
    fps: u32,
    previous_ms: Option<u64>,
    lag_ms: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self {
            fps: DEFAULT_FPS,
            previous_ms: None,
            lag_ms: 0,
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Changes the target rate. Takes effect on the next tick; accumulated
    /// lag is deliberately kept.
    pub fn set_fps(&mut self, fps: u32) {
        assert!(fps > 0, "fps must be positive");
        self.fps = fps;
    }

    pub fn interval_ms(&self) -> u64 {
        // Above 1000 fps the millisecond interval rounds down to zero; clamp
        // to 1 so the drain loop in `advance` always makes progress.
        ((1000 / self.fps) as u64).max(1)
    }

    /// Forgets the previous tick and any accumulated lag. Used after a
    /// detached period so elapsed time spent there does not replay as a
    /// burst of catch-up frames.
    pub fn rebaseline(&mut self) {
        self.previous_ms = None;
        self.lag_ms = 0;
    }

    /// Feeds the timing signal. Returns how many frames are due now; the
    /// corresponding intervals have already been drained from the lag, so a
    /// caller that drops a due frame drops it for good.
    pub fn advance(&mut self, now_ms: u64) -> u32 {
        let elapsed = match self.previous_ms {
            Some(prev) => now_ms.saturating_sub(prev),
            None => 0,
        };
        self.previous_ms = Some(now_ms);
        self.lag_ms += elapsed;

        let interval = self.interval_ms();
        let mut due = 0;
        while self.lag_ms >= interval {
            self.lag_ms -= interval;
            due += 1;
        }
        due
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}
