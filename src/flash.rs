//! Background flash ticker.
//!
//! Flashing runs on its own periodic timeline, decoupled from the frame
//! cadence. The ticker thread never touches cells or pixels itself; it only
//! posts tick events into a channel that the engine drains on the render
//! timeline.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

/// Events marshalled from background timelines onto the render timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// The flash interval elapsed; toggle the flash phase.
    FlashTick,
}

/// Periodic ticker owned by the engine. Dropping it stops the thread.
#[derive(Debug)]
pub struct FlashTicker {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

/// How often the ticker thread re-checks the stop flag while waiting out an
/// interval. Bounds how long [`FlashTicker::stop`] can block.
const STOP_POLL: Duration = Duration::from_millis(10);

impl FlashTicker {
    /// Spawns the ticker thread, posting [`EngineEvent::FlashTick`] every
    /// `interval` until stopped or the receiving side goes away.
    pub fn spawn(interval: Duration, tx: Sender<EngineEvent>) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);
        let handle = std::thread::Builder::new()
            .name("flash-ticker".into())
            .spawn(move || loop {
                // Sleep in short slices so a stop request interrupts the
                // wait instead of blocking until the interval elapses.
                let mut slept = Duration::ZERO;
                while slept < interval {
                    if thread_stop.load(Ordering::Relaxed) {
                        return;
                    }
                    let slice = STOP_POLL.min(interval - slept);
                    std::thread::sleep(slice);
                    slept += slice;
                }
                if thread_stop.load(Ordering::Relaxed) {
                    return;
                }
                if tx.send(EngineEvent::FlashTick).is_err() {
                    return;
                }
            })
            .expect("spawn flash ticker thread");

        Self {
            stop,
            handle: Some(handle),
        }
    }

    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for FlashTicker {
    fn drop(&mut self) {
        self.stop();
    }
}
