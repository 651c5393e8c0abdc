//! Shared progress counters and the background loop that renders them.
//!
//! The extractor is the only writer of [`ProgressState`]; a single
//! [`ProgressReporter`] polls it on a fixed interval and hands snapshots to a
//! [`Tracker`]. Reads are allowed to lag behind writes.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread;
use std::time::Duration;

#[derive(Debug, Default)]
pub struct ProgressState {
    total: AtomicU64,
    copied: AtomicU64,
    done: AtomicBool,
}

impl ProgressState {
    pub fn new(total: u64) -> Self {
        Self {
            total: AtomicU64::new(total),
            ..Self::default()
        }
    }

    pub fn total(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }

    pub fn copied(&self) -> u64 {
        self.copied.load(Ordering::Relaxed)
    }

    /// Count `bytes` as processed, whether or not they were written.
    pub fn advance(&self, bytes: u64) {
        self.copied.fetch_add(bytes, Ordering::Relaxed);
    }

    pub fn finish(&self) {
        self.done.store(true, Ordering::Release);
    }

    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Acquire)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            copied: self.copied(),
            total: self.total(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub copied: u64,
    pub total: u64,
}

impl Snapshot {
    /// Completed fraction in `0.0..=1.0`, `None` when nothing is to be copied.
    pub fn fraction(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some((self.copied as f64 / self.total as f64).min(1.0))
    }

    /// Filled cells of a bar `width` cells wide.
    pub fn filled_cells(&self, width: usize) -> usize {
        self.fraction()
            .map(|f| ((f * width as f64) as usize).min(width))
            .unwrap_or(0)
    }
}

/// Sink for rendered progress.
///
/// Implementations must not fail: an unavailable output stream is simply not
/// drawn to.
pub trait Tracker: Sync {
    fn draw(&self, snapshot: Snapshot);

    /// Final render once extraction has ended; terminates the progress line.
    fn finish(&self, snapshot: Snapshot);
}

impl<T: Tracker + ?Sized> Tracker for &T {
    fn draw(&self, snapshot: Snapshot) {
        (**self).draw(snapshot)
    }

    fn finish(&self, snapshot: Snapshot) {
        (**self).finish(snapshot)
    }
}

/// Discards every render.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentTracker;

impl Tracker for SilentTracker {
    fn draw(&self, _snapshot: Snapshot) {}

    fn finish(&self, _snapshot: Snapshot) {}
}

pub struct ProgressReporter<'a, T: Tracker> {
    state: &'a ProgressState,
    tracker: &'a T,
    interval: Duration,
}

impl<'a, T: Tracker> ProgressReporter<'a, T> {
    pub fn new(state: &'a ProgressState, tracker: &'a T, interval: Duration) -> Self {
        Self {
            state,
            tracker,
            interval,
        }
    }

    /// Render every `interval` until the state is marked done.
    pub fn run(&self) {
        loop {
            thread::sleep(self.interval);
            if self.state.is_done() {
                return;
            }
            self.tracker.draw(self.state.snapshot());
        }
    }
}
