//! Per-problem elapsed-time stopwatch.
//!
//! The stopwatch itself is a plain value: it never spawns anything. Each
//! `start` hands out a [`TickHandle`]; a tick only counts when it carries the
//! handle of the current run. Whoever drives the ticks (the [`Ticker`] in the
//! runtime, or a test) just forwards the handle it was given, so a tick that
//! arrives after a restart or a stop is ignored.

mod ticker;

pub use ticker::Ticker;

use serde::{Deserialize, Serialize};

/// Identifies one run of the stopwatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickHandle(u64);

/// Whole seconds elapsed since the current problem was presented.
///
/// # Example
///
/// ```rust
/// use mathdrill::stopwatch::Stopwatch;
///
/// let mut watch = Stopwatch::new();
/// let handle = watch.start();
/// for _ in 0..5 {
///     watch.tick(handle);
/// }
/// assert_eq!(watch.seconds(), 5);
///
/// watch.stop();
/// assert!(!watch.tick(handle));
/// assert_eq!(watch.seconds(), 5);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stopwatch {
    seconds: u64,
    running: bool,
    generation: u64,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a fresh run from zero. Any previous run is cancelled first.
    pub fn start(&mut self) -> TickHandle {
        self.stop();
        self.seconds = 0;
        self.running = true;
        TickHandle(self.generation)
    }

    /// Halt counting. Idempotent.
    pub fn stop(&mut self) {
        self.running = false;
        // Invalidate every handle handed out so far.
        self.generation = self.generation.wrapping_add(1);
    }

    /// Stop and zero.
    pub fn reset(&mut self) {
        self.stop();
        self.seconds = 0;
    }

    /// Count one second if `handle` belongs to the running run.
    ///
    /// Returns whether the tick was counted.
    pub fn tick(&mut self, handle: TickHandle) -> bool {
        if !self.running || handle != TickHandle(self.generation) {
            return false;
        }
        self.seconds += 1;
        true
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Handle of the current run, if one is running.
    pub fn handle(&self) -> Option<TickHandle> {
        self.running.then_some(TickHandle(self.generation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_ticks_count_five_seconds() {
        let mut watch = Stopwatch::new();
        let handle = watch.start();

        for _ in 0..5 {
            assert!(watch.tick(handle));
        }

        assert_eq!(watch.seconds(), 5);
        assert!(watch.is_running());
    }

    #[test]
    fn stop_halts_further_increments() {
        let mut watch = Stopwatch::new();
        let handle = watch.start();
        watch.tick(handle);
        watch.stop();

        for _ in 0..3 {
            assert!(!watch.tick(handle));
        }

        assert_eq!(watch.seconds(), 1);
        assert!(!watch.is_running());
        assert_eq!(watch.handle(), None);
    }

    #[test]
    fn restart_zeroes_and_invalidates_old_handle() {
        let mut watch = Stopwatch::new();
        let first = watch.start();
        watch.tick(first);
        watch.tick(first);

        let second = watch.start();

        assert_eq!(watch.seconds(), 0);
        assert_ne!(first, second);
        assert!(!watch.tick(first));
        assert!(watch.tick(second));
        assert_eq!(watch.seconds(), 1);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut watch = Stopwatch::new();
        watch.stop();
        watch.stop();

        assert!(!watch.is_running());
        assert_eq!(watch.seconds(), 0);
    }

    #[test]
    fn reset_zeroes_a_stopped_watch() {
        let mut watch = Stopwatch::new();
        let handle = watch.start();
        watch.tick(handle);
        watch.stop();
        watch.reset();

        assert_eq!(watch.seconds(), 0);
        assert!(!watch.is_running());
    }
}
