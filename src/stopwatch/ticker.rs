use super::TickHandle;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Owns the single periodic task that drives a [`Stopwatch`](super::Stopwatch).
///
/// At most one task is alive per ticker: arming again aborts the previous
/// task before spawning a new one, and dropping the ticker aborts it too.
/// Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    task: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self { period, task: None }
    }

    /// Start firing `handle` into `sink` once per period.
    ///
    /// The first tick fires one full period after arming. The task ends on its
    /// own when `sink` returns `false` (the receiver is gone).
    pub fn arm<F>(&mut self, handle: TickHandle, sink: F)
    where
        F: Fn(TickHandle) -> bool + Send + 'static,
    {
        self.disarm();

        let period = self.period;
        self.task = Some(tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Burst);
            loop {
                interval.tick().await;
                if !sink(handle) {
                    break;
                }
            }
        }));
    }

    /// Cancel the running task, if any. Idempotent.
    pub fn disarm(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.disarm();
    }
}
