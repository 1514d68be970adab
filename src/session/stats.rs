use serde::{Deserialize, Serialize};

/// Attempt counters for the session.
///
/// `correct` can never exceed `attempted`: the only way to bump `correct` is
/// `record(true)`, which bumps both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    attempted: u32,
    correct: u32,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, correct: bool) {
        self.attempted = self.attempted.saturating_add(1);
        if correct {
            self.correct = self.correct.saturating_add(1);
        }
    }

    pub fn attempted(&self) -> u32 {
        self.attempted
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    /// Percentage of correct attempts, rounded half up; 0 with no attempts.
    ///
    /// ```rust
    /// use mathdrill::session::Stats;
    ///
    /// let mut stats = Stats::new();
    /// assert_eq!(stats.accuracy(), 0);
    ///
    /// stats.record(true);
    /// stats.record(false);
    /// stats.record(false);
    /// assert_eq!(stats.accuracy(), 33);
    /// ```
    pub fn accuracy(&self) -> u32 {
        if self.attempted == 0 {
            return 0;
        }
        let attempted = u64::from(self.attempted);
        let correct = u64::from(self.correct);
        // round(100 * c / a) == floor((200 * c + a) / (2 * a))
        ((200 * correct + attempted) / (2 * attempted)) as u32
    }
}
