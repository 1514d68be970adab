//! Runtime configuration.

use crate::problem::Filter;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while reading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Settings for a practice runtime. Every field has a default, so `{}` is a
/// valid configuration.
///
/// ```rust
/// use mathdrill::config::PracticeConfig;
/// use mathdrill::problem::Filter;
/// use std::time::Duration;
///
/// let config = PracticeConfig::from_json_str(r#"{"initial_filter": "set2", "seed": 9}"#).unwrap();
/// assert_eq!(config.initial_filter, Filter::set("set2"));
/// assert_eq!(config.tick_interval(), Duration::from_secs(1));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PracticeConfig {
    /// Stopwatch period in milliseconds.
    pub tick_interval_ms: u64,
    /// Filter applied right after loading.
    pub initial_filter: Filter,
    /// Fixed seed for problem draws; entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl Default for PracticeConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            initial_filter: Filter::All,
            seed: None,
        }
    }
}

impl PracticeConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Stopwatch period; zero is bumped to one millisecond since tokio
    /// intervals reject a zero period.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_tick_interval(mut self, period: Duration) -> Self {
        self.tick_interval_ms = u64::try_from(period.as_millis()).unwrap_or(u64::MAX);
        self
    }
}
