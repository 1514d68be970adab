//! Transition history for a practice session.
//!
//! Every accepted transition is appended to an immutable history so the
//! presentation layer (or a test) can replay what the user did.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single accepted transition.
///
/// # Example
///
/// ```rust
/// use mathdrill::core::StateTransition;
/// use mathdrill::session::Phase;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: Phase::Idle,
///     to: Phase::Presenting,
///     trigger: "NewProblem".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.trigger, "NewProblem");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Name of the event that caused the transition
    pub trigger: String,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of the most recent state transitions.
///
/// `record` returns a new history with the transition appended and leaves the
/// receiver untouched. A bounded history keeps only the newest `limit`
/// entries, so recording costs at most `limit` clones.
///
/// # Example
///
/// ```rust
/// use mathdrill::core::{StateHistory, StateTransition};
/// use mathdrill::session::Phase;
/// use chrono::Utc;
///
/// let history = StateHistory::bounded(8)
///     .record(StateTransition {
///         from: Phase::Idle,
///         to: Phase::Presenting,
///         trigger: "NewProblem".to_string(),
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         from: Phase::Presenting,
///         to: Phase::Graded,
///         trigger: "GradeCorrect".to_string(),
///         timestamp: Utc::now(),
///     });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&Phase::Idle, &Phase::Presenting, &Phase::Graded]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
    #[serde(default)]
    limit: Option<usize>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty, unbounded history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            limit: None,
        }
    }

    /// Create a history that keeps at most `limit` transitions (minimum 1).
    pub fn bounded(limit: usize) -> Self {
        Self {
            transitions: Vec::new(),
            limit: Some(limit.max(1)),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// When the history is full the oldest entry is dropped.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let skip = match self.limit {
            Some(limit) if self.transitions.len() >= limit => self.transitions.len() + 1 - limit,
            _ => 0,
        };
        let mut transitions = Vec::with_capacity(self.transitions.len() + 1 - skip);
        transitions.extend(self.transitions[skip..].iter().cloned());
        transitions.push(transition);
        Self {
            transitions,
            limit: self.limit,
        }
    }

    /// Get the path of states traversed: the first `from`, then every `to`.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Count transitions fired by the named trigger.
    pub fn count_trigger(&self, trigger: &str) -> usize {
        self.transitions
            .iter()
            .filter(|t| t.trigger == trigger)
            .count()
    }

    /// Get all transitions in the order they were recorded.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
