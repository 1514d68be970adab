//! Guard predicates for controlling state transitions.
//!
//! A guard is a pure boolean function over a state. Transition rules carry an
//! optional guard; a rule only fires when its guard accepts the current state.

use super::state::State;
use std::fmt;
use std::sync::Arc;

/// Pure predicate that determines if a transition can execute.
///
/// Guards are shared between clones of a transition table, so the predicate
/// is reference counted and must be thread-safe.
///
/// # Example
///
/// ```rust
/// use mathdrill::core::Guard;
/// use mathdrill::session::Phase;
///
/// let gradable = Guard::new(|phase: &Phase| phase.is_gradable());
///
/// assert!(gradable.check(&Phase::Presenting));
/// assert!(gradable.check(&Phase::AnswerShown));
/// assert!(!gradable.check(&Phase::Graded));
/// ```
pub struct Guard<S: State> {
    predicate: Arc<dyn Fn(&S) -> bool + Send + Sync>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Check if the guard allows a transition from this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> Clone for Guard<S> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<S: State> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}
