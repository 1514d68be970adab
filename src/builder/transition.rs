//! Builder for constructing single transition rules.

use crate::builder::error::BuildError;
use crate::core::{Guard, State};
use crate::machine::{Transition, Trigger};

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<S: State, T: Trigger> {
    trigger: Option<T>,
    from: Option<S>,
    to: Option<S>,
    guard: Option<Guard<S>>,
}

impl<S: State, T: Trigger> TransitionBuilder<S, T> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            trigger: None,
            from: None,
            to: None,
            guard: None,
        }
    }

    /// Set the event that fires the transition (required).
    pub fn on(mut self, trigger: T) -> Self {
        self.trigger = Some(trigger);
        self
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Add a guard predicate (optional).
    pub fn guard(mut self, guard: Guard<S>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard using a closure (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<S, T>, BuildError> {
        let trigger = self.trigger.ok_or(BuildError::MissingTrigger)?;
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok(Transition {
            trigger,
            from,
            to,
            guard: self.guard,
        })
    }
}

impl<S: State, T: Trigger> Default for TransitionBuilder<S, T> {
    fn default() -> Self {
        Self::new()
    }
}
