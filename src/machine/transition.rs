//! Transition rules and the errors produced when no rule applies.

use crate::core::{Guard, State};
use std::fmt::Debug;

/// Events that can drive a transition.
///
/// Triggers are plain tags: the payload an event carries (a filter value, a
/// tick handle) is handled by the caller, the table only matches on the tag.
pub trait Trigger: Copy + PartialEq + Debug + Send + Sync {
    /// Name used in history records and log lines.
    fn name(&self) -> &'static str;
}

/// Errors that can occur when looking up a transition.
///
/// A rejected transition is never fatal: the session keeps its state and the
/// error travels back inside the step outcome.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("No '{trigger}' transition available from state '{from}'")]
    NoTransition { trigger: String, from: String },

    #[error("Guard blocked '{trigger}' transition from '{from}'")]
    GuardBlocked { trigger: String, from: String },
}

/// A single rule: on `trigger`, move from `from` to `to` if the guard agrees.
pub struct Transition<S: State, T: Trigger> {
    pub trigger: T,
    pub from: S,
    pub to: S,
    pub guard: Option<Guard<S>>,
}

impl<S: State, T: Trigger> Transition<S, T> {
    /// Unguarded rule.
    pub fn new(trigger: T, from: S, to: S) -> Self {
        Self {
            trigger,
            from,
            to,
            guard: None,
        }
    }

    /// Rule that only fires when `predicate` accepts the current state.
    pub fn guarded<F>(trigger: T, from: S, to: S, predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Self {
            trigger,
            from,
            to,
            guard: Some(Guard::new(predicate)),
        }
    }

    /// Whether this rule is keyed on `trigger` out of `current`.
    pub fn matches(&self, trigger: T, current: &S) -> bool {
        self.trigger == trigger && *current == self.from
    }

    /// Check if this transition can execute from the current state (pure)
    pub fn can_execute(&self, trigger: T, current: &S) -> bool {
        if !self.matches(trigger, current) {
            return false;
        }

        self.guard.as_ref().is_none_or(|g| g.check(current))
    }
}

impl<S: State, T: Trigger> Clone for Transition<S, T> {
    fn clone(&self) -> Self {
        Self {
            trigger: self.trigger,
            from: self.from.clone(),
            to: self.to.clone(),
            guard: self.guard.clone(),
        }
    }
}

impl<S: State, T: Trigger> Debug for Transition<S, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transition")
            .field("trigger", &self.trigger)
            .field("from", &self.from)
            .field("to", &self.to)
            .field("guarded", &self.guard.is_some())
            .finish()
    }
}
