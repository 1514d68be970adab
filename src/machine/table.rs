//! Lookup table of transition rules.

use crate::core::State;
use crate::machine::transition::{Transition, TransitionError, Trigger};

/// The complete set of legal transitions for a machine.
pub struct TransitionTable<S: State, T: Trigger> {
    transitions: Vec<Transition<S, T>>,
}

impl<S: State, T: Trigger> TransitionTable<S, T> {
    /// Wrap a list of rules without validation.
    ///
    /// Use [`TransitionTableBuilder`](crate::builder::TransitionTableBuilder)
    /// when the rules come from user code and should be checked.
    pub fn new(transitions: Vec<Transition<S, T>>) -> Self {
        Self { transitions }
    }

    /// Find the rule that fires on `trigger` from `current`.
    ///
    /// Distinguishes "no rule at all" from "a rule exists but its guard
    /// refused", so callers can log the difference.
    pub fn resolve(&self, trigger: T, current: &S) -> Result<&Transition<S, T>, TransitionError> {
        let mut saw_candidate = false;
        for transition in &self.transitions {
            if !transition.matches(trigger, current) {
                continue;
            }
            saw_candidate = true;
            if transition.can_execute(trigger, current) {
                return Ok(transition);
            }
        }

        if saw_candidate {
            Err(TransitionError::GuardBlocked {
                trigger: trigger.name().to_string(),
                from: current.name().to_string(),
            })
        } else {
            Err(TransitionError::NoTransition {
                trigger: trigger.name().to_string(),
                from: current.name().to_string(),
            })
        }
    }

    /// Whether `trigger` would be accepted from `current` (pure).
    pub fn permits(&self, trigger: T, current: &S) -> bool {
        self.resolve(trigger, current).is_ok()
    }

    pub fn transitions(&self) -> &[Transition<S, T>] {
        &self.transitions
    }
}

impl<S: State, T: Trigger> Clone for TransitionTable<S, T> {
    fn clone(&self) -> Self {
        Self {
            transitions: self.transitions.clone(),
        }
    }
}

impl<S: State, T: Trigger> std::fmt::Debug for TransitionTable<S, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(&self.transitions).finish()
    }
}
