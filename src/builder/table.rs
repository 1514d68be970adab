//! Builder for constructing transition tables.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::State;
use crate::machine::{Transition, TransitionTable, Trigger};

/// Builder for constructing transition tables with a fluent API.
///
/// `build` rejects empty tables and tables where two rules share the same
/// trigger and source state, since lookups would silently pick the first.
pub struct TransitionTableBuilder<S: State, T: Trigger> {
    transitions: Vec<Transition<S, T>>,
}

impl<S: State, T: Trigger> TransitionTableBuilder<S, T> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<S, T>) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S, T>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add the same trigger and target for several source states.
    pub fn fan_in(mut self, trigger: T, from: &[S], to: S) -> Self {
        for source in from {
            self.transitions
                .push(Transition::new(trigger, source.clone(), to.clone()));
        }
        self
    }

    /// Build the table.
    pub fn build(self) -> Result<TransitionTable<S, T>, BuildError> {
        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        for (i, transition) in self.transitions.iter().enumerate() {
            let duplicate = self.transitions[..i]
                .iter()
                .any(|earlier| earlier.matches(transition.trigger, &transition.from));
            if duplicate {
                return Err(BuildError::DuplicateTransition {
                    trigger: transition.trigger.name().to_string(),
                    from: transition.from.name().to_string(),
                });
            }
        }

        Ok(TransitionTable::new(self.transitions))
    }
}

impl<S: State, T: Trigger> Default for TransitionTableBuilder<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Event, Phase};

    #[test]
    fn builder_requires_transitions() {
        let result = TransitionTableBuilder::<Phase, Event>::new().build();

        assert!(matches!(result, Err(BuildError::NoTransitions)));
    }

    #[test]
    fn builder_rejects_duplicate_rules() {
        let result = TransitionTableBuilder::new()
            .add_transition(Transition::new(
                Event::Reveal,
                Phase::Presenting,
                Phase::AnswerShown,
            ))
            .add_transition(Transition::new(
                Event::Reveal,
                Phase::Presenting,
                Phase::Graded,
            ))
            .build();

        assert_eq!(
            result.unwrap_err(),
            BuildError::DuplicateTransition {
                trigger: "Reveal".to_string(),
                from: "Presenting".to_string(),
            }
        );
    }

    #[test]
    fn fluent_api_builds_table() {
        let table = TransitionTableBuilder::new()
            .fan_in(
                Event::NewProblem,
                &[Phase::Idle, Phase::Graded],
                Phase::Presenting,
            )
            .transition(
                TransitionBuilder::new()
                    .on(Event::Reveal)
                    .from(Phase::Presenting)
                    .to(Phase::AnswerShown),
            )
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(table.transitions().len(), 3);
        assert!(table.permits(Event::NewProblem, &Phase::Graded));
        assert!(!table.permits(Event::Reveal, &Phase::Idle));
    }
}
