//! Build errors for transition tables and transitions.

use thiserror::Error;

/// Errors that can occur when building transition tables and transitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error("Transition trigger not specified. Call .on(trigger)")]
    MissingTrigger,

    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error("Duplicate '{trigger}' transition out of state '{from}'")]
    DuplicateTransition { trigger: String, from: String },
}
