//! Loader error types.

use thiserror::Error;

/// Why a problem was dropped from a collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProblemViolation {
    #[error("problem #{index} has an empty set id")]
    BlankSet { index: usize },

    #[error("problem #{index} uses the reserved set id 'all'")]
    ReservedSet { index: usize },

    #[error("problem #{index} ({set} {number}) has an empty expression")]
    BlankExpression {
        index: usize,
        set: String,
        number: String,
    },

    #[error("problem #{index} ({set} {number}) has an empty answer")]
    BlankAnswer {
        index: usize,
        set: String,
        number: String,
    },

    #[error("problem #{index} duplicates {set} {number}")]
    Duplicate {
        index: usize,
        set: String,
        number: String,
    },
}

/// Errors that can occur while fetching and decoding a problem collection.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source could not be read
    #[error("could not read {source_name}: {message}")]
    Unavailable {
        source_name: String,
        message: String,
    },

    /// The document is not a valid problem collection
    #[error("could not parse problem collection: {0}")]
    Parse(#[from] serde_json::Error),
}
