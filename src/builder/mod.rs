//! Builder API for constructing transition tables.
//!
//! This module provides fluent builders and the `state_enum!` macro for
//! describing a state machine with minimal boilerplate.

pub mod error;
pub mod macros;
pub mod table;
pub mod transition;

pub use error::BuildError;
pub use table::TransitionTableBuilder;
pub use transition::TransitionBuilder;
