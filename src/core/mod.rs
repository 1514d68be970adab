//! Core state machine types.
//!
//! This module contains the pure pieces the session is built from:
//! - State definitions via the `State` trait
//! - Guard predicates for transition control
//! - Immutable history tracking
//!
//! Nothing in here performs I/O or touches a clock other than to stamp
//! history entries.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
