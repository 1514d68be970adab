//! Declarative transition rules.
//!
//! A machine is described as data: a [`TransitionTable`] of
//! `(trigger, from, to, guard)` rules. The session consults the table before
//! touching any of its fields, so an event with no matching rule can never
//! leave the session half-updated.

mod table;
mod transition;

pub use table::TransitionTable;
pub use transition::{Transition, TransitionError, Trigger};
