//! Mathdrill: flashcard practice for math problem sets
//!
//! Mathdrill keeps the study logic as a pure core and pushes I/O and timing
//! to a thin shell around it. The session is a value: each user event goes
//! in together with the current session, and a new session comes out along
//! with an outcome and a timer instruction.
//!
//! # Core Concepts
//!
//! - **Problem store**: the loaded collection and the subset matching the
//!   current filter
//! - **Session**: current problem, answer visibility, grading state and
//!   counters, driven by a declarative transition table
//! - **Stopwatch**: elapsed seconds per problem, ticked through cancellable
//!   handles
//! - **Runtime**: a single-consumer event loop that loads the collection,
//!   serializes events and ticks, and renders a [`presenter::SessionView`]
//!   after every change
//!
//! # Example
//!
//! ```rust
//! use mathdrill::config::PracticeConfig;
//! use mathdrill::practice::{Action, Practice};
//! use mathdrill::problem::{Filter, Problem, ProblemCollection};
//!
//! let mut practice = Practice::new(&PracticeConfig::default().with_seed(1));
//! practice.boot(Ok(ProblemCollection::new(vec![
//!     Problem::new("set1", "1", "4.1", "\\int 2x\\,dx", "x^2 + C"),
//!     Problem::new("set1", "2", "4.1", "\\int 3x^2\\,dx", "x^3 + C"),
//!     Problem::new("set2", "1", "4.2", "\\int \\cos x\\,dx", "\\sin x + C"),
//! ])));
//!
//! practice.dispatch(Action::ChangeFilter(Filter::set("set1")));
//! practice.dispatch(Action::NewProblem);
//! practice.dispatch(Action::Reveal);
//! practice.dispatch(Action::GradeCorrect);
//!
//! let view = practice.view();
//! assert_eq!((view.attempted, view.correct, view.accuracy), (1, 1, 100));
//! assert!(view.label.unwrap().starts_with("set1, Problem"));
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod loader;
pub mod machine;
pub mod practice;
pub mod presenter;
pub mod problem;
pub mod runtime;
pub mod session;
pub mod stopwatch;
pub mod store;

// Re-export commonly used types
pub use crate::core::{Guard, State, StateHistory, StateTransition};
pub use practice::{Action, Practice};
pub use presenter::{Presenter, SessionView};
pub use problem::{Filter, Problem, ProblemCollection};
pub use runtime::{start_practice, PracticeHandle};
pub use session::{Event, Phase, Session};
