use crate::machine::Trigger;
use serde::{Deserialize, Serialize};
use std::fmt;

/// User-triggered events the session reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    NewProblem,
    Reveal,
    GradeCorrect,
    GradeIncorrect,
    FilterChanged,
    ResetStats,
}

impl Trigger for Event {
    fn name(&self) -> &'static str {
        match self {
            Event::NewProblem => "NewProblem",
            Event::Reveal => "Reveal",
            Event::GradeCorrect => "GradeCorrect",
            Event::GradeIncorrect => "GradeIncorrect",
            Event::FilterChanged => "FilterChanged",
            Event::ResetStats => "ResetStats",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
