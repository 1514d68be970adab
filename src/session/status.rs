use serde::{Deserialize, Serialize};
use std::fmt;

/// User-visible notice shown in place of a problem header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    LoadFailed,
    FilterApplied,
    NoProblems,
}

impl Status {
    pub fn message(&self) -> &'static str {
        match self {
            Status::LoadFailed => "Error: could not load problems",
            Status::FilterApplied => "Filter applied. Click \"New Problem\" to begin.",
            Status::NoProblems => "No problems available for this filter.",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
