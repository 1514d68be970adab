use super::Problem;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Token that selects every problem.
pub const ALL_TOKEN: &str = "all";

/// Which problems the user wants to practice.
///
/// Travels as a plain token: `"all"` or a set id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Filter {
    #[default]
    All,
    Set(String),
}

impl Filter {
    pub fn set(id: impl Into<String>) -> Self {
        Filter::Set(id.into())
    }

    /// Parse a filter token. Total: anything but `"all"` names a set.
    pub fn parse(token: &str) -> Self {
        if token == ALL_TOKEN {
            Filter::All
        } else {
            Filter::Set(token.to_string())
        }
    }

    pub fn token(&self) -> &str {
        match self {
            Filter::All => ALL_TOKEN,
            Filter::Set(id) => id,
        }
    }

    pub fn matches(&self, problem: &Problem) -> bool {
        match self {
            Filter::All => true,
            Filter::Set(id) => problem.set == *id,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Filter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Filter::parse(s))
    }
}

impl From<String> for Filter {
    fn from(token: String) -> Self {
        if token == ALL_TOKEN {
            Filter::All
        } else {
            Filter::Set(token)
        }
    }
}

impl From<Filter> for String {
    fn from(filter: Filter) -> Self {
        match filter {
            Filter::All => ALL_TOKEN.to_string(),
            Filter::Set(id) => id,
        }
    }
}
