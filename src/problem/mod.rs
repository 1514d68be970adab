//! Problem records and the collection they are loaded in.

mod filter;

pub use filter::{Filter, ALL_TOKEN};

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// One practice problem.
///
/// `expression` and `answer` are opaque markup (typically LaTeX); rendering
/// them is the presenter's job. `number` and `section` are display-only and
/// are accepted as either JSON strings or JSON numbers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub set: String,
    #[serde(deserialize_with = "display_string")]
    pub number: String,
    #[serde(deserialize_with = "display_string")]
    pub section: String,
    pub expression: String,
    pub answer: String,
}

impl Problem {
    pub fn new(
        set: impl Into<String>,
        number: impl Into<String>,
        section: impl Into<String>,
        expression: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            set: set.into(),
            number: number.into(),
            section: section.into(),
            expression: expression.into(),
            answer: answer.into(),
        }
    }
}

/// The document delivered by the data loader.
///
/// ```json
/// {
///   "sets": { "set1": "Set 1 – General antiderivative" },
///   "problems": [
///     { "set": "set1", "number": 1, "section": "4.1",
///       "expression": "\\int x^2 \\, dx", "answer": "\\frac{x^3}{3} + C" }
///   ]
/// }
/// ```
///
/// Both keys are optional; a document without `problems` is an empty
/// collection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemCollection {
    #[serde(default)]
    pub sets: BTreeMap<String, String>,
    #[serde(default)]
    pub problems: Vec<Problem>,
}

impl ProblemCollection {
    pub fn new(problems: Vec<Problem>) -> Self {
        Self {
            sets: BTreeMap::new(),
            problems,
        }
    }

    /// Attach a display title to a set id.
    pub fn with_title(mut self, set: impl Into<String>, title: impl Into<String>) -> Self {
        self.sets.insert(set.into(), title.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }
}

fn display_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}
