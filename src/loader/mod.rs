//! Fetching the problem collection.
//!
//! Loading is the one effectful step at startup, so it is expressed as a
//! Stillwater effect run against an environment that knows where the
//! document lives. Tests swap the environment for an [`InlineSource`].
//!
//! # Example
//!
//! ```rust
//! use mathdrill::loader::{load_collection, InlineSource};
//! use stillwater::prelude::*;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let source = InlineSource::new(
//!     r#"{"problems": [{"set": "set1", "number": 1, "section": "4.1",
//!                       "expression": "\\int 1\\,dx", "answer": "x + C"}]}"#,
//! );
//!
//! let collection = load_collection::<InlineSource>().run(&source).await.unwrap();
//! assert_eq!(collection.len(), 1);
//! # });
//! ```

pub mod error;
pub mod validate;

pub use error::{LoadError, ProblemViolation};
pub use validate::{screen_collection, validate_problem, Screened};

use crate::problem::ProblemCollection;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;

/// Where the raw collection document comes from.
pub trait ProblemSource: Clone + Send + Sync + 'static {
    /// Human-readable name for log lines and errors.
    fn describe(&self) -> String;

    /// Read the raw JSON document.
    fn fetch(&self) -> Result<String, LoadError>;
}

/// Reads the collection from a JSON file on disk.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProblemSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<String, LoadError> {
        std::fs::read_to_string(&self.path).map_err(|err| LoadError::Unavailable {
            source_name: self.describe(),
            message: err.to_string(),
        })
    }
}

/// Serves a collection document held in memory.
#[derive(Clone, Debug)]
pub struct InlineSource {
    json: Arc<str>,
}

impl InlineSource {
    pub fn new(json: impl Into<Arc<str>>) -> Self {
        Self { json: json.into() }
    }
}

impl ProblemSource for InlineSource {
    fn describe(&self) -> String {
        "inline collection".to_string()
    }

    fn fetch(&self) -> Result<String, LoadError> {
        Ok(self.json.to_string())
    }
}

/// Decode a collection document, dropping malformed problems.
///
/// Each dropped problem is logged at warn level; only undecodable JSON is an
/// error.
pub fn parse_collection(raw: &str) -> Result<ProblemCollection, LoadError> {
    let collection: ProblemCollection = serde_json::from_str(raw)?;
    let Screened {
        collection,
        skipped,
    } = screen_collection(collection);
    for violation in &skipped {
        tracing::warn!(%violation, "skipping invalid problem");
    }
    Ok(collection)
}

/// Effect that fetches, parses and validates the collection from `Env`.
pub fn load_collection<Env>() -> BoxedEffect<ProblemCollection, LoadError, Env>
where
    Env: ProblemSource,
{
    from_fn(|env: &Env| -> Result<ProblemCollection, LoadError> {
        let raw = env.fetch()?;
        let collection = parse_collection(&raw)?;
        tracing::info!(
            source = %env.describe(),
            problems = collection.len(),
            sets = collection.sets.len(),
            "problem collection loaded"
        );
        Ok(collection)
    })
    .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_SETS: &str = r#"{
        "sets": {"set1": "Set 1 – General antiderivative"},
        "problems": [
            {"set": "set1", "number": 1, "section": "4.1", "expression": "a", "answer": "A"},
            {"set": "set2", "number": 1, "section": "4.1", "expression": "b", "answer": "B"}
        ]
    }"#;

    #[tokio::test]
    async fn inline_source_loads_collection() {
        let source = InlineSource::new(TWO_SETS);

        let collection = load_collection::<InlineSource>()
            .run(&source)
            .await
            .unwrap();

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.problems[1].set, "set2");
    }

    #[tokio::test]
    async fn missing_file_is_unavailable() {
        let source = FileSource::new("/definitely/not/here/problems.json");

        let result = load_collection::<FileSource>().run(&source).await;

        assert!(matches!(result, Err(LoadError::Unavailable { .. })));
    }

    #[tokio::test]
    async fn file_source_reads_from_disk() {
        let path = std::env::temp_dir().join(format!("mathdrill-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, TWO_SETS).unwrap();

        let result = load_collection::<FileSource>()
            .run(&FileSource::new(&path))
            .await;
        std::fs::remove_file(&path).unwrap();

        assert_eq!(result.unwrap().len(), 2);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            parse_collection("{\"problems\": [1, 2"),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn invalid_problems_are_skipped_and_the_rest_loaded() {
        let raw = r#"{"problems": [
            {"set": "", "number": 1, "section": "1", "expression": "", "answer": "A"},
            {"set": "set1", "number": 1, "section": "4.1", "expression": "a", "answer": "A"},
            {"set": "set1", "number": 1, "section": "4.1", "expression": "b", "answer": "B"}
        ]}"#;

        let collection = parse_collection(raw).unwrap();

        assert_eq!(collection.len(), 1);
        assert_eq!(collection.problems[0].expression, "a");
    }
}
