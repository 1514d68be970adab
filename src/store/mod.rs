//! The loaded problem collection and its filtered view.

use crate::problem::{Filter, Problem, ProblemCollection};
use std::collections::BTreeMap;

/// Holds every loaded problem plus the subset matching the current filter.
///
/// `active` is rebuilt, never edited in place, whenever the collection or the
/// filter changes.
///
/// # Example
///
/// ```rust
/// use mathdrill::problem::{Filter, Problem, ProblemCollection};
/// use mathdrill::store::ProblemStore;
///
/// let mut store = ProblemStore::new();
/// store.load(ProblemCollection::new(vec![
///     Problem::new("set1", "1", "4.1", "\\int 2x\\,dx", "x^2 + C"),
///     Problem::new("set2", "1", "4.2", "\\int 3\\,dx", "3x + C"),
/// ]));
///
/// store.set_filter(Filter::set("set2"));
/// assert_eq!(store.active().len(), 1);
/// assert_eq!(store.active()[0].set, "set2");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ProblemStore {
    all: Vec<Problem>,
    active: Vec<Problem>,
    titles: BTreeMap<String, String>,
    filter: Filter,
}

impl ProblemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection and recompute the active subset with the
    /// current filter.
    pub fn load(&mut self, collection: ProblemCollection) {
        self.all = collection.problems;
        self.titles = collection.sets;
        self.recompute();
    }

    /// Switch filters and rebuild the active subset.
    ///
    /// Unknown set ids are accepted and simply select nothing.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.active = self
            .all
            .iter()
            .filter(|p| self.filter.matches(p))
            .cloned()
            .collect();
    }

    pub fn all(&self) -> &[Problem] {
        &self.all
    }

    pub fn active(&self) -> &[Problem] {
        &self.active
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Every selectable filter: `All`, then each set id in the order it
    /// first appears in the collection.
    pub fn filters(&self) -> Vec<Filter> {
        let mut filters = vec![Filter::All];
        for problem in &self.all {
            let candidate = Filter::set(problem.set.as_str());
            if !filters.contains(&candidate) {
                filters.push(candidate);
            }
        }
        filters
    }

    /// Display title for a set, falling back to the raw id.
    pub fn title_for<'a>(&'a self, set: &'a str) -> &'a str {
        self.titles.get(set).map(String::as_str).unwrap_or(set)
    }

    /// Header line shown above a problem.
    pub fn label_for(&self, problem: &Problem) -> String {
        format!(
            "{}, Problem {} (Book Sec. {})",
            self.title_for(&problem.set),
            problem.number,
            problem.section
        )
    }
}
