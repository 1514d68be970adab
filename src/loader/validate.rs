//! Structural checks on a freshly parsed collection.
//!
//! Each problem is checked with `Validation` so every fault of a malformed
//! problem is reported in one pass. Malformed problems are dropped; the rest
//! of the collection is kept.

use crate::loader::error::ProblemViolation;
use crate::problem::{Problem, ProblemCollection, ALL_TOKEN};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<ProblemViolation>>;

/// A collection after screening: the problems worth keeping plus everything
/// that was wrong with the ones that were dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Screened {
    pub collection: ProblemCollection,
    pub skipped: Vec<ProblemViolation>,
}

fn require(ok: bool, violation: impl FnOnce() -> ProblemViolation) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// Check one problem's fields, accumulating ALL violations.
pub fn validate_problem(index: usize, problem: &Problem) -> Check {
    let set = problem.set.trim();
    let checks = vec![
        require(!set.is_empty(), || ProblemViolation::BlankSet { index }),
        require(set != ALL_TOKEN, || ProblemViolation::ReservedSet { index }),
        require(!problem.expression.trim().is_empty(), || {
            ProblemViolation::BlankExpression {
                index,
                set: problem.set.clone(),
                number: problem.number.clone(),
            }
        }),
        require(!problem.answer.trim().is_empty(), || {
            ProblemViolation::BlankAnswer {
                index,
                set: problem.set.clone(),
                number: problem.number.clone(),
            }
        }),
    ];

    Validation::all_vec(checks).map(|_| ())
}

/// Keep every well-formed problem, in order, and report the rest.
///
/// A repeated `(set, number)` keeps the first well-formed occurrence.
pub fn screen_collection(collection: ProblemCollection) -> Screened {
    let ProblemCollection { sets, problems } = collection;
    let mut kept = Vec::with_capacity(problems.len());
    let mut skipped = Vec::new();
    let mut seen = HashSet::new();

    for (index, problem) in problems.into_iter().enumerate() {
        if let Validation::Failure(errors) = validate_problem(index, &problem) {
            skipped.extend(errors.iter().cloned());
            continue;
        }
        if !seen.insert((problem.set.clone(), problem.number.clone())) {
            skipped.push(ProblemViolation::Duplicate {
                index,
                set: problem.set,
                number: problem.number,
            });
            continue;
        }
        kept.push(problem);
    }

    Screened {
        collection: ProblemCollection {
            sets,
            problems: kept,
        },
        skipped,
    }
}
