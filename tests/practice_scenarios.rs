//! End-to-end study scenarios driven through [`Practice`].

use mathdrill::config::PracticeConfig;
use mathdrill::loader::parse_collection;
use mathdrill::practice::{Action, Practice};
use mathdrill::problem::Filter;
use mathdrill::session::{Outcome, Phase, TimerCommand};

const COLLECTION: &str = r#"{
    "sets": {"set1": "Set 1"},
    "problems": [
        {"set": "set1", "number": 1, "section": "4.1", "expression": "\\int 2x\\,dx", "answer": "x^2 + C"},
        {"set": "set1", "number": 2, "section": "4.1", "expression": "\\int 3x^2\\,dx", "answer": "x^3 + C"},
        {"set": "set2", "number": "7b", "section": "4.2", "expression": "\\int \\cos x\\,dx", "answer": "\\sin x + C"}
    ]
}"#;

fn booted(seed: u64) -> Practice {
    let mut practice = Practice::new(&PracticeConfig::default().with_seed(seed));
    practice.boot(parse_collection(COLLECTION));
    practice
}

#[test]
fn study_one_problem_from_a_filtered_set() {
    let mut practice = booted(17);

    practice.dispatch(Action::ChangeFilter(Filter::set("set1")));
    let view = practice.view();
    assert_eq!(view.phase, "Idle");
    assert_eq!(
        view.status.as_deref(),
        Some("Filter applied. Click \"New Problem\" to begin.")
    );
    assert_eq!(practice.store().active().len(), 2);

    let dispatched = practice.dispatch(Action::NewProblem);
    assert!(matches!(dispatched.timer, TimerCommand::Arm(_)));
    let view = practice.view();
    let label = view.label.clone().unwrap();
    assert!(
        label == "Set 1, Problem 1 (Book Sec. 4.1)" || label == "Set 1, Problem 2 (Book Sec. 4.1)",
        "unexpected label {label}"
    );
    assert!(view.answer.is_none());
    assert!(view.can_reveal);
    assert!(view.can_grade);
    assert_eq!(view.status, None);

    practice.dispatch(Action::Reveal);
    let view = practice.view();
    assert!(view.answer_visible);
    assert!(view.answer.is_some());

    practice.dispatch(Action::GradeCorrect);
    let view = practice.view();
    assert_eq!(view.phase, "Graded");
    assert_eq!((view.attempted, view.correct, view.accuracy), (1, 1, 100));
    assert!(!view.can_grade);

    let dispatched = practice.dispatch(Action::GradeCorrect);
    assert!(dispatched.outcome.is_rejected());
    assert_eq!(practice.view().attempted, 1);

    practice.dispatch(Action::NewProblem);
    let view = practice.view();
    assert_eq!(view.phase, "Presenting");
    assert_eq!((view.attempted, view.correct), (1, 1));
    assert!(view.can_grade);

    practice.dispatch(Action::GradeIncorrect);
    let view = practice.view();
    assert_eq!((view.attempted, view.correct, view.accuracy), (2, 1, 50));
}

#[test]
fn loading_shows_the_start_prompt() {
    let practice = booted(9);

    let view = practice.view();
    assert_eq!(view.phase, "Idle");
    assert_eq!(
        view.headline(),
        Some("Filter applied. Click \"New Problem\" to begin.")
    );
}

#[test]
fn malformed_problems_do_not_empty_the_collection() {
    let raw = r#"{"problems": [
        {"set": "set1", "number": 1, "section": "4.1", "expression": "a", "answer": "A"},
        {"set": "set1", "number": 1, "section": "4.1", "expression": "dup", "answer": "D"},
        {"set": "set1", "number": 2, "section": "4.1", "expression": "b", "answer": ""}
    ]}"#;
    let mut practice = Practice::new(&PracticeConfig::default().with_seed(6));
    practice.boot(parse_collection(raw));

    assert_eq!(practice.store().all().len(), 1);
    practice.dispatch(Action::NewProblem);
    assert_eq!(practice.view().expression.as_deref(), Some("a"));
}

#[test]
fn filter_without_problems_reports_empty_pool() {
    let mut practice = booted(3);

    practice.dispatch(Action::ChangeFilter(Filter::set("set9")));
    let dispatched = practice.dispatch(Action::NewProblem);

    assert_eq!(dispatched.outcome, Outcome::NoProblems);
    assert_eq!(dispatched.timer, TimerCommand::Disarm);
    let view = practice.view();
    assert_eq!(view.phase, "Idle");
    assert_eq!(view.label, None);
    assert_eq!(
        view.headline(),
        Some("No problems available for this filter.")
    );
}

#[test]
fn grading_without_a_problem_changes_nothing() {
    let mut practice = booted(5);

    for action in [Action::GradeCorrect, Action::GradeIncorrect, Action::Reveal] {
        assert!(practice.dispatch(action).outcome.is_rejected());
    }

    let view = practice.view();
    assert_eq!((view.attempted, view.correct, view.accuracy), (0, 0, 0));
    assert!(!view.answer_visible);
}

#[test]
fn accuracy_follows_graded_attempts() {
    let mut practice = booted(8);

    for correct in [true, true, false] {
        practice.dispatch(Action::NewProblem);
        practice.dispatch(if correct {
            Action::GradeCorrect
        } else {
            Action::GradeIncorrect
        });
    }
    let view = practice.view();
    assert_eq!((view.attempted, view.correct, view.accuracy), (3, 2, 67));

    practice.dispatch(Action::ResetStats);
    let view = practice.view();
    assert_eq!((view.attempted, view.correct, view.accuracy), (0, 0, 0));
    assert_eq!(practice.session().phase(), Phase::Graded);
}

#[test]
fn filters_list_every_set_in_order() {
    let practice = booted(1);

    let tokens: Vec<String> = practice
        .view()
        .filters
        .iter()
        .map(|f| f.token().to_string())
        .collect();

    assert_eq!(tokens, ["all", "set1", "set2"]);
}

#[test]
fn untitled_set_labels_with_its_id() {
    let mut practice = booted(2);

    practice.dispatch(Action::ChangeFilter(Filter::set("set2")));
    practice.dispatch(Action::NewProblem);

    assert_eq!(
        practice.view().label.as_deref(),
        Some("set2, Problem 7b (Book Sec. 4.2)")
    );
}

#[test]
fn switching_filters_discards_the_current_problem() {
    let mut practice = booted(4);
    practice.dispatch(Action::NewProblem);
    practice.dispatch(Action::Reveal);

    let dispatched = practice.dispatch(Action::ChangeFilter(Filter::All));

    assert_eq!(dispatched.timer, TimerCommand::Disarm);
    let view = practice.view();
    assert_eq!(view.expression, None);
    assert!(!view.answer_visible);
    assert_eq!(view.seconds, 0);
}

#[test]
fn draws_may_repeat_the_previous_problem() {
    let mut practice = booted(21);
    practice.dispatch(Action::ChangeFilter(Filter::set("set1")));

    let drawn: Vec<String> = (0..40)
        .map(|_| {
            practice.dispatch(Action::NewProblem);
            practice.dispatch(Action::GradeCorrect);
            practice.session().current().unwrap().number.clone()
        })
        .collect();

    assert!(drawn.iter().all(|n| n == "1" || n == "2"));
    assert!(drawn.windows(2).any(|pair| pair[0] == pair[1]));
    assert_eq!(practice.view().attempted, 40);
}
