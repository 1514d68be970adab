//! Property-based tests for the practice core.
//!
//! These tests use proptest to check that filtering, drawing, grading and
//! the stopwatch keep their guarantees across arbitrary inputs and event
//! sequences.

use mathdrill::problem::{Filter, Problem, ProblemCollection};
use mathdrill::session::{Event, Phase, Session};
use mathdrill::stopwatch::Stopwatch;
use mathdrill::store::ProblemStore;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

prop_compose! {
    fn arbitrary_problem()(set in 0..4u8, number in 1..50u32, expression in "[a-z]{1,6}") -> Problem {
        Problem::new(format!("set{set}"), number.to_string(), "4.1", expression, "answer")
    }
}

prop_compose! {
    fn arbitrary_filter()(choice in 0..6u8) -> Filter {
        match choice {
            0 => Filter::All,
            n => Filter::set(format!("set{}", n - 1)),
        }
    }
}

prop_compose! {
    fn arbitrary_event()(variant in 0..6u8) -> Event {
        match variant {
            0 => Event::NewProblem,
            1 => Event::Reveal,
            2 => Event::GradeCorrect,
            3 => Event::GradeIncorrect,
            4 => Event::FilterChanged,
            _ => Event::ResetStats,
        }
    }
}

proptest! {
    #[test]
    fn filtered_problems_all_belong_to_the_set(
        problems in prop::collection::vec(arbitrary_problem(), 0..30),
        filter in arbitrary_filter(),
    ) {
        let mut store = ProblemStore::new();
        store.load(ProblemCollection::new(problems.clone()));
        store.set_filter(filter.clone());

        match &filter {
            Filter::All => prop_assert_eq!(store.active(), &problems[..]),
            Filter::Set(id) => {
                prop_assert!(store.active().iter().all(|p| &p.set == id));
                let expected: Vec<_> = problems.iter().filter(|p| &p.set == id).cloned().collect();
                prop_assert_eq!(store.active(), &expected[..]);
            }
        }
    }

    #[test]
    fn drawn_problem_is_a_member_of_active(
        problems in prop::collection::vec(arbitrary_problem(), 1..30),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);

        let step = Session::new().apply(Event::NewProblem, &problems, &mut rng);

        prop_assert_eq!(step.session.phase(), Phase::Presenting);
        let current = step.session.current().cloned();
        prop_assert!(current.is_some_and(|p| problems.contains(&p)));
    }

    #[test]
    fn counters_stay_consistent_under_any_event_sequence(
        problems in prop::collection::vec(arbitrary_problem(), 0..10),
        events in prop::collection::vec(arbitrary_event(), 0..60),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = Session::new();

        for event in events {
            let before = session.stats();
            let was_gradable = session.is_gradable();
            session = session.apply(event, &problems, &mut rng).session;
            let after = session.stats();

            prop_assert!(after.correct() <= after.attempted());
            prop_assert_eq!(session.is_gradable(), session.phase().is_gradable() && session.current().is_some());

            if matches!(event, Event::GradeCorrect | Event::GradeIncorrect) && !was_gradable {
                prop_assert_eq!(before, after);
            }
            if session.phase() == Phase::Idle {
                prop_assert!(session.current().is_none());
                prop_assert!(!session.stopwatch().is_running());
            }
        }
    }

    #[test]
    fn stopwatch_counts_exactly_the_live_ticks(live in 0..20usize, late in 0..20usize) {
        let mut watch = Stopwatch::new();
        let handle = watch.start();

        for _ in 0..live {
            watch.tick(handle);
        }
        watch.stop();
        for _ in 0..late {
            watch.tick(handle);
        }

        prop_assert_eq!(watch.seconds(), live as u64);
    }
}

#[test]
fn draws_are_roughly_uniform() {
    let problems: Vec<Problem> = (1..=4)
        .map(|n| Problem::new("set1", n.to_string(), "4.1", format!("p{n}"), "a"))
        .collect();
    let mut rng = StdRng::seed_from_u64(2024);
    let mut counts = [0usize; 4];
    let trials = 40_000;

    let base = Session::new();
    for _ in 0..trials {
        let session = base.apply(Event::NewProblem, &problems, &mut rng).session;
        let drawn = session.current().unwrap();
        let index = problems.iter().position(|p| p == drawn).unwrap();
        counts[index] += 1;
    }

    for count in counts {
        let frequency = count as f64 / trials as f64;
        assert!(
            (0.23..0.27).contains(&frequency),
            "frequency {frequency} too far from 0.25"
        );
    }
}
