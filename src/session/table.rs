use super::{Event, Phase};
use crate::builder::TransitionTableBuilder;
use crate::machine::{Transition, TransitionTable};

/// The legal moves of a practice session.
///
/// | event            | from                      | to          |
/// |------------------|---------------------------|-------------|
/// | `NewProblem`     | any                       | Presenting  |
/// | `Reveal`         | Presenting, AnswerShown   | AnswerShown |
/// | `GradeCorrect`   | Presenting, AnswerShown   | Graded      |
/// | `GradeIncorrect` | Presenting, AnswerShown   | Graded      |
/// | `FilterChanged`  | any                       | Idle        |
/// | `ResetStats`     | any                       | unchanged   |
///
/// Grading rules are guarded on `Phase::is_gradable`. A `NewProblem` drawn
/// from an empty active set lands in `Idle` instead; that is decided by the
/// session, not the table.
///
/// # Panics
///
/// Never in practice: the rules above are fixed and pairwise distinct, which
/// `standard_rules_pass_builder_validation` checks. Sessions build this table
/// once and share it.
pub fn standard_table() -> TransitionTable<Phase, Event> {
    let mut builder = TransitionTableBuilder::new()
        .fan_in(Event::NewProblem, &Phase::ALL, Phase::Presenting)
        .fan_in(
            Event::Reveal,
            &[Phase::Presenting, Phase::AnswerShown],
            Phase::AnswerShown,
        )
        .fan_in(Event::FilterChanged, &Phase::ALL, Phase::Idle);

    for grade in [Event::GradeCorrect, Event::GradeIncorrect] {
        for from in [Phase::Presenting, Phase::AnswerShown] {
            builder = builder.add_transition(Transition::guarded(
                grade,
                from,
                Phase::Graded,
                Phase::is_gradable,
            ));
        }
    }

    for phase in Phase::ALL {
        builder = builder.add_transition(Transition::new(Event::ResetStats, phase, phase));
    }

    builder
        .build()
        .expect("standard session table has no duplicate rules")
}
