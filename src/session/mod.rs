//! The practice session state machine.
//!
//! A [`Session`] is a value: every transition takes the current session and
//! returns the next one inside a [`Step`], together with what happened and
//! what the timer driver should do. Nothing here spawns tasks or reads the
//! wall clock for timing; ticks arrive from outside through
//! [`Session::tick`].

mod event;
mod phase;
mod stats;
mod status;
mod table;

pub use event::Event;
pub use phase::Phase;
pub use stats::Stats;
pub use status::Status;
pub use table::standard_table;

use crate::core::{State, StateHistory, StateTransition};
use crate::machine::{TransitionError, TransitionTable};
use crate::problem::Problem;
use crate::stopwatch::{Stopwatch, TickHandle};
use chrono::{DateTime, Utc};
use rand::seq::IndexedRandom;
use rand::Rng;
use std::sync::{Arc, OnceLock};
use uuid::Uuid;

/// Number of transitions a session remembers.
pub const HISTORY_LIMIT: usize = 64;

/// What the tick driver has to do after a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerCommand {
    /// Leave the ticker as it is.
    Keep,
    /// Cancel whatever is running and tick this handle from now on.
    Arm(TickHandle),
    /// Cancel whatever is running.
    Disarm,
}

/// Result of feeding one event to the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Applied { from: Phase, to: Phase },
    /// `NewProblem` with an empty active set; the session is now `Idle`.
    NoProblems,
    /// No rule accepted the event. The session is unchanged.
    Rejected(TransitionError),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied { .. })
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }
}

#[derive(Clone, Debug)]
pub struct Step {
    pub session: Session,
    pub outcome: Outcome,
    pub timer: TimerCommand,
}

/// Current problem, answer visibility, counters and stopwatch for one study
/// session.
///
/// # Example
///
/// ```rust
/// use mathdrill::problem::Problem;
/// use mathdrill::session::{Event, Phase, Session};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let active = vec![Problem::new("set1", "1", "4.1", "\\int 2x\\,dx", "x^2 + C")];
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let session = Session::new();
/// let step = session.apply(Event::NewProblem, &active, &mut rng);
/// assert_eq!(step.session.phase(), Phase::Presenting);
///
/// let step = step.session.apply(Event::GradeCorrect, &active, &mut rng);
/// assert_eq!(step.session.stats().attempted(), 1);
/// assert_eq!(step.session.stats().correct(), 1);
/// assert!(!step.session.is_gradable());
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    id: Uuid,
    started_at: DateTime<Utc>,
    phase: Phase,
    current: Option<Problem>,
    answer_visible: bool,
    stats: Stats,
    stopwatch: Stopwatch,
    status: Option<Status>,
    history: Arc<StateHistory<Phase>>,
    table: Arc<TransitionTable<Phase, Event>>,
}

fn shared_table() -> Arc<TransitionTable<Phase, Event>> {
    static TABLE: OnceLock<Arc<TransitionTable<Phase, Event>>> = OnceLock::new();
    Arc::clone(TABLE.get_or_init(|| Arc::new(standard_table())))
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            phase: Phase::Idle,
            current: None,
            answer_visible: false,
            stats: Stats::new(),
            stopwatch: Stopwatch::new(),
            status: None,
            history: Arc::new(StateHistory::bounded(HISTORY_LIMIT)),
            table: shared_table(),
        }
    }

    /// Feed one event to the session.
    ///
    /// `active` is the problem store's current filtered subset; it is only
    /// read by `NewProblem`, which draws uniformly with replacement.
    pub fn apply<R>(&self, event: Event, active: &[Problem], rng: &mut R) -> Step
    where
        R: Rng + ?Sized,
    {
        let from = self.phase;
        let target = match self.table.resolve(event, &from) {
            Ok(rule) => rule.to,
            Err(err) => {
                tracing::debug!(%event, from = from.name(), error = %err, "transition rejected");
                return Step {
                    session: self.clone(),
                    outcome: Outcome::Rejected(err),
                    timer: TimerCommand::Keep,
                };
            }
        };

        let mut next = self.clone();
        let mut outcome = Outcome::Applied { from, to: target };
        let mut timer = TimerCommand::Keep;
        let mut to = target;

        match event {
            Event::NewProblem => {
                next.answer_visible = false;
                match active.choose(rng) {
                    Some(problem) => {
                        tracing::info!(
                            set = %problem.set,
                            number = %problem.number,
                            pool = active.len(),
                            "problem drawn"
                        );
                        next.current = Some(problem.clone());
                        next.status = None;
                        timer = TimerCommand::Arm(next.stopwatch.start());
                    }
                    None => {
                        tracing::info!("no problems available for the active filter");
                        next.current = None;
                        next.status = Some(Status::NoProblems);
                        next.stopwatch.reset();
                        timer = TimerCommand::Disarm;
                        to = Phase::Idle;
                        outcome = Outcome::NoProblems;
                    }
                }
            }
            Event::Reveal => {
                next.answer_visible = true;
            }
            Event::GradeCorrect | Event::GradeIncorrect => {
                next.stats.record(event == Event::GradeCorrect);
                next.stopwatch.stop();
                timer = TimerCommand::Disarm;
            }
            Event::FilterChanged => {
                next.current = None;
                next.answer_visible = false;
                next.status = Some(Status::FilterApplied);
                next.stopwatch.reset();
                timer = TimerCommand::Disarm;
            }
            Event::ResetStats => {
                next.stats = Stats::new();
            }
        }

        next.phase = to;
        next.history = Arc::new(self.history.record(StateTransition {
            from,
            to,
            trigger: event.to_string(),
            timestamp: Utc::now(),
        }));

        Step {
            session: next,
            outcome,
            timer,
        }
    }

    /// Count one stopwatch second.
    ///
    /// Returns `None` when the tick belongs to a cancelled run, in which case
    /// there is nothing to re-render.
    pub fn tick(&self, handle: TickHandle) -> Option<Session> {
        if self.stopwatch.handle() != Some(handle) {
            tracing::debug!(?handle, "stale tick ignored");
            return None;
        }
        let mut next = self.clone();
        next.stopwatch.tick(handle);
        Some(next)
    }

    /// Record a user-visible status without changing the phase.
    pub fn with_status(&self, status: Status) -> Session {
        let mut next = self.clone();
        next.status = Some(status);
        next
    }

    /// Whether `event` would currently be accepted (pure).
    pub fn permits(&self, event: Event) -> bool {
        self.table.permits(event, &self.phase)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current(&self) -> Option<&Problem> {
        self.current.as_ref()
    }

    pub fn is_answer_visible(&self) -> bool {
        self.answer_visible
    }

    /// True iff a problem is current and has not been graded yet.
    pub fn is_gradable(&self) -> bool {
        self.phase.is_gradable() && self.current.is_some()
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    pub fn status(&self) -> Option<Status> {
        self.status
    }

    pub fn history(&self) -> &StateHistory<Phase> {
        &self.history
    }
}
