//! The single mutable resource set: store, session and random source.
//!
//! [`Practice`] is what an event handler owns. It turns user actions into
//! session events, keeps the store's filter in sync, and replaces its
//! session with whatever each transition returns.

use crate::config::PracticeConfig;
use crate::loader::LoadError;
use crate::presenter::SessionView;
use crate::problem::{Filter, ProblemCollection};
use crate::session::{Event, Outcome, Session, Status, Step, TimerCommand};
use crate::stopwatch::TickHandle;
use crate::store::ProblemStore;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Something the user asked for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    NewProblem,
    Reveal,
    GradeCorrect,
    GradeIncorrect,
    ChangeFilter(Filter),
    ResetStats,
}

/// What a dispatched action did, minus the new session (kept inside
/// [`Practice`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dispatched {
    pub outcome: Outcome,
    pub timer: TimerCommand,
}

#[derive(Debug)]
pub struct Practice {
    store: ProblemStore,
    session: Session,
    rng: StdRng,
}

impl Practice {
    pub fn new(config: &PracticeConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let mut store = ProblemStore::new();
        store.set_filter(config.initial_filter.clone());
        Self {
            store,
            session: Session::new(),
            rng,
        }
    }

    /// Install the result of the startup load.
    ///
    /// A successful load applies the configured filter and invites the user
    /// to start. A failed load is logged and replaced by an empty collection;
    /// the session stays `Idle` and shows a load-failure status.
    pub fn boot(&mut self, loaded: Result<ProblemCollection, LoadError>) {
        match loaded {
            Ok(collection) => {
                self.store.load(collection);
                self.session = self.session.with_status(Status::FilterApplied);
            }
            Err(err) => {
                tracing::warn!(error = %err, "problem collection unavailable; starting empty");
                self.store.load(ProblemCollection::default());
                self.session = self.session.with_status(Status::LoadFailed);
            }
        }
    }

    pub fn dispatch(&mut self, action: Action) -> Dispatched {
        let event = match action {
            Action::NewProblem => Event::NewProblem,
            Action::Reveal => Event::Reveal,
            Action::GradeCorrect => Event::GradeCorrect,
            Action::GradeIncorrect => Event::GradeIncorrect,
            Action::ResetStats => Event::ResetStats,
            Action::ChangeFilter(filter) => {
                tracing::info!(%filter, "filter changed");
                self.store.set_filter(filter);
                Event::FilterChanged
            }
        };

        let Step {
            session,
            outcome,
            timer,
        } = self
            .session
            .apply(event, self.store.active(), &mut self.rng);
        self.session = session;

        Dispatched { outcome, timer }
    }

    /// Forward a stopwatch tick. Returns whether it was counted.
    pub fn tick(&mut self, handle: TickHandle) -> bool {
        match self.session.tick(handle) {
            Some(next) => {
                self.session = next;
                true
            }
            None => false,
        }
    }

    pub fn view(&self) -> SessionView {
        SessionView::build(&self.session, &self.store)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &ProblemStore {
        &self.store
    }
}
