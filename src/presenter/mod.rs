//! Boundary to whatever draws the practice screen.
//!
//! After every transition the runtime hands a [`SessionView`] to a
//! [`Presenter`]. The view is a flat, serializable snapshot: a web frontend
//! can ship it as JSON, a terminal UI can print it. Math markup inside
//! `expression` and `answer` is passed through untouched.

use crate::core::State;
use crate::problem::Filter;
use crate::session::{Event, Session};
use crate::store::ProblemStore;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Everything needed to render the practice screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub phase: String,
    pub filter: Filter,
    pub filters: Vec<Filter>,
    pub label: Option<String>,
    pub expression: Option<String>,
    /// Present only while the answer is visible.
    pub answer: Option<String>,
    pub answer_visible: bool,
    pub can_reveal: bool,
    pub can_grade: bool,
    pub attempted: u32,
    pub correct: u32,
    pub accuracy: u32,
    pub seconds: u64,
    pub status: Option<String>,
}

impl SessionView {
    pub fn build(session: &Session, store: &ProblemStore) -> Self {
        let current = session.current();
        let stats = session.stats();
        Self {
            session_id: session.id(),
            phase: session.phase().name().to_string(),
            filter: store.filter().clone(),
            filters: store.filters(),
            label: current.map(|p| store.label_for(p)),
            expression: current.map(|p| p.expression.clone()),
            answer: current
                .filter(|_| session.is_answer_visible())
                .map(|p| p.answer.clone()),
            answer_visible: session.is_answer_visible(),
            can_reveal: session.permits(Event::Reveal) && current.is_some(),
            can_grade: session.is_gradable(),
            attempted: stats.attempted(),
            correct: stats.correct(),
            accuracy: stats.accuracy(),
            seconds: session.stopwatch().seconds(),
            status: session.status().map(|s| s.message().to_string()),
        }
    }

    /// The line shown above the problem: its label, or the status notice.
    pub fn headline(&self) -> Option<&str> {
        self.label.as_deref().or(self.status.as_deref())
    }
}

/// Receives a fresh view after every transition and every counted tick.
pub trait Presenter: Send {
    fn render(&mut self, view: &SessionView);
}

impl<F> Presenter for F
where
    F: FnMut(&SessionView) + Send,
{
    fn render(&mut self, view: &SessionView) {
        self(view)
    }
}
