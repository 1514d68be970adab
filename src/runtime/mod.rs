//! Event loop that owns a [`Practice`] and drives its stopwatch.
//!
//! User actions and stopwatch ticks are funnelled through one unbounded
//! channel into a single task, so handlers never run concurrently. The
//! ticker task only ever sends messages; it never touches session state.

use crate::config::PracticeConfig;
use crate::loader::{load_collection, ProblemSource};
use crate::practice::{Action, Practice};
use crate::presenter::{Presenter, SessionView};
use crate::problem::Filter;
use crate::session::TimerCommand;
use crate::stopwatch::{TickHandle, Ticker};
use stillwater::prelude::*;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

/// Messages consumed by the practice loop
#[derive(Debug)]
pub enum Command {
    Act(Action),
    Tick(TickHandle),
    /// Reply with the current view
    Snapshot(oneshot::Sender<SessionView>),
    Shutdown,
}

/// Cloneable handle the presentation layer uses to drive the loop.
///
/// Every method returns immediately; sends to a stopped loop are dropped.
#[derive(Clone, Debug)]
pub struct PracticeHandle {
    sender: mpsc::UnboundedSender<Command>,
}

impl PracticeHandle {
    pub fn new_problem(&self) {
        self.act(Action::NewProblem);
    }

    pub fn reveal(&self) {
        self.act(Action::Reveal);
    }

    pub fn grade_correct(&self) {
        self.act(Action::GradeCorrect);
    }

    pub fn grade_incorrect(&self) {
        self.act(Action::GradeIncorrect);
    }

    pub fn change_filter(&self, filter: Filter) {
        self.act(Action::ChangeFilter(filter));
    }

    pub fn reset_stats(&self) {
        self.act(Action::ResetStats);
    }

    pub fn act(&self, action: Action) {
        let _ = self.sender.send(Command::Act(action));
    }

    /// Current view, or `None` once the loop has stopped.
    pub async fn snapshot(&self) -> Option<SessionView> {
        let (reply, response) = oneshot::channel();
        self.sender.send(Command::Snapshot(reply)).ok()?;
        response.await.ok()
    }

    pub fn shutdown(&self) {
        let _ = self.sender.send(Command::Shutdown);
    }
}

/// Load the collection from `source`, then spawn the practice loop.
///
/// The loop renders once after loading and again after every accepted action
/// and every counted tick. It stops on [`PracticeHandle::shutdown`] or when
/// every handle has been dropped.
pub async fn start_practice<Env, P>(
    config: PracticeConfig,
    source: Env,
    presenter: P,
) -> (PracticeHandle, JoinHandle<()>)
where
    Env: ProblemSource,
    P: Presenter + 'static,
{
    let loaded = load_collection::<Env>().run(&source).await;

    let mut practice = Practice::new(&config);
    practice.boot(loaded);

    let (sender, receiver) = mpsc::unbounded_channel();
    let ticker_sender = sender.downgrade();
    let ticker = Ticker::new(config.tick_interval());

    let task = tokio::spawn(run_loop(practice, presenter, ticker, ticker_sender, receiver));

    (PracticeHandle { sender }, task)
}

async fn run_loop<P: Presenter>(
    mut practice: Practice,
    mut presenter: P,
    mut ticker: Ticker,
    ticker_sender: mpsc::WeakUnboundedSender<Command>,
    mut receiver: mpsc::UnboundedReceiver<Command>,
) {
    presenter.render(&practice.view());

    while let Some(command) = receiver.recv().await {
        match command {
            Command::Act(action) => {
                let dispatched = practice.dispatch(action);
                match dispatched.timer {
                    TimerCommand::Keep => {}
                    TimerCommand::Disarm => ticker.disarm(),
                    TimerCommand::Arm(handle) => {
                        let sender = ticker_sender.clone();
                        ticker.arm(handle, move |tick| {
                            sender
                                .upgrade()
                                .is_some_and(|tx| tx.send(Command::Tick(tick)).is_ok())
                        });
                    }
                }
                if !dispatched.outcome.is_rejected() {
                    presenter.render(&practice.view());
                }
            }
            Command::Tick(handle) => {
                if practice.tick(handle) {
                    presenter.render(&practice.view());
                }
            }
            Command::Snapshot(reply) => {
                let _ = reply.send(practice.view());
            }
            Command::Shutdown => break,
        }
    }

    ticker.disarm();
    tracing::debug!(session = %practice.session().id(), "practice loop stopped");
}
