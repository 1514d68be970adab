//! Practice Session
//!
//! Drives a practice loop from a script instead of a user interface.
//!
//! Key concepts:
//! - Loading a collection from a file source
//! - Feeding actions through a `PracticeHandle`
//! - Rendering every view with a closure presenter
//!
//! Run with: cargo run --example practice_session [config.json]
//! Set `RUST_LOG=mathdrill=debug` to see rejected transitions and stale ticks.

use mathdrill::config::PracticeConfig;
use mathdrill::loader::FileSource;
use mathdrill::presenter::SessionView;
use mathdrill::problem::Filter;
use mathdrill::start_practice;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const PROBLEMS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/problems.json");

fn print_view(view: &SessionView) {
    let headline = view.headline().unwrap_or("Press \"New Problem\" to start");
    println!("[{:>11}] {headline}", view.phase);
    if let Some(expression) = &view.expression {
        println!("              {expression}");
    }
    if let Some(answer) = &view.answer {
        println!("              answer: {answer}");
    }
    println!(
        "              {}s | {}/{} correct ({}%)",
        view.seconds, view.correct, view.attempted, view.accuracy
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mathdrill=info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => PracticeConfig::from_path(path)?,
        None => PracticeConfig::default(),
    };

    let (handle, task) = start_practice(config, FileSource::new(PROBLEMS), print_view).await;

    handle.change_filter(Filter::set("set1"));
    handle.new_problem();
    tokio::time::sleep(Duration::from_millis(2100)).await;
    handle.reveal();
    handle.grade_correct();

    handle.new_problem();
    tokio::time::sleep(Duration::from_millis(1100)).await;
    handle.grade_incorrect();

    // Grading twice is ignored.
    handle.grade_incorrect();

    handle.change_filter(Filter::set("set3"));
    handle.new_problem();

    if let Some(view) = handle.snapshot().await {
        println!("{}", serde_json::to_string_pretty(&view)?);
    }

    handle.shutdown();
    task.await?;
    Ok(())
}
