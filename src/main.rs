//! Word Dash entry point
//!
//! Headless demo: auto-plays a level preset with perfect typing and logs the
//! run. Pass a level number (1, 3, 4, 5, 7) as the first argument.

use word_dash::consts::TICK_INTERVAL_MS;
use word_dash::progress::NullProgress;
use word_dash::session::{NoopPresentation, Session};
use word_dash::tuning;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let level = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(1);
    let Some(config) = tuning::preset(level) else {
        log::error!("no preset for level {level}");
        std::process::exit(1);
    };

    // Fixed seed keeps demo runs reproducible
    let mut session = match Session::new(config, 0xD15EA5E, "demo", NullProgress, NoopPresentation)
    {
        Ok(session) => session,
        Err(e) => {
            log::error!("bad level config: {e}");
            std::process::exit(1);
        }
    };

    // Perfect play: retype the nearest obstacle's word each tick.
    while !session.state().phase.is_terminal() {
        if let Some(word) = session.state().obstacles.first().map(|o| o.word.clone()) {
            session.handle_edit(&word, false);
        }
        session.update(TICK_INTERVAL_MS as f64);
    }

    if let Some(outcome) = session.outcome() {
        log::info!(
            "final: {:?}, score {} ({:.1}%), passed: {}",
            outcome.phase,
            outcome.score,
            outcome.success_rate,
            outcome.passed
        );
    }
}
