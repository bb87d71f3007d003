//! Play-through orchestration
//!
//! A `Session` owns one `GameState` plus the level config and the external
//! collaborators (presentation hooks, progress sink). Wall-clock time is
//! converted into fixed simulation ticks through an accumulator, so all
//! shared-state mutation is linearized through `sim::tick`.

use log::{info, warn};
use serde::Serialize;

use crate::config::{ConfigError, LevelConfig};
use crate::consts::{MAX_SUBSTEPS, TICK_INTERVAL_MS};
use crate::progress::ProgressSink;
use crate::sim::{GameEvent, GamePhase, GameState, Snapshot, TickInput, tick};

/// Render-side lifecycle callbacks; every method defaults to a no-op
pub trait PresentationHooks {
    /// Read-only view of the session, delivered once per tick
    fn on_snapshot(&mut self, _snapshot: &Snapshot) {}
    /// The runner cleared an obstacle (play the jump cue)
    fn on_jump(&mut self) {}
    /// The runner was hit (play the shake cue)
    fn on_shake(&mut self) {}
    /// Start/stop background motion and music
    fn on_background(&mut self, _playing: bool) {}
}

/// Presentation that ignores everything (headless runs, tests)
#[derive(Debug, Default)]
pub struct NoopPresentation;

impl PresentationHooks for NoopPresentation {}

/// End-of-run evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelOutcome {
    pub phase: GamePhase,
    pub score: u64,
    /// Score as a percentage of the level's maximum possible score
    pub success_rate: f32,
    pub passed: bool,
}

/// One play-through of one level, with retry support
pub struct Session<P: ProgressSink, H: PresentationHooks> {
    config: LevelConfig,
    state: GameState,
    player: String,
    progress: P,
    hooks: H,
    pending: TickInput,
    accumulator_ms: f64,
    /// Guards the advance-level call: at most once per play-through
    progress_reported: bool,
    finalized: bool,
}

impl<P: ProgressSink, H: PresentationHooks> Session<P, H> {
    /// Validate the config and start a fresh play-through
    pub fn new(
        config: LevelConfig,
        seed: u64,
        player: impl Into<String>,
        progress: P,
        mut hooks: H,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = GameState::new(seed, &config);
        hooks.on_background(true);
        info!(
            "level {} session started ({} words, {}s)",
            config.level,
            config.words.len(),
            config.time_limit_secs
        );
        Ok(Self {
            config,
            state,
            player: player.into(),
            progress,
            hooks,
            pending: TickInput::default(),
            accumulator_ms: 0.0,
            progress_reported: false,
            finalized: false,
        })
    }

    /// Raw text-edit event from the input collaborator
    pub fn handle_edit(&mut self, text: &str, deletion: bool) {
        self.pending.typed = Some(text.to_string());
        self.pending.deletion |= deletion;
    }

    /// Advance by wall-clock milliseconds, running whole fixed ticks
    pub fn update(&mut self, dt_ms: f64) {
        // Clamp a long stall so we don't spiral
        self.accumulator_ms += dt_ms.min(250.0);

        let step_ms = TICK_INTERVAL_MS as f64;
        let mut substeps = 0;
        while self.accumulator_ms >= step_ms && substeps < MAX_SUBSTEPS {
            self.step();
            self.accumulator_ms -= step_ms;
            substeps += 1;
        }
    }

    /// Run exactly one simulation tick
    pub fn step(&mut self) {
        let input = std::mem::take(&mut self.pending);
        tick(&mut self.state, &input, &self.config);

        for event in &self.state.events {
            match event {
                GameEvent::Matched { .. } => self.hooks.on_jump(),
                GameEvent::Collision => self.hooks.on_shake(),
                _ => {}
            }
        }
        let snapshot = self.state.snapshot();
        self.hooks.on_snapshot(&snapshot);

        if self.state.phase.is_terminal() && !self.finalized {
            self.finalize();
        }
    }

    /// Discard the play-through and start over from the first word
    pub fn restart(&mut self) {
        self.pending = TickInput {
            restart: true,
            ..Default::default()
        };
        self.step();
        self.accumulator_ms = 0.0;
        self.progress_reported = false;
        self.finalized = false;
        self.hooks.on_background(true);
        info!("level {} session restarted", self.config.level);
    }

    /// End-of-run evaluation; `None` while the run is still live
    pub fn outcome(&self) -> Option<LevelOutcome> {
        if !self.state.phase.is_terminal() {
            return None;
        }
        let success_rate = self.success_rate();
        Some(LevelOutcome {
            phase: self.state.phase,
            score: self.state.score,
            success_rate,
            passed: success_rate >= self.config.pass_threshold_percent,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    pub fn progress_sink(&self) -> &P {
        &self.progress
    }

    pub fn presentation(&self) -> &H {
        &self.hooks
    }

    fn success_rate(&self) -> f32 {
        self.state.score as f32 / self.config.max_possible_score() * 100.0
    }

    /// Terminal bookkeeping: stop presentation, evaluate pass/fail, and
    /// report progression at most once per play-through.
    fn finalize(&mut self) {
        self.finalized = true;
        self.hooks.on_background(false);

        let Some(outcome) = self.outcome() else {
            return;
        };
        info!(
            "level {} over: {:?}, score {} ({:.1}%), passed: {}",
            self.config.level, outcome.phase, outcome.score, outcome.success_rate, outcome.passed
        );

        if outcome.phase == GamePhase::Completed && outcome.passed && !self.progress_reported {
            self.progress_reported = true;
            match self.progress.advance_level(&self.player) {
                Ok(result) if result.accepted => match result.new_level {
                    Some(level) => info!("progression advanced to level {level}"),
                    None => info!("progression advanced"),
                },
                Ok(_) => warn!("progression update not accepted"),
                // Non-fatal: the pass stands even if the backend is down.
                Err(e) => warn!("progression update failed: {e}"),
            }
        }
    }
}
