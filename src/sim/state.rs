//! Game state and core simulation types
//!
//! One `GameState` value per play-through; everything the tick function
//! mutates lives here, and a retry replaces the whole value.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawner::Spawner;
use crate::config::LevelConfig;
use crate::consts::*;

/// Current phase of a play-through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Collision animation window before the run ends
    Shaking,
    /// Terminal: the runner was hit
    Collided,
    /// Terminal: the countdown ran out before every word was matched
    TimedOut,
    /// Terminal: every word was matched
    Completed,
}

impl GamePhase {
    /// True for the three end-of-run phases
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            GamePhase::Collided | GamePhase::TimedOut | GamePhase::Completed
        )
    }
}

/// A scrolling obstacle labeled with the word that eliminates it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub word: String,
    /// Percent of track: 100 = spawn edge, 0 = runner edge, negative = off-screen
    pub position: f32,
    /// Cosmetic sprite index, no gameplay effect
    pub asset: u8,
}

impl Obstacle {
    /// True when the obstacle can be typed away or can hit the runner
    pub fn in_match_zone(&self) -> bool {
        self.position > MATCH_ZONE_MIN && self.position < MATCH_ZONE_MAX
    }
}

/// The runner's jump state; vulnerable exactly when grounded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Runner {
    /// Remaining ticks of the invulnerability window (0 = grounded)
    pub jump_ticks_left: u32,
}

impl Runner {
    pub fn grounded(&self) -> bool {
        self.jump_ticks_left == 0
    }

    /// Start the jump window triggered by a successful match
    pub fn jump(&mut self) {
        self.jump_ticks_left = ms_to_ticks(JUMP_DURATION_MS);
    }
}

/// Notable things that happened during a tick, for collaborators and logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Spawned { word: String },
    /// The spawner consumed its last word (distinct from all words completed)
    AllWordsDispatched,
    Matched { word: String, points: u64 },
    ComboStep { multiplier: f32 },
    Culled { word: String },
    Collision,
    Collided,
    TimedOut,
    Completed,
}

/// Complete per-session state (deterministic for a given seed and input script)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed, kept for retries
    pub seed: u64,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Countdown, decremented once per elapsed second
    pub time_left_secs: u32,
    /// The player's current input buffer
    pub typed: String,
    pub score: u64,
    pub words_completed: usize,
    pub consecutive_correct: u32,
    /// Always within [1, rule.max_multiplier]
    pub combo_multiplier: f32,
    /// Percent of track per tick; ramps per elapsed second where configured
    pub current_speed: f32,
    /// Live obstacles in stable spawn (id) order
    pub obstacles: Vec<Obstacle>,
    pub runner: Runner,
    pub spawner: Spawner,
    /// Remaining ticks of the collision animation (Shaking phase only)
    pub shake_ticks_left: u32,
    /// Events emitted by the most recent tick
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Fresh state for a play-through of `config`
    pub fn new(seed: u64, config: &LevelConfig) -> Self {
        Self {
            seed,
            phase: GamePhase::Running,
            time_ticks: 0,
            time_left_secs: config.time_limit_secs,
            typed: String::new(),
            score: 0,
            words_completed: 0,
            consecutive_correct: 0,
            combo_multiplier: 1.0,
            current_speed: config.base_speed,
            obstacles: Vec::new(),
            runner: Runner::default(),
            spawner: Spawner::new(),
            shake_ticks_left: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new obstacle ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Elapsed simulation time in milliseconds
    pub fn time_ms(&self) -> u64 {
        self.time_ticks * TICK_INTERVAL_MS as u64
    }

    /// Read-only view for the presentation collaborator
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            score: self.score,
            time_left_secs: self.time_left_secs,
            words_completed: self.words_completed,
            combo_multiplier: self.combo_multiplier,
            current_speed: self.current_speed,
            airborne: !self.runner.grounded(),
            typed: self.typed.clone(),
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    id: o.id,
                    word: o.word.clone(),
                    position: o.position,
                    asset: o.asset,
                })
                .collect(),
        }
    }
}

/// One obstacle as the presentation layer sees it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObstacleView {
    pub id: u32,
    pub word: String,
    pub position: f32,
    pub asset: u8,
}

/// Read-only per-tick view of the session for rendering
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub time_left_secs: u32,
    pub words_completed: usize,
    pub combo_multiplier: f32,
    pub current_speed: f32,
    pub airborne: bool,
    pub typed: String,
    pub obstacles: Vec<ObstacleView>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning;

    #[test]
    fn test_new_state_is_initial() {
        let config = tuning::level_1();
        let state = GameState::new(7, &config);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.words_completed, 0);
        assert_eq!(state.combo_multiplier, 1.0);
        assert_eq!(state.time_left_secs, 60);
        assert!(state.obstacles.is_empty());
        assert!(state.runner.grounded());
    }

    #[test]
    fn test_match_zone_bounds() {
        let mut obstacle = Obstacle {
            id: 1,
            word: "fog".into(),
            position: 8.0,
            asset: 0,
        };
        assert!(obstacle.in_match_zone());
        obstacle.position = 15.0;
        assert!(!obstacle.in_match_zone());
        obstacle.position = 0.0;
        assert!(!obstacle.in_match_zone());
        obstacle.position = 50.0;
        assert!(!obstacle.in_match_zone());
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let config = tuning::level_1();
        let mut state = GameState::new(7, &config);
        state.score = 40;
        state.obstacles.push(Obstacle {
            id: 3,
            word: "dry".into(),
            position: 62.0,
            asset: 2,
        });
        let snapshot = state.snapshot();
        assert_eq!(snapshot.score, 40);
        assert_eq!(snapshot.obstacles.len(), 1);
        assert_eq!(snapshot.obstacles[0].word, "dry");
        assert!(!snapshot.airborne);
    }
}
