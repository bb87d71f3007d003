//! Fixed timestep simulation tick
//!
//! Countdown, spawning and motion all run off one fixed-timestep update
//! instead of separate timers: each tick checks whether a countdown-second
//! or a spawn-interval boundary has elapsed, so evolution is fully
//! deterministic for a given seed and input script.

use log::debug;

use super::score;
use super::state::{GameEvent, GamePhase, GameState};
use crate::config::LevelConfig;
use crate::consts::*;

/// Input for a single tick (raw text-edit events, device-agnostic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Replacement for the typed buffer, if the player edited it
    pub typed: Option<String>,
    /// Whether that edit deleted characters (combo penalty applies)
    pub deletion: bool,
    /// Throw the whole session away and start over
    pub restart: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, config: &LevelConfig) {
    state.events.clear();

    if input.restart {
        *state = GameState::new(state.seed, config);
        return;
    }

    match state.phase {
        GamePhase::Collided | GamePhase::TimedOut | GamePhase::Completed => return,
        GamePhase::Shaking => {
            // Registry is already empty; the countdown holds still until the
            // shake window ends the run.
            state.shake_ticks_left = state.shake_ticks_left.saturating_sub(1);
            if state.shake_ticks_left == 0 {
                state.phase = GamePhase::Collided;
                state.events.push(GameEvent::Collided);
            }
            return;
        }
        GamePhase::Running => {}
    }

    // Typed input is a pure buffer replacement; a deletion also costs combo.
    if let Some(text) = &input.typed {
        state.typed = text.clone();
        if input.deletion {
            score::apply_backspace(state, config);
        }
    }

    let prev_ms = state.time_ms();
    state.time_ticks += 1;
    let now_ms = state.time_ms();

    // Countdown and speed ramp, once per elapsed second
    if crossed_boundary(prev_ms, now_ms, 1000) {
        state.time_left_secs = state.time_left_secs.saturating_sub(1);
        if config.speed_ramp_per_sec > 0.0 {
            state.current_speed =
                (state.current_speed + config.speed_ramp_per_sec).min(config.max_speed);
        }
    }

    // Spawn on interval boundaries; never two obstacles on one tick
    if crossed_boundary(prev_ms, now_ms, config.spawn_interval_ms as u64)
        && !state.spawner.all_dispatched(config)
    {
        let id = state.next_entity_id();
        if let Some(obstacle) = state.spawner.spawn_next(config, &mut state.rng, id) {
            debug!("spawn '{}' (id {id})", obstacle.word);
            state.events.push(GameEvent::Spawned {
                word: obstacle.word.clone(),
            });
            state.obstacles.push(obstacle);
        }
        if state.spawner.all_dispatched(config) {
            state.events.push(GameEvent::AllWordsDispatched);
        }
    }

    // Motion: every live obstacle scrolls by the current speed
    for obstacle in &mut state.obstacles {
        obstacle.position -= state.current_speed;
    }

    // Matching runs before collision so a same-tick correct keystroke saves
    // the runner. First zone occupant in id order wins; duplicates stay live.
    let typed = state.typed.trim().to_ascii_lowercase();
    if !typed.is_empty() {
        let hit = state
            .obstacles
            .iter()
            .position(|o| o.in_match_zone() && o.word.trim().eq_ignore_ascii_case(&typed));
        if let Some(index) = hit {
            let obstacle = state.obstacles.remove(index);
            state.typed.clear();
            state.runner.jump();
            let points = score::apply_match(state, config, &obstacle.word);
            debug!("matched '{}' for {points}", obstacle.word);
            state.events.push(GameEvent::Matched {
                word: obstacle.word,
                points,
            });
        }
    }

    // Any zone occupant left while the runner is grounded is fatal.
    if state.runner.grounded() && state.obstacles.iter().any(|o| o.in_match_zone()) {
        state.obstacles.clear();
        score::reset_combo(state);
        state.shake_ticks_left = ms_to_ticks(SHAKE_DURATION_MS);
        state.phase = GamePhase::Shaking;
        state.events.push(GameEvent::Collision);
        return;
    }

    // Unmatched words scroll off-screen and are culled silently - the lost
    // scoring opportunity is the only penalty.
    let mut culled = Vec::new();
    state.obstacles.retain(|o| {
        if o.position > CULL_POSITION {
            true
        } else {
            culled.push(o.word.clone());
            false
        }
    });
    for word in culled {
        state.events.push(GameEvent::Culled { word });
    }

    if state.runner.jump_ticks_left > 0 {
        state.runner.jump_ticks_left -= 1;
    }

    // Terminal evaluation: completion outranks the clock.
    if state.words_completed >= config.words.len() {
        debug_assert!(state.words_completed == config.words.len());
        state.phase = GamePhase::Completed;
        state.events.push(GameEvent::Completed);
    } else if state.time_left_secs == 0 {
        state.phase = GamePhase::TimedOut;
        state.events.push(GameEvent::TimedOut);
    }
}

/// Did the time step from `prev_ms` to `now_ms` cross an interval boundary?
#[inline]
fn crossed_boundary(prev_ms: u64, now_ms: u64, interval_ms: u64) -> bool {
    prev_ms / interval_ms != now_ms / interval_ms
}
