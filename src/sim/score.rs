//! Scoring and combo tracking
//!
//! Converts matches into score and maintains the streak multiplier. The
//! multiplier only moves on streak milestones, miss events, and collisions,
//! and is always clamped to [1, max_multiplier].

use super::state::{GameEvent, GameState};
use crate::config::{BackspacePenalty, LevelConfig};

/// Record a successful match: streak, milestone multiplier bump, points.
/// Returns the points awarded.
pub fn apply_match(state: &mut GameState, config: &LevelConfig, word: &str) -> u64 {
    state.words_completed += 1;
    state.consecutive_correct += 1;

    if let Some(rule) = &config.combo {
        if state.consecutive_correct.is_multiple_of(rule.step_size) {
            state.combo_multiplier =
                (state.combo_multiplier + rule.increment_on_step).min(rule.max_multiplier);
            state.events.push(GameEvent::ComboStep {
                multiplier: state.combo_multiplier,
            });
        }
        debug_assert!(
            state.combo_multiplier >= 1.0 && state.combo_multiplier <= rule.max_multiplier,
            "combo multiplier out of range: {}",
            state.combo_multiplier
        );
    }

    let points = (config.scoring.points(word) as f32 * state.combo_multiplier).floor() as u64;
    state.score += points;
    points
}

/// Apply the level's deletion penalty (player erased typed characters)
pub fn apply_backspace(state: &mut GameState, config: &LevelConfig) {
    let Some(rule) = &config.combo else {
        return;
    };
    match rule.backspace_penalty {
        BackspacePenalty::HardReset => reset_combo(state),
        BackspacePenalty::Decay {
            streak_step,
            multiplier_step,
        } => {
            state.consecutive_correct = state.consecutive_correct.saturating_sub(streak_step);
            state.combo_multiplier = (state.combo_multiplier - multiplier_step).max(1.0);
        }
    }
}

/// Hard reset, applied on collision in every level that has a combo
pub fn reset_combo(state: &mut GameState) {
    state.consecutive_correct = 0;
    state.combo_multiplier = 1.0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning;

    #[test]
    fn test_multiplier_bumps_once_per_step() {
        // Level 3: step 3, +0.5. Three matches bump exactly once.
        let config = tuning::level_3();
        let mut state = GameState::new(1, &config);

        apply_match(&mut state, &config, "big");
        apply_match(&mut state, &config, "bag");
        assert_eq!(state.combo_multiplier, 1.0);
        apply_match(&mut state, &config, "bug");
        assert_eq!(state.combo_multiplier, 1.5);
        apply_match(&mut state, &config, "dig");
        assert_eq!(state.combo_multiplier, 1.5);
    }

    #[test]
    fn test_multiplier_clamped_to_max() {
        let config = tuning::level_3();
        let mut state = GameState::new(1, &config);
        for word in &config.words {
            apply_match(&mut state, &config, word);
        }
        assert_eq!(state.combo_multiplier, 3.0);
    }

    #[test]
    fn test_points_floor_with_multiplier() {
        let config = tuning::level_3();
        let mut state = GameState::new(1, &config);
        state.consecutive_correct = 2;
        // Third match bumps to 1.5 before the award: floor(10 * 1.5) = 15.
        let points = apply_match(&mut state, &config, "big");
        assert_eq!(points, 15);
        assert_eq!(state.score, 15);
    }

    #[test]
    fn test_no_combo_level_stays_flat() {
        let config = tuning::level_1();
        let mut state = GameState::new(1, &config);
        for word in &config.words {
            assert_eq!(apply_match(&mut state, &config, word), 10);
        }
        assert_eq!(state.combo_multiplier, 1.0);
        assert_eq!(state.score, 100);
    }

    #[test]
    fn test_backspace_hard_reset() {
        let config = tuning::level_3();
        let mut state = GameState::new(1, &config);
        state.consecutive_correct = 5;
        state.combo_multiplier = 2.0;
        apply_backspace(&mut state, &config);
        assert_eq!(state.consecutive_correct, 0);
        assert_eq!(state.combo_multiplier, 1.0);
    }

    #[test]
    fn test_backspace_decay_floors_at_one() {
        let config = tuning::level_5();
        let mut state = GameState::new(1, &config);
        state.consecutive_correct = 2;
        state.combo_multiplier = 1.25;
        apply_backspace(&mut state, &config);
        assert_eq!(state.consecutive_correct, 1);
        assert_eq!(state.combo_multiplier, 1.0);
        // Already floored: stays put.
        apply_backspace(&mut state, &config);
        assert_eq!(state.consecutive_correct, 0);
        assert_eq!(state.combo_multiplier, 1.0);
    }

    #[test]
    fn test_collision_reset() {
        let config = tuning::level_5();
        let mut state = GameState::new(1, &config);
        state.consecutive_correct = 4;
        state.combo_multiplier = 3.0;
        reset_combo(&mut state);
        assert_eq!(state.consecutive_correct, 0);
        assert_eq!(state.combo_multiplier, 1.0);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Any interleaving of matches, backspaces and collisions keeps
            /// the multiplier in [1, max] and the score non-negative.
            #[test]
            fn multiplier_always_in_range(ops in prop::collection::vec(0u8..3, 0..200)) {
                let config = tuning::level_7();
                let rule = config.combo.unwrap();
                let mut state = GameState::new(1, &config);
                for op in ops {
                    match op {
                        0 => {
                            apply_match(&mut state, &config, "mint");
                        }
                        1 => apply_backspace(&mut state, &config),
                        _ => reset_combo(&mut state),
                    }
                    prop_assert!(state.combo_multiplier >= 1.0);
                    prop_assert!(state.combo_multiplier <= rule.max_multiplier);
                }
            }
        }
    }
}
