//! Data-driven level balance
//!
//! Levels differ only in tuning, and the tuning lives here as plain data;
//! the engine never branches on the level number.

use crate::config::{BackspacePenalty, ComboRule, LevelConfig, WordScoring};

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| (*w).to_string()).collect()
}

/// Level 1: short words, slow constant scroll, no combo system.
/// Perfect play is required (100% threshold on flat 10-point words).
pub fn level_1() -> LevelConfig {
    LevelConfig {
        level: 1,
        words: words(&[
            "ace", "aim", "bay", "dry", "ego", "fin", "gym", "hex", "ink", "jaw",
        ]),
        spawn_interval_ms: 3000,
        time_limit_secs: 60,
        base_speed: 1.0,
        speed_ramp_per_sec: 0.0,
        max_speed: 1.0,
        scoring: WordScoring::Flat { points: 10 },
        par_points_per_word: 10.0,
        combo: None,
        pass_threshold_percent: 100.0,
    }
}

/// Level 3: introduces the combo multiplier; backspace hard-resets it.
pub fn level_3() -> LevelConfig {
    LevelConfig {
        level: 3,
        words: words(&[
            "big", "bag", "bug", "dig", "dog", "fog", "hug", "jog", "log", "mug",
            "nag", "pig", "rag", "sag", "tag", "wig", "box", "fix", "max", "mix",
            "six", "tax", "wax", "dam", "ham", "jam", "ram", "yam", "dim", "rim",
        ]),
        spawn_interval_ms: 2500,
        time_limit_secs: 60,
        base_speed: 1.1,
        speed_ramp_per_sec: 0.0,
        max_speed: 1.1,
        scoring: WordScoring::Flat { points: 10 },
        par_points_per_word: 10.0,
        combo: Some(ComboRule {
            step_size: 3,
            increment_on_step: 0.5,
            max_multiplier: 3.0,
            backspace_penalty: BackspacePenalty::HardReset,
        }),
        pass_threshold_percent: 100.0,
    }
}

/// Level 4: first level with a speed ramp; threshold above 100% forces
/// combo play, not just completion.
pub fn level_4() -> LevelConfig {
    LevelConfig {
        level: 4,
        words: words(&[
            "raw", "dry", "spy", "cry", "fly", "pry", "try", "why", "buy", "gym",
            "hymn", "myth", "sync", "type", "very", "wave", "year", "zone", "zero",
            "yet", "web", "use", "two", "the", "tax", "sun", "run", "red", "put",
            "cat", "dog", "hat", "bat", "mat", "rat", "sat", "fat", "pat", "map",
            "lap", "nap", "tap", "cap", "gap", "yap", "zap", "jam", "ham", "ram",
        ]),
        spawn_interval_ms: 2300,
        time_limit_secs: 60,
        base_speed: 1.3,
        speed_ramp_per_sec: 0.01,
        max_speed: 2.0,
        scoring: WordScoring::Flat { points: 15 },
        par_points_per_word: 15.0,
        combo: Some(ComboRule {
            step_size: 3,
            increment_on_step: 0.75,
            max_multiplier: 4.0,
            backspace_penalty: BackspacePenalty::HardReset,
        }),
        pass_threshold_percent: 110.0,
    }
}

/// Level 5: longer words scored by length, shorter clock, gentler
/// backspace penalty (gradual decay instead of a hard reset).
pub fn level_5() -> LevelConfig {
    LevelConfig {
        level: 5,
        words: words(&[
            "able", "bird", "calm", "dark", "echo", "find",
            "alive", "brave", "claim", "dream", "extra",
        ]),
        spawn_interval_ms: 2000,
        time_limit_secs: 45,
        base_speed: 1.5,
        speed_ramp_per_sec: 0.015,
        max_speed: 2.5,
        scoring: WordScoring::ByLength {
            five_letter: 25,
            shorter: 20,
        },
        par_points_per_word: 22.5,
        combo: Some(ComboRule {
            step_size: 2,
            increment_on_step: 1.0,
            max_multiplier: 5.0,
            backspace_penalty: BackspacePenalty::Decay {
                streak_step: 1,
                multiplier_step: 0.5,
            },
        }),
        pass_threshold_percent: 115.0,
    }
}

/// Level 7: fastest spawn cadence and the highest threshold in the game.
pub fn level_7() -> LevelConfig {
    LevelConfig {
        level: 7,
        words: words(&[
            "mint", "fort", "bulk", "jump", "wave", "quiz", "rank", "form", "plan",
            "exit", "wise", "dual",
            "quick", "brisk", "focal", "phase", "crest", "award", "power", "dream",
            "style", "craft", "judge", "vivid", "tempo",
        ]),
        spawn_interval_ms: 1700,
        time_limit_secs: 45,
        base_speed: 1.2,
        speed_ramp_per_sec: 0.015,
        max_speed: 2.0,
        scoring: WordScoring::ByLength {
            five_letter: 35,
            shorter: 30,
        },
        par_points_per_word: 32.5,
        combo: Some(ComboRule {
            step_size: 2,
            increment_on_step: 1.3,
            max_multiplier: 6.5,
            backspace_penalty: BackspacePenalty::Decay {
                streak_step: 1,
                multiplier_step: 0.5,
            },
        }),
        pass_threshold_percent: 125.0,
    }
}

/// Look up a preset by level number
pub fn preset(level: u32) -> Option<LevelConfig> {
    match level {
        1 => Some(level_1()),
        3 => Some(level_3()),
        4 => Some(level_4()),
        5 => Some(level_5()),
        7 => Some(level_7()),
        _ => None,
    }
}

/// All shipped presets, in progression order
pub fn all_presets() -> Vec<LevelConfig> {
    vec![level_1(), level_3(), level_4(), level_5(), level_7()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_preset_validates() {
        for config in all_presets() {
            config.validate().unwrap_or_else(|e| {
                panic!("level {} preset invalid: {e}", config.level);
            });
        }
    }

    #[test]
    fn test_preset_lookup() {
        assert!(preset(1).is_some());
        assert!(preset(2).is_none());
        assert_eq!(preset(7).map(|c| c.words.len()), Some(25));
    }

    #[test]
    fn test_level_5_par_matches_word_mix() {
        // 6 four-letter words at 20 and 5 five-letter at 25 average to 22.27,
        // but the denominator deliberately uses the flat 22.5 constant.
        let config = level_5();
        assert!((config.max_possible_score() - 11.0 * 22.5).abs() < 0.001);
    }
}
