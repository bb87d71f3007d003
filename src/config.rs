//! Per-level configuration
//!
//! Each level is fully described by a `LevelConfig`; the engine itself has no
//! level-specific logic. Configs are validated fail-fast before a session
//! starts so that a bad word list or a zero interval never reaches the
//! simulation loop.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::TICK_INTERVAL_MS;

/// How a matched word converts into base points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WordScoring {
    /// Every word is worth the same
    Flat { points: u32 },
    /// Longer words pay more (only 5-letter words are distinguished)
    ByLength { five_letter: u32, shorter: u32 },
}

impl WordScoring {
    /// Base points for a word, before the combo multiplier
    pub fn points(&self, word: &str) -> u32 {
        match *self {
            WordScoring::Flat { points } => points,
            WordScoring::ByLength {
                five_letter,
                shorter,
            } => {
                if word.chars().count() == 5 {
                    five_letter
                } else {
                    shorter
                }
            }
        }
    }
}

/// What a deletion edit (backspace) does to the combo state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BackspacePenalty {
    /// Streak to 0, multiplier to 1
    HardReset,
    /// Gradual decay, floored at streak 0 / multiplier 1
    Decay {
        streak_step: u32,
        multiplier_step: f32,
    },
}

/// Streak-based score multiplier rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComboRule {
    /// Consecutive correct matches per multiplier step
    pub step_size: u32,
    /// Multiplier gain at each step
    pub increment_on_step: f32,
    /// Upper clamp for the multiplier
    pub max_multiplier: f32,
    /// Penalty applied when the player deletes typed characters
    pub backspace_penalty: BackspacePenalty,
}

/// Immutable parameters for one level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Level number (logging and progression only)
    pub level: u32,
    /// Words consumed strictly in order, one obstacle each
    pub words: Vec<String>,
    /// Milliseconds between obstacle spawns
    pub spawn_interval_ms: u32,
    /// Countdown length in seconds
    pub time_limit_secs: u32,
    /// Scroll speed at the start of the run (percent of track per tick)
    pub base_speed: f32,
    /// Speed gained per elapsed second (0 = constant speed)
    pub speed_ramp_per_sec: f32,
    /// Speed clamp
    pub max_speed: f32,
    /// Base points per word
    pub scoring: WordScoring,
    /// Per-word constant in the max-possible-score formula; each level
    /// defines its own literal value (22.5, 32.5 in the length-scored levels)
    pub par_points_per_word: f32,
    /// Combo rule, or `None` for levels without a combo system
    pub combo: Option<ComboRule>,
    /// Minimum success rate (percent of max possible score) to pass
    pub pass_threshold_percent: f32,
}

/// Configuration rejected at construction time
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("level {0}: word list is empty")]
    EmptyWordList(u32),
    #[error("level {level}: spawn interval {interval_ms}ms is shorter than a tick ({TICK_INTERVAL_MS}ms)")]
    SpawnIntervalTooShort { level: u32, interval_ms: u32 },
    #[error("level {0}: time limit must be positive")]
    ZeroTimeLimit(u32),
    #[error("level {level}: speed range [{base}, {max}] is not positive and ordered")]
    BadSpeedRange { level: u32, base: f32, max: f32 },
    #[error("level {0}: speed ramp must not be negative")]
    NegativeRamp(u32),
    #[error("level {0}: par points per word must be positive")]
    NonPositivePar(u32),
    #[error("level {0}: pass threshold must be positive")]
    NonPositiveThreshold(u32),
    #[error("level {0}: combo rule is degenerate (zero step or multiplier below 1)")]
    DegenerateCombo(u32),
}

impl LevelConfig {
    /// Fail-fast validation; run before every session
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.words.is_empty() {
            return Err(ConfigError::EmptyWordList(self.level));
        }
        if self.spawn_interval_ms < TICK_INTERVAL_MS {
            return Err(ConfigError::SpawnIntervalTooShort {
                level: self.level,
                interval_ms: self.spawn_interval_ms,
            });
        }
        if self.time_limit_secs == 0 {
            return Err(ConfigError::ZeroTimeLimit(self.level));
        }
        if self.base_speed <= 0.0 || self.max_speed < self.base_speed {
            return Err(ConfigError::BadSpeedRange {
                level: self.level,
                base: self.base_speed,
                max: self.max_speed,
            });
        }
        if self.speed_ramp_per_sec < 0.0 {
            return Err(ConfigError::NegativeRamp(self.level));
        }
        if self.par_points_per_word <= 0.0 {
            return Err(ConfigError::NonPositivePar(self.level));
        }
        if self.pass_threshold_percent <= 0.0 {
            return Err(ConfigError::NonPositiveThreshold(self.level));
        }
        if let Some(rule) = &self.combo {
            if rule.step_size == 0 || rule.max_multiplier < 1.0 || rule.increment_on_step <= 0.0 {
                return Err(ConfigError::DegenerateCombo(self.level));
            }
        }
        Ok(())
    }

    /// Maximum attainable score for the pass-rate denominator.
    ///
    /// Uses the level's literal per-word constant, not the combo-inflated
    /// ceiling; the pass thresholds are tuned against this denominator.
    pub fn max_possible_score(&self) -> f32 {
        self.words.len() as f32 * self.par_points_per_word
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> LevelConfig {
        LevelConfig {
            level: 1,
            words: vec!["ace".into(), "aim".into()],
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

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_empty_word_list_rejected() {
        let mut config = valid_config();
        config.words.clear();
        assert_eq!(config.validate(), Err(ConfigError::EmptyWordList(1)));
    }

    #[test]
    fn test_sub_tick_spawn_interval_rejected() {
        let mut config = valid_config();
        config.spawn_interval_ms = 10;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SpawnIntervalTooShort { .. })
        ));
    }

    #[test]
    fn test_zero_time_limit_rejected() {
        let mut config = valid_config();
        config.time_limit_secs = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroTimeLimit(1)));
    }

    #[test]
    fn test_inverted_speed_range_rejected() {
        let mut config = valid_config();
        config.base_speed = 2.0;
        config.max_speed = 1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BadSpeedRange { .. })
        ));
    }

    #[test]
    fn test_degenerate_combo_rejected() {
        let mut config = valid_config();
        config.combo = Some(ComboRule {
            step_size: 0,
            increment_on_step: 0.5,
            max_multiplier: 3.0,
            backspace_penalty: BackspacePenalty::HardReset,
        });
        assert_eq!(config.validate(), Err(ConfigError::DegenerateCombo(1)));
    }

    #[test]
    fn test_by_length_scoring() {
        let scoring = WordScoring::ByLength {
            five_letter: 25,
            shorter: 20,
        };
        assert_eq!(scoring.points("alive"), 25);
        assert_eq!(scoring.points("able"), 20);
    }

    #[test]
    fn test_max_possible_score_uses_par() {
        let mut config = valid_config();
        config.par_points_per_word = 22.5;
        assert!((config.max_possible_score() - 45.0).abs() < f32::EPSILON);
    }
}
