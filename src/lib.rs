//! Word Dash - a typing-based obstacle runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, matching, scoring)
//! - `config`: Per-level parameters and validation
//! - `tuning`: Data-driven level balance presets
//! - `session`: Play-through orchestration and collaborator hooks
//! - `progress`: Level-progression persistence seam

pub mod config;
pub mod progress;
pub mod session;
pub mod sim;
pub mod tuning;

pub use config::{BackspacePenalty, ComboRule, ConfigError, LevelConfig, WordScoring};
pub use session::{LevelOutcome, Session};

/// Engine constants shared by every level
pub mod consts {
    /// Fixed simulation timestep in milliseconds (movement granularity)
    pub const TICK_INTERVAL_MS: u32 = 30;
    /// Maximum substeps per update to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Track position where obstacles spawn (percent of track)
    pub const SPAWN_EDGE: f32 = 100.0;
    /// Match zone lower bound (exclusive) - the runner's edge
    pub const MATCH_ZONE_MIN: f32 = 0.0;
    /// Match zone upper bound (exclusive)
    pub const MATCH_ZONE_MAX: f32 = 15.0;
    /// Obstacles past this position are silently culled
    pub const CULL_POSITION: f32 = -20.0;

    /// Jump (invulnerability) window after a successful match
    pub const JUMP_DURATION_MS: u32 = 500;
    /// Collision shake animation before the run ends
    pub const SHAKE_DURATION_MS: u32 = 500;

    /// Number of cosmetic obstacle sprites to pick from
    pub const OBSTACLE_ASSET_COUNT: u8 = 5;

    /// Convert a millisecond duration to whole ticks, rounding up
    #[inline]
    pub fn ms_to_ticks(ms: u32) -> u32 {
        ms.div_ceil(TICK_INTERVAL_MS)
    }
}
