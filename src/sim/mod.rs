//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (cosmetic sprite choice)
//! - Stable iteration order (by obstacle ID)
//! - No rendering, I/O, or platform dependencies

pub mod score;
pub mod spawner;
pub mod state;
pub mod tick;

pub use spawner::Spawner;
pub use state::{GameEvent, GamePhase, GameState, Obstacle, ObstacleView, Runner, Snapshot};
pub use tick::{TickInput, tick};
