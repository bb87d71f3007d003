//! Level-progression persistence seam
//!
//! Passing a level advances the player's stored progression through a single
//! idempotent "advance level" call. The transport behind it is out of scope;
//! the engine only knows this trait. Failures are logged, never retried, and
//! never change the gameplay outcome.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Response of the advance-level endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvanceOutcome {
    /// Whether the backend accepted the advancement
    pub accepted: bool,
    /// The player's new level, when the backend reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_level: Option<u32>,
}

/// Why an advance-level call failed (all non-fatal to gameplay)
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProgressError {
    #[error("no stored player identifier")]
    MissingIdentifier,
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("backend rejected the update: {0}")]
    Rejected(String),
}

/// Where "level passed" gets recorded
pub trait ProgressSink {
    /// Advance the stored progression for `identifier`. Called at most once
    /// per passed play-through; must not block the simulation.
    fn advance_level(&mut self, identifier: &str) -> Result<AdvanceOutcome, ProgressError>;
}

/// Sink that records nothing; useful for practice mode and demos
#[derive(Debug, Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn advance_level(&mut self, identifier: &str) -> Result<AdvanceOutcome, ProgressError> {
        log::info!("progress sink disabled, not advancing '{identifier}'");
        Ok(AdvanceOutcome {
            accepted: true,
            new_level: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_json_round_trip() {
        let outcome = AdvanceOutcome {
            accepted: true,
            new_level: Some(2),
        };
        let json = serde_json::to_string(&outcome).unwrap();
        let back: AdvanceOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outcome);
    }

    #[test]
    fn test_outcome_tolerates_missing_level() {
        let back: AdvanceOutcome = serde_json::from_str(r#"{"accepted":false}"#).unwrap();
        assert!(!back.accepted);
        assert_eq!(back.new_level, None);
    }

    #[test]
    fn test_null_sink_accepts() {
        let mut sink = NullProgress;
        assert!(sink.advance_level("player").unwrap().accepted);
    }
}
