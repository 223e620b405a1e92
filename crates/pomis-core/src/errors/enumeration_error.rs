//! Sequence enumeration errors.

use super::error_code::{self, PomisErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum EnumerationError {
    #[error("horizon {horizon} out of range: {slices} time slices, {rewards} reward variables")]
    HorizonOutOfRange {
        horizon: usize,
        slices: usize,
        rewards: usize,
    },

    #[error("{name} maps to time {index}, beyond horizon {horizon}")]
    IndexOutOfHorizon {
        name: String,
        index: usize,
        horizon: usize,
    },

    #[error("stage {stage} made no progress: earliest resolved time is still {earliest}")]
    StalledStage { stage: usize, earliest: usize },

    #[error("sequence limit exceeded: more than {limit} sequences")]
    SequenceLimitExceeded { limit: usize },
}

impl PomisErrorCode for EnumerationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SequenceLimitExceeded { .. } => error_code::SEQUENCE_LIMIT,
            _ => error_code::ENUMERATION_ERROR,
        }
    }
}
