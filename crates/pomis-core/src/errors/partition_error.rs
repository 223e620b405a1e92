//! Time-slice partition errors. All of these are fatal configuration errors:
//! the search never runs on a partition that fails validation.

use super::error_code::{self, PomisErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum PartitionError {
    #[error("{name} is not found in any time slice")]
    UnmappedVariable { name: String },

    #[error("{name} appears in time slices {first} and {second}")]
    OverlappingSlices {
        name: String,
        first: usize,
        second: usize,
    },

    #[error("time slice {index} is empty")]
    EmptySlice { index: usize },

    #[error("{name} has no trailing time index")]
    MissingTimeSuffix { name: String },

    #[error("time indices are not contiguous from 0: missing {missing}")]
    NonContiguous { missing: usize },

    #[error("edge {from} -> {to} points from time {from_time} back to time {to_time}")]
    BackwardEdge {
        from: String,
        to: String,
        from_time: usize,
        to_time: usize,
    },

    #[error("reward variable {name} for step {step} lies in time slice {actual}")]
    RewardOutsideSlice {
        name: String,
        step: usize,
        actual: usize,
    },
}

impl PomisErrorCode for PartitionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnmappedVariable { .. } => error_code::UNMAPPED_VARIABLE,
            _ => error_code::PARTITION_ERROR,
        }
    }
}
