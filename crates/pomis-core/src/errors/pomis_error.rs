//! Top-level error aggregating every subsystem via `From` conversions.

use super::error_code::PomisErrorCode;
use super::{ArmError, ConfigError, EnumerationError, GraphError, PartitionError};

#[derive(Debug, thiserror::Error)]
pub enum PomisError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Partition error: {0}")]
    Partition(#[from] PartitionError),

    #[error("Enumeration error: {0}")]
    Enumeration(#[from] EnumerationError),

    #[error("Arm error: {0}")]
    Arm(#[from] ArmError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl PomisErrorCode for PomisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Graph(e) => e.error_code(),
            Self::Partition(e) => e.error_code(),
            Self::Enumeration(e) => e.error_code(),
            Self::Arm(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type PomisResult<T> = Result<T, PomisError>;
