//! Action table and arm selection errors.

use super::error_code::{self, PomisErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ArmError {
    #[error("action table over {variables} variables exceeds the limit of {limit}")]
    TableTooLarge { variables: usize, limit: usize },

    #[error("unknown arm strategy: {name}")]
    UnknownStrategy { name: String },
}

impl PomisErrorCode for ArmError {
    fn error_code(&self) -> &'static str {
        error_code::ARM_ERROR
    }
}
