//! Causal diagram construction errors.

use super::error_code::{self, PomisErrorCode};

/// Errors raised while building or transforming a causal diagram.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("unknown variable {name} referenced by {context}")]
    UnknownVariable { name: String, context: String },

    #[error("self-loop on {name}")]
    SelfLoop { name: String },

    #[error("cycle detected in causal diagram: {path:?}")]
    CycleDetected { path: Vec<String> },

    #[error("confounder {label} already connects {existing:?}, cannot connect {requested:?}")]
    ConflictingConfounder {
        label: String,
        existing: (String, String),
        requested: (String, String),
    },
}

impl PomisErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        error_code::GRAPH_ERROR
    }
}
