//! Sequence enumeration configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Configuration for the POMIS+ sequence enumerator.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct EnumerationConfig {
    /// Order candidate pairs by the earliest time index they touch. Default: true.
    pub sort_candidates: Option<bool>,
    /// Abort once more than this many sequences are produced. Default: unbounded.
    pub max_sequences: Option<usize>,
}

impl EnumerationConfig {
    /// Returns the effective candidate ordering mode, defaulting to sorted.
    pub fn effective_sort_candidates(&self) -> bool {
        self.sort_candidates
            .unwrap_or(defaults::DEFAULT_SORT_CANDIDATES)
    }
}
