//! Logging configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error". Default: "info".
    pub level: Option<String>,
    /// Emit JSON lines instead of human-readable output. Default: false.
    pub json: Option<bool>,
}

impl LoggingConfig {
    pub fn effective_level(&self) -> &str {
        self.level.as_deref().unwrap_or(defaults::DEFAULT_LOG_LEVEL)
    }

    pub fn effective_json(&self) -> bool {
        self.json.unwrap_or(defaults::DEFAULT_LOG_JSON)
    }
}
