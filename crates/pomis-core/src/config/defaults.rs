// Single source of truth for all default values.

// --- Enumeration ---
pub const DEFAULT_SORT_CANDIDATES: bool = true;

// --- Arms ---
pub const DEFAULT_MAX_CONTROLLABLE_VARIABLES: usize = 12;
/// Hard ceiling accepted by validation: a binary table over n variables has 3^n arms.
pub const MAX_CONTROLLABLE_VARIABLES_CEILING: usize = 16;

// --- Logging ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = false;
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

// --- Files & environment ---
pub const PROJECT_CONFIG_FILENAME: &str = "pomis.toml";
pub const ENV_SORT_CANDIDATES: &str = "POMIS_SORT_CANDIDATES";
pub const ENV_MAX_SEQUENCES: &str = "POMIS_MAX_SEQUENCES";
pub const ENV_MAX_CONTROLLABLE: &str = "POMIS_MAX_CONTROLLABLE";
pub const ENV_LOG_LEVEL: &str = "POMIS_LOG_LEVEL";
