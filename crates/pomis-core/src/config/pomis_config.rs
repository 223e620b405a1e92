//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, ArmConfig, EnumerationConfig, LoggingConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`POMIS_*`)
/// 3. Project config (`pomis.toml` in the project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PomisConfig {
    pub enumeration: EnumerationConfig,
    pub arms: ArmConfig,
    pub logging: LoggingConfig,
}

/// Override values supplied programmatically by an embedding application.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub sort_candidates: Option<bool>,
    pub max_sequences: Option<usize>,
    pub max_controllable_variables: Option<usize>,
    pub log_level: Option<String>,
}

impl PomisConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(defaults::PROJECT_CONFIG_FILENAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &PomisConfig) -> Result<(), ConfigError> {
        if config.enumeration.max_sequences == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "enumeration.max_sequences".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(max) = config.arms.max_controllable_variables {
            if max > defaults::MAX_CONTROLLABLE_VARIABLES_CEILING {
                return Err(ConfigError::ValidationFailed {
                    field: "arms.max_controllable_variables".to_string(),
                    message: format!(
                        "must be at most {}",
                        defaults::MAX_CONTROLLABLE_VARIABLES_CEILING
                    ),
                });
            }
        }
        if let Some(ref level) = config.logging.level {
            if !defaults::LOG_LEVELS.contains(&level.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "logging.level".to_string(),
                    message: format!("unknown level {level:?}"),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut PomisConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: PomisConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        tracing::debug!(path = %path.display(), "merged project config");
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut PomisConfig, other: &PomisConfig) {
        if other.enumeration.sort_candidates.is_some() {
            base.enumeration.sort_candidates = other.enumeration.sort_candidates;
        }
        if other.enumeration.max_sequences.is_some() {
            base.enumeration.max_sequences = other.enumeration.max_sequences;
        }
        if other.arms.max_controllable_variables.is_some() {
            base.arms.max_controllable_variables = other.arms.max_controllable_variables;
        }
        if other.logging.level.is_some() {
            base.logging.level = other.logging.level.clone();
        }
        if other.logging.json.is_some() {
            base.logging.json = other.logging.json;
        }
    }

    /// Apply `POMIS_*` environment overrides read through `lookup`.
    pub fn apply_env_overrides<F>(config: &mut PomisConfig, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(defaults::ENV_SORT_CANDIDATES) {
            config.enumeration.sort_candidates = Some(parse_env(defaults::ENV_SORT_CANDIDATES, &raw)?);
        }
        if let Some(raw) = lookup(defaults::ENV_MAX_SEQUENCES) {
            config.enumeration.max_sequences = Some(parse_env(defaults::ENV_MAX_SEQUENCES, &raw)?);
        }
        if let Some(raw) = lookup(defaults::ENV_MAX_CONTROLLABLE) {
            config.arms.max_controllable_variables =
                Some(parse_env(defaults::ENV_MAX_CONTROLLABLE, &raw)?);
        }
        if let Some(raw) = lookup(defaults::ENV_LOG_LEVEL) {
            config.logging.level = Some(raw.trim().to_lowercase());
        }
        Ok(())
    }

    /// Apply programmatic overrides (highest priority).
    pub fn apply_overrides(config: &mut PomisConfig, overrides: &ConfigOverrides) {
        if overrides.sort_candidates.is_some() {
            config.enumeration.sort_candidates = overrides.sort_candidates;
        }
        if overrides.max_sequences.is_some() {
            config.enumeration.max_sequences = overrides.max_sequences;
        }
        if overrides.max_controllable_variables.is_some() {
            config.arms.max_controllable_variables = overrides.max_controllable_variables;
        }
        if overrides.log_level.is_some() {
            config.logging.level = overrides.log_level.clone();
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::ValidationFailed {
        field: key.to_string(),
        message: format!("cannot parse {raw:?}"),
    })
}
