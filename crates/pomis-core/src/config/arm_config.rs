//! Action table configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ArmConfig {
    /// Largest controllable variable count an action table may be built over. Default: 12.
    pub max_controllable_variables: Option<usize>,
}

impl ArmConfig {
    pub fn effective_max_controllable_variables(&self) -> usize {
        self.max_controllable_variables
            .unwrap_or(defaults::DEFAULT_MAX_CONTROLLABLE_VARIABLES)
    }
}
