//! Arm selection strategies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use pomis_core::errors::ArmError;
use pomis_core::PomisResult;
use pomis_graph::SingleSliceOracle;

use super::{select_by_supports, ActionTable};
use crate::enumerator::SequenceEnumerator;

/// How to restrict an action table before handing it to a bandit learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmStrategy {
    /// Arms whose support is the union of some POMIS+ sequence.
    PomisPlus,
    /// Myopic baseline: per-slice POMIS sets combined across slices.
    Pomis,
    /// Every arm.
    BruteForce,
}

impl ArmStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::PomisPlus => "pomis_plus",
            Self::Pomis => "pomis",
            Self::BruteForce => "brute_force",
        }
    }

    /// Arm indices of `table` selected under this strategy, ascending.
    pub fn arms_of<O: SingleSliceOracle>(
        &self,
        enumerator: &SequenceEnumerator<'_, O>,
        horizon: usize,
        table: &ActionTable,
    ) -> PomisResult<Vec<usize>> {
        let arms = match self {
            Self::PomisPlus => {
                let sequences = enumerator.enumerate(horizon)?;
                select_by_supports(table, &sequences.supports())
            }
            Self::Pomis => select_by_supports(table, &enumerator.myopic_supports(horizon)?),
            Self::BruteForce => table.indices(),
        };
        tracing::debug!(strategy = self.name(), arms = arms.len(), of = table.len(), "arms selected");
        Ok(arms)
    }
}

impl fmt::Display for ArmStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ArmStrategy {
    type Err = ArmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pomis_plus" | "pomis+" | "pomisplus" => Ok(Self::PomisPlus),
            "pomis" => Ok(Self::Pomis),
            "brute_force" | "bruteforce" | "brute" => Ok(Self::BruteForce),
            _ => Err(ArmError::UnknownStrategy {
                name: s.to_string(),
            }),
        }
    }
}
