//! Candidate pair returned by the single-slice oracle.

use serde::{Deserialize, Serialize};

use super::VarSet;

/// One `(Xs, Ts)` candidate from the single-slice oracle.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CandidatePair {
    /// `Xs`: variables to intervene on at the current analysis step.
    pub interventions: VarSet,
    /// `Ts`: variables that refinements at earlier, unresolved steps must avoid.
    pub boundary: VarSet,
}

impl CandidatePair {
    pub fn new(interventions: VarSet, boundary: VarSet) -> Self {
        Self {
            interventions,
            boundary,
        }
    }

    /// Whether `option` shares no variable with the boundary set.
    pub fn admits(&self, option: &VarSet) -> bool {
        self.boundary.is_disjoint(option)
    }
}

impl std::fmt::Display for CandidatePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("(")?;
        super::fmt_set(&self.interventions, f)?;
        f.write_str(", ")?;
        super::fmt_set(&self.boundary, f)?;
        f.write_str(")")
    }
}
