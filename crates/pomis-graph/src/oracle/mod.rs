//! Single-slice oracle: MUCT, interventional border, and POMIS.

pub mod muct;
pub mod pomis;

use std::collections::BTreeSet;

use pomis_core::{CandidatePair, VarSet};

use crate::diagram::CausalDiagram;

pub use muct::{interventional_border, muct, muct_ib};
pub use pomis::{pomis, pomis_pairs};

/// Candidate interventions for one reward variable in one diagram.
///
/// The enumerator only talks to this trait, so alternative oracles
/// (and test stubs) can be substituted.
pub trait SingleSliceOracle {
    /// All `(Xs, Ts)` pairs for `reward` in `diagram`, deduplicated.
    fn candidate_pairs(&self, diagram: &CausalDiagram, reward: &str) -> Vec<CandidatePair>;

    /// The plain POMIS set: the `Xs` projection of [`Self::candidate_pairs`].
    fn slice_pomis(&self, diagram: &CausalDiagram, reward: &str) -> BTreeSet<VarSet> {
        self.candidate_pairs(diagram, reward)
            .into_iter()
            .map(|pair| pair.interventions)
            .collect()
    }
}

/// The MUCT / IB oracle.
#[derive(Debug, Clone, Copy, Default)]
pub struct MuctOracle;

impl SingleSliceOracle for MuctOracle {
    fn candidate_pairs(&self, diagram: &CausalDiagram, reward: &str) -> Vec<CandidatePair> {
        pomis_pairs(diagram, reward)
    }
}
