//! Memoised oracle answers, owned by one top-level enumeration call.

use std::collections::BTreeMap;
use std::rc::Rc;

use pomis_core::{CandidatePair, VarSet};

#[derive(Debug, Default)]
pub(crate) struct StageCache {
    pairs: BTreeMap<usize, Rc<[CandidatePair]>>,
    refinements: BTreeMap<(usize, VarSet), Rc<[VarSet]>>,
}

impl StageCache {
    /// Candidate pairs for `stage`, computing them on first use.
    pub(crate) fn pairs<F, E>(&mut self, stage: usize, compute: F) -> Result<Rc<[CandidatePair]>, E>
    where
        F: FnOnce() -> Result<Vec<CandidatePair>, E>,
    {
        if let Some(hit) = self.pairs.get(&stage) {
            return Ok(Rc::clone(hit));
        }
        let pairs: Rc<[CandidatePair]> = compute()?.into();
        self.pairs.insert(stage, Rc::clone(&pairs));
        Ok(pairs)
    }

    /// Unfiltered slice POMIS for slice `t` under `do(committed)`.
    pub(crate) fn refinements<F>(&mut self, t: usize, committed: &VarSet, compute: F) -> Rc<[VarSet]>
    where
        F: FnOnce() -> Vec<VarSet>,
    {
        let key = (t, committed.clone());
        Rc::clone(
            self.refinements
                .entry(key)
                .or_insert_with(|| compute().into()),
        )
    }

    pub(crate) fn stats(&self) -> (usize, usize) {
        (self.pairs.len(), self.refinements.len())
    }
}
