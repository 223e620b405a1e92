//! Per-branch search state.

use std::collections::BTreeMap;
use std::rc::Rc;

use pomis_core::VarSet;

/// `IBplus` and `QIB` for one search branch.
///
/// A time index is resolved once it is a key of `ib_plus`. Each candidate
/// pair works on its own clone, so siblings never see each other's commits.
/// `qib` option lists are immutable once stored and shared between clones.
#[derive(Debug, Clone, Default)]
pub(crate) struct BranchState {
    /// Variables committed as must-intervene, per time index, in commit order.
    ib_plus: BTreeMap<usize, Vec<String>>,
    /// Alternative refinements per time index.
    qib: BTreeMap<usize, Rc<[VarSet]>>,
}

impl BranchState {
    pub(crate) fn commit(&mut self, t: usize, name: String) {
        self.ib_plus.entry(t).or_default().push(name);
    }

    /// Mark `t` resolved without committing anything to it.
    pub(crate) fn resolve(&mut self, t: usize) {
        self.ib_plus.entry(t).or_default();
    }

    /// Resolved indices that have no refinement list yet.
    pub(crate) fn unrefined(&self) -> Vec<usize> {
        self.ib_plus
            .keys()
            .filter(|t| !self.qib.contains_key(t))
            .copied()
            .collect()
    }

    pub(crate) fn committed(&self, t: usize) -> VarSet {
        self.ib_plus
            .get(&t)
            .map(|names| names.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub(crate) fn refine(&mut self, t: usize, options: Rc<[VarSet]>) {
        self.qib.insert(t, options);
    }

    pub(crate) fn earliest_resolved(&self) -> Option<usize> {
        self.ib_plus.keys().next().copied()
    }

    /// Per-position choices for the final product over `0..=horizon`.
    /// Positions that were never resolved contribute only the empty set.
    pub(crate) fn choices(&self, horizon: usize) -> Vec<Vec<VarSet>> {
        (0..=horizon)
            .map(|t| match self.qib.get(&t) {
                Some(options) if self.ib_plus.contains_key(&t) => {
                    let committed = self.committed(t);
                    options
                        .iter()
                        .map(|q| q.union(&committed).cloned().collect())
                        .collect()
                }
                _ => vec![VarSet::new()],
            })
            .collect()
    }
}

/// A pending stage on the work stack, owning the state it descends with.
#[derive(Debug)]
pub(crate) struct Frame {
    pub(crate) stage: usize,
    pub(crate) state: BranchState,
}

impl Frame {
    pub(crate) fn root(horizon: usize) -> Self {
        Self {
            stage: horizon,
            state: BranchState::default(),
        }
    }
}
