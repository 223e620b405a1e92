//! Multi-stage intervention sequences and the deduplicated result set.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::VarSet;

/// One fully resolved joint intervention policy: element `t` is the set of
/// variables intervened on at time step `t`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence(Vec<VarSet>);

impl Sequence {
    pub fn new(steps: Vec<VarSet>) -> Self {
        Self(steps)
    }

    /// Number of time steps (always `T + 1` for enumerator output).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The intervention set at time step `t`.
    pub fn get(&self, t: usize) -> Option<&VarSet> {
        self.0.get(t)
    }

    pub fn steps(&self) -> &[VarSet] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VarSet> {
        self.0.iter()
    }

    /// Union of every step: the arm support this sequence stands for.
    pub fn support(&self) -> VarSet {
        self.0.iter().flatten().cloned().collect()
    }

    pub fn into_inner(self) -> Vec<VarSet> {
        self.0
    }
}

impl From<Vec<VarSet>> for Sequence {
    fn from(steps: Vec<VarSet>) -> Self {
        Self(steps)
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("(")?;
        for (i, step) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            super::fmt_set(step, f)?;
        }
        f.write_str(")")
    }
}

/// Deduplicated collection of sequences, owned by one enumeration call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SequenceSet(BTreeSet<Sequence>);

impl SequenceSet {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Insert a sequence. Returns `false` if it was already present.
    pub fn insert(&mut self, sequence: Sequence) -> bool {
        self.0.insert(sequence)
    }

    pub fn contains(&self, sequence: &Sequence) -> bool {
        self.0.contains(sequence)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::collections::btree_set::Iter<'_, Sequence> {
        self.0.iter()
    }

    /// Distinct supports (per-sequence unions) across the set.
    pub fn supports(&self) -> BTreeSet<VarSet> {
        self.0.iter().map(Sequence::support).collect()
    }

    pub fn into_inner(self) -> BTreeSet<Sequence> {
        self.0
    }
}

impl Extend<Sequence> for SequenceSet {
    fn extend<I: IntoIterator<Item = Sequence>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl FromIterator<Sequence> for SequenceSet {
    fn from_iter<I: IntoIterator<Item = Sequence>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for SequenceSet {
    type Item = Sequence;
    type IntoIter = std::collections::btree_set::IntoIter<Sequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SequenceSet {
    type Item = &'a Sequence;
    type IntoIter = std::collections::btree_set::Iter<'a, Sequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
