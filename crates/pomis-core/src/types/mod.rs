//! Shared data types: variable sets, candidate pairs, and sequences.

pub mod candidate;
pub mod sequence;

use std::collections::BTreeSet;

pub use candidate::CandidatePair;
pub use sequence::{Sequence, SequenceSet};

/// A set of variable names. Ordered so that sets hash, compare, and print
/// deterministically.
pub type VarSet = BTreeSet<String>;

/// Build a [`VarSet`] from anything yielding names.
pub fn var_set<I, S>(names: I) -> VarSet
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Into::into).collect()
}

/// Render a set as `{A, B}`.
pub(crate) fn fmt_set(set: &VarSet, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str("{")?;
    for (i, name) in set.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        f.write_str(name)?;
    }
    f.write_str("}")
}
