//! Action tables and arm selection.

pub mod strategy;
pub mod table;

use std::collections::BTreeSet;

use pomis_core::{SequenceSet, VarSet};

pub use strategy::ArmStrategy;
pub use table::{ActionTable, Arm};

/// Ascending indices of the arms whose support equals the union of some
/// sequence in `sequences`.
pub fn select_arms(table: &ActionTable, sequences: &SequenceSet) -> Vec<usize> {
    select_by_supports(table, &sequences.supports())
}

/// Ascending indices of the arms whose support is one of `supports`.
pub fn select_by_supports(table: &ActionTable, supports: &BTreeSet<VarSet>) -> Vec<usize> {
    table
        .arms()
        .iter()
        .filter(|arm| supports.contains(&arm.support()))
        .map(|arm| arm.index)
        .collect()
}
