//! Enumerated action tables: arm index → variable assignment.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use pomis_core::config::defaults::MAX_CONTROLLABLE_VARIABLES_CEILING;
use pomis_core::config::ArmConfig;
use pomis_core::errors::ArmError;
use pomis_core::VarSet;
use pomis_graph::CausalDiagram;

/// One arm: a value for each intervened variable. An empty assignment is
/// the purely observational arm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arm {
    pub index: usize,
    pub assignment: BTreeMap<String, u8>,
}

impl Arm {
    /// The variables this arm intervenes on.
    pub fn support(&self) -> VarSet {
        self.assignment.keys().cloned().collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionTable {
    arms: Vec<Arm>,
}

impl ActionTable {
    /// Every binary assignment to every subset of `controllable`.
    ///
    /// Subsets come in ascending size, lexicographic within a size; within a
    /// subset the assignments run in odometer order over `{0, 1}` with the
    /// last variable changing fastest. The table has `3^n` arms, so more
    /// than [`MAX_CONTROLLABLE_VARIABLES_CEILING`] variables is
    /// `TableTooLarge`.
    pub fn binary<I, S>(controllable: I) -> Result<Self, ArmError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let vars: Vec<String> = controllable
            .into_iter()
            .map(Into::into)
            .collect::<VarSet>()
            .into_iter()
            .collect();
        if vars.len() > MAX_CONTROLLABLE_VARIABLES_CEILING {
            return Err(ArmError::TableTooLarge {
                variables: vars.len(),
                limit: MAX_CONTROLLABLE_VARIABLES_CEILING,
            });
        }

        let mut assignments = Vec::new();
        for size in 0..=vars.len() {
            for subset in combinations(vars.len(), size) {
                for bits in 0..(1usize << size) {
                    let assignment = subset
                        .iter()
                        .enumerate()
                        .map(|(pos, &v)| {
                            let value = (bits >> (size - 1 - pos)) & 1;
                            (vars[v].clone(), value as u8)
                        })
                        .collect();
                    assignments.push(assignment);
                }
            }
        }
        Ok(Self::from_assignments(assignments))
    }

    /// Binary table over `V \ rewards`, capped by configuration.
    pub fn for_diagram<S: AsRef<str>>(
        diagram: &CausalDiagram,
        rewards: &[S],
        config: &ArmConfig,
    ) -> Result<Self, ArmError> {
        let mut controllable = diagram.variables();
        for reward in rewards {
            controllable.remove(reward.as_ref());
        }
        let limit = config.effective_max_controllable_variables();
        if controllable.len() > limit {
            return Err(ArmError::TableTooLarge {
                variables: controllable.len(),
                limit,
            });
        }
        Self::binary(controllable)
    }

    /// Wrap a precomputed table; arm `i` gets `assignments[i]`.
    pub fn from_assignments(assignments: Vec<BTreeMap<String, u8>>) -> Self {
        Self {
            arms: assignments
                .into_iter()
                .enumerate()
                .map(|(index, assignment)| Arm { index, assignment })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.arms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Arm> {
        self.arms.get(index)
    }

    pub fn arms(&self) -> &[Arm] {
        &self.arms
    }

    pub fn indices(&self) -> Vec<usize> {
        (0..self.arms.len()).collect()
    }
}

/// All `k`-subsets of `0..n` as ascending index lists, in lexicographic order.
fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    if k > n {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut current: Vec<usize> = (0..k).collect();
    loop {
        out.push(current.clone());
        // Rightmost position that can still move.
        let Some(pos) = (0..k).rev().find(|&i| current[i] < n - k + i) else {
            return out;
        };
        current[pos] += 1;
        for i in pos + 1..k {
            current[i] = current[i - 1] + 1;
        }
    }
}
