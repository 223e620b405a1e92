//! Time partition: which slice each variable belongs to.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use pomis_core::errors::PartitionError;
use pomis_core::VarSet;
use pomis_graph::CausalDiagram;

/// Ordered, pairwise-disjoint variable sets, one per time step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<VarSet>", into = "Vec<VarSet>")]
pub struct TimePartition {
    slices: Vec<VarSet>,
    index: BTreeMap<String, usize>,
}

impl TimePartition {
    /// Build from explicit slices. Slices must be non-empty and disjoint.
    pub fn new(slices: Vec<VarSet>) -> Result<Self, PartitionError> {
        let mut index = BTreeMap::new();
        for (t, slice) in slices.iter().enumerate() {
            if slice.is_empty() {
                return Err(PartitionError::EmptySlice { index: t });
            }
            for name in slice {
                if let Some(&first) = index.get(name) {
                    return Err(PartitionError::OverlappingSlices {
                        name: name.clone(),
                        first,
                        second: t,
                    });
                }
                index.insert(name.clone(), t);
            }
        }
        Ok(Self { slices, index })
    }

    /// Group variables by their trailing decimal suffix: `X0`, `Z0` land in
    /// slice 0, `X12` in slice 12. Indices must run contiguously from 0.
    pub fn from_variable_names<I, S>(names: I) -> Result<Self, PartitionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut grouped: BTreeMap<usize, VarSet> = BTreeMap::new();
        for name in names {
            let name = name.as_ref();
            let t = time_suffix(name).ok_or_else(|| PartitionError::MissingTimeSuffix {
                name: name.to_string(),
            })?;
            grouped.entry(t).or_default().insert(name.to_string());
        }
        for (expected, &t) in grouped.keys().enumerate() {
            if t != expected {
                return Err(PartitionError::NonContiguous { missing: expected });
            }
        }
        Self::new(grouped.into_values().collect())
    }

    /// Partition of every variable in `diagram`, by name suffix.
    pub fn for_diagram(diagram: &CausalDiagram) -> Result<Self, PartitionError> {
        Self::from_variable_names(diagram.variables())
    }

    /// The time index of `name`.
    pub fn time_index(&self, name: &str) -> Result<usize, PartitionError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| PartitionError::UnmappedVariable {
                name: name.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn slice(&self, t: usize) -> Option<&VarSet> {
        self.slices.get(t)
    }

    pub fn slices(&self) -> &[VarSet] {
        &self.slices
    }

    /// Order reward variables by their slice index.
    pub fn sort_rewards_by_time<S: AsRef<str>>(
        &self,
        rewards: &[S],
    ) -> Result<Vec<String>, PartitionError> {
        let mut keyed = rewards
            .iter()
            .map(|r| Ok((self.time_index(r.as_ref())?, r.as_ref().to_string())))
            .collect::<Result<Vec<_>, PartitionError>>()?;
        keyed.sort();
        Ok(keyed.into_iter().map(|(_, name)| name).collect())
    }

    /// Every diagram variable is mapped and no edge points back in time.
    pub fn validate_diagram(&self, diagram: &CausalDiagram) -> Result<(), PartitionError> {
        for name in diagram.variables() {
            self.time_index(&name)?;
        }
        for (from, to) in diagram.edges() {
            let from_time = self.time_index(&from)?;
            let to_time = self.time_index(&to)?;
            if from_time > to_time {
                return Err(PartitionError::BackwardEdge {
                    from,
                    to,
                    from_time,
                    to_time,
                });
            }
        }
        Ok(())
    }

    /// `rewards[t]` must lie in slice `t`.
    pub fn validate_rewards<S: AsRef<str>>(&self, rewards: &[S]) -> Result<(), PartitionError> {
        for (step, reward) in rewards.iter().enumerate() {
            let actual = self.time_index(reward.as_ref())?;
            if actual != step {
                return Err(PartitionError::RewardOutsideSlice {
                    name: reward.as_ref().to_string(),
                    step,
                    actual,
                });
            }
        }
        Ok(())
    }
}

impl TryFrom<Vec<VarSet>> for TimePartition {
    type Error = PartitionError;

    fn try_from(slices: Vec<VarSet>) -> Result<Self, Self::Error> {
        Self::new(slices)
    }
}

impl From<TimePartition> for Vec<VarSet> {
    fn from(partition: TimePartition) -> Self {
        partition.slices
    }
}

/// Trailing decimal digits of `name`, parsed.
fn time_suffix(name: &str) -> Option<usize> {
    let digits = name.len() - name.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    name[name.len() - digits..].parse().ok()
}

#[cfg(test)]
mod tests {
    use pomis_core::types::var_set;

    use super::*;

    fn three_steps() -> TimePartition {
        TimePartition::new(vec![
            var_set(["X0", "Z0", "Y0"]),
            var_set(["X1", "Z1", "Y1"]),
            var_set(["X2", "Z2", "Y2"]),
        ])
        .unwrap()
    }

    #[test]
    fn maps_variables_to_slices() {
        let p = three_steps();
        assert_eq!(p.len(), 3);
        assert_eq!(p.time_index("Z1").unwrap(), 1);
        assert!(matches!(
            p.time_index("Q"),
            Err(PartitionError::UnmappedVariable { ref name }) if name == "Q"
        ));
    }

    #[test]
    fn rejects_overlap_and_empty_slices() {
        let err = TimePartition::new(vec![var_set(["A"]), var_set(["A", "B"])]).unwrap_err();
        assert!(matches!(
            err,
            PartitionError::OverlappingSlices { first: 0, second: 1, .. }
        ));
        let err = TimePartition::new(vec![var_set(["A"]), VarSet::new()]).unwrap_err();
        assert!(matches!(err, PartitionError::EmptySlice { index: 1 }));
    }

    #[test]
    fn infers_slices_from_suffixes() {
        let mut names = vec!["X0".to_string(), "Y0".to_string(), "Y1".to_string(), "W10".to_string()];
        names.extend((1..10).map(|t| format!("X{t}")));
        let p = TimePartition::from_variable_names(&names).unwrap();
        assert_eq!(p.len(), 11);
        assert_eq!(p.time_index("W10").unwrap(), 10);
        assert_eq!(p.slice(1), Some(&var_set(["X1", "Y1"])));
    }

    #[test]
    fn suffix_inference_errors() {
        assert!(matches!(
            TimePartition::from_variable_names(["X0", "Y"]),
            Err(PartitionError::MissingTimeSuffix { ref name }) if name == "Y"
        ));
        assert!(matches!(
            TimePartition::from_variable_names(["X0", "X2"]),
            Err(PartitionError::NonContiguous { missing: 1 })
        ));
        assert!(matches!(
            TimePartition::from_variable_names(["X1"]),
            Err(PartitionError::NonContiguous { missing: 0 })
        ));
    }

    #[test]
    fn sorts_rewards_by_time() {
        let p = three_steps();
        assert_eq!(
            p.sort_rewards_by_time(&["Y2", "Y0", "Y1"]).unwrap(),
            vec!["Y0", "Y1", "Y2"]
        );
    }

    #[test]
    fn validates_diagram_direction_and_rewards() {
        let p = three_steps();
        let backward = CausalDiagram::new(
            &["X0", "Z0", "Y0", "X1", "Z1", "Y1", "X2", "Z2", "Y2"],
            &[("X1", "X0")],
            &[],
        )
        .unwrap();
        assert!(matches!(
            p.validate_diagram(&backward),
            Err(PartitionError::BackwardEdge { from_time: 1, to_time: 0, .. })
        ));

        assert!(p.validate_rewards(&["Y0", "Y1"]).is_ok());
        assert!(matches!(
            p.validate_rewards(&["Y0", "Y2"]),
            Err(PartitionError::RewardOutsideSlice { step: 1, actual: 2, .. })
        ));
    }

    #[test]
    fn serializes_as_plain_slices() {
        let p = three_steps();
        let json = serde_json::to_string(&p).unwrap();
        let back: TimePartition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
        assert!(serde_json::from_str::<TimePartition>(r#"[["A"], ["A"]]"#).is_err());
    }
}
