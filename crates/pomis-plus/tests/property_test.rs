//! Property tests for POMIS+ enumeration on random time-sliced diagrams.

use proptest::prelude::*;

use pomis_core::config::EnumerationConfig;
use pomis_core::SequenceSet;
use pomis_graph::{CausalDiagram, Confounder, MuctOracle};
use pomis_plus::{SequenceEnumerator, TimePartition};

const KINDS: [&str; 3] = ["A", "B", "Y"];

fn var(i: usize) -> String {
    format!("{}{}", KINDS[i % 3], i / 3)
}

/// Steps of `A_t, B_t, Y_t`. Edges run forward in index order, never
/// leave a reward, and span at most one step; confounders span at most one.
fn build_sliced(
    steps: usize,
    edges: &[(usize, usize)],
    confounders: &[(usize, usize)],
) -> (CausalDiagram, TimePartition, Vec<String>) {
    let n = steps * 3;
    let variables: Vec<String> = (0..n).map(var).collect();
    let edges: Vec<(String, String)> = edges
        .iter()
        .filter(|&&(a, b)| a < b && b < n && a % 3 != 2 && b / 3 - a / 3 <= 1)
        .map(|&(a, b)| (var(a), var(b)))
        .collect();
    let confounders: Vec<Confounder> = confounders
        .iter()
        .filter(|&&(a, b)| a < b && b < n && b / 3 - a / 3 <= 1)
        .map(|&(a, b)| Confounder::new(var(a), var(b), format!("U_{a}_{b}")))
        .collect();
    let diagram = CausalDiagram::try_from_parts(variables, edges, confounders).unwrap();
    let partition = TimePartition::for_diagram(&diagram).unwrap();
    let rewards = (0..steps).map(|t| format!("Y{t}")).collect();
    (diagram, partition, rewards)
}

fn pairs_strategy() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..9usize, 0..9usize), 0..16)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn sequences_are_well_formed(
        steps in 1..=3usize,
        edges in pairs_strategy(),
        confs in pairs_strategy(),
    ) {
        let (g, p, rewards) = build_sliced(steps, &edges, &confs);
        let enumerator = SequenceEnumerator::new(
            &g, &p, &rewards, MuctOracle, &EnumerationConfig::default(),
        ).unwrap();
        let horizon = steps - 1;
        let sequences = enumerator.enumerate(horizon).unwrap();

        for sequence in &sequences {
            prop_assert_eq!(sequence.len(), horizon + 1);
            for (t, step) in sequence.iter().enumerate() {
                prop_assert!(step.is_subset(p.slice(t).unwrap()), "{} at {}", sequence, t);
                prop_assert!(rewards.iter().all(|y| !step.contains(y)), "{}", sequence);
            }
        }
    }

    #[test]
    fn enumeration_is_deterministic(
        steps in 1..=3usize,
        edges in pairs_strategy(),
        confs in pairs_strategy(),
    ) {
        let (g, p, rewards) = build_sliced(steps, &edges, &confs);
        let sorted = SequenceEnumerator::new(
            &g, &p, &rewards, MuctOracle, &EnumerationConfig::default(),
        ).unwrap();
        let unsorted_config = EnumerationConfig { sort_candidates: Some(false), ..Default::default() };
        let unsorted = SequenceEnumerator::new(&g, &p, &rewards, MuctOracle, &unsorted_config).unwrap();

        let horizon = steps - 1;
        let first = sorted.enumerate(horizon).unwrap();
        prop_assert_eq!(&first, &sorted.enumerate(horizon).unwrap());
        prop_assert_eq!(&first, &unsorted.enumerate(horizon).unwrap());
    }

    #[test]
    fn shared_accumulator_is_the_union(
        steps in 2..=3usize,
        edges in pairs_strategy(),
        confs in pairs_strategy(),
    ) {
        let (g, p, rewards) = build_sliced(steps, &edges, &confs);
        let enumerator = SequenceEnumerator::new(
            &g, &p, &rewards, MuctOracle, &EnumerationConfig::default(),
        ).unwrap();

        let full = enumerator.enumerate(steps - 1).unwrap();
        let first_only = enumerator.enumerate(0).unwrap();

        let mut shared = SequenceSet::new();
        enumerator.enumerate_into(steps - 1, &mut shared).unwrap();
        enumerator.enumerate_into(0, &mut shared).unwrap();
        enumerator.enumerate_into(steps - 1, &mut shared).unwrap();

        let union: SequenceSet = full.iter().chain(first_only.iter()).cloned().collect();
        prop_assert_eq!(shared, union);
    }
}
