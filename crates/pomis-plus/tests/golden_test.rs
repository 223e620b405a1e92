//! Golden tests: enumeration and arm selection on the shared fixtures.

use pomis_core::config::{ArmConfig, EnumerationConfig};
use pomis_core::SequenceSet;
use pomis_graph::{CausalDiagram, DiagramDef, MuctOracle};
use pomis_plus::{select_arms, ActionTable, ArmStrategy, SequenceEnumerator, TimePartition};
use test_fixtures::{load_diagram, load_golden, GOLDEN_DIAGRAMS};

struct Problem {
    diagram: CausalDiagram,
    partition: TimePartition,
    rewards: Vec<String>,
}

fn problem(name: &str) -> Problem {
    let def: DiagramDef = load_diagram(name);
    let diagram = def.to_diagram().unwrap();
    let partition =
        TimePartition::new(def.slices.iter().map(|s| s.iter().cloned().collect()).collect())
            .unwrap();
    Problem {
        diagram,
        partition,
        rewards: def.rewards,
    }
}

fn as_lists(sequences: &SequenceSet) -> Vec<Vec<Vec<String>>> {
    let mut lists: Vec<Vec<Vec<String>>> = sequences
        .iter()
        .map(|seq| seq.iter().map(|step| step.iter().cloned().collect()).collect())
        .collect();
    lists.sort();
    lists
}

#[test]
fn sequences_match_golden() {
    pomis_core::tracing_setup::init_tracing();
    for name in GOLDEN_DIAGRAMS {
        let p = problem(name);
        let golden = load_golden(name);
        let enumerator = SequenceEnumerator::new(
            &p.diagram,
            &p.partition,
            &p.rewards,
            MuctOracle,
            &EnumerationConfig::default(),
        )
        .unwrap();
        let sequences = enumerator.enumerate(golden.horizon).unwrap();
        assert_eq!(as_lists(&sequences), golden.sequences, "{name}");
    }
}

#[test]
fn sequences_do_not_depend_on_candidate_order() {
    for name in GOLDEN_DIAGRAMS {
        let p = problem(name);
        let golden = load_golden(name);
        let unsorted = EnumerationConfig {
            sort_candidates: Some(false),
            ..Default::default()
        };
        let enumerator =
            SequenceEnumerator::new(&p.diagram, &p.partition, &p.rewards, MuctOracle, &unsorted)
                .unwrap();
        let sequences = enumerator.enumerate(golden.horizon).unwrap();
        assert_eq!(as_lists(&sequences), golden.sequences, "{name}");
    }
}

#[test]
fn arms_match_golden() {
    for name in GOLDEN_DIAGRAMS {
        let golden = load_golden(name);
        let (Some(arm_count), Some(plus_arms), Some(myopic_arms)) = (
            golden.arm_count,
            golden.pomis_plus_arms.clone(),
            golden.myopic_arms.clone(),
        ) else {
            continue;
        };

        let p = problem(name);
        let table = ActionTable::for_diagram(&p.diagram, &p.rewards, &ArmConfig::default()).unwrap();
        assert_eq!(table.len(), arm_count, "{name}");

        let enumerator = SequenceEnumerator::new(
            &p.diagram,
            &p.partition,
            &p.rewards,
            MuctOracle,
            &EnumerationConfig::default(),
        )
        .unwrap();
        let sequences = enumerator.enumerate(golden.horizon).unwrap();
        assert_eq!(select_arms(&table, &sequences), plus_arms, "{name}");
        assert_eq!(
            ArmStrategy::PomisPlus
                .arms_of(&enumerator, golden.horizon, &table)
                .unwrap(),
            plus_arms,
            "{name}"
        );
        assert_eq!(
            ArmStrategy::Pomis
                .arms_of(&enumerator, golden.horizon, &table)
                .unwrap(),
            myopic_arms,
            "{name}"
        );
        assert_eq!(
            ArmStrategy::BruteForce
                .arms_of(&enumerator, golden.horizon, &table)
                .unwrap()
                .len(),
            arm_count
        );
    }
}

#[test]
fn suffix_partition_agrees_with_fixture_slices() {
    for name in GOLDEN_DIAGRAMS {
        let p = problem(name);
        assert_eq!(TimePartition::for_diagram(&p.diagram).unwrap(), p.partition, "{name}");
    }
}
