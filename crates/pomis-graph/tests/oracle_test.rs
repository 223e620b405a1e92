//! Oracle and diagram tests against the shared diagram fixtures.

use std::collections::BTreeSet;

use pomis_core::types::var_set;
use pomis_core::{CandidatePair, VarSet};
use pomis_graph::oracle::{muct_ib, pomis, pomis_pairs};
use pomis_graph::{unroll, CausalDiagram, DiagramDef, MuctOracle, SingleSliceOracle, Transition};
use test_fixtures::{load_diagram, GOLDEN_DIAGRAMS};

fn fixture(name: &str) -> (CausalDiagram, DiagramDef) {
    let def: DiagramDef = load_diagram(name);
    (def.to_diagram().unwrap(), def)
}

fn pair(xs: &[&str], ts: &[&str]) -> CandidatePair {
    CandidatePair::new(var_set(xs.iter().copied()), var_set(ts.iter().copied()))
}

#[test]
fn every_fixture_builds() {
    for name in GOLDEN_DIAGRAMS {
        let (g, def) = fixture(name);
        assert_eq!(g.len(), def.variables.len(), "{name}");
        assert_eq!(g.confounder_count(), def.confounders.len(), "{name}");
    }
}

#[test]
fn x0_to_y2_pairs_per_stage() {
    let (g, _) = fixture("x0_to_y2");
    assert_eq!(
        pomis_pairs(&g, "Y0"),
        vec![pair(&[], &["X0", "Y0", "Z0"]), pair(&["Z0"], &["Y0"])]
    );
    assert_eq!(
        pomis_pairs(&g, "Y1"),
        vec![pair(&["X0"], &["X1", "Y1", "Z1"]), pair(&["Z1"], &["Y1"])]
    );
    assert_eq!(
        pomis_pairs(&g, "Y2"),
        vec![pair(&["X1"], &["X2", "Y2", "Z2"]), pair(&["Z2"], &["Y2"])]
    );
}

#[test]
fn x0_to_y2_slice_pomis() {
    let (g, def) = fixture("x0_to_y2");
    for (t, slice) in def.slices.iter().enumerate() {
        let restricted = g.induced(&slice.iter().cloned().collect());
        let y = &def.rewards[t];
        let expected: BTreeSet<VarSet> =
            BTreeSet::from([VarSet::new(), var_set([format!("Z{t}")])]);
        assert_eq!(pomis(&restricted, y), expected);
        assert_eq!(MuctOracle.slice_pomis(&restricted, y), expected);
    }
}

#[test]
fn unrolled_template_matches_fixture() {
    let (g, _) = fixture("x0_to_y2");
    let template = CausalDiagram::new(
        &["X", "Z", "Y"],
        &[("X", "Z"), ("Z", "Y")],
        &[("X", "Y", "U_XY")],
    )
    .unwrap();
    let unrolled = unroll(&template, &[Transition::edge("X", "X")], 3).unwrap();
    assert_eq!(unrolled.variables(), g.variables());
    assert_eq!(unrolled.edges(), g.edges());
    for conf in g.confounders() {
        assert!(unrolled.is_confounded(&conf.a, &conf.b));
    }
}

#[test]
fn intervention_on_border_shrinks_territory() {
    let (g, _) = fixture("wxzy_four_step");
    let (territory, border) = muct_ib(&g, "Y2");
    assert!(territory.contains("Y2"));
    assert!(territory.is_disjoint(&border));
    let cut = g.do_intervention(&border);
    let (after, _) = muct_ib(&cut, "Y2");
    assert!(after.is_subset(&territory));
}
