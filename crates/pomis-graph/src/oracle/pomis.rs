//! POMIS enumeration by single-variable interventions on the MUCT.

use std::collections::BTreeSet;

use tracing::trace;

use pomis_core::{CandidatePair, VarSet};

use super::muct::muct_ib;
use crate::diagram::CausalDiagram;

/// Every `(IB, MUCT)` pair reachable from `(G[An(y)], y)`, sorted.
pub fn pomis_pairs(diagram: &CausalDiagram, y: &str) -> Vec<CandidatePair> {
    if !diagram.contains(y) {
        return Vec::new();
    }
    let g = diagram.ancestral(y);
    let (territory, border) = muct_ib(&g, y);
    let h = reduce(&g, &territory, &border);
    let order = reversed_order_within(&h, &territory, y);

    let mut found = BTreeSet::new();
    refine(&h, y, &order, &VarSet::new(), &mut found);
    found.insert(CandidatePair::new(border, territory));

    trace!(reward = y, pairs = found.len(), "pomis pairs");
    found.into_iter().collect()
}

/// The POMIS set of `y` in `diagram`.
pub fn pomis(diagram: &CausalDiagram, y: &str) -> BTreeSet<VarSet> {
    pomis_pairs(diagram, y)
        .into_iter()
        .map(|pair| pair.interventions)
        .collect()
}

/// `G_{do(X)}[T ∪ X]`.
fn reduce(g: &CausalDiagram, territory: &VarSet, border: &VarSet) -> CausalDiagram {
    g.do_intervention(border)
        .induced(&territory.union(border).cloned().collect())
}

/// Members of `territory` other than `y`, latest first in causal order.
fn reversed_order_within(g: &CausalDiagram, territory: &VarSet, y: &str) -> Vec<String> {
    g.causal_order()
        .into_iter()
        .rev()
        .filter(|v| v != y && territory.contains(v))
        .collect()
}

fn refine(
    g: &CausalDiagram,
    y: &str,
    order: &[String],
    observed: &VarSet,
    found: &mut BTreeSet<CandidatePair>,
) {
    for (i, w) in order.iter().enumerate() {
        let (territory, border) = muct_ib(&g.do_intervention(&VarSet::from([w.clone()])), y);
        let mut visited = observed.clone();
        visited.extend(order[..i].iter().cloned());
        if !border.is_disjoint(&visited) {
            continue;
        }

        let rest: Vec<String> = order[i + 1..]
            .iter()
            .filter(|v| territory.contains(*v))
            .cloned()
            .collect();
        if !rest.is_empty() {
            let h = reduce(g, &territory, &border);
            refine(&h, y, &rest, &visited, found);
        }
        found.insert(CandidatePair::new(border, territory));
    }
}

#[cfg(test)]
mod tests {
    use pomis_core::types::var_set;

    use super::*;

    fn pair(xs: &[&str], ts: &[&str]) -> CandidatePair {
        CandidatePair::new(var_set(xs.iter().copied()), var_set(ts.iter().copied()))
    }

    #[test]
    fn front_door_diagram() {
        let g = CausalDiagram::new(
            &["X", "Z", "Y"],
            &[("X", "Z"), ("Z", "Y")],
            &[("X", "Y", "U_XY")],
        )
        .unwrap();
        assert_eq!(
            pomis_pairs(&g, "Y"),
            vec![pair(&[], &["X", "Y", "Z"]), pair(&["Z"], &["Y"])]
        );
        assert_eq!(pomis(&g, "Y"), BTreeSet::from([VarSet::new(), var_set(["Z"])]));
    }

    #[test]
    fn unconfounded_chain_only_needs_the_parent() {
        let g = CausalDiagram::new(&["X", "Z", "Y"], &[("X", "Z"), ("Z", "Y")], &[]).unwrap();
        assert_eq!(pomis_pairs(&g, "Y"), vec![pair(&["Z"], &["Y"])]);
    }

    #[test]
    fn double_bow_reaches_every_border() {
        let g = CausalDiagram::new(
            &["X", "Z", "Y"],
            &[("X", "Z"), ("Z", "Y")],
            &[("X", "Y", "U_XY"), ("Z", "Y", "U_ZY")],
        )
        .unwrap();
        assert_eq!(
            pomis_pairs(&g, "Y"),
            vec![
                pair(&[], &["X", "Y", "Z"]),
                pair(&["X"], &["Y", "Z"]),
                pair(&["Z"], &["Y"]),
            ]
        );
    }

    #[test]
    fn two_confounded_parents() {
        let g = CausalDiagram::new(
            &["X1", "X2", "Y"],
            &[("X1", "X2"), ("X2", "Y"), ("X1", "Y")],
            &[("X1", "Y", "U1"), ("X2", "Y", "U2")],
        )
        .unwrap();
        assert_eq!(
            pomis_pairs(&g, "Y"),
            vec![
                pair(&[], &["X1", "X2", "Y"]),
                pair(&["X1"], &["X2", "Y"]),
                pair(&["X1", "X2"], &["Y"]),
                pair(&["X2"], &["X1", "Y"]),
            ]
        );
    }

    #[test]
    fn unknown_reward_has_no_pairs() {
        let g = CausalDiagram::new(&["X"], &[], &[]).unwrap();
        assert!(pomis_pairs(&g, "Y").is_empty());
    }
}
