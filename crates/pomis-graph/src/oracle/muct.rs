//! Minimal unobserved confounders' territory and its interventional border.

use pomis_core::VarSet;

use crate::diagram::CausalDiagram;

/// `MUCT(G, Y)`: the smallest set containing `Y` that is closed under
/// c-components and descendants inside `G[An(Y)]`.
///
/// Empty when `y` is not a variable of `diagram`.
pub fn muct(diagram: &CausalDiagram, y: &str) -> VarSet {
    if !diagram.contains(y) {
        return VarSet::new();
    }
    let h = diagram.ancestral(y);
    let mut territory = VarSet::from([y.to_string()]);
    let mut pending = territory.clone();

    while let Some(q) = pending.pop_first() {
        let component = h.c_component(&q);
        territory.extend(component.iter().cloned());
        pending.extend(h.descendants_of(&component));
        pending.retain(|v| !territory.contains(v));
    }
    territory
}

/// `IB(G, Y) = pa(MUCT) \ MUCT`.
pub fn interventional_border(diagram: &CausalDiagram, y: &str) -> VarSet {
    muct_ib(diagram, y).1
}

/// `(MUCT, IB)` computed together.
pub fn muct_ib(diagram: &CausalDiagram, y: &str) -> (VarSet, VarSet) {
    let territory = muct(diagram, y);
    let border = diagram
        .parents_of(&territory)
        .difference(&territory)
        .cloned()
        .collect();
    (territory, border)
}
