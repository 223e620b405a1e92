//! Structural transformations. Each returns a fresh diagram.

use std::collections::BTreeMap;

use pomis_core::errors::GraphError;
use pomis_core::VarSet;

use super::{CausalDiagram, Confounder};

impl CausalDiagram {
    /// `G[S]`: keep the variables in `keep`, plus the edges and
    /// confounders whose endpoints both survive. Unknown names are ignored.
    pub fn induced(&self, keep: &VarSet) -> CausalDiagram {
        let variables: Vec<String> = self
            .node_index
            .keys()
            .filter(|name| keep.contains(*name))
            .cloned()
            .collect();
        let edges = self
            .edges()
            .into_iter()
            .filter(|(a, b)| keep.contains(a) && keep.contains(b));
        let confounders: BTreeMap<String, Confounder> = self
            .confounders
            .iter()
            .filter(|(_, c)| keep.contains(&c.a) && keep.contains(&c.b))
            .map(|(label, c)| (label.clone(), c.clone()))
            .collect();
        CausalDiagram::from_parts_unchecked(variables, edges, confounders)
    }

    /// `G_{do(X)}`: cut every edge into `targets` and drop every confounder
    /// touching them. The variables themselves stay.
    pub fn do_intervention(&self, targets: &VarSet) -> CausalDiagram {
        let edges = self
            .edges()
            .into_iter()
            .filter(|(_, b)| !targets.contains(b));
        let confounders: BTreeMap<String, Confounder> = self
            .confounders
            .iter()
            .filter(|(_, c)| !targets.contains(&c.a) && !targets.contains(&c.b))
            .map(|(label, c)| (label.clone(), c.clone()))
            .collect();
        CausalDiagram::from_parts_unchecked(self.node_index.keys().cloned(), edges, confounders)
    }

    /// `G[An(y)]`.
    pub fn ancestral(&self, y: &str) -> CausalDiagram {
        self.induced(&self.ancestors(y))
    }

    /// A copy with additional edges. Fails on unknown names or a new cycle.
    pub fn with_edges(&self, extra: &[(&str, &str)]) -> Result<CausalDiagram, GraphError> {
        let mut edges = self.edges();
        edges.extend(extra.iter().map(|(a, b)| (a.to_string(), b.to_string())));
        CausalDiagram::try_from_parts(
            self.node_index.keys().cloned().collect(),
            edges,
            self.confounders.values().cloned().collect(),
        )
    }

    /// A copy with additional confounders.
    pub fn with_confounders(
        &self,
        extra: &[(&str, &str, &str)],
    ) -> Result<CausalDiagram, GraphError> {
        let mut confounders: Vec<Confounder> = self.confounders.values().cloned().collect();
        confounders.extend(extra.iter().map(|(a, b, l)| Confounder::new(*a, *b, *l)));
        CausalDiagram::try_from_parts(
            self.node_index.keys().cloned().collect(),
            self.edges(),
            confounders,
        )
    }
}
