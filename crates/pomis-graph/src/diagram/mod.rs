//! petgraph::StableGraph wrapper holding a causal diagram: observed
//! variables, directed cause→effect edges, and labelled confounding arcs.

pub mod def;
mod transform;
pub mod unroll;

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use petgraph::algo::tarjan_scc;
use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::unionfind::UnionFind;
use petgraph::visit::NodeIndexable;
use petgraph::{Directed, Direction};
use serde::{Deserialize, Serialize};

use pomis_core::errors::GraphError;
use pomis_core::VarSet;

/// An unobserved common cause of `a` and `b`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Confounder {
    pub a: String,
    pub b: String,
    pub label: String,
}

impl Confounder {
    pub fn new(a: impl Into<String>, b: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            label: label.into(),
        }
    }

    /// Whether this arc touches `name`.
    pub fn touches(&self, name: &str) -> bool {
        self.a == name || self.b == name
    }

    fn endpoints(&self) -> (&str, &str) {
        if self.a <= self.b {
            (&self.a, &self.b)
        } else {
            (&self.b, &self.a)
        }
    }
}

/// The underlying directed graph type. Node weights are variable names.
pub type DiagramGraph = StableGraph<String, (), Directed>;

/// A causal diagram. Immutable once built: every transformation
/// (`induced`, `do_intervention`, ...) returns a new diagram.
#[derive(Debug, Clone)]
pub struct CausalDiagram {
    graph: DiagramGraph,
    node_index: BTreeMap<String, NodeIndex>,
    /// Keyed by label.
    confounders: BTreeMap<String, Confounder>,
}

impl CausalDiagram {
    /// Build a diagram from borrowed names.
    pub fn new(
        variables: &[&str],
        edges: &[(&str, &str)],
        confounders: &[(&str, &str, &str)],
    ) -> Result<Self, GraphError> {
        Self::try_from_parts(
            variables.iter().map(|v| v.to_string()).collect(),
            edges
                .iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect(),
            confounders
                .iter()
                .map(|(a, b, l)| Confounder::new(*a, *b, *l))
                .collect(),
        )
    }

    /// Build a diagram from owned parts, validating every reference.
    pub fn try_from_parts(
        variables: Vec<String>,
        edges: Vec<(String, String)>,
        confounders: Vec<Confounder>,
    ) -> Result<Self, GraphError> {
        let declared: BTreeSet<&str> = variables.iter().map(String::as_str).collect();
        let check = |name: &str, context: &str| -> Result<(), GraphError> {
            if declared.contains(name) {
                Ok(())
            } else {
                Err(GraphError::UnknownVariable {
                    name: name.to_string(),
                    context: context.to_string(),
                })
            }
        };

        for (from, to) in &edges {
            check(from.as_str(), "edge")?;
            check(to.as_str(), "edge")?;
            if from == to {
                return Err(GraphError::SelfLoop { name: from.clone() });
            }
        }

        let mut by_label: BTreeMap<String, Confounder> = BTreeMap::new();
        for conf in confounders {
            check(conf.a.as_str(), "confounder")?;
            check(conf.b.as_str(), "confounder")?;
            if conf.a == conf.b {
                return Err(GraphError::SelfLoop { name: conf.a });
            }
            if let Some(existing) = by_label.get(&conf.label) {
                if existing.endpoints() != conf.endpoints() {
                    return Err(GraphError::ConflictingConfounder {
                        label: conf.label.clone(),
                        existing: (existing.a.clone(), existing.b.clone()),
                        requested: (conf.a, conf.b),
                    });
                }
                continue;
            }
            by_label.insert(conf.label.clone(), conf);
        }

        let diagram = Self::from_parts_unchecked(variables, edges, by_label);
        let cycles = diagram.find_cycles();
        if let Some(cycle) = cycles.into_iter().next() {
            return Err(GraphError::CycleDetected { path: cycle });
        }
        Ok(diagram)
    }

    /// Assemble without validation. Callers guarantee every name is declared
    /// and the edge set is acyclic (true for any subset of a valid diagram).
    pub(crate) fn from_parts_unchecked(
        variables: impl IntoIterator<Item = String>,
        edges: impl IntoIterator<Item = (String, String)>,
        confounders: BTreeMap<String, Confounder>,
    ) -> Self {
        let mut graph = DiagramGraph::default();
        let mut node_index = BTreeMap::new();
        let sorted: BTreeSet<String> = variables.into_iter().collect();
        for name in sorted {
            let idx = graph.add_node(name.clone());
            node_index.insert(name, idx);
        }
        let unique: BTreeSet<(String, String)> = edges.into_iter().collect();
        for (from, to) in unique {
            if let (Some(&a), Some(&b)) = (node_index.get(&from), node_index.get(&to)) {
                graph.add_edge(a, b, ());
            }
        }
        Self {
            graph,
            node_index,
            confounders,
        }
    }

    /// Strongly connected components with more than one node, as names.
    fn find_cycles(&self) -> Vec<Vec<String>> {
        tarjan_scc(&self.graph)
            .into_iter()
            .filter(|scc| scc.len() > 1)
            .map(|scc| {
                let mut names: Vec<String> =
                    scc.into_iter().map(|idx| self.graph[idx].clone()).collect();
                names.sort();
                names
            })
            .collect()
    }

    // --- Inspection ---

    pub fn variables(&self) -> VarSet {
        self.node_index.keys().cloned().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.node_index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.node_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_index.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All directed edges as `(cause, effect)`, sorted.
    pub fn edges(&self) -> Vec<(String, String)> {
        let mut edges: Vec<(String, String)> = self
            .graph
            .edge_indices()
            .filter_map(|idx| self.graph.edge_endpoints(idx))
            .map(|(a, b)| (self.graph[a].clone(), self.graph[b].clone()))
            .collect();
        edges.sort();
        edges
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        match (self.node_index.get(from), self.node_index.get(to)) {
            (Some(&a), Some(&b)) => self.graph.find_edge(a, b).is_some(),
            _ => false,
        }
    }

    pub fn confounders(&self) -> impl Iterator<Item = &Confounder> {
        self.confounders.values()
    }

    pub fn confounder_count(&self) -> usize {
        self.confounders.len()
    }

    /// Whether an unobserved confounder connects `a` and `b`.
    pub fn is_confounded(&self, a: &str, b: &str) -> bool {
        self.confounders
            .values()
            .any(|c| (c.a == a && c.b == b) || (c.a == b && c.b == a))
    }

    // --- Family queries ---

    fn neighbors(&self, name: &str, dir: Direction) -> VarSet {
        match self.node_index.get(name) {
            Some(&idx) => self
                .graph
                .neighbors_directed(idx, dir)
                .map(|n| self.graph[n].clone())
                .collect(),
            None => VarSet::new(),
        }
    }

    pub fn parents(&self, name: &str) -> VarSet {
        self.neighbors(name, Direction::Incoming)
    }

    pub fn children(&self, name: &str) -> VarSet {
        self.neighbors(name, Direction::Outgoing)
    }

    /// Union of the parents of every member of `names`. May include members.
    pub fn parents_of(&self, names: &VarSet) -> VarSet {
        names.iter().flat_map(|n| self.parents(n)).collect()
    }

    /// Breadth-first closure from `start` in direction `dir`, inclusive.
    fn closure(&self, start: &VarSet, dir: Direction) -> VarSet {
        let mut seen = BTreeSet::new();
        let mut queue = VecDeque::new();
        for name in start {
            if let Some(&idx) = self.node_index.get(name) {
                if seen.insert(idx) {
                    queue.push_back(idx);
                }
            }
        }
        while let Some(current) = queue.pop_front() {
            for next in self.graph.neighbors_directed(current, dir) {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        seen.into_iter().map(|idx| self.graph[idx].clone()).collect()
    }

    /// `An(v)`: `v` plus every variable with a directed path into it.
    pub fn ancestors(&self, name: &str) -> VarSet {
        self.ancestors_of(&VarSet::from([name.to_string()]))
    }

    pub fn ancestors_of(&self, names: &VarSet) -> VarSet {
        self.closure(names, Direction::Incoming)
    }

    /// `De(S)`: `S` plus every variable reachable from it.
    pub fn descendants_of(&self, names: &VarSet) -> VarSet {
        self.closure(names, Direction::Outgoing)
    }

    /// The c-component containing `name`: every variable linked to it
    /// through a chain of confounding arcs. Empty if `name` is unknown.
    pub fn c_component(&self, name: &str) -> VarSet {
        let Some(&start) = self.node_index.get(name) else {
            return VarSet::new();
        };
        let mut components = UnionFind::<usize>::new(self.graph.node_bound());
        for conf in self.confounders.values() {
            if let (Some(a), Some(b)) = (self.node_index.get(&conf.a), self.node_index.get(&conf.b)) {
                components.union(a.index(), b.index());
            }
        }
        let root = components.find(start.index());
        self.node_index
            .iter()
            .filter(|(_, idx)| components.find(idx.index()) == root)
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Topological order with lexicographic tie-breaking among ready variables.
    pub fn causal_order(&self) -> Vec<String> {
        let mut indegree: BTreeMap<NodeIndex, usize> = self
            .node_index
            .values()
            .map(|&idx| {
                (
                    idx,
                    self.graph.neighbors_directed(idx, Direction::Incoming).count(),
                )
            })
            .collect();
        let mut ready: BTreeSet<String> = indegree
            .iter()
            .filter(|(_, &deg)| deg == 0)
            .map(|(&idx, _)| self.graph[idx].clone())
            .collect();

        let mut order = Vec::with_capacity(self.len());
        while let Some(name) = ready.pop_first() {
            let idx = self.node_index[&name];
            for child in self.graph.neighbors_directed(idx, Direction::Outgoing) {
                if let Some(deg) = indegree.get_mut(&child) {
                    *deg -= 1;
                    if *deg == 0 {
                        ready.insert(self.graph[child].clone());
                    }
                }
            }
            order.push(name);
        }
        order
    }
}

impl PartialEq for CausalDiagram {
    fn eq(&self, other: &Self) -> bool {
        self.node_index.keys().eq(other.node_index.keys())
            && self.edges() == other.edges()
            && self.confounders == other.confounders
    }
}

impl Eq for CausalDiagram {}

#[cfg(test)]
mod tests {
    use super::*;
    use pomis_core::types::var_set;

    fn chain() -> CausalDiagram {
        CausalDiagram::new(
            &["X", "Z", "Y", "W"],
            &[("W", "X"), ("X", "Z"), ("Z", "Y")],
            &[("X", "Y", "U_XY")],
        )
        .unwrap()
    }

    #[test]
    fn rejects_unknown_endpoints() {
        let err = CausalDiagram::new(&["X"], &[("X", "Q")], &[]).unwrap_err();
        assert!(matches!(err, GraphError::UnknownVariable { ref name, .. } if name == "Q"));

        let err = CausalDiagram::new(&["X"], &[], &[("X", "Q", "U")]).unwrap_err();
        assert!(matches!(err, GraphError::UnknownVariable { .. }));
    }

    #[test]
    fn rejects_cycles_and_self_loops() {
        let err = CausalDiagram::new(&["A", "B", "C"], &[("A", "B"), ("B", "C"), ("C", "A")], &[])
            .unwrap_err();
        match err {
            GraphError::CycleDetected { path } => assert_eq!(path, vec!["A", "B", "C"]),
            other => panic!("unexpected error: {other}"),
        }

        let err = CausalDiagram::new(&["A"], &[("A", "A")], &[]).unwrap_err();
        assert!(matches!(err, GraphError::SelfLoop { .. }));
    }

    #[test]
    fn confounder_labels_must_be_consistent() {
        let ok = CausalDiagram::new(&["A", "B"], &[], &[("A", "B", "U"), ("B", "A", "U")]).unwrap();
        assert_eq!(ok.confounder_count(), 1);

        let err = CausalDiagram::new(&["A", "B", "C"], &[], &[("A", "B", "U"), ("A", "C", "U")])
            .unwrap_err();
        assert!(matches!(err, GraphError::ConflictingConfounder { .. }));
    }

    #[test]
    fn family_queries() {
        let g = chain();
        assert_eq!(g.parents("Z"), var_set(["X"]));
        assert_eq!(g.children("X"), var_set(["Z"]));
        assert_eq!(g.parents_of(&var_set(["Z", "Y"])), var_set(["X", "Z"]));
        assert_eq!(g.ancestors("Y"), var_set(["W", "X", "Y", "Z"]));
        assert_eq!(g.ancestors("W"), var_set(["W"]));
        assert_eq!(g.descendants_of(&var_set(["X"])), var_set(["X", "Y", "Z"]));
        assert!(g.parents("nope").is_empty());
    }

    #[test]
    fn c_component_follows_confounding_chains() {
        let g = CausalDiagram::new(
            &["A", "B", "C", "D"],
            &[("A", "D")],
            &[("A", "B", "U1"), ("B", "C", "U2")],
        )
        .unwrap();
        assert_eq!(g.c_component("A"), var_set(["A", "B", "C"]));
        assert_eq!(g.c_component("D"), var_set(["D"]));
        assert!(g.c_component("E").is_empty());
    }

    #[test]
    fn causal_order_is_topological_and_deterministic() {
        let g = chain();
        assert_eq!(g.causal_order(), vec!["W", "X", "Z", "Y"]);

        let g = CausalDiagram::new(&["B", "A", "C"], &[("B", "C")], &[]).unwrap();
        assert_eq!(g.causal_order(), vec!["A", "B", "C"]);
    }
}
