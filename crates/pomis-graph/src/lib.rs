//! # pomis-graph
//!
//! Causal diagrams over named variables: directed edges held in a
//! `petgraph::StableGraph`, unobserved confounding as labelled bidirected
//! arcs. On top of the diagram sits the single-slice oracle that computes
//! MUCTs, interventional borders, and POMISs for one reward variable.

pub mod diagram;
pub mod oracle;

pub use diagram::def::DiagramDef;
pub use diagram::unroll::{unroll, Transition};
pub use diagram::{CausalDiagram, Confounder};
pub use oracle::{MuctOracle, SingleSliceOracle};
