//! Serializable diagram definition, the on-disk JSON shape.

use serde::{Deserialize, Serialize};

use pomis_core::errors::GraphError;

use super::{CausalDiagram, Confounder};

/// JSON form of a causal diagram, optionally carrying the time partition
/// and reward variables of a multi-stage problem.
///
/// ```json
/// {
///   "name": "chain",
///   "variables": ["X0", "Y0"],
///   "edges": [["X0", "Y0"]],
///   "confounders": [["X0", "Y0", "U0"]],
///   "slices": [["X0", "Y0"]],
///   "rewards": ["Y0"]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramDef {
    pub name: String,
    pub variables: Vec<String>,
    pub edges: Vec<(String, String)>,
    pub confounders: Vec<(String, String, String)>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub slices: Vec<Vec<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rewards: Vec<String>,
}

impl DiagramDef {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Validate and build the diagram.
    pub fn to_diagram(&self) -> Result<CausalDiagram, GraphError> {
        CausalDiagram::try_from_parts(
            self.variables.clone(),
            self.edges.clone(),
            self.confounders
                .iter()
                .map(|(a, b, label)| Confounder::new(a.as_str(), b.as_str(), label.as_str()))
                .collect(),
        )
    }

    /// Capture a diagram. Slices and rewards are left empty.
    pub fn from_diagram(name: impl Into<String>, diagram: &CausalDiagram) -> Self {
        Self {
            name: name.into(),
            variables: diagram.variables().into_iter().collect(),
            edges: diagram.edges(),
            confounders: diagram
                .confounders()
                .map(|c| (c.a.clone(), c.b.clone(), c.label.clone()))
                .collect(),
            slices: Vec::new(),
            rewards: Vec::new(),
        }
    }
}
