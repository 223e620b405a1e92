//! Time-series unrolling: one copy of a template diagram per step, joined
//! by transition edges and confounders between consecutive steps.

use pomis_core::errors::GraphError;

use super::{CausalDiagram, Confounder};

/// A link from a variable at step `i` to a variable at step `i + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// `{from}{i} → {to}{i+1}`.
    Edge { from: String, to: String },
    /// `{a}{i} ↔ {b}{i+1}`, labelled `{label}_{i}`.
    Confounder { a: String, b: String, label: String },
}

impl Transition {
    pub fn edge(from: impl Into<String>, to: impl Into<String>) -> Self {
        Transition::Edge {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn confounder(a: impl Into<String>, b: impl Into<String>, label: impl Into<String>) -> Self {
        Transition::Confounder {
            a: a.into(),
            b: b.into(),
            label: label.into(),
        }
    }
}

fn at(name: &str, step: usize) -> String {
    format!("{name}{step}")
}

/// Unroll `template` over `steps` time steps.
///
/// Variables become `{v}{i}` and template confounder labels become
/// `{label}_{i}`. Transition endpoints must name template variables.
pub fn unroll(
    template: &CausalDiagram,
    transitions: &[Transition],
    steps: usize,
) -> Result<CausalDiagram, GraphError> {
    let mut variables = Vec::with_capacity(template.len() * steps);
    let mut edges = Vec::new();
    let mut confounders = Vec::new();

    for step in 0..steps {
        variables.extend(template.variables().iter().map(|v| at(v, step)));
        edges.extend(
            template
                .edges()
                .into_iter()
                .map(|(a, b)| (at(&a, step), at(&b, step))),
        );
        confounders.extend(template.confounders().map(|c| {
            Confounder::new(at(&c.a, step), at(&c.b, step), format!("{}_{step}", c.label))
        }));
    }

    for transition in transitions {
        let (a, b) = match transition {
            Transition::Edge { from, to } => (from, to),
            Transition::Confounder { a, b, .. } => (a, b),
        };
        for name in [a, b] {
            if !template.contains(name) {
                return Err(GraphError::UnknownVariable {
                    name: name.clone(),
                    context: "transition".to_string(),
                });
            }
        }
        for step in 1..steps {
            match transition {
                Transition::Edge { from, to } => {
                    edges.push((at(from, step - 1), at(to, step)));
                }
                Transition::Confounder { a, b, label } => {
                    confounders.push(Confounder::new(
                        at(a, step - 1),
                        at(b, step),
                        format!("{label}_{}", step - 1),
                    ));
                }
            }
        }
    }

    CausalDiagram::try_from_parts(variables, edges, confounders)
}
