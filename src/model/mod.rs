//! Graph model: collapse dependency records into a node/edge description.

pub mod label;

pub use label::{LabelStyle, label};

use crate::diagnostics;
use crate::spec::{DependencyEdge, NodeKey};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub key: NodeKey,
    pub label: String,
    pub highlighted: bool,
}

/// `from` is the parent, `to` the dependent child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphEdge {
    pub from: NodeKey,
    pub to: NodeKey,
}

/// Immutable input for a layout/render collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphDescription {
    /// Unique by key, in first-seen order.
    pub nodes: Vec<GraphNode>,
    /// One per input record, in input order. Parallel edges are kept.
    pub edges: Vec<GraphEdge>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    pub highlighted: usize,
}

/// Registration interface of a graph layout library.
pub trait GraphSink {
    fn add_node(&mut self, node: &GraphNode);
    fn add_edge(&mut self, edge: &GraphEdge);
}

impl GraphDescription {
    /// Register every node, then every edge.
    pub fn emit<S: GraphSink>(&self, sink: &mut S) {
        for node in &self.nodes {
            sink.add_node(node);
        }
        for edge in &self.edges {
            sink.add_edge(edge);
        }
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            nodes: self.nodes.len(),
            edges: self.edges.len(),
            highlighted: self.nodes.iter().filter(|n| n.highlighted).count(),
        }
    }
}

/// Build the graph description. Performs:
/// - node collection keyed by (hub, dataset, version), parent before child
/// - warn (stderr) when a repeated key disagrees on label or highlight;
///   the first occurrence wins
/// - one edge per record, parent -> child
pub fn build(deps: &[DependencyEdge], style: LabelStyle) -> GraphDescription {
    // Pass 1: nodes.
    let mut seen: BTreeMap<NodeKey, usize> = BTreeMap::new();
    let mut nodes: Vec<GraphNode> = Vec::new();

    for (idx, dep) in deps.iter().enumerate() {
        for endpoint in [&dep.parent, &dep.child] {
            let key = endpoint.key();
            let node_label = label(endpoint, style);

            match seen.get(&key) {
                Some(&pos) => {
                    let first = &nodes[pos];
                    if first.label != node_label {
                        diagnostics::warn(format!(
                            "dependency #{} labels {} as {:?}, but it was first seen as {:?}",
                            idx, key, node_label, first.label
                        ));
                    }
                    if first.highlighted != endpoint.is_selected {
                        diagnostics::warn(format!(
                            "dependency #{} disagrees on whether {} is selected",
                            idx, key
                        ));
                    }
                }
                None => {
                    seen.insert(key.clone(), nodes.len());
                    nodes.push(GraphNode {
                        key,
                        label: node_label,
                        highlighted: endpoint.is_selected,
                    });
                }
            }
        }
    }

    // Pass 2: edges.
    let edges = deps
        .iter()
        .map(|dep| GraphEdge {
            from: dep.parent.key(),
            to: dep.child.key(),
        })
        .collect();

    GraphDescription { nodes, edges }
}
