//! Outputs for graph layout collaborators.

pub mod dot;
pub mod html;
pub mod json;

pub use dot::render_dot;
pub use html::render_html_page;
pub use json::{GraphView, render_json};

use crate::spec::NodeKey;
use std::collections::BTreeMap;

/// Assigns `n0..nN` ids in registration order.
///
/// The `hub:dataset:version` display form of a key is not unique, so it never
/// reaches an output as an identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeIds(BTreeMap<NodeKey, String>);

impl NodeIds {
    pub fn id_for(&mut self, key: &NodeKey) -> String {
        let next = self.0.len();
        self.0
            .entry(key.clone())
            .or_insert_with(|| format!("n{next}"))
            .clone()
    }
}

/// Output format of the `graph` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Node/edge description for any layout library.
    #[default]
    Json,
    /// Graphviz document.
    Dot,
    /// Self-contained page driving dagre-d3.
    Html,
}
