//! Validated dependency records.

use crate::spec::NodeKey;

/// One side of a dependency: a dataset version plus presentation flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub hub_id: String,
    pub hub_name: String,
    pub dataset_id: String,
    pub dataset_name: String,
    pub version: String,
    /// This is the version the page is about.
    pub is_selected: bool,
    /// Lives in the same hub as the version the page is about.
    pub is_same_hub: bool,
}

impl Endpoint {
    pub fn key(&self) -> NodeKey {
        NodeKey::new(
            self.hub_id.clone(),
            self.dataset_id.clone(),
            self.version.clone(),
        )
    }
}

/// `child` depends on `parent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEdge {
    pub parent: Endpoint,
    pub child: Endpoint,
}
