//! Node identity for a dataset version.
//!
//! Example endpoint: hub `h1`, dataset `d7`, version `3`  =>  NodeKey("h1", "d7", "3")
//!
//! Equality is structural over the three parts, so ids containing `:` never
//! collide. The `h1:d7:3` display form is for humans (tooltips, log lines)
//! and is not unique; outputs identify nodes positionally.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodeKey {
    pub hub_id: String,
    pub dataset_id: String,
    pub version: String,
}

impl NodeKey {
    pub fn new(
        hub_id: impl Into<String>,
        dataset_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            hub_id: hub_id.into(),
            dataset_id: dataset_id.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.hub_id, self.dataset_id, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn separator_inside_ids_does_not_collide() {
        let a = NodeKey::new("a:b", "c", "1");
        let b = NodeKey::new("a", "b:c", "1");
        assert_eq!(a.to_string(), b.to_string());
        assert_ne!(a, b);

        let set: BTreeSet<NodeKey> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
