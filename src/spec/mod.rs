//! Spec layer: payload JSON schema + validated in-memory records.
//!
//! This module is intentionally separate from graph building and rendering.
//! It owns:
//! - NodeKey (dataset version identity)
//! - Deps payload (raw shape, validation into DependencyEdge)

pub mod deps;
pub mod endpoint;
pub mod key;

pub use deps::load_deps_file;
pub use endpoint::{DependencyEdge, Endpoint};
pub use key::NodeKey;
