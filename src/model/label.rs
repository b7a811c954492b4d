//! Display labels for graph nodes.

use crate::spec::Endpoint;
use serde::Deserialize;

/// How a same-hub endpoint separates dataset name and version.
///
/// Two variants of the page circulated; which one is canonical is still an
/// open product question, so it is a setting instead of a constant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    /// `orders 3`
    #[default]
    Space,
    /// `orders - 3`
    Dash,
}

/// Label for one endpoint. Cross-hub endpoints always carry the hub name.
pub fn label(endpoint: &Endpoint, style: LabelStyle) -> String {
    if endpoint.is_same_hub {
        match style {
            LabelStyle::Space => format!("{} {}", endpoint.dataset_name, endpoint.version),
            LabelStyle::Dash => format!("{} - {}", endpoint.dataset_name, endpoint.version),
        }
    } else {
        format!(
            "{} {} - {}",
            endpoint.hub_name, endpoint.dataset_name, endpoint.version
        )
    }
}
