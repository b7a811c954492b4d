use crate::config::HighlightFill;
use crate::model::{GraphDescription, GraphEdge, GraphNode, GraphSink};
use crate::render::NodeIds;
use crate::spec::NodeKey;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeView {
    /// Positional id (`n0`, `n1`, ...) that edges refer to.
    pub id: String,
    pub key: NodeKey,
    pub label: String,
    pub highlighted: bool,
    /// SVG style for the node shape; empty unless highlighted.
    pub style: String,
}

/// `from`/`to` are node ids.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeView {
    pub from: String,
    pub to: String,
}

/// Serializable registration log of a graph description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphView {
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgeView>,
    #[serde(skip)]
    fill: String,
    #[serde(skip)]
    ids: NodeIds,
}

impl GraphView {
    pub fn new(fill: &HighlightFill) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            fill: fill.css().to_string(),
            ids: NodeIds::default(),
        }
    }

    pub fn collect(graph: &GraphDescription, fill: &HighlightFill) -> Self {
        let mut view = Self::new(fill);
        graph.emit(&mut view);
        view
    }
}

impl GraphSink for GraphView {
    fn add_node(&mut self, node: &GraphNode) {
        let style = if node.highlighted {
            format!("fill: {}", self.fill)
        } else {
            String::new()
        };
        self.nodes.push(NodeView {
            id: self.ids.id_for(&node.key),
            key: node.key.clone(),
            label: node.label.clone(),
            highlighted: node.highlighted,
            style,
        });
    }

    fn add_edge(&mut self, edge: &GraphEdge) {
        self.edges.push(EdgeView {
            from: self.ids.id_for(&edge.from),
            to: self.ids.id_for(&edge.to),
        });
    }
}

pub fn render_json(graph: &GraphDescription, fill: &HighlightFill) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&GraphView::collect(graph, fill))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::{dep, endpoint, sample};
    use crate::model::{LabelStyle, build};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn render_value(graph: &GraphDescription) -> serde_json::Value {
        let text = render_json(graph, &HighlightFill::default()).unwrap();
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn json_lists_nodes_then_edges() {
        let value = render_value(&build(&sample(), LabelStyle::Space));

        assert_eq!(
            value["nodes"][1],
            json!({
                "id": "n1",
                "key": {"hub_id": "h1", "dataset_id": "b", "version": "2"},
                "label": "B 2",
                "highlighted": true,
                "style": "fill: #afa"
            })
        );
        assert_eq!(value["nodes"][0]["style"], json!(""));
        assert_eq!(value["nodes"].as_array().unwrap().len(), 4);
        assert_eq!(value["edges"].as_array().unwrap().len(), 4);
        assert_eq!(value["edges"][0], json!({"from": "n0", "to": "n1"}));
        assert_eq!(value["edges"][2], json!({"from": "n3", "to": "n1"}));
        assert!(value.get("fill").is_none());
        assert!(value.get("ids").is_none());
    }

    #[test]
    fn keys_with_separator_get_distinct_ids() {
        let graph = build(
            &[dep(endpoint("a:b", "c", "1"), endpoint("a", "b:c", "1"))],
            LabelStyle::Space,
        );
        let value = render_value(&graph);

        assert_eq!(value["nodes"][0]["id"], json!("n0"));
        assert_eq!(value["nodes"][1]["id"], json!("n1"));
        assert_eq!(
            value["nodes"][0]["key"],
            json!({"hub_id": "a:b", "dataset_id": "c", "version": "1"})
        );
        assert_eq!(
            value["nodes"][1]["key"],
            json!({"hub_id": "a", "dataset_id": "b:c", "version": "1"})
        );
        assert_eq!(value["edges"], json!([{"from": "n0", "to": "n1"}]));
    }

    #[test]
    fn empty_graph_serializes_empty_lists() {
        let value = render_value(&GraphDescription::default());
        assert_eq!(value, json!({"nodes": [], "edges": []}));
    }
}
