//! Graphviz DOT output.

use std::fmt::Write;

use crate::config::HighlightFill;
use crate::model::{GraphDescription, GraphEdge, GraphNode, GraphSink};
use crate::render::NodeIds;

/// Escape special characters for DOT labels.
pub fn escape_label(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

fn write_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str("  ");
    }
}

/// Line-oriented writer for a single `digraph`.
pub struct DotBuilder {
    output: String,
    indent: usize,
}

impl DotBuilder {
    pub fn new(name: &str) -> Self {
        let mut output = String::with_capacity(4096);
        let _ = writeln!(output, "digraph {name} {{");
        Self { output, indent: 1 }
    }

    pub fn attr(&mut self, key: &str, value: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "{}=\"{}\";", key, escape_label(value));
        self
    }

    /// Default attributes for every node.
    pub fn node_style(&mut self, attrs: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "node [{attrs}];");
        self
    }

    pub fn node_full(&mut self, id: &str, attrs: &[(&str, &str)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = write!(self.output, "{id}[");
        for (i, (key, value)) in attrs.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            let _ = write!(self.output, "{}=\"{}\"", key, escape_label(value));
        }
        self.output.push_str("];\n");
        self
    }

    pub fn edge(&mut self, from: &str, to: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "{from} -> {to};");
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.output.push('\n');
        self
    }

    pub fn build(mut self) -> String {
        self.output.push_str("}\n");
        self.output
    }
}

/// Node ids are positional; the key's display form only goes into `tooltip`.
pub struct DotSink {
    dot: DotBuilder,
    ids: NodeIds,
    fill: String,
    edges_started: bool,
}

impl DotSink {
    pub fn new(fill: &HighlightFill) -> Self {
        let mut dot = DotBuilder::new("dependencies");
        dot.attr("rankdir", "TB")
            .node_style("shape=box, style=rounded, fontname=\"Helvetica\"")
            .blank();
        Self {
            dot,
            ids: NodeIds::default(),
            fill: fill.rrggbb(),
            edges_started: false,
        }
    }

    pub fn finish(self) -> String {
        self.dot.build()
    }
}

impl GraphSink for DotSink {
    fn add_node(&mut self, node: &GraphNode) {
        let id = self.ids.id_for(&node.key);
        let key = node.key.to_string();
        if node.highlighted {
            let fill = self.fill.clone();
            self.dot.node_full(
                &id,
                &[
                    ("label", node.label.as_str()),
                    ("tooltip", key.as_str()),
                    ("style", "rounded,filled"),
                    ("fillcolor", fill.as_str()),
                ],
            );
        } else {
            self.dot.node_full(
                &id,
                &[("label", node.label.as_str()), ("tooltip", key.as_str())],
            );
        }
    }

    fn add_edge(&mut self, edge: &GraphEdge) {
        if !self.edges_started {
            self.dot.blank();
            self.edges_started = true;
        }
        let from = self.ids.id_for(&edge.from);
        let to = self.ids.id_for(&edge.to);
        self.dot.edge(&from, &to);
    }
}

pub fn render_dot(graph: &GraphDescription, fill: &HighlightFill) -> String {
    let mut sink = DotSink::new(fill);
    graph.emit(&mut sink);
    sink.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::{dep, endpoint, sample};
    use crate::model::{LabelStyle, build};
    use pretty_assertions::assert_eq;

    #[test]
    fn one_line_per_node_and_edge() {
        let graph = build(&sample(), LabelStyle::Space);
        let dot = render_dot(&graph, &HighlightFill::default());

        let node_lines = dot
            .lines()
            .filter(|l| l.trim_start().starts_with('n') && l.contains("[label="))
            .count();
        let edge_lines = dot.lines().filter(|l| l.contains(" -> ")).count();
        assert_eq!(node_lines, 4);
        assert_eq!(edge_lines, 4);

        assert!(dot.starts_with("digraph dependencies {\n"));
        assert!(dot.ends_with("}\n"));
        assert!(dot.contains(
            r##"n1[label="B 2", tooltip="h1:b:2", style="rounded,filled", fillcolor="#aaffaa"];"##
        ));
        assert!(dot.contains(r#"n3[label="H2 X - 7", tooltip="h2:x:7"];"#));
        assert_eq!(dot.matches("  n3 -> n1;").count(), 2);
    }

    #[test]
    fn exact_small_graph() {
        let graph = build(
            &[dep(endpoint("h1", "a", "1"), endpoint("h1", "b", "1"))],
            LabelStyle::Space,
        );
        let expected = concat!(
            "digraph dependencies {\n",
            "  rankdir=\"TB\";\n",
            "  node [shape=box, style=rounded, fontname=\"Helvetica\"];\n",
            "\n",
            "  n0[label=\"A 1\", tooltip=\"h1:a:1\"];\n",
            "  n1[label=\"B 1\", tooltip=\"h1:b:1\"];\n",
            "\n",
            "  n0 -> n1;\n",
            "}\n",
        );
        assert_eq!(render_dot(&graph, &HighlightFill::default()), expected);
    }

    #[test]
    fn keys_with_separator_stay_distinct() {
        let graph = build(
            &[dep(endpoint("a:b", "c", "1"), endpoint("a", "b:c", "1"))],
            LabelStyle::Space,
        );
        let dot = render_dot(&graph, &HighlightFill::default());
        assert!(dot.contains("  n0[label="));
        assert!(dot.contains("  n1[label="));
        assert!(dot.contains("  n0 -> n1;"));
    }

    #[test]
    fn labels_are_escaped() {
        assert_eq!(escape_label("a \"b\"\nc\\"), "a \\\"b\\\"\\nc\\\\");
    }
}
