use crate::config::Config;
use crate::model::GraphDescription;
use crate::render::GraphView;

/// Render a self-contained HTML page (graph embedded as JSON) that lays the
/// graph out with dagre-d3 and fits it into the viewport.
///
/// Important: we avoid `format!()` because the page contains many `{}` from JS
/// template literals (e.g., `${x}`), which would conflict with Rust formatting.
pub fn render_html_page(graph: &GraphDescription, cfg: &Config) -> anyhow::Result<String> {
    let json = serde_json::to_string(&GraphView::collect(graph, &cfg.highlight_fill))?;
    let settings = serde_json::json!({
        "margin": cfg.margin,
        "top": crate::viewport::TOP_OFFSET,
        "full": cfg.full,
    });

    const TEMPLATE: &str = r##"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Dependencies</title>
<script src="https://d3js.org/d3.v5.min.js"></script>
<script src="https://cdn.jsdelivr.net/npm/dagre-d3@0.6.4/dist/dagre-d3.min.js"></script>
<style>
  body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 0; }
  #dependencies { padding: 12px 16px; }
  #dependencies svg { width: 100%; border: 1px solid #eee; }
  #dependencies.full svg { height: calc(100vh - 40px); }
  .node rect { stroke: #333; fill: #fff; rx: 4px; }
  .node text { font-size: 13px; }
  .edgePath path { stroke: #333; fill: #333; stroke-width: 1.5px; }
  .empty { color: #777; font-size: 14px; }
</style>
</head>
<body>
<div id="dependencies">
  <svg><g></g></svg>
</div>

<script>
// Embedded graph description and viewport settings.
const GRAPH = __GRAPH__;
const SETTINGS = __SETTINGS__;

function buildGraph(desc) {
  const g = new dagreD3.graphlib.Graph();
  g.setGraph({});
  g.setDefaultEdgeLabel(() => ({}));

  for (const n of desc.nodes) {
    g.setNode(n.id, { label: n.label, style: n.style });
  }
  // Multiple records between the same pair collapse into one drawn edge.
  for (const e of desc.edges) {
    g.setEdge(e.from, e.to);
  }
  return g;
}

function fitViewport(g, svg, zoom) {
  const width = svg.node().clientWidth;
  const size = { width: g.graph().width, height: g.graph().height };

  const scale = size.width > 0
    ? Math.max(0, Math.min(1, (width - SETTINGS.margin) / size.width))
    : 1;

  svg.call(zoom.transform, d3.zoomIdentity
    .translate((width - size.width * scale) / 2, SETTINGS.top)
    .scale(scale));

  if (!svg.attr("height")) {
    svg.attr("height", size.height * scale + SETTINGS.margin);
  }
}

document.addEventListener("DOMContentLoaded", () => {
  const container = document.getElementById("dependencies");
  if (GRAPH.nodes.length === 0) {
    container.innerHTML = '<p class="empty">No dependencies.</p>';
    return;
  }

  const svg = d3.select("#dependencies svg");
  const inner = svg.select("g");
  const zoom = d3.zoom().on("zoom", () => inner.attr("transform", d3.event.transform));

  if (SETTINGS.full) {
    container.classList.add("full");
    svg.call(zoom);
  }

  const g = buildGraph(GRAPH);
  new dagreD3.render()(inner, g);
  fitViewport(g, svg, zoom);
});
</script>
</body>
</html>
"##;

    Ok(TEMPLATE
        .replace("__GRAPH__", &script_safe(&json))
        .replace("__SETTINGS__", &settings.to_string()))
}

/// Keep `</script>` inside labels from closing the script element.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}
