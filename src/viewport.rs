//! Center and downscale a rendered graph inside its viewport.

use serde::Serialize;

pub const DEFAULT_MARGIN: f64 = 40.0;

/// Vertical offset of the graph inside the viewport.
pub const TOP_OFFSET: f64 = 20.0;

/// Bounding box reported by the layout library.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Pan/zoom transform for the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewportFit {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    /// Height to assign when the viewport has none set.
    pub height: Option<f64>,
}

/// Never upscales. A graph without width is left at scale 1, and a viewport
/// narrower than the margin collapses to scale 0.
pub fn fit(
    graph: Size,
    viewport_width: f64,
    viewport_height: Option<f64>,
    margin: f64,
) -> ViewportFit {
    let scale = if graph.width > 0.0 {
        ((viewport_width - margin) / graph.width).clamp(0.0, 1.0)
    } else {
        1.0
    };

    ViewportFit {
        scale,
        translate_x: (viewport_width - graph.width * scale) / 2.0,
        translate_y: TOP_OFFSET,
        height: match viewport_height {
            Some(_) => None,
            None => Some(graph.height * scale + margin),
        },
    }
}
