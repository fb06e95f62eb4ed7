//! World-to-canvas projection.

use crate::models::Node;

/// Maps node coordinates onto a pixel canvas.
///
/// Uses one scale for both axes, centers the bounding box of the nodes in
/// the area inside the margin and flips y so larger values are drawn
/// higher. An axis with zero extent collapses to the canvas center.
///
/// # Examples
///
/// ```
/// use nn_tour::models::Node;
/// use nn_tour::plot::Projection;
///
/// let nodes = [Node::new(1, 0.0, 0.0), Node::new(2, 10.0, 10.0)];
/// let p = Projection::fit(&nodes, 100, 100, 10);
/// assert_eq!(p.apply(0.0, 0.0), (10.0, 90.0));
/// assert_eq!(p.apply(10.0, 10.0), (90.0, 10.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    scale: f64,
    center_x: f64,
    center_y: f64,
    canvas_cx: f64,
    canvas_cy: f64,
}

impl Projection {
    /// Fits the bounding box of `nodes` into a `width`×`height` canvas.
    pub fn fit(nodes: &[Node], width: u32, height: u32, margin: u32) -> Self {
        let canvas_cx = width as f64 / 2.0;
        let canvas_cy = height as f64 / 2.0;

        let Some(first) = nodes.first() else {
            return Self {
                scale: 0.0,
                center_x: 0.0,
                center_y: 0.0,
                canvas_cx,
                canvas_cy,
            };
        };

        let (mut min_x, mut max_x) = (first.x(), first.x());
        let (mut min_y, mut max_y) = (first.y(), first.y());
        for n in &nodes[1..] {
            min_x = min_x.min(n.x());
            max_x = max_x.max(n.x());
            min_y = min_y.min(n.y());
            max_y = max_y.max(n.y());
        }

        let border = margin.saturating_mul(2);
        let usable_w = width.saturating_sub(border) as f64;
        let usable_h = height.saturating_sub(border) as f64;
        let span_x = max_x - min_x;
        let span_y = max_y - min_y;

        let scale = match (span_x > 0.0, span_y > 0.0) {
            (true, true) => (usable_w / span_x).min(usable_h / span_y),
            (true, false) => usable_w / span_x,
            (false, true) => usable_h / span_y,
            (false, false) => 0.0,
        };

        Self {
            scale,
            center_x: (min_x + max_x) / 2.0,
            center_y: (min_y + max_y) / 2.0,
            canvas_cx,
            canvas_cy,
        }
    }

    /// Projects a world coordinate to canvas pixels.
    pub fn apply(&self, x: f64, y: f64) -> (f32, f32) {
        let px = self.canvas_cx + (x - self.center_x) * self.scale;
        let py = self.canvas_cy - (y - self.center_y) * self.scale;
        (px as f32, py as f32)
    }

    /// Projects a node to canvas pixels.
    pub fn node(&self, node: &Node) -> (f32, f32) {
        self.apply(node.x(), node.y())
    }
}
