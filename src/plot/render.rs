//! Rasterization of nodes and tours.

use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};
use log::info;

use super::Projection;
use crate::models::{Node, Tour};
use crate::{Error, Result};

/// Canvas and style settings for plots.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Empty border kept around the nodes, in pixels.
    pub margin: u32,
    /// Radius of each node marker, in pixels.
    pub node_radius: i32,
    /// Tour line thickness, in pixels.
    pub stroke_width: u32,
    /// Canvas fill color.
    pub background: Rgba<u8>,
    /// Node marker color.
    pub node_color: Rgba<u8>,
    /// Tour line color.
    pub edge_color: Rgba<u8>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            margin: 30,
            node_radius: 3,
            stroke_width: 1,
            background: Rgba([255, 255, 255, 255]),
            node_color: Rgba([0, 0, 255, 255]),
            edge_color: Rgba([255, 0, 0, 255]),
        }
    }
}

/// Draws the nodes as a scatter plot.
///
/// # Examples
///
/// ```
/// use nn_tour::models::Node;
/// use nn_tour::plot::{render_nodes, RenderOptions};
///
/// let nodes = [Node::new(1, 0.0, 0.0), Node::new(2, 4.0, 3.0)];
/// let img = render_nodes(&nodes, &RenderOptions::default());
/// assert_eq!(img.dimensions(), (600, 600));
/// ```
pub fn render_nodes(nodes: &[Node], options: &RenderOptions) -> RgbaImage {
    let projection = fit(nodes, options);
    let mut canvas = blank(options);
    draw_nodes(&mut canvas, nodes, &projection, options);
    canvas
}

/// Draws the nodes and the closed tour through them.
///
/// # Errors
///
/// [`Error::InvalidTour`] if the tour refers to a node index outside
/// `nodes`.
pub fn render_tour(nodes: &[Node], tour: &Tour, options: &RenderOptions) -> Result<RgbaImage> {
    if let Some(&bad) = tour.order().iter().find(|&&i| i >= nodes.len()) {
        return Err(Error::invalid_tour(format!(
            "node {bad} out of range for {} plotted nodes",
            nodes.len()
        )));
    }

    let projection = fit(nodes, options);
    let mut canvas = blank(options);

    for (from, to) in tour.edges() {
        let a = projection.node(&nodes[from]);
        let b = projection.node(&nodes[to]);
        draw_thick_segment(&mut canvas, a, b, options.stroke_width, options.edge_color);
    }
    // markers on top of the lines
    draw_nodes(&mut canvas, nodes, &projection, options);
    Ok(canvas)
}

/// Writes an image to `path` as PNG.
pub fn save_png(image: &RgbaImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    image.save_with_format(path, ImageFormat::Png)?;
    info!(
        "wrote {}x{} plot to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}

fn fit(nodes: &[Node], options: &RenderOptions) -> Projection {
    Projection::fit(nodes, options.width, options.height, options.margin)
}

fn blank(options: &RenderOptions) -> RgbaImage {
    RgbaImage::from_pixel(options.width, options.height, options.background)
}

fn draw_nodes(canvas: &mut RgbaImage, nodes: &[Node], projection: &Projection, options: &RenderOptions) {
    for node in nodes {
        let (x, y) = projection.node(node);
        draw_filled_circle_mut(
            canvas,
            (x.round() as i32, y.round() as i32),
            options.node_radius,
            options.node_color,
        );
    }
}

fn draw_thick_segment(
    canvas: &mut RgbaImage,
    a: (f32, f32),
    b: (f32, f32),
    width: u32,
    color: Rgba<u8>,
) {
    let width = width.max(1);
    let shift = (width - 1) as f32 / 2.0;
    for dx in 0..width {
        for dy in 0..width {
            let (ox, oy) = (dx as f32 - shift, dy as f32 - shift);
            draw_line_segment_mut(canvas, (a.0 + ox, a.1 + oy), (b.0 + ox, b.1 + oy), color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Node> {
        vec![
            Node::new(1, 0.0, 0.0),
            Node::new(2, 10.0, 0.0),
            Node::new(3, 10.0, 10.0),
            Node::new(4, 0.0, 10.0),
        ]
    }

    fn small_options() -> RenderOptions {
        RenderOptions {
            width: 100,
            height: 100,
            margin: 10,
            node_radius: 2,
            ..RenderOptions::default()
        }
    }

    #[test]
    fn test_render_nodes_markers() {
        let opts = small_options();
        let img = render_nodes(&square(), &opts);
        assert_eq!(img.dimensions(), (100, 100));
        // (0,0) lands at (10, 90), (10,10) at (90, 10)
        assert_eq!(*img.get_pixel(10, 90), opts.node_color);
        assert_eq!(*img.get_pixel(90, 10), opts.node_color);
        assert_eq!(*img.get_pixel(50, 50), opts.background);
        assert_eq!(*img.get_pixel(0, 0), opts.background);
    }

    #[test]
    fn test_render_tour_draws_edges() {
        let opts = small_options();
        let tour = Tour::new(vec![0, 1, 2, 3], 40);
        let img = render_tour(&square(), &tour, &opts).expect("valid tour");
        // midpoints of bottom edge and of the closing left edge
        assert_eq!(*img.get_pixel(50, 90), opts.edge_color);
        assert_eq!(*img.get_pixel(10, 50), opts.edge_color);
        // nodes drawn over lines
        assert_eq!(*img.get_pixel(10, 90), opts.node_color);
        assert_eq!(*img.get_pixel(50, 50), opts.background);
    }

    #[test]
    fn test_render_tour_rejects_unknown_node() {
        let tour = Tour::new(vec![0, 7], 0);
        assert!(matches!(
            render_tour(&square(), &tour, &small_options()),
            Err(Error::InvalidTour(_))
        ));
    }

    #[test]
    fn test_render_empty() {
        let img = render_tour(&[], &Tour::empty(), &small_options()).expect("empty ok");
        assert!(img.pixels().all(|p| *p == small_options().background));
    }

    #[test]
    fn test_thick_stroke() {
        let opts = RenderOptions {
            stroke_width: 3,
            ..small_options()
        };
        let tour = Tour::new(vec![0, 1, 2, 3], 40);
        let img = render_tour(&square(), &tour, &opts).expect("valid tour");
        assert_eq!(*img.get_pixel(50, 89), opts.edge_color);
        assert_eq!(*img.get_pixel(50, 91), opts.edge_color);
    }

    #[test]
    fn test_save_png() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("solution.png");
        let img = render_nodes(&square(), &small_options());
        save_png(&img, &path).expect("writable");
        let back = image::open(&path).expect("decodable").to_rgba8();
        assert_eq!(back.dimensions(), (100, 100));
        assert_eq!(back.get_pixel(10, 90), img.get_pixel(10, 90));
    }
}
