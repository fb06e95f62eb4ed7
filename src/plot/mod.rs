//! Scatter and tour plots rendered to PNG.
//!
//! Node coordinates are projected onto the canvas with a uniform scale so
//! the picture keeps the instance's aspect ratio, y-axis pointing up.

mod projection;
mod render;

pub use projection::Projection;
pub use render::{render_nodes, render_tour, save_png, RenderOptions};
