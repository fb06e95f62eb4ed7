//! Instance readers and writers.
//!
//! - [`read_nodes`] / [`parse_nodes`] — whitespace-separated `id x y` lines
//! - [`write_nodes`] — the inverse, for generated instances
//! - [`read_matrix`] — JSON labelled cost matrices for the postman variant

mod matrix_file;
mod points;

pub use matrix_file::read_matrix;
pub use points::{parse_nodes, read_nodes, write_nodes};
