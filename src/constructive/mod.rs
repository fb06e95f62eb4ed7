//! Constructive heuristics for building tours.
//!
//! - [`nearest_neighbor`] — Greedy nearest-neighbor tour, O(n²)
//! - [`nearest_neighbor_with`] — Same tour with a selectable candidate [`Scan`]

mod nearest_neighbor;

pub use nearest_neighbor::{nearest_neighbor, nearest_neighbor_with, Scan};
