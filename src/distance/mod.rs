//! Pairwise cost matrices.
//!
//! Provides a dense integer cost matrix for tour construction.

mod matrix;

pub use matrix::CostMatrix;
