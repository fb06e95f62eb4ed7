//! # nn-tour
//!
//! Nearest-neighbor tour construction for the Traveling Salesman Problem,
//! with coordinate parsing, a labelled "postman" mode and PNG plots.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Node, Tour, LabelledMatrix)
//! - [`distance`] — Dense integer cost matrix
//! - [`constructive`] — Nearest-neighbor tour construction
//! - [`evaluation`] — Tour cost, validation, and leg reports
//! - [`io`] — Coordinate and matrix file readers/writers
//! - [`generate`] — Reproducible random instances
//! - [`plot`] — Scatter and tour rendering to PNG
//! - [`logging`] — `env_logger` setup for the binary

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod generate;
pub mod io;
pub mod logging;
pub mod models;
pub mod plot;

pub use error::{Error, Result};
