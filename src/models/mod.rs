//! Domain model types for tour construction.
//!
//! Provides nodes read from coordinate files, closed tours over node
//! indices, and labelled cost matrices for the postman variant.

mod instance;
mod node;
mod tour;

pub use instance::LabelledMatrix;
pub use node::Node;
pub use tour::Tour;
