//! Node type.

use serde::{Deserialize, Serialize};

/// A point read from a coordinate file.
///
/// `id` is the label carried by the input line. A node's position in the
/// node list (its index) is what tours and cost matrices refer to.
///
/// # Examples
///
/// ```
/// use nn_tour::models::Node;
///
/// let a = Node::new(1, 0.0, 0.0);
/// let b = Node::new(2, 3.0, 4.0);
/// assert_eq!(b.id(), 2);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: usize,
    x: f64,
    y: f64,
}

impl Node {
    /// Creates a new node.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Label from the input file.
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another node.
    pub fn distance_to(&self, other: &Node) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}
