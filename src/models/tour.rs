//! Closed tour type.

use serde::{Deserialize, Serialize};

/// An ordered sequence of node indices visited exactly once, returning to
/// the first index.
///
/// The return to the start is implicit in `order`; [`Tour::edges`] and
/// [`Tour::closed_order`] make it explicit.
///
/// # Examples
///
/// ```
/// use nn_tour::models::Tour;
///
/// let tour = Tour::new(vec![0, 3, 1, 2], 190);
/// assert_eq!(tour.start(), Some(0));
/// assert_eq!(tour.edges(), vec![(0, 3), (3, 1), (1, 2), (2, 0)]);
/// assert_eq!(tour.closed_order(), vec![0, 3, 1, 2, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    order: Vec<usize>,
    cost: i64,
}

impl Tour {
    /// Creates a tour from a visit order and its closed-loop cost.
    pub fn new(order: Vec<usize>, cost: i64) -> Self {
        Self { order, cost }
    }

    /// Creates a tour with no nodes.
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0)
    }

    /// Node indices in visit order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Number of nodes visited.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the tour visits no nodes.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// First node of the tour.
    pub fn start(&self) -> Option<usize> {
        self.order.first().copied()
    }

    /// Total cost including the closing edge.
    pub fn cost(&self) -> i64 {
        self.cost
    }

    /// Edges in travel order, ending with the edge back to the start.
    ///
    /// Tours with fewer than two nodes have no edges.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        if self.order.len() < 2 {
            return Vec::new();
        }
        let mut edges: Vec<(usize, usize)> =
            self.order.windows(2).map(|w| (w[0], w[1])).collect();
        edges.push((self.order[self.order.len() - 1], self.order[0]));
        edges
    }

    /// Visit order with the start repeated at the end.
    pub fn closed_order(&self) -> Vec<usize> {
        let mut closed = self.order.clone();
        if let Some(&first) = self.order.first() {
            closed.push(first);
        }
        closed
    }
}
