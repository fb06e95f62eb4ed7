//! Dense integer cost matrix.

use crate::models::Node;
use crate::{Error, Result};

/// A dense n×n cost matrix stored in row-major order.
///
/// Built either from node coordinates (Euclidean distance truncated toward
/// zero) or from explicit rows.
///
/// # Examples
///
/// ```
/// use nn_tour::models::Node;
/// use nn_tour::distance::CostMatrix;
///
/// let nodes = vec![
///     Node::new(1, 0.0, 0.0),
///     Node::new(2, 3.0, 4.0),
///     Node::new(3, 1.0, 1.0),
/// ];
/// let cm = CostMatrix::from_nodes(&nodes);
/// assert_eq!(cm.get(0, 1), 5);
/// assert_eq!(cm.get(0, 2), 1); // sqrt(2) truncated
/// assert_eq!(cm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix {
    data: Vec<i64>,
    size: usize,
}

impl CostMatrix {
    /// Creates a cost matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size * size],
            size,
        }
    }

    /// Computes truncated Euclidean costs from node coordinates.
    ///
    /// The diagonal stays zero.
    pub fn from_nodes(nodes: &[Node]) -> Self {
        let n = nodes.len();
        let mut cm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let c = nodes[i].distance_to(&nodes[j]) as i64;
                cm.set(i, j, c);
                cm.set(j, i, c);
            }
        }
        cm
    }

    /// Creates a cost matrix from explicit rows.
    ///
    /// Returns [`Error::InvalidMatrix`] if any row length differs from the
    /// number of rows.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(Error::invalid_matrix(format!(
                    "row {i} has {} columns, expected {size}",
                    row.len()
                )));
            }
            data.extend(row);
        }
        Ok(Self { data, size })
    }

    /// Returns the cost from node `from` to node `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> i64 {
        self.data[from * self.size + to]
    }

    /// Sets the cost from node `from` to node `to`.
    pub fn set(&mut self, from: usize, to: usize, cost: i64) {
        self.data[from * self.size + to] = cost;
    }

    /// Number of nodes in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Iterates over the rows of the matrix.
    pub fn rows(&self) -> impl Iterator<Item = &[i64]> + '_ {
        // chunks(0) panics
        self.data.chunks(self.size.max(1))
    }

    /// Returns the row of costs leaving `from`.
    pub fn row(&self, from: usize) -> &[i64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Returns `true` if `get(i, j) == get(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if self.get(i, j) != self.get(j, i) {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the cheapest node reachable from `from` that is not yet
    /// visited, together with its cost.
    ///
    /// Candidates are scanned in ascending index order and replaced only by
    /// a strictly cheaper one, so ties go to the lowest index. `from` itself
    /// is never a candidate. Returns `None` when every other node is visited.
    ///
    /// `visited` should have one entry per node; nodes past its end count
    /// as visited.
    pub fn nearest_unvisited(&self, from: usize, visited: &[bool]) -> Option<(usize, i64)> {
        debug_assert_eq!(visited.len(), self.size, "visited mask size mismatch");
        let mut best: Option<(usize, i64)> = None;
        for (node, &cost) in self.row(from).iter().enumerate() {
            if node == from || visited.get(node).copied().unwrap_or(true) {
                continue;
            }
            match best {
                Some((_, best_cost)) if cost >= best_cost => {}
                _ => best = Some((node, cost)),
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_nodes() -> Vec<Node> {
        vec![
            Node::new(1, 0.0, 0.0),
            Node::new(2, 3.0, 4.0),
            Node::new(3, 0.0, 8.0),
        ]
    }

    #[test]
    fn test_from_nodes() {
        let cm = CostMatrix::from_nodes(&sample_nodes());
        assert_eq!(cm.size(), 3);
        assert_eq!(cm.get(0, 1), 5);
        assert_eq!(cm.get(0, 2), 8);
        assert_eq!(cm.get(0, 0), 0);
        assert!(cm.is_symmetric());
    }

    #[test]
    fn test_from_nodes_truncates() {
        let nodes = vec![Node::new(1, 0.0, 0.0), Node::new(2, 2.0, 2.9)];
        // hypot(2, 2.9) = 3.52...
        let cm = CostMatrix::from_nodes(&nodes);
        assert_eq!(cm.get(0, 1), 3);
        assert_eq!(cm.get(1, 0), 3);
    }

    #[test]
    fn test_from_rows() {
        let cm = CostMatrix::from_rows(vec![vec![0, 5], vec![7, 0]]).expect("square");
        assert_eq!(cm.get(0, 1), 5);
        assert_eq!(cm.get(1, 0), 7);
        assert!(!cm.is_symmetric());
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = CostMatrix::from_rows(vec![vec![0, 1, 2], vec![1, 0]]);
        assert!(matches!(err, Err(Error::InvalidMatrix(_))));
    }

    #[test]
    fn test_from_rows_empty() {
        let cm = CostMatrix::from_rows(Vec::new()).expect("empty is square");
        assert_eq!(cm.size(), 0);
        assert_eq!(cm.rows().count(), 0);
    }

    #[test]
    fn test_rows() {
        let cm = CostMatrix::from_rows(vec![vec![0, 1], vec![2, 0]]).expect("square");
        let rows: Vec<&[i64]> = cm.rows().collect();
        assert_eq!(rows, vec![&[0, 1][..], &[2, 0][..]]);
        assert_eq!(cm.row(1), &[2, 0]);
    }

    #[test]
    fn test_set_get() {
        let mut cm = CostMatrix::new(3);
        cm.set(0, 1, 42);
        assert_eq!(cm.get(0, 1), 42);
        assert_eq!(cm.get(1, 0), 0);
    }

    #[test]
    fn test_nearest_unvisited() {
        let cm = CostMatrix::from_nodes(&sample_nodes());
        assert_eq!(cm.nearest_unvisited(0, &[true, false, false]), Some((1, 5)));
        assert_eq!(cm.nearest_unvisited(0, &[true, true, false]), Some((2, 8)));
        assert_eq!(cm.nearest_unvisited(0, &[true, true, true]), None);
    }

    #[test]
    fn test_nearest_unvisited_skips_self() {
        // Diagonal zero would otherwise always win.
        let cm = CostMatrix::from_nodes(&sample_nodes());
        assert_eq!(cm.nearest_unvisited(1, &[false, false, false]), Some((0, 5)));
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_nearest_unvisited_short_mask() {
        let cm = CostMatrix::from_nodes(&sample_nodes());
        // node 2 lies past the mask and is treated as visited
        assert_eq!(cm.nearest_unvisited(0, &[true]), None);
        assert_eq!(cm.nearest_unvisited(2, &[false]), Some((0, 8)));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "visited mask size mismatch")]
    fn test_nearest_unvisited_short_mask_debug() {
        let cm = CostMatrix::from_nodes(&sample_nodes());
        cm.nearest_unvisited(0, &[true]);
    }

    #[test]
    fn test_nearest_unvisited_tie_goes_to_lowest_index() {
        let cm = CostMatrix::from_rows(vec![
            vec![0, 4, 4, 4],
            vec![4, 0, 1, 1],
            vec![4, 1, 0, 1],
            vec![4, 1, 1, 0],
        ])
        .expect("square");
        assert_eq!(cm.nearest_unvisited(0, &[true, false, false, false]), Some((1, 4)));
        assert_eq!(cm.nearest_unvisited(1, &[true, true, false, false]), Some((2, 1)));
    }
}
