//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: starting from the start node, always move to the
//! nearest unvisited node. Once every node is visited the tour closes back
//! to the start.
//!
//! # Complexity
//!
//! O(n²) where n = number of nodes.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E. & Lewis, P.M. (1977). "An Analysis of
//! Several Heuristics for the Traveling Salesman Problem", *SIAM Journal on
//! Computing* 6(3), 563-581.

use log::{debug, trace};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::distance::CostMatrix;
use crate::evaluation::add_cost;
use crate::models::Tour;
use crate::{Error, Result};

/// How each step looks for the nearest unvisited node.
///
/// Every strategy yields the same tour: ties are broken toward the lowest
/// node index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scan {
    /// Linear scan of the current node's row.
    #[default]
    Sequential,
    /// Row scan split across the rayon thread pool.
    #[cfg(feature = "parallel")]
    Parallel,
}

impl Scan {
    fn nearest(self, costs: &CostMatrix, from: usize, visited: &[bool]) -> Option<(usize, i64)> {
        match self {
            Scan::Sequential => costs.nearest_unvisited(from, visited),
            #[cfg(feature = "parallel")]
            Scan::Parallel => costs
                .row(from)
                .par_iter()
                .enumerate()
                .filter(|&(node, _)| node != from && !visited[node])
                .map(|(node, &cost)| (node, cost))
                .min_by_key(|&(node, cost)| (cost, node)),
        }
    }
}

/// Constructs a tour using the nearest-neighbor heuristic.
///
/// Equivalent to [`nearest_neighbor_with`] using [`Scan::Sequential`].
///
/// # Arguments
///
/// * `costs` — Cost matrix
/// * `start` — Index of the first node of the tour
///
/// # Errors
///
/// [`Error::StartOutOfRange`] if `start` is not a valid index of a
/// non-empty matrix, [`Error::CostOverflow`] if the tour cost leaves the
/// `i64` range.
///
/// # Examples
///
/// ```
/// use nn_tour::distance::CostMatrix;
/// use nn_tour::constructive::nearest_neighbor;
///
/// let costs = CostMatrix::from_rows(vec![
///     vec![0, 45, 60, 25],
///     vec![45, 0, 90, 50],
///     vec![60, 90, 0, 70],
///     vec![25, 50, 70, 0],
/// ]).unwrap();
///
/// let tour = nearest_neighbor(&costs, 0).unwrap();
/// assert_eq!(tour.order(), &[0, 3, 1, 2]);
/// assert_eq!(tour.cost(), 25 + 50 + 90 + 60);
/// ```
pub fn nearest_neighbor(costs: &CostMatrix, start: usize) -> Result<Tour> {
    nearest_neighbor_with(costs, start, Scan::Sequential)
}

/// Constructs a nearest-neighbor tour with the given candidate scan.
pub fn nearest_neighbor_with(costs: &CostMatrix, start: usize, scan: Scan) -> Result<Tour> {
    let n = costs.size();
    if n == 0 {
        return Ok(Tour::empty());
    }
    if start >= n {
        return Err(Error::StartOutOfRange { start, size: n });
    }

    let mut visited = vec![false; n];
    visited[start] = true;

    let mut order = Vec::with_capacity(n);
    order.push(start);
    let mut current = start;
    let mut total: i64 = 0;

    while let Some((next, cost)) = scan.nearest(costs, current, &visited) {
        trace!("step {}: {current} -> {next} (cost {cost})", order.len());
        visited[next] = true;
        order.push(next);
        total = add_cost(total, cost)?;
        current = next;
    }

    // Close the loop
    if n > 1 {
        total = add_cost(total, costs.get(current, start))?;
    }

    debug!("nearest-neighbor tour over {n} nodes from {start}: cost {total}");
    Ok(Tour::new(order, total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LabelledMatrix, Node};

    fn line_nodes() -> CostMatrix {
        CostMatrix::from_nodes(&[
            Node::new(1, 0.0, 0.0),
            Node::new(2, 1.0, 0.0),
            Node::new(3, 2.0, 0.0),
            Node::new(4, 3.0, 0.0),
        ])
    }

    #[test]
    fn test_nn_line() {
        let tour = nearest_neighbor(&line_nodes(), 0).expect("valid start");
        assert_eq!(tour.order(), &[0, 1, 2, 3]);
        // 0→1 + 1→2 + 2→3 + 3→0 = 1 + 1 + 1 + 3 = 6
        assert_eq!(tour.cost(), 6);
    }

    #[test]
    fn test_nn_sample_cities() {
        let cities = LabelledMatrix::sample_cities();
        let tour = nearest_neighbor(cities.costs(), 0).expect("valid start");
        // Pereira → Cartago → Armenia → Medellín → Pereira
        assert_eq!(tour.order(), &[0, 3, 1, 2]);
        assert_eq!(tour.edges(), vec![(0, 3), (3, 1), (1, 2), (2, 0)]);
        assert_eq!(tour.cost(), 225);
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let costs = CostMatrix::from_nodes(&[
            Node::new(1, 0.0, 0.0),
            Node::new(2, 10.0, 0.0), // far
            Node::new(3, 1.0, 0.0),  // near
        ]);
        let tour = nearest_neighbor(&costs, 0).expect("valid start");
        assert_eq!(tour.order(), &[0, 2, 1]);
    }

    #[test]
    fn test_nn_tie_breaks_to_lowest_index() {
        let costs = CostMatrix::from_rows(vec![
            vec![0, 3, 3, 3],
            vec![3, 0, 3, 3],
            vec![3, 3, 0, 3],
            vec![3, 3, 3, 0],
        ])
        .expect("square");
        let tour = nearest_neighbor(&costs, 0).expect("valid start");
        assert_eq!(tour.order(), &[0, 1, 2, 3]);
        assert_eq!(tour.cost(), 12);
    }

    #[test]
    fn test_nn_other_start() {
        let tour = nearest_neighbor(&line_nodes(), 2).expect("valid start");
        // From 2: 1 and 3 both at 1, lowest index wins
        assert_eq!(tour.order(), &[2, 1, 0, 3]);
        assert_eq!(tour.cost(), 1 + 1 + 3 + 1);
    }

    #[test]
    fn test_nn_asymmetric_uses_outgoing_costs() {
        let costs = CostMatrix::from_rows(vec![vec![0, 9, 2], vec![1, 0, 4], vec![8, 3, 0]])
            .expect("square");
        let tour = nearest_neighbor(&costs, 0).expect("valid start");
        assert_eq!(tour.order(), &[0, 2, 1]);
        // 0→2 (2) + 2→1 (3) + 1→0 (1)
        assert_eq!(tour.cost(), 6);
    }

    #[test]
    fn test_nn_empty() {
        let tour = nearest_neighbor(&CostMatrix::new(0), 0).expect("empty is fine");
        assert!(tour.is_empty());
        assert_eq!(tour.cost(), 0);
    }

    #[test]
    fn test_nn_single_node() {
        let tour = nearest_neighbor(&CostMatrix::new(1), 0).expect("valid start");
        assert_eq!(tour.order(), &[0]);
        assert_eq!(tour.cost(), 0);
        assert!(tour.edges().is_empty());
    }

    #[test]
    fn test_nn_start_out_of_range() {
        let err = nearest_neighbor(&line_nodes(), 4);
        assert!(matches!(
            err,
            Err(Error::StartOutOfRange { start: 4, size: 4 })
        ));
    }

    #[test]
    fn test_nn_far_coordinates_overflow() {
        let nodes = crate::io::parse_nodes("1 1e300 0\n2 -1e300 0\n");
        let costs = CostMatrix::from_nodes(&nodes);
        // the float distance saturates the cast
        assert_eq!(costs.get(0, 1), i64::MAX);
        assert!(matches!(
            nearest_neighbor(&costs, 0),
            Err(Error::CostOverflow)
        ));
    }

    #[test]
    fn test_nn_explicit_costs_overflow() {
        let costs = CostMatrix::from_rows(vec![vec![0, i64::MAX], vec![i64::MAX, 0]])
            .expect("square");
        assert!(matches!(
            nearest_neighbor(&costs, 0),
            Err(Error::CostOverflow)
        ));
    }

    #[test]
    fn test_nn_cost_at_i64_limit() {
        let costs = CostMatrix::from_rows(vec![vec![0, i64::MAX - 1], vec![1, 0]])
            .expect("square");
        let tour = nearest_neighbor(&costs, 0).expect("fits exactly");
        assert_eq!(tour.cost(), i64::MAX);
    }

    #[test]
    fn test_default_scan_is_sequential() {
        assert_eq!(Scan::default(), Scan::Sequential);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let costs = CostMatrix::from_rows(vec![
            vec![0, 3, 3, 1, 3],
            vec![3, 0, 2, 2, 5],
            vec![3, 2, 0, 2, 2],
            vec![1, 2, 2, 0, 7],
            vec![3, 5, 2, 7, 0],
        ])
        .expect("square");
        let seq = nearest_neighbor_with(&costs, 0, Scan::Sequential).expect("valid");
        let par = nearest_neighbor_with(&costs, 0, Scan::Parallel).expect("valid");
        assert_eq!(seq, par);
    }
}
