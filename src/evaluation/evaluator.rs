//! Tour evaluator: closed-loop cost, permutation checks, per-leg costs.

use serde::{Deserialize, Serialize};

use crate::distance::CostMatrix;
use crate::models::Tour;
use crate::{Error, Result};

/// One edge of a tour with its cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leg {
    /// Node index the leg departs from.
    pub from: usize,
    /// Node index the leg arrives at.
    pub to: usize,
    /// Cost of travelling `from -> to`.
    pub cost: i64,
}

/// Computes the closed-loop cost of visiting `order` and returning to its
/// first node.
///
/// Orders with fewer than two nodes cost zero.
///
/// # Errors
///
/// [`Error::CostOverflow`] if the sum leaves the `i64` range.
///
/// # Examples
///
/// ```
/// use nn_tour::distance::CostMatrix;
/// use nn_tour::evaluation::tour_cost;
///
/// let costs = CostMatrix::from_rows(vec![
///     vec![0, 1, 4],
///     vec![1, 0, 2],
///     vec![4, 2, 0],
/// ]).unwrap();
/// assert_eq!(tour_cost(&costs, &[0, 1, 2]).unwrap(), 1 + 2 + 4);
/// ```
pub fn tour_cost(costs: &CostMatrix, order: &[usize]) -> Result<i64> {
    if order.len() < 2 {
        return Ok(0);
    }
    let closing = (order[order.len() - 1], order[0]);
    order
        .windows(2)
        .map(|w| (w[0], w[1]))
        .chain(std::iter::once(closing))
        .try_fold(0, |total, (from, to)| add_cost(total, costs.get(from, to)))
}

/// Adds one leg to a running tour cost.
pub(crate) fn add_cost(total: i64, cost: i64) -> Result<i64> {
    total.checked_add(cost).ok_or(Error::CostOverflow)
}

/// Checks that `order` visits each of `0..n` exactly once.
///
/// # Errors
///
/// [`Error::InvalidTour`] on a length mismatch, an index `>= n`, or a
/// repeated index.
pub fn validate_tour(order: &[usize], n: usize) -> Result<()> {
    if order.len() != n {
        return Err(Error::invalid_tour(format!(
            "tour visits {} nodes, expected {n}",
            order.len()
        )));
    }
    let mut seen = vec![false; n];
    for (pos, &node) in order.iter().enumerate() {
        if node >= n {
            return Err(Error::invalid_tour(format!(
                "node {node} at position {pos} out of range for {n} nodes"
            )));
        }
        if seen[node] {
            return Err(Error::invalid_tour(format!(
                "node {node} visited twice (position {pos})"
            )));
        }
        seen[node] = true;
    }
    Ok(())
}

/// Lists the tour's edges with their costs, closing edge last.
pub fn legs(costs: &CostMatrix, tour: &Tour) -> Vec<Leg> {
    tour.edges()
        .into_iter()
        .map(|(from, to)| Leg {
            from,
            to,
            cost: costs.get(from, to),
        })
        .collect()
}
