//! Serializable tour summary.

use serde::Serialize;

use super::{legs, Leg};
use crate::distance::CostMatrix;
use crate::models::Tour;

/// A tour together with its legs, ready for JSON output.
///
/// # Examples
///
/// ```
/// use nn_tour::models::LabelledMatrix;
/// use nn_tour::constructive::nearest_neighbor;
/// use nn_tour::evaluation::TourSummary;
///
/// let cities = LabelledMatrix::sample_cities();
/// let tour = nearest_neighbor(cities.costs(), 0).unwrap();
/// let summary = TourSummary::new(cities.costs(), &tour).with_labels(cities.labels());
/// assert_eq!(summary.total_cost, 225);
/// assert_eq!(summary.stops.as_deref().unwrap()[1], "Cartago");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TourSummary {
    /// Number of nodes in the instance.
    pub nodes: usize,
    /// Node indices in visit order.
    pub order: Vec<usize>,
    /// Labels of the visited nodes, in visit order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stops: Option<Vec<String>>,
    /// Edges with costs, closing edge last.
    pub legs: Vec<Leg>,
    /// Sum of all leg costs.
    pub total_cost: i64,
}

impl TourSummary {
    /// Summarizes `tour` over `costs`.
    pub fn new(costs: &CostMatrix, tour: &Tour) -> Self {
        Self {
            nodes: costs.size(),
            order: tour.order().to_vec(),
            stops: None,
            legs: legs(costs, tour),
            total_cost: tour.cost(),
        }
    }

    /// Attaches stop names looked up by node index.
    ///
    /// Indices without a label fall back to the index itself.
    pub fn with_labels<S: AsRef<str>>(mut self, labels: &[S]) -> Self {
        let stops = self
            .order
            .iter()
            .map(|&i| {
                labels
                    .get(i)
                    .map(|s| s.as_ref().to_string())
                    .unwrap_or_else(|| i.to_string())
            })
            .collect();
        self.stops = Some(stops);
        self
    }
}
