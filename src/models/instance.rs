//! Labelled cost matrix for the postman variant.

use serde::{Deserialize, Serialize};

use crate::distance::CostMatrix;
use crate::{Error, Result};

/// An explicit cost matrix whose rows are named locations.
///
/// Serialized as `{"labels": [...], "costs": [[...], ...]}`. The number of
/// labels always equals the matrix size.
///
/// # Examples
///
/// ```
/// use nn_tour::models::LabelledMatrix;
///
/// let json = r#"{"labels": ["a", "b"], "costs": [[0, 7], [7, 0]]}"#;
/// let m: LabelledMatrix = serde_json::from_str(json).unwrap();
/// assert_eq!(m.label(1), Some("b"));
/// assert_eq!(m.costs().get(0, 1), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLabelledMatrix", into = "RawLabelledMatrix")]
pub struct LabelledMatrix {
    labels: Vec<String>,
    costs: CostMatrix,
}

#[derive(Serialize, Deserialize)]
struct RawLabelledMatrix {
    labels: Vec<String>,
    costs: Vec<Vec<i64>>,
}

impl LabelledMatrix {
    /// Pairs labels with a cost matrix.
    ///
    /// Returns [`Error::InvalidMatrix`] if the label count differs from the
    /// matrix size.
    pub fn new(labels: Vec<String>, costs: CostMatrix) -> Result<Self> {
        if labels.len() != costs.size() {
            return Err(Error::invalid_matrix(format!(
                "{} labels for a {}x{} matrix",
                labels.len(),
                costs.size(),
                costs.size()
            )));
        }
        Ok(Self { labels, costs })
    }

    /// The built-in four-city instance.
    pub fn sample_cities() -> Self {
        let labels = ["Pereira", "Armenia", "Medellín", "Cartago"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let mut costs = CostMatrix::new(4);
        let rows = [[0, 45, 60, 25], [45, 0, 90, 50], [60, 90, 0, 70], [25, 50, 70, 0]];
        for (i, row) in rows.iter().enumerate() {
            for (j, &c) in row.iter().enumerate() {
                costs.set(i, j, c);
            }
        }
        Self { labels, costs }
    }

    /// Location names, in matrix order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Name of the location at `index`.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// The underlying cost matrix.
    pub fn costs(&self) -> &CostMatrix {
        &self.costs
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if there are no locations.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl TryFrom<RawLabelledMatrix> for LabelledMatrix {
    type Error = Error;

    fn try_from(raw: RawLabelledMatrix) -> Result<Self> {
        let costs = CostMatrix::from_rows(raw.costs)?;
        Self::new(raw.labels, costs)
    }
}

impl From<LabelledMatrix> for RawLabelledMatrix {
    fn from(m: LabelledMatrix) -> Self {
        let costs = m.costs.rows().map(<[i64]>::to_vec).collect();
        Self {
            labels: m.labels,
            costs,
        }
    }
}
