//! Tour validation, cost evaluation, and leg reports.

mod evaluator;
mod summary;

pub(crate) use evaluator::add_cost;
pub use evaluator::{legs, tour_cost, validate_tour, Leg};
pub use summary::TourSummary;
