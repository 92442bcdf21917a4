pub mod aggregate;
pub mod metric;
pub mod plot;
pub mod runner;

pub use aggregate::{AggregateError, SweepErrorAggregator};
pub use metric::ErrorMetric;
