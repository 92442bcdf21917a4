use pinger_sweep_shared::result::ErrorSeries;
use pinger_sweep_shared::series::{ActualValueSeries, SeriesMap, SimulatedResultSeries};
use tracing::{debug, trace, warn};

use crate::metric::ErrorMetric;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AggregateError {
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(#[from] ShapeMismatch),
    #[error("Empty distribution for series `{key}` at sweep point {index}")]
    EmptyDistribution { key: String, index: usize },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeMismatch {
    #[error("series `{0}` has actual values but no simulated results")]
    MissingSimulated(String),
    #[error("series `{0}` has simulated results but no actual values")]
    MissingActual(String),
    #[error("series `{key}` has {actual} actual values but {simulated} simulated distributions")]
    Length {
        key: String,
        actual: usize,
        simulated: usize,
    },
}

/// Turns per-point estimate distributions into one mean absolute error per
/// sweep point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepErrorAggregator {
    metric: ErrorMetric,
}

impl SweepErrorAggregator {
    pub fn new(metric: ErrorMetric) -> Self {
        Self { metric }
    }

    pub fn from_angular_flag(use_angular: bool) -> Self {
        Self::new(ErrorMetric::from_angular_flag(use_angular))
    }

    /// Fails without producing anything if any key or sweep point violates
    /// the shape contract.
    pub fn aggregate(
        &self,
        actual_by_key: &ActualValueSeries,
        simulated_by_key: &SimulatedResultSeries,
    ) -> Result<ErrorSeries, AggregateError> {
        debug!(
            metric = ?self.metric,
            n_series = actual_by_key.len(),
            "Aggregating sweep errors"
        );

        if let Err(e) = validate_shapes(actual_by_key, simulated_by_key) {
            warn!(error = %e, "Rejecting sweep input");
            return Err(e.into());
        }

        let mut errors = SeriesMap::new();
        for (key, actual) in actual_by_key {
            // key sets validated above
            let simulated = simulated_by_key.get(key).map(Vec::as_slice).unwrap_or_default();
            let series = aggregate_key(self.metric, key, actual, simulated).inspect_err(|e| {
                warn!(error = %e, "Aborting sweep aggregation");
            })?;
            errors.insert(key.clone(), series);
        }

        Ok(ErrorSeries::from_series(errors))
    }
}

/// Aggregates with the plain linear/angular switch.
pub fn aggregate(
    actual_by_key: &ActualValueSeries,
    simulated_by_key: &SimulatedResultSeries,
    use_angular: bool,
) -> Result<ErrorSeries, AggregateError> {
    SweepErrorAggregator::from_angular_flag(use_angular).aggregate(actual_by_key, simulated_by_key)
}

pub(crate) fn validate_shapes(
    actual_by_key: &ActualValueSeries,
    simulated_by_key: &SimulatedResultSeries,
) -> Result<(), ShapeMismatch> {
    for (key, actual) in actual_by_key {
        let simulated = simulated_by_key
            .get(key)
            .ok_or_else(|| ShapeMismatch::MissingSimulated(key.clone()))?;
        if actual.len() != simulated.len() {
            return Err(ShapeMismatch::Length {
                key: key.clone(),
                actual: actual.len(),
                simulated: simulated.len(),
            });
        }
    }
    if let Some(key) = simulated_by_key.keys().find(|k| !actual_by_key.contains_key(k)) {
        return Err(ShapeMismatch::MissingActual(key.to_string()));
    }
    Ok(())
}

/// Mean error of one series, in sweep-point order. Lengths must already agree.
pub(crate) fn aggregate_key(
    metric: ErrorMetric,
    key: &str,
    actual: &[f64],
    simulated: &[Vec<f64>],
) -> Result<Vec<f64>, AggregateError> {
    trace!(key, n_points = actual.len(), "Aggregating series");
    actual
        .iter()
        .zip(simulated)
        .enumerate()
        .map(|(index, (&actual, distribution))| {
            mean_error(metric, actual, distribution).ok_or_else(|| {
                AggregateError::EmptyDistribution {
                    key: key.to_string(),
                    index,
                }
            })
        })
        .collect()
}

/// `None` for an empty distribution.
pub fn mean_error(metric: ErrorMetric, actual: f64, distribution: &[f64]) -> Option<f64> {
    if distribution.is_empty() {
        return None;
    }
    let total: f64 = distribution.iter().map(|&s| metric.error(actual, s)).sum();
    Some(total / distribution.len() as f64)
}
