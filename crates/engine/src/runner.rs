use rayon::prelude::*;
use tracing::debug;

use pinger_sweep_shared::result::ErrorSeries;
use pinger_sweep_shared::series::{ActualValueSeries, SeriesMap, SimulatedResultSeries};

use crate::aggregate::{aggregate_key, validate_shapes, AggregateError};
use crate::metric::ErrorMetric;

/// Same result as [`crate::SweepErrorAggregator::aggregate`], with series
/// evaluated on a dedicated thread pool.
pub fn aggregate_parallel(
    actual_by_key: &ActualValueSeries,
    simulated_by_key: &SimulatedResultSeries,
    metric: ErrorMetric,
    n_workers: Option<usize>,
) -> anyhow::Result<ErrorSeries> {
    validate_shapes(actual_by_key, simulated_by_key).map_err(AggregateError::from)?;

    let n_threads = n_workers.unwrap_or_else(|| rayon::current_num_threads().min(8));
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(n_threads)
        .build()?;
    debug!(
        n_threads,
        n_series = actual_by_key.len(),
        metric = ?metric,
        "Aggregating sweep errors in parallel"
    );

    let jobs: Vec<(&String, &Vec<f64>, &Vec<Vec<f64>>)> = actual_by_key
        .iter()
        .filter_map(|(key, actual)| simulated_by_key.get(key).map(|sim| (key, actual, sim)))
        .collect();

    // Per-key results stay indexed so the first error is the first failing key.
    let results: Vec<Result<(String, Vec<f64>), AggregateError>> = pool.install(|| {
        jobs.par_iter()
            .map(|&(key, actual, simulated)| {
                aggregate_key(metric, key, actual, simulated).map(|errors| (key.clone(), errors))
            })
            .collect()
    });

    let errors = results.into_iter().collect::<Result<SeriesMap<_>, _>>()?;
    Ok(ErrorSeries::from_series(errors))
}
