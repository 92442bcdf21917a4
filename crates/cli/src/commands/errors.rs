use anyhow::Context;

use pinger_sweep_engine::plot::SweepPlot;
use pinger_sweep_engine::runner;
use pinger_sweep_engine::{ErrorMetric, SweepErrorAggregator};
use pinger_sweep_shared::config::{PlotConfig, Projection};
use pinger_sweep_shared::input::SweepInput;

use crate::output;

pub struct Options {
    pub angular: bool,
    pub shortest_arc: bool,
    pub workers: usize,
    pub scale_x: f64,
    pub scale_y: f64,
    pub polar: bool,
    pub title: Option<String>,
    pub json: bool,
}

impl Options {
    fn metric(&self) -> ErrorMetric {
        if self.shortest_arc {
            ErrorMetric::ShortestArc
        } else {
            ErrorMetric::from_angular_flag(self.angular)
        }
    }

    fn plot_config(&self) -> PlotConfig {
        let defaults = PlotConfig::default();
        PlotConfig {
            title: self.title.clone().unwrap_or(defaults.title),
            projection: if self.polar {
                Projection::Polar
            } else {
                Projection::Cartesian
            },
            scale_x: self.scale_x,
            scale_y: self.scale_y,
        }
    }
}

pub fn run(path: &str, options: Options) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
    let input: SweepInput =
        serde_json::from_str(&raw).with_context(|| format!("Failed to parse sweep input {path}"))?;
    let metric = options.metric();

    tracing::info!(
        path,
        n_params = input.params.len(),
        n_series = input.actual.len(),
        metric = ?metric,
        "Loaded sweep input"
    );

    let start = std::time::Instant::now();
    let errors = if options.workers == 0 {
        SweepErrorAggregator::new(metric).aggregate(&input.actual, &input.simulated)?
    } else {
        runner::aggregate_parallel(&input.actual, &input.simulated, metric, Some(options.workers))?
    };
    let elapsed = start.elapsed();

    let plot = SweepPlot::build(
        &input.params,
        &errors,
        metric,
        &options.plot_config(),
        input.scene,
    )?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&plot)?);
    } else {
        output::print_sweep(&plot, &errors, elapsed);
    }
    Ok(())
}
