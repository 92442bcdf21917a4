use anyhow::Context;

use pinger_sweep_engine::plot::PositionPlot;
use pinger_sweep_shared::input::PositionInput;

use crate::output;

pub fn run(path: &str, json: bool) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
    let input: PositionInput =
        serde_json::from_str(&raw).with_context(|| format!("Failed to parse positions {path}"))?;
    tracing::info!(path, n_estimates = input.estimates.len(), "Loaded position estimates");

    let plot =
        PositionPlot::build(&input.scene, input.estimates, input.initial_guess, input.sigma)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plot)?);
    } else {
        output::print_positions(&plot);
    }
    Ok(())
}
