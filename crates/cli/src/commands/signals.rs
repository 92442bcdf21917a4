use anyhow::Context;

use pinger_sweep_engine::plot::SignalPlot;

pub fn run(path: &str, title: Option<&str>) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
    let signals: Vec<Vec<f64>> =
        serde_json::from_str(&raw).with_context(|| format!("Failed to parse signals {path}"))?;
    tracing::info!(path, n_signals = signals.len(), "Loaded signals");

    let plot = SignalPlot::new(title, signals);
    println!("{}", plot.title);
    for signal in &plot.signals {
        println!(
            "  {:<14} samples={:<8} peak={:.4}",
            signal.label,
            signal.samples.len(),
            signal.peak_amplitude()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_runs_on_signal_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[[0.1, -0.4, 0.2], [0.0, 0.3]]").unwrap();
        run(file.path().to_str().unwrap(), Some("Raw")).unwrap();
    }

    #[test]
    fn test_rejects_non_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"signals\": []}").unwrap();
        let err = run(file.path().to_str().unwrap(), None).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("Failed to parse signals"), "unexpected error: {message}");
    }
}
