//! Plot-ready data for the rendering side.
//!
//! Nothing here draws. The types carry everything a renderer needs (labels,
//! scaled points, axis projection, scene geometry) so it never has to reach
//! into shared state.

use serde::Serialize;
use tracing::debug;

use pinger_sweep_shared::config::{
    CylindricalPosition, PlotConfig, Projection, SceneConfig, DEFAULT_SIGNAL_TITLE,
    FAR_BEARING_RADIUS, POSITION_TITLE_PREFIX, SIGNAL_LABEL_PREFIX,
};
use pinger_sweep_shared::result::ErrorSeries;
use pinger_sweep_shared::series::{ActualValueSeries, SimulatedResultSeries};

use crate::aggregate::{AggregateError, SweepErrorAggregator};
use crate::metric::ErrorMetric;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlotError {
    #[error("series `{key}` has {errors} error values but the sweep has {params} parameter values")]
    LengthMismatch {
        key: String,
        params: usize,
        errors: usize,
    },
    #[error("no estimated positions to plot")]
    NoEstimates,
    #[error(transparent)]
    Aggregate(#[from] AggregateError),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Curve {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

impl Curve {
    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|&(x, _)| x)
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|&(_, y)| y)
    }
}

/// One (parameter, error) curve per series key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepPlot {
    pub title: String,
    pub projection: Projection,
    pub metric: ErrorMetric,
    pub curves: Vec<Curve>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene: Option<SceneConfig>,
}

impl SweepPlot {
    pub fn build(
        params: &[f64],
        errors: &ErrorSeries,
        metric: ErrorMetric,
        config: &PlotConfig,
        scene: Option<SceneConfig>,
    ) -> Result<Self, PlotError> {
        let curves = errors
            .iter()
            .map(|(key, values)| {
                if values.len() != params.len() {
                    return Err(PlotError::LengthMismatch {
                        key: key.to_string(),
                        params: params.len(),
                        errors: values.len(),
                    });
                }
                let points = params
                    .iter()
                    .zip(values)
                    .map(|(&p, &e)| (p * config.scale_x, e * config.scale_y))
                    .collect();
                Ok(Curve {
                    label: key.to_string(),
                    points,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            title = %config.title,
            n_curves = curves.len(),
            n_points = params.len(),
            "Built sweep plot"
        );

        Ok(Self {
            title: config.title.clone(),
            projection: config.projection,
            metric,
            curves,
            scene,
        })
    }

    pub fn curve(&self, label: &str) -> Option<&Curve> {
        self.curves.iter().find(|c| c.label == label)
    }
}

/// Aggregates the sweep and lays it out as curves in one step.
pub fn sweep_abs_avg_error(
    params: &[f64],
    actual_by_key: &ActualValueSeries,
    simulated_by_key: &SimulatedResultSeries,
    metric: ErrorMetric,
    config: &PlotConfig,
    scene: Option<SceneConfig>,
) -> Result<SweepPlot, PlotError> {
    let errors = SweepErrorAggregator::new(metric).aggregate(actual_by_key, simulated_by_key)?;
    SweepPlot::build(params, &errors, metric, config, scene)
}

/// Raw hydrophone signals, labelled in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalPlot {
    pub title: String,
    pub signals: Vec<LabelledSignal>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelledSignal {
    pub label: String,
    pub samples: Vec<f64>,
}

impl LabelledSignal {
    pub fn peak_amplitude(&self) -> f64 {
        self.samples.iter().fold(0.0_f64, |peak, s| peak.max(s.abs()))
    }
}

impl SignalPlot {
    pub fn new(title: Option<&str>, signals: Vec<Vec<f64>>) -> Self {
        let signals = signals
            .into_iter()
            .enumerate()
            .map(|(i, samples)| LabelledSignal {
                label: format!("{SIGNAL_LABEL_PREFIX} {i}"),
                samples,
            })
            .collect();
        Self {
            title: title.unwrap_or(DEFAULT_SIGNAL_TITLE).to_string(),
            signals,
        }
    }
}

/// Estimated pinger positions against the scene's ground truth.
///
/// Coordinates stay cylindrical; the renderer projects them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionPlot {
    pub title: String,
    pub sigma: f64,
    pub hydrophones: Vec<CylindricalPosition>,
    pub pinger: CylindricalPosition,
    pub estimates: Vec<CylindricalPosition>,
    pub initial_guess: CylindricalPosition,
    /// Far end of the ray from the origin along the first estimate's bearing.
    pub bearing_ray_end: CylindricalPosition,
}

impl PositionPlot {
    pub fn build(
        scene: &SceneConfig,
        estimates: Vec<CylindricalPosition>,
        initial_guess: CylindricalPosition,
        sigma: f64,
    ) -> Result<Self, PlotError> {
        let first = estimates.first().ok_or(PlotError::NoEstimates)?;
        let bearing_ray_end = CylindricalPosition::new(FAR_BEARING_RADIUS, first.phi, first.z);

        debug!(
            n_estimates = estimates.len(),
            n_hydrophones = scene.hydrophones.len(),
            sigma,
            "Built position plot"
        );

        Ok(Self {
            title: format!("{POSITION_TITLE_PREFIX} σ = {sigma:.2}"),
            sigma,
            hydrophones: scene.hydrophones.clone(),
            pinger: scene.pinger,
            estimates,
            initial_guess,
            bearing_ray_end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinger_sweep_shared::series::SeriesMap;

    fn errors() -> ErrorSeries {
        ErrorSeries::from_series(
            SeriesMap::new()
                .with("bearing", vec![0.5, 0.25])
                .with("range", vec![2.0, 4.0]),
        )
    }

    #[test]
    fn test_scales_each_axis() {
        let config = PlotConfig {
            scale_x: 10.0,
            scale_y: 0.5,
            ..PlotConfig::default()
        };
        let plot =
            SweepPlot::build(&[1.0, 2.0], &errors(), ErrorMetric::Linear, &config, None).unwrap();
        assert_eq!(plot.curves.len(), 2);
        assert_eq!(plot.curve("range").unwrap().points, vec![(10.0, 1.0), (20.0, 2.0)]);
        let ys: Vec<f64> = plot.curve("bearing").unwrap().ys().collect();
        assert_eq!(ys, vec![0.25, 0.125]);
        assert_eq!(plot.title, config.title);
    }

    #[test]
    fn test_curves_follow_key_order() {
        let config = PlotConfig::default();
        let plot =
            SweepPlot::build(&[1.0, 2.0], &errors(), ErrorMetric::Linear, &config, None).unwrap();
        let labels: Vec<&str> = plot.curves.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["bearing", "range"]);
        assert_eq!(plot.curves[0].xs().collect::<Vec<_>>(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_rejects_param_length_mismatch() {
        let config = PlotConfig::default();
        let err = SweepPlot::build(&[1.0, 2.0, 3.0], &errors(), ErrorMetric::Linear, &config, None)
            .unwrap_err();
        assert_eq!(
            err,
            PlotError::LengthMismatch {
                key: "bearing".into(),
                params: 3,
                errors: 2,
            }
        );
    }

    #[test]
    fn test_carries_projection_and_scene() {
        let config = PlotConfig {
            projection: Projection::Polar,
            ..PlotConfig::default()
        };
        let scene = SceneConfig {
            hydrophones: vec![CylindricalPosition::new(0.01, 0.0, 0.0)],
            pinger: CylindricalPosition::new(10.0, 0.5, -2.0),
        };
        let plot = SweepPlot::build(
            &[1.0, 2.0],
            &errors(),
            ErrorMetric::Angular,
            &config,
            Some(scene.clone()),
        )
        .unwrap();
        assert_eq!(plot.projection, Projection::Polar);
        assert_eq!(plot.metric, ErrorMetric::Angular);
        assert_eq!(plot.scene, Some(scene));
    }

    #[test]
    fn test_sweep_abs_avg_error_aggregates_first() {
        let actual = SeriesMap::new().with("range", vec![1.0, 2.0]);
        let simulated = SeriesMap::new().with("range", vec![vec![1.0, 3.0], vec![2.0, 2.0]]);
        let plot = sweep_abs_avg_error(
            &[100.0, 200.0],
            &actual,
            &simulated,
            ErrorMetric::Linear,
            &PlotConfig::default(),
            None,
        )
        .unwrap();
        assert_eq!(plot.curve("range").unwrap().points, vec![(100.0, 1.0), (200.0, 0.0)]);

        let empty = SeriesMap::new().with("range", vec![vec![1.0], vec![]]);
        let config = PlotConfig::default();
        let err =
            sweep_abs_avg_error(&[1.0, 2.0], &actual, &empty, ErrorMetric::Linear, &config, None)
                .unwrap_err();
        assert!(matches!(
            err,
            PlotError::Aggregate(AggregateError::EmptyDistribution { index: 1, .. })
        ));
    }

    #[test]
    fn test_signal_labels() {
        let plot = SignalPlot::new(None, vec![vec![0.1, -0.7], vec![0.3]]);
        assert_eq!(plot.title, DEFAULT_SIGNAL_TITLE);
        assert_eq!(plot.signals[0].label, "hydrophone 0");
        assert_eq!(plot.signals[1].label, "hydrophone 1");
        assert_eq!(plot.signals[0].peak_amplitude(), 0.7);

        let plot = SignalPlot::new(Some("Filtered"), vec![]);
        assert_eq!(plot.title, "Filtered");
        assert!(plot.signals.is_empty());
    }

    fn scene() -> SceneConfig {
        SceneConfig {
            hydrophones: vec![
                CylindricalPosition::new(0.01, 0.0, 0.0),
                CylindricalPosition::new(0.01, 2.0, 0.0),
            ],
            pinger: CylindricalPosition::new(20.0, 0.75, -3.0),
        }
    }

    #[test]
    fn test_position_plot_carries_scene_and_estimates() {
        let estimates = vec![
            CylindricalPosition::new(18.0, 0.8, -2.5),
            CylindricalPosition::new(22.0, 0.7, -3.5),
        ];
        let guess = CylindricalPosition::new(10.0, 0.0, 0.0);
        let plot = PositionPlot::build(&scene(), estimates.clone(), guess, 0.1234).unwrap();

        assert_eq!(plot.hydrophones, scene().hydrophones);
        assert_eq!(plot.pinger, scene().pinger);
        assert_eq!(plot.estimates, estimates);
        assert_eq!(plot.initial_guess, guess);
        assert_eq!(plot.bearing_ray_end, CylindricalPosition::new(100.0, 0.8, -2.5));
        assert_eq!(plot.title, "Distribution for Pinger Position Results σ = 0.12");
    }

    #[test]
    fn test_position_plot_needs_an_estimate() {
        let err = PositionPlot::build(&scene(), vec![], CylindricalPosition::default(), 1.0)
            .unwrap_err();
        assert_eq!(err, PlotError::NoEstimates);
    }
}
