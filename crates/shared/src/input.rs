use serde::{Deserialize, Serialize};

use crate::config::{CylindricalPosition, SceneConfig};
use crate::series::{ActualValueSeries, SimulatedResultSeries};

/// Sweep data handed over by the simulation side.
///
/// ```json
/// {
///   "params": [1.0, 2.0],
///   "actual": { "bearing": [0.5, 0.6] },
///   "simulated": { "bearing": [[0.49, 0.52], [0.61, 0.58]] },
///   "scene": {
///     "hydrophones": [{"r": 0.01, "phi": 0.0, "z": 0.0}],
///     "pinger": {"r": 10.0, "phi": 0.5, "z": -2.0}
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepInput {
    pub params: Vec<f64>,
    pub actual: ActualValueSeries,
    pub simulated: SimulatedResultSeries,
    #[serde(default)]
    pub scene: Option<SceneConfig>,
}

/// Position estimates from one localization run with its scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionInput {
    pub scene: SceneConfig,
    pub estimates: Vec<CylindricalPosition>,
    #[serde(default)]
    pub initial_guess: CylindricalPosition,
    pub sigma: f64,
}
