use serde::{Deserialize, Serialize};

// Plot defaults
pub const DEFAULT_SWEEP_TITLE: &str = "Parameter Sweep Absolute Average Error";
pub const DEFAULT_SIGNAL_TITLE: &str = "Hydrophone Signals";
pub const DEFAULT_SCALE: f64 = 1.0;
pub const SIGNAL_LABEL_PREFIX: &str = "hydrophone";
pub const POSITION_TITLE_PREFIX: &str = "Distribution for Pinger Position Results";
/// Radius (m) at which the estimated bearing ray is drawn out to.
pub const FAR_BEARING_RADIUS: f64 = 100.0;

/// Axis type the renderer should draw the sweep curves on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Projection {
    #[default]
    Cartesian,
    Polar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    pub title: String,
    pub projection: Projection,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_SWEEP_TITLE.to_string(),
            projection: Projection::Cartesian,
            scale_x: DEFAULT_SCALE,
            scale_y: DEFAULT_SCALE,
        }
    }
}

/// Position in cylindrical coordinates: radius (m), azimuth (rad), height (m).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CylindricalPosition {
    pub r: f64,
    pub phi: f64,
    pub z: f64,
}

impl CylindricalPosition {
    pub fn new(r: f64, phi: f64, z: f64) -> Self {
        Self { r, phi, z }
    }
}

/// Ground-truth geometry of one simulated scene.
///
/// Passed explicitly to whoever draws estimated against actual positions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub hydrophones: Vec<CylindricalPosition>,
    pub pinger: CylindricalPosition,
}
