use serde::Serialize;

use crate::series::SeriesMap;

/// Mean absolute error per sweep point, per series key.
///
/// Immutable once computed; the engine hands ownership to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ErrorSeries(SeriesMap<Vec<f64>>);

impl ErrorSeries {
    pub fn from_series(errors: SeriesMap<Vec<f64>>) -> Self {
        Self(errors)
    }

    pub fn get(&self, key: &str) -> Option<&[f64]> {
        self.0.get(key).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn n_series(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Average of the per-point errors of one series, `None` for an unknown
    /// key or a series with no sweep points.
    pub fn avg_error(&self, key: &str) -> Option<f64> {
        let errors = self.0.get(key)?;
        if errors.is_empty() {
            None
        } else {
            Some(errors.iter().sum::<f64>() / errors.len() as f64)
        }
    }
}
