//! Failed production records plotted against barn temperature and humidity

use serde::Serialize;

use super::clean_label;

/// A production result joined to the health check and environment reading
/// of the same day
#[derive(Debug, Clone, PartialEq)]
pub struct EnvFailureRow {
    pub temp: Option<f64>,
    pub humid: Option<f64>,
    pub farm: String,
    pub weight: Option<f64>,
    pub pass_fail: String,
}

/// Scatter point carrying tooltip fields beyond x/y
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvFailurePoint {
    /// Temperature
    pub x: f64,
    /// Humidity
    pub y: f64,
    pub farm: String,
    pub weight: f64,
}

/// One point per failed record with a positive weight, in row order.
pub fn env_failures(rows: impl IntoIterator<Item = EnvFailureRow>) -> Vec<EnvFailurePoint> {
    rows.into_iter()
        .filter(|row| row.pass_fail.trim() == "F")
        .filter_map(|row| {
            let weight = row.weight.filter(|w| *w > 0.0)?;
            Some(EnvFailurePoint {
                x: row.temp?,
                y: row.humid?,
                farm: clean_label(&row.farm),
                weight,
            })
        })
        .collect()
}
