use crate::types::season::Season;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a single reading against its seasonal history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictStatus {
    Normal,
    Anomalous,
    NoData,
}

impl fmt::Display for VerdictStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VerdictStatus::Normal => "normal",
            VerdictStatus::Anomalous => "anomalous",
            VerdictStatus::NoData => "no_data",
        })
    }
}

pub const NO_DATA_MESSAGE: &str = "No historical data for the selected city and season.";

/// Result of comparing a temperature with the historical bounds of a (city, season).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnomalyVerdict {
    /// Human-readable sentence for display.
    pub message: String,
    pub status: VerdictStatus,
    /// Inclusive `(lower, upper)` bounds the reading was checked against.
    pub bounds: Option<(f64, f64)>,
}

impl AnomalyVerdict {
    pub(crate) fn no_data() -> Self {
        Self {
            message: NO_DATA_MESSAGE.to_string(),
            status: VerdictStatus::NoData,
            bounds: None,
        }
    }

    pub(crate) fn normal(temperature: f64, season: Season, bounds: (f64, f64)) -> Self {
        Self {
            message: format!("Temperature {temperature}°C is normal for {season}."),
            status: VerdictStatus::Normal,
            bounds: Some(bounds),
        }
    }

    pub(crate) fn anomalous(temperature: f64, season: Season, bounds: (f64, f64)) -> Self {
        Self {
            message: format!("Temperature {temperature}°C is anomalous for {season}!"),
            status: VerdictStatus::Anomalous,
            bounds: Some(bounds),
        }
    }

    pub fn is_anomalous(&self) -> bool {
        self.status == VerdictStatus::Anomalous
    }
}
