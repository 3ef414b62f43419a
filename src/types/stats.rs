//! Output structures of the historical aggregation.

use crate::types::season::Season;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Mean and sample standard deviation of one (city, season) group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalStats {
    pub city: String,
    pub season: Season,
    /// Number of observations in the group.
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; `None` when the group has a single observation.
    pub std_dev: Option<f64>,
}

/// Summary of a city's temperature column, in the shape of a `describe()` table.
///
/// Every field except `count` is `None` for an empty series. `std_dev` is
/// also `None` when there is only one observation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DescriptiveStats {
    pub count: usize,
    pub mean: Option<f64>,
    pub std_dev: Option<f64>,
    pub min: Option<f64>,
    /// 25th percentile.
    pub q25: Option<f64>,
    pub median: Option<f64>,
    /// 75th percentile.
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

/// One row of the per-city time series, with its derived chart columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub timestamp: NaiveDateTime,
    pub temperature: f64,
    pub season: Season,
    /// Trailing-window mean; `None` until the window has filled.
    pub rolling_mean: Option<f64>,
    pub is_anomaly: bool,
}
