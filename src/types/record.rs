//! Defines the typed row of a historical temperature dataset.

use crate::types::season::{classify_season, Season};
use crate::types::timestamp::IntoTimestamp;
use chrono::NaiveDateTime;
use serde::Serialize;

/// A single historical temperature observation for a city.
///
/// Records are immutable. The `season` is always derived from `timestamp`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureRecord {
    /// City name as it appears in the source file (e.g. "Berlin").
    city: String,
    /// Observation time, naive wall-clock.
    timestamp: NaiveDateTime,
    /// Temperature in degrees Celsius.
    temperature: f64,
    /// Season derived from the timestamp's month.
    season: Season,
}

impl TemperatureRecord {
    /// Creates a record, deriving its season from the timestamp.
    ///
    /// Returns `None` if `timestamp` cannot be interpreted as a date-time.
    ///
    /// # Examples
    ///
    /// ```
    /// use seasonal_temps::{Season, TemperatureRecord};
    ///
    /// let record = TemperatureRecord::new("Berlin", "2023-01-15", -2.5).unwrap();
    /// assert_eq!(record.season(), Season::Winter);
    /// ```
    pub fn new(
        city: impl Into<String>,
        timestamp: impl IntoTimestamp,
        temperature: f64,
    ) -> Option<Self> {
        let timestamp = timestamp.into_timestamp()?;
        Some(Self {
            city: city.into(),
            timestamp,
            temperature,
            season: classify_season(timestamp),
        })
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn season(&self) -> Season {
        self.season
    }
}
