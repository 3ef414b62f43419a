//! The in-memory historical dataset a session works on.

pub(crate) mod error;
mod loader;

use crate::dataset::error::LoadError;
use crate::types::record::TemperatureRecord;
use chrono::NaiveDateTime;
use log::info;
use polars::prelude::*;
use std::path::Path;

pub(crate) const CITY_COLUMN: &str = "city";
pub(crate) const TIMESTAMP_COLUMN: &str = "timestamp";
pub(crate) const TEMPERATURE_COLUMN: &str = "temperature";
pub(crate) const SEASON_COLUMN: &str = "season";

/// Historical temperature records in their original file order.
///
/// Holds the typed records together with a Polars `DataFrame` view of them
/// (`city`, `timestamp`, `temperature`, `season`). Both are built once on load
/// and never mutated; analyses work on filtered copies.
///
/// # Examples
///
/// ```
/// use seasonal_temps::HistoricalDataset;
///
/// let csv = "city,timestamp,temperature\nBerlin,2023-01-15,-2.0\nRome,2023-01-15,9.5\n";
/// let dataset = HistoricalDataset::from_csv_bytes(csv.as_bytes())?;
/// assert_eq!(dataset.cities(), vec!["Berlin", "Rome"]);
/// # Ok::<(), seasonal_temps::LoadError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HistoricalDataset {
    records: Vec<TemperatureRecord>,
    frame: DataFrame,
}

impl HistoricalDataset {
    /// Builds a dataset from already-validated records.
    pub fn from_records(records: Vec<TemperatureRecord>) -> Result<Self, LoadError> {
        let frame = records_to_frame(records.iter())?;
        info!(
            "Loaded historical dataset with {} records for {} cities",
            records.len(),
            count_distinct_cities(&records)
        );
        Ok(Self { records, frame })
    }

    /// Loads a CSV file with `city`, `timestamp` and `temperature` columns.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::MissingColumn`] if a required column is absent,
    /// [`LoadError::InvalidValue`] for the first row that fails to parse and
    /// [`LoadError::CsvRead`] if the file cannot be read as CSV at all.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        Self::from_records(loader::load_csv_path(path.as_ref())?)
    }

    /// Loads CSV content held in memory, e.g. the body of an uploaded file.
    pub fn from_csv_bytes(bytes: &[u8]) -> Result<Self, LoadError> {
        Self::from_records(loader::load_csv_bytes(bytes)?)
    }

    pub fn records(&self) -> &[TemperatureRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct city names in order of first appearance.
    pub fn cities(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for record in &self.records {
            if !seen.contains(&record.city()) {
                seen.push(record.city());
            }
        }
        seen
    }

    pub fn contains_city(&self, city: &str) -> bool {
        self.records.iter().any(|r| r.city() == city)
    }

    /// Records of one city, in file order.
    pub fn city_records<'a>(&'a self, city: &'a str) -> impl Iterator<Item = &'a TemperatureRecord> + 'a {
        self.records.iter().filter(move |r| r.city() == city)
    }

    /// The eager `DataFrame` view of all records.
    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// A lazy view of all records, for composing filters and aggregations.
    pub fn lazy(&self) -> LazyFrame {
        self.frame.clone().lazy()
    }
}

fn count_distinct_cities(records: &[TemperatureRecord]) -> usize {
    let mut cities: Vec<&str> = records.iter().map(|r| r.city()).collect();
    cities.sort_unstable();
    cities.dedup();
    cities.len()
}

pub(crate) fn records_to_frame<'a>(
    records: impl Iterator<Item = &'a TemperatureRecord>,
) -> PolarsResult<DataFrame> {
    let mut cities: Vec<&str> = Vec::new();
    let mut timestamps: Vec<NaiveDateTime> = Vec::new();
    let mut temperatures: Vec<f64> = Vec::new();
    let mut seasons: Vec<&str> = Vec::new();
    for record in records {
        cities.push(record.city());
        timestamps.push(record.timestamp());
        temperatures.push(record.temperature());
        seasons.push(record.season().label());
    }
    DataFrame::new(vec![
        Column::new(CITY_COLUMN.into(), cities),
        Column::new(TIMESTAMP_COLUMN.into(), timestamps),
        Column::new(TEMPERATURE_COLUMN.into(), temperatures),
        Column::new(SEASON_COLUMN.into(), seasons),
    ])
}
