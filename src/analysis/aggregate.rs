//! Per-city historical aggregation: descriptive statistics, rolling mean,
//! global anomaly flags and seasonal profiles.

use crate::analysis::describe::describe_temperatures;
use crate::analysis::error::AnalysisError;
use crate::analysis::AnalysisOptions;
use crate::dataset::{HistoricalDataset, SEASON_COLUMN};
use crate::filtering::{
    TemperatureFrameExt, COUNT_COLUMN, IS_ANOMALY_COLUMN, MEAN_COLUMN, ROLLING_MEAN_COLUMN,
    STD_COLUMN,
};
use crate::types::season::Season;
use crate::types::stats::{DescriptiveStats, SeasonalStats, SeriesPoint};
use log::{debug, warn};
use polars::prelude::*;

/// Everything the dashboard shows for one city, derived from the historical dataset.
#[derive(Debug, Clone)]
pub struct CityAnalysis {
    pub city: String,
    /// `describe()`-style summary of the city's temperatures.
    pub summary: DescriptiveStats,
    /// Chart-ready frame: the city's rows in file order with the extra
    /// `is_anomaly` and `rolling_mean` columns.
    pub series: DataFrame,
    /// Typed rows of `series`.
    pub points: Vec<SeriesPoint>,
    /// Mean and standard deviation per season present, winter to autumn.
    pub seasonal: Vec<SeasonalStats>,
}

impl CityAnalysis {
    /// True when the city has no historical rows.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points flagged as anomalous, in time order.
    pub fn anomalies(&self) -> impl Iterator<Item = &SeriesPoint> {
        self.points.iter().filter(|p| p.is_anomaly)
    }

    pub fn seasonal_for(&self, season: Season) -> Option<&SeasonalStats> {
        self.seasonal.iter().find(|s| s.season == season)
    }
}

/// Aggregates the history of `city` with the default window (30 rows) and
/// band (2 standard deviations).
///
/// A city that does not occur in the dataset yields an empty analysis rather
/// than an error.
///
/// # Examples
///
/// ```
/// use seasonal_temps::{aggregate, HistoricalDataset};
///
/// let csv = "city,timestamp,temperature\nOslo,2023-01-01,-4.0\nOslo,2023-01-02,-6.0\n";
/// let dataset = HistoricalDataset::from_csv_bytes(csv.as_bytes())?;
///
/// let analysis = aggregate(&dataset, "Oslo")?;
/// assert_eq!(analysis.summary.mean, Some(-5.0));
/// assert!(analysis.points.iter().all(|p| p.rolling_mean.is_none()));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn aggregate(dataset: &HistoricalDataset, city: &str) -> Result<CityAnalysis, AnalysisError> {
    aggregate_with(dataset, city, &AnalysisOptions::default())
}

/// [`aggregate`] with explicit [`AnalysisOptions`].
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidRollingWindow`] for a zero-row window and
/// [`AnalysisError::DataFrameProcessing`] if a Polars computation fails.
pub fn aggregate_with(
    dataset: &HistoricalDataset,
    city: &str,
    options: &AnalysisOptions,
) -> Result<CityAnalysis, AnalysisError> {
    if options.rolling_window == 0 {
        return Err(AnalysisError::InvalidRollingWindow);
    }

    let records: Vec<_> = dataset.city_records(city).collect();
    if records.is_empty() {
        warn!("No historical records for city '{}'", city);
    }

    let temperatures: Vec<f64> = records.iter().map(|r| r.temperature()).collect();
    let rolling = rolling_mean(&temperatures, options.rolling_window);

    let mut series = dataset
        .lazy()
        .filter_city(city)
        .with_anomaly_flags(options.sigma)
        .collect()?;
    if series.height() != records.len() {
        return Err(AnalysisError::UnexpectedData {
            message: format!(
                "filtered frame has {} rows but {} records matched",
                series.height(),
                records.len()
            ),
            city: city.to_string(),
        });
    }
    series.with_column(Column::new(ROLLING_MEAN_COLUMN.into(), rolling.clone()))?;

    let flags: Vec<bool> = series
        .column(IS_ANOMALY_COLUMN)?
        .bool()?
        .into_iter()
        .map(|flag| flag.unwrap_or(false))
        .collect();

    let points: Vec<SeriesPoint> = records
        .iter()
        .zip(rolling)
        .zip(flags)
        .map(|((record, rolling_mean), is_anomaly)| SeriesPoint {
            timestamp: record.timestamp(),
            temperature: record.temperature(),
            season: record.season(),
            rolling_mean,
            is_anomaly,
        })
        .collect();

    let summary = describe_temperatures(&series)?;
    let seasonal = seasonal_stats(dataset, city)?;
    debug!(
        "Aggregated {} rows for '{}': {} anomalies, {} seasons",
        points.len(),
        city,
        points.iter().filter(|p| p.is_anomaly).count(),
        seasonal.len()
    );

    Ok(CityAnalysis {
        city: city.to_string(),
        summary,
        series,
        points,
        seasonal,
    })
}

/// Trailing mean over `window` consecutive values. Positions before the
/// window has filled are `None`.
fn rolling_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len().min(window - 1)];
    out.extend(
        values
            .windows(window)
            .map(|w| Some(w.iter().sum::<f64>() / window as f64)),
    );
    out
}

fn seasonal_stats(
    dataset: &HistoricalDataset,
    city: &str,
) -> Result<Vec<SeasonalStats>, AnalysisError> {
    let df = dataset.lazy().filter_city(city).seasonal_summary().collect()?;

    let seasons = df.column(SEASON_COLUMN)?.str()?;
    let counts = df.column(COUNT_COLUMN)?.u64()?;
    let means = df.column(MEAN_COLUMN)?.f64()?;
    let stds = df.column(STD_COLUMN)?.f64()?;

    let mut stats = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let unexpected = |message: &str| AnalysisError::UnexpectedData {
            message: format!("{} in seasonal row {}", message, idx),
            city: city.to_string(),
        };
        let season = seasons
            .get(idx)
            .and_then(|s| s.parse::<Season>().ok())
            .ok_or_else(|| unexpected("missing or unknown season"))?;
        let mean = means
            .get(idx)
            .ok_or_else(|| unexpected("missing mean"))?;
        stats.push(SeasonalStats {
            city: city.to_string(),
            season,
            count: counts.get(idx).unwrap_or(0) as usize,
            mean,
            std_dev: stds.get(idx).filter(|s| s.is_finite()),
        });
    }
    stats.sort_by_key(|s| s.season);
    Ok(stats)
}
