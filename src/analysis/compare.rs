use crate::analysis::error::AnalysisError;
use crate::analysis::AnalysisOptions;
use crate::dataset::HistoricalDataset;
use crate::filtering::{TemperatureFrameExt, COUNT_COLUMN, MEAN_COLUMN, STD_COLUMN};
use crate::types::season::Season;
use crate::types::verdict::AnomalyVerdict;
use log::{debug, info};

/// Classifies `current_temp` against the historical readings of `city` in
/// `season`, using a band of two sample standard deviations around the mean.
///
/// The band is inclusive. With a single historical reading the standard
/// deviation is taken as zero, so only that exact value counts as normal.
/// No matching history gives [`VerdictStatus::NoData`](crate::VerdictStatus::NoData).
///
/// # Examples
///
/// ```
/// use seasonal_temps::{compare, HistoricalDataset, Season, VerdictStatus};
///
/// let csv = "city,timestamp,temperature\n\
///            X,2023-01-01,0\nX,2023-01-02,2\nX,2023-01-03,4\nX,2023-01-04,6\nX,2023-01-05,8\n";
/// let dataset = HistoricalDataset::from_csv_bytes(csv.as_bytes())?;
///
/// assert_eq!(compare("X", 4.0, Season::Winter, &dataset)?.status, VerdictStatus::Normal);
/// assert_eq!(compare("X", 20.0, Season::Winter, &dataset)?.status, VerdictStatus::Anomalous);
/// assert_eq!(compare("Y", 4.0, Season::Winter, &dataset)?.status, VerdictStatus::NoData);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn compare(
    city: &str,
    current_temp: f64,
    season: Season,
    dataset: &HistoricalDataset,
) -> Result<AnomalyVerdict, AnalysisError> {
    compare_with(city, current_temp, season, dataset, &AnalysisOptions::default())
}

/// [`compare`] with the band width taken from `options.sigma`.
pub fn compare_with(
    city: &str,
    current_temp: f64,
    season: Season,
    dataset: &HistoricalDataset,
    options: &AnalysisOptions,
) -> Result<AnomalyVerdict, AnalysisError> {
    let summary = dataset
        .lazy()
        .filter_city_season(city, season)
        .temperature_summary()
        .collect()?;

    let count = summary.column(COUNT_COLUMN)?.u64()?.get(0).unwrap_or(0);
    if count == 0 {
        info!("No historical data for '{}' in {}", city, season);
        return Ok(AnomalyVerdict::no_data());
    }

    let mean = summary
        .column(MEAN_COLUMN)?
        .f64()?
        .get(0)
        .ok_or_else(|| AnalysisError::UnexpectedData {
            message: format!("no mean over {} {} readings", count, season),
            city: city.to_string(),
        })?;
    let std_dev = summary
        .column(STD_COLUMN)?
        .f64()?
        .get(0)
        .filter(|s| s.is_finite())
        .unwrap_or(0.0);

    let spread = options.sigma * std_dev;
    let bounds = (mean - spread, mean + spread);
    debug!(
        "Bounds for '{}' in {} over {} readings: [{:.2}, {:.2}]",
        city, season, count, bounds.0, bounds.1
    );

    if bounds.0 <= current_temp && current_temp <= bounds.1 {
        Ok(AnomalyVerdict::normal(current_temp, season, bounds))
    } else {
        Ok(AnomalyVerdict::anomalous(current_temp, season, bounds))
    }
}
