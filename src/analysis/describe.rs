use crate::analysis::error::AnalysisError;
use crate::dataset::TEMPERATURE_COLUMN;
use crate::types::stats::DescriptiveStats;
use polars::prelude::*;

/// Summarises the temperature column of `frame` like a `describe()` table.
///
/// Mean, sample standard deviation and extremes come from the Polars column;
/// quartiles use linear interpolation between the closest ranks.
pub(crate) fn describe_temperatures(frame: &DataFrame) -> Result<DescriptiveStats, AnalysisError> {
    let temperatures = frame.column(TEMPERATURE_COLUMN)?.f64()?;

    let mut sorted: Vec<f64> = temperatures.into_iter().flatten().collect();
    sorted.sort_by(f64::total_cmp);

    Ok(DescriptiveStats {
        count: sorted.len(),
        mean: temperatures.mean(),
        std_dev: temperatures.std(1).filter(|s| s.is_finite()),
        min: temperatures.min(),
        q25: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q75: quantile(&sorted, 0.75),
        max: temperatures.max(),
    })
}

/// Linear-interpolation quantile of already sorted data.
fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let rank = q * last as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let weight = rank - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * weight)
}
