use crate::dataset::{CITY_COLUMN, SEASON_COLUMN, TEMPERATURE_COLUMN};
use crate::types::season::Season;
use polars::prelude::{col, lit, DataType, Expr, LazyFrame};

pub(crate) const IS_ANOMALY_COLUMN: &str = "is_anomaly";
pub(crate) const ROLLING_MEAN_COLUMN: &str = "rolling_mean";
pub(crate) const COUNT_COLUMN: &str = "count";
pub(crate) const MEAN_COLUMN: &str = "mean";
pub(crate) const STD_COLUMN: &str = "std";

/// Sample standard deviation of the temperature column, with an undefined
/// value (fewer than two rows) replaced by zero.
fn temperature_std_or_zero() -> Expr {
    col(TEMPERATURE_COLUMN)
        .std(1)
        .fill_nan(lit(0.0f64))
        .fill_null(lit(0.0f64))
}

/// Aggregations shared by the seasonal summary and the comparator: row
/// count, mean and sample standard deviation of the temperature column.
fn temperature_moments() -> [Expr; 3] {
    [
        col(TEMPERATURE_COLUMN)
            .count()
            .cast(DataType::UInt64)
            .alias(COUNT_COLUMN),
        col(TEMPERATURE_COLUMN).mean().alias(MEAN_COLUMN),
        col(TEMPERATURE_COLUMN).std(1).alias(STD_COLUMN),
    ]
}

pub trait TemperatureFrameExt {
    /// Keeps the rows of one city. Row order is preserved.
    fn filter_city(self, city: &str) -> LazyFrame;

    /// Keeps the rows matching both a city and a season.
    fn filter_city_season(self, city: &str, season: Season) -> LazyFrame;

    /// Adds a boolean `is_anomaly` column: true where the temperature lies
    /// more than `sigma` sample standard deviations from the mean of the
    /// whole frame.
    fn with_anomaly_flags(self, sigma: f64) -> LazyFrame;

    /// Groups by `season` and aggregates `count`, `mean` and `std` of the
    /// temperature, keeping groups in order of first appearance.
    fn seasonal_summary(self) -> LazyFrame;

    /// Reduces the frame to one row of `count`, `mean` and `std`.
    fn temperature_summary(self) -> LazyFrame;
}

impl TemperatureFrameExt for LazyFrame {
    fn filter_city(self, city: &str) -> LazyFrame {
        self.filter(col(CITY_COLUMN).eq(lit(city)))
    }

    fn filter_city_season(self, city: &str, season: Season) -> LazyFrame {
        self.filter(
            col(CITY_COLUMN)
                .eq(lit(city))
                .and(col(SEASON_COLUMN).eq(lit(season.label()))),
        )
    }

    fn with_anomaly_flags(self, sigma: f64) -> LazyFrame {
        let mean = col(TEMPERATURE_COLUMN).mean();
        let spread = lit(sigma) * temperature_std_or_zero();
        let lower = mean.clone() - spread.clone();
        let upper = mean + spread;
        self.with_column(
            col(TEMPERATURE_COLUMN)
                .lt(lower)
                .or(col(TEMPERATURE_COLUMN).gt(upper))
                .fill_null(lit(false))
                .alias(IS_ANOMALY_COLUMN),
        )
    }

    fn seasonal_summary(self) -> LazyFrame {
        self.group_by_stable([col(SEASON_COLUMN)])
            .agg(temperature_moments())
    }

    fn temperature_summary(self) -> LazyFrame {
        self.select(temperature_moments())
    }
}
