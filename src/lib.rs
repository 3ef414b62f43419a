mod analysis;
mod dashboard;
mod dataset;
mod error;
mod filtering;
mod types;
mod weather;

pub use dashboard::*;
pub use error::DashboardError;

pub use analysis::aggregate::{aggregate, aggregate_with, CityAnalysis};
pub use analysis::compare::{compare, compare_with};
pub use analysis::{AnalysisOptions, DEFAULT_ROLLING_WINDOW, DEFAULT_SIGMA};
pub use dataset::HistoricalDataset;
pub use filtering::TemperatureFrameExt;
pub use weather::client::{fetch_current_temperature, CurrentReading, WeatherClient, OPENWEATHER_URL};

pub use types::record::TemperatureRecord;
pub use types::season::{classify_season, current_season, ParseSeasonError, Season};
pub use types::stats::{DescriptiveStats, SeasonalStats, SeriesPoint};
pub use types::timestamp::IntoTimestamp;
pub use types::verdict::{AnomalyVerdict, VerdictStatus, NO_DATA_MESSAGE};

pub use analysis::error::AnalysisError;
pub use dataset::error::LoadError;
pub use weather::error::FetchError;
