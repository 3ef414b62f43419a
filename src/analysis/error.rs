use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Rolling window must cover at least one row")]
    InvalidRollingWindow,

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),

    #[error("Unexpected data state, city {city}: {message}")]
    UnexpectedData { message: String, city: String },
}
