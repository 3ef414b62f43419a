use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to spool uploaded CSV data to a temporary file")]
    SpoolIo(#[source] std::io::Error),

    #[error("Failed to read CSV data from '{0}'")]
    CsvRead(PathBuf, #[source] PolarsError),

    #[error("Required column '{0}' not found in CSV data")]
    MissingColumn(String),

    #[error("Invalid value {value:?} in column '{column}' at data row {row}")]
    InvalidValue {
        /// 1-based data row, not counting the header.
        row: usize,
        column: String,
        value: Option<String>,
    },

    #[error("Failed building the dataset DataFrame")]
    DataFrameProcessing(#[from] PolarsError),
}
