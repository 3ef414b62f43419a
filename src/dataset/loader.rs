use crate::dataset::error::LoadError;
use crate::dataset::{CITY_COLUMN, TEMPERATURE_COLUMN, TIMESTAMP_COLUMN};
use crate::types::record::TemperatureRecord;
use crate::types::timestamp::IntoTimestamp;
use log::{debug, info, warn};
use polars::prelude::*;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Reads a CSV file with a header row and validates it into typed records.
pub(crate) fn load_csv_path(path: &Path) -> Result<Vec<TemperatureRecord>, LoadError> {
    let df = read_csv(path)?;
    info!(
        "Read {} rows and {} columns from {:?}",
        df.height(),
        df.width(),
        path
    );
    records_from_frame(&df)
}

/// Same as [`load_csv_path`] for in-memory CSV content, e.g. an uploaded file.
pub(crate) fn load_csv_bytes(bytes: &[u8]) -> Result<Vec<TemperatureRecord>, LoadError> {
    let mut temp_file = NamedTempFile::new().map_err(LoadError::SpoolIo)?;
    temp_file.write_all(bytes).map_err(LoadError::SpoolIo)?;
    temp_file.flush().map_err(LoadError::SpoolIo)?;
    debug!(
        "Spooled {} bytes of CSV data to {:?}",
        bytes.len(),
        temp_file.path()
    );
    load_csv_path(temp_file.path())
}

/// Every column is read as a string; values are parsed per row afterwards so
/// failures can name the offending row.
fn read_csv(path: &Path) -> Result<DataFrame, LoadError> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| LoadError::CsvRead(path.to_path_buf(), e))?
        .finish()
        .map_err(|e| LoadError::CsvRead(path.to_path_buf(), e))
}

fn string_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a StringChunked, LoadError> {
    df.column(name)
        .map_err(|_| LoadError::MissingColumn(name.to_string()))?
        .str()
        .map_err(LoadError::DataFrameProcessing)
}

fn invalid(idx: usize, column: &str, value: Option<&str>) -> LoadError {
    let err = LoadError::InvalidValue {
        row: idx + 1,
        column: column.to_string(),
        value: value.map(str::to_string),
    };
    warn!("{}", err);
    err
}

fn records_from_frame(df: &DataFrame) -> Result<Vec<TemperatureRecord>, LoadError> {
    let cities = string_column(df, CITY_COLUMN)?;
    let timestamps = string_column(df, TIMESTAMP_COLUMN)?;
    let temperatures = string_column(df, TEMPERATURE_COLUMN)?;

    let mut records = Vec::with_capacity(df.height());
    for (idx, ((city, timestamp), temperature)) in cities
        .into_iter()
        .zip(timestamps.into_iter())
        .zip(temperatures.into_iter())
        .enumerate()
    {
        let city = city
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| invalid(idx, CITY_COLUMN, city))?;
        let temperature_value = temperature
            .and_then(|t| t.trim().parse::<f64>().ok())
            .filter(|t| t.is_finite())
            .ok_or_else(|| invalid(idx, TEMPERATURE_COLUMN, temperature))?;
        let record = timestamp
            .and_then(|ts| TemperatureRecord::new(city, ts, temperature_value))
            .ok_or_else(|| invalid(idx, TIMESTAMP_COLUMN, timestamp))?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Season;
    use chrono::NaiveDate;

    const SAMPLE: &str = "\
city,timestamp,temperature,source
Berlin,2010-01-01,-1.5,station
Berlin,2010-07-01 12:00:00,24,station
Cairo,2010-04-15T06:30:00,21.25,model
";

    #[test]
    fn test_load_bytes_parses_typed_records() -> Result<(), Box<dyn std::error::Error>> {
        let records = load_csv_bytes(SAMPLE.as_bytes())?;
        assert_eq!(records.len(), 3);

        assert_eq!(records[0].city(), "Berlin");
        assert_eq!(records[0].temperature(), -1.5);
        assert_eq!(records[0].season(), Season::Winter);
        assert_eq!(
            records[0].timestamp().date(),
            NaiveDate::from_ymd_opt(2010, 1, 1).unwrap()
        );

        assert_eq!(records[1].temperature(), 24.0);
        assert_eq!(records[1].season(), Season::Summer);

        assert_eq!(records[2].city(), "Cairo");
        assert_eq!(records[2].season(), Season::Spring);
        Ok(())
    }

    #[test]
    fn test_load_path_with_reordered_columns() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "temperature,city,timestamp")?;
        writeln!(file, "3.5,Oslo,2015-10-05")?;
        file.flush()?;

        let records = load_csv_path(file.path())?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].city(), "Oslo");
        assert_eq!(records[0].season(), Season::Autumn);
        Ok(())
    }

    #[test]
    fn test_missing_column_is_reported() {
        let csv = "city,timestamp\nBerlin,2010-01-01\n";
        let err = load_csv_bytes(csv.as_bytes()).unwrap_err();
        assert!(
            matches!(err, LoadError::MissingColumn(ref name) if name == "temperature"),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn test_unparseable_temperature_names_row() {
        let csv = "city,timestamp,temperature\nBerlin,2010-01-01,1.0\nBerlin,2010-01-02,warm\n";
        match load_csv_bytes(csv.as_bytes()).unwrap_err() {
            LoadError::InvalidValue { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "temperature");
                assert_eq!(value.as_deref(), Some("warm"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unparseable_timestamp_names_row() {
        let csv = "city,timestamp,temperature\nBerlin,someday,1.0\n";
        match load_csv_bytes(csv.as_bytes()).unwrap_err() {
            LoadError::InvalidValue { row, column, .. } => {
                assert_eq!(row, 1);
                assert_eq!(column, "timestamp");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_temperature_cell_is_invalid() {
        let csv = "city,timestamp,temperature\nBerlin,2010-01-01,\n";
        let err = load_csv_bytes(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidValue { row: 1, .. }));
    }
}
