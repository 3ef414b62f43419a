//! Session-level entry point tying the dataset, the analyses and the live
//! weather lookup together.

use crate::analysis::aggregate::{aggregate_with, CityAnalysis};
use crate::analysis::compare::compare_with;
use crate::analysis::AnalysisOptions;
use crate::dataset::HistoricalDataset;
use crate::error::DashboardError;
use crate::types::season::{current_season, Season};
use crate::types::verdict::AnomalyVerdict;
use crate::weather::client::{CurrentReading, WeatherClient};
use bon::bon;
use log::info;
use serde::Serialize;
use std::path::Path;

/// The live reading for a city together with its seasonal verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentConditions {
    pub reading: CurrentReading,
    /// Season the reading was compared against.
    pub season: Season,
    pub verdict: AnomalyVerdict,
}

/// One user session: an uploaded dataset plus the settings used to analyse it.
///
/// Each user action maps to a method call that recomputes its result from
/// the owned dataset; nothing is cached between calls.
///
/// # Examples
///
/// ```
/// use seasonal_temps::Dashboard;
///
/// let csv = "city,timestamp,temperature\nBerlin,2023-01-15,-2.0\nBerlin,2023-07-15,24.0\n";
/// let dashboard = Dashboard::from_csv_bytes(csv.as_bytes())?;
///
/// assert_eq!(dashboard.cities(), vec!["Berlin"]);
/// let analysis = dashboard.analyze("Berlin")?;
/// assert_eq!(analysis.seasonal.len(), 2);
/// # Ok::<(), seasonal_temps::DashboardError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: HistoricalDataset,
    weather: WeatherClient,
    options: AnalysisOptions,
}

#[bon]
impl Dashboard {
    /// Creates a session over `dataset`.
    ///
    /// Optional settings:
    /// *   `.weather_client(WeatherClient)`: client for live readings (default: OpenWeatherMap).
    /// *   `.options(AnalysisOptions)`: rolling window and band width (default: 30 rows, 2 sigma).
    #[builder]
    pub fn new(
        dataset: HistoricalDataset,
        weather_client: Option<WeatherClient>,
        options: Option<AnalysisOptions>,
    ) -> Self {
        Self {
            dataset,
            weather: weather_client.unwrap_or_default(),
            options: options.unwrap_or_default(),
        }
    }

    /// Starts a session from a CSV file with default settings.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, DashboardError> {
        let dataset = HistoricalDataset::from_csv_path(path)?;
        Ok(Self::builder().dataset(dataset).build())
    }

    /// Starts a session from uploaded CSV content with default settings.
    pub fn from_csv_bytes(bytes: &[u8]) -> Result<Self, DashboardError> {
        let dataset = HistoricalDataset::from_csv_bytes(bytes)?;
        Ok(Self::builder().dataset(dataset).build())
    }

    pub fn dataset(&self) -> &HistoricalDataset {
        &self.dataset
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Cities available for selection, in order of first appearance.
    pub fn cities(&self) -> Vec<&str> {
        self.dataset.cities()
    }

    /// Statistics, chart series and seasonal profile for `city`.
    pub fn analyze(&self, city: &str) -> Result<CityAnalysis, DashboardError> {
        Ok(aggregate_with(&self.dataset, city, &self.options)?)
    }

    /// Compares a given temperature with the history of `city` in `season`.
    pub fn compare(
        &self,
        city: &str,
        temperature: f64,
        season: Season,
    ) -> Result<AnomalyVerdict, DashboardError> {
        Ok(compare_with(
            city,
            temperature,
            season,
            &self.dataset,
            &self.options,
        )?)
    }

    /// Fetches the live temperature for a city and compares it with the
    /// historical distribution of a season.
    ///
    /// This method starts a builder. You must provide:
    /// *   `.api_key(&str)`: the OpenWeatherMap API key.
    ///
    /// You can optionally specify:
    /// *   `.season(Season)`: season to compare against (default: the current local season).
    ///
    /// Finally, call `.call()` to perform the request.
    ///
    /// # Errors
    ///
    /// *   [`DashboardError::MissingApiKey`]: the key is empty.
    /// *   [`DashboardError::Fetch`]: the request failed; an invalid key surfaces as
    ///     [`FetchError::InvalidApiKey`](crate::FetchError::InvalidApiKey).
    /// *   [`DashboardError::Analysis`]: computing the historical bounds failed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use seasonal_temps::{Dashboard, DashboardError};
    ///
    /// # fn main() -> Result<(), DashboardError> {
    /// let dashboard = Dashboard::from_csv_path("temperature_data.csv")?;
    /// let conditions = dashboard
    ///     .current_conditions("Berlin")
    ///     .api_key("your-openweathermap-key")
    ///     .call()?;
    /// println!("{}", conditions.verdict.message);
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = current_conditions)]
    #[doc(hidden)]
    pub fn build_current_conditions(
        &self,
        #[builder(start_fn)] city: &str,
        api_key: &str,
        season: Option<Season>,
    ) -> Result<CurrentConditions, DashboardError> {
        if api_key.trim().is_empty() {
            return Err(DashboardError::MissingApiKey);
        }
        let reading = self.weather.current_temperature(city, api_key.trim())?;
        let season = season.unwrap_or_else(current_season);
        let verdict = self.compare(city, reading.temperature, season)?;
        info!(
            "Current temperature in '{}' is {}°C ({}, {})",
            city, reading.temperature, season, verdict.status
        );
        Ok(CurrentConditions {
            reading,
            season,
            verdict,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::verdict::VerdictStatus;
    use crate::weather::fake_server::{client_for, serve_once};
    use crate::FetchError;

    const HISTORY: &str = "\
city,timestamp,temperature
Berlin,2021-01-01,0
Berlin,2021-01-02,2
Berlin,2021-01-03,4
Berlin,2021-01-04,6
Berlin,2021-01-05,8
Berlin,2021-07-01,21
Berlin,2021-07-02,23
Cairo,2021-01-01,18
";

    fn dashboard_with(url: String) -> Dashboard {
        let dataset = HistoricalDataset::from_csv_bytes(HISTORY.as_bytes()).unwrap();
        Dashboard::builder()
            .dataset(dataset)
            .weather_client(client_for(url))
            .build()
    }

    #[test]
    fn test_session_lists_cities_and_analyzes() -> Result<(), Box<dyn std::error::Error>> {
        let dashboard = Dashboard::from_csv_bytes(HISTORY.as_bytes())?;
        assert_eq!(dashboard.cities(), vec!["Berlin", "Cairo"]);

        let analysis = dashboard.analyze("Berlin")?;
        assert_eq!(analysis.summary.count, 7);
        assert_eq!(analysis.seasonal.len(), 2);
        assert_eq!(dashboard.options(), &AnalysisOptions::default());
        Ok(())
    }

    #[test]
    fn test_current_conditions_normal() -> Result<(), Box<dyn std::error::Error>> {
        let (url, server) = serve_once("200 OK", r#"{"main":{"temp":4.0}}"#);
        let conditions = dashboard_with(url)
            .current_conditions("Berlin")
            .api_key("key")
            .season(Season::Winter)
            .call()?;
        server.join().unwrap();

        assert_eq!(conditions.reading.temperature, 4.0);
        assert_eq!(conditions.season, Season::Winter);
        assert_eq!(conditions.verdict.status, VerdictStatus::Normal);
        Ok(())
    }

    #[test]
    fn test_current_conditions_anomalous() -> Result<(), Box<dyn std::error::Error>> {
        let (url, server) = serve_once("200 OK", r#"{"main":{"temp":20.0}}"#);
        let conditions = dashboard_with(url)
            .current_conditions("Berlin")
            .api_key("key")
            .season(Season::Winter)
            .call()?;
        server.join().unwrap();
        assert_eq!(conditions.verdict.status, VerdictStatus::Anomalous);
        Ok(())
    }

    #[test]
    fn test_current_conditions_defaults_to_current_season() -> Result<(), Box<dyn std::error::Error>>
    {
        let (url, server) = serve_once("200 OK", r#"{"main":{"temp":10.0}}"#);
        let conditions = dashboard_with(url)
            .current_conditions("Cairo")
            .api_key("key")
            .call()?;
        server.join().unwrap();
        assert_eq!(conditions.season, current_season());
        Ok(())
    }

    #[test]
    fn test_invalid_key_is_surfaced() {
        let (url, server) = serve_once("401 Unauthorized", "{}");
        let err = dashboard_with(url)
            .current_conditions("Berlin")
            .api_key("bad")
            .call()
            .unwrap_err();
        server.join().unwrap();
        assert!(matches!(err, DashboardError::Fetch(FetchError::InvalidApiKey)));
        assert!(err.needs_api_key());
    }

    #[test]
    fn test_empty_key_is_rejected_before_request() {
        let dashboard = dashboard_with("http://127.0.0.1:9/unused".to_string());
        let err = dashboard
            .current_conditions("Berlin")
            .api_key("   ")
            .call()
            .unwrap_err();
        assert!(matches!(err, DashboardError::MissingApiKey));
        assert!(err.needs_api_key());
    }

    #[test]
    fn test_other_status_is_not_a_key_problem() {
        let (url, server) = serve_once("503 Service Unavailable", "{}");
        let err = dashboard_with(url)
            .current_conditions("Berlin")
            .api_key("key")
            .call()
            .unwrap_err();
        server.join().unwrap();
        assert!(matches!(
            err,
            DashboardError::Fetch(FetchError::HttpStatus { status: 503, .. })
        ));
        assert!(!err.needs_api_key());
    }
}
