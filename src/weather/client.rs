//! Blocking client for the OpenWeatherMap current-weather endpoint.

use crate::weather::error::FetchError;
use bon::bon;
use log::{info, warn};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

pub const OPENWEATHER_URL: &str = "http://api.openweathermap.org/data/2.5/weather";

/// A temperature reported by the weather API for a city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentReading {
    pub city: String,
    /// Degrees Celsius (`units=metric`).
    pub temperature: f64,
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    main: MainBlock,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
}

/// Issues current-weather requests. One GET per call, no retries or caching,
/// and the `reqwest` default timeout.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    base_url: String,
}

#[bon]
impl WeatherClient {
    /// Creates a client. `base_url` defaults to [`OPENWEATHER_URL`]; a
    /// preconfigured `reqwest` client (proxy, TLS, timeouts) can be supplied
    /// through `http_client`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seasonal_temps::WeatherClient;
    ///
    /// let client = WeatherClient::builder().build();
    /// assert_eq!(client.base_url(), "http://api.openweathermap.org/data/2.5/weather");
    ///
    /// let local = WeatherClient::builder()
    ///     .base_url("http://127.0.0.1:8080/weather".to_string())
    ///     .build();
    /// assert_eq!(local.base_url(), "http://127.0.0.1:8080/weather");
    /// ```
    #[builder]
    pub fn new(base_url: Option<String>, http_client: Option<Client>) -> Self {
        Self {
            http: http_client.unwrap_or_default(),
            base_url: base_url.unwrap_or_else(|| OPENWEATHER_URL.to_string()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the current temperature of `city` in degrees Celsius.
    ///
    /// # Errors
    ///
    /// * [`FetchError::InvalidApiKey`] when the API answers 401.
    /// * [`FetchError::HttpStatus`] for any other non-200 status.
    /// * [`FetchError::NetworkRequest`] when no response was received.
    /// * [`FetchError::MalformedResponse`] when a 200 body lacks `main.temp`.
    pub fn current_temperature(
        &self,
        city: &str,
        api_key: &str,
    ) -> Result<CurrentReading, FetchError> {
        info!("Requesting current temperature for '{}'", city);
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("q", city), ("units", "metric"), ("appid", api_key)])
            .send()
            .map_err(|e| FetchError::NetworkRequest(city.to_string(), e.without_url()))?;

        match response.status() {
            StatusCode::OK => {
                let body: CurrentWeatherResponse = response.json().map_err(|e| {
                    FetchError::MalformedResponse(city.to_string(), e.without_url())
                })?;
                Ok(CurrentReading {
                    city: city.to_string(),
                    temperature: body.main.temp,
                })
            }
            StatusCode::UNAUTHORIZED => {
                warn!("Weather API rejected the API key");
                Err(FetchError::InvalidApiKey)
            }
            status => {
                warn!("Weather API returned {} for '{}'", status, city);
                Err(FetchError::HttpStatus {
                    city: city.to_string(),
                    status: status.as_u16(),
                })
            }
        }
    }
}

impl Default for WeatherClient {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Fetches the current temperature of `city` from OpenWeatherMap with a
/// default client.
pub fn fetch_current_temperature(city: &str, api_key: &str) -> Result<CurrentReading, FetchError> {
    WeatherClient::default().current_temperature(city, api_key)
}
