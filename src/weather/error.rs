use thiserror::Error;

/// Failure to obtain a current reading.
///
/// Wrapped `reqwest` errors are stripped of their URL, which carries the API key.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Weather request for '{city}' failed with HTTP status {status}")]
    HttpStatus { city: String, status: u16 },

    #[error("Network request failed for '{0}'")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("Weather response for '{0}' did not contain a temperature")]
    MalformedResponse(String, #[source] reqwest::Error),
}

impl FetchError {
    /// The HTTP status carried by the error, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::InvalidApiKey => Some(401),
            FetchError::HttpStatus { status, .. } => Some(*status),
            FetchError::NetworkRequest(..) | FetchError::MalformedResponse(..) => None,
        }
    }
}
