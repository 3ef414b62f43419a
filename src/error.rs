use crate::analysis::error::AnalysisError;
use crate::dataset::error::LoadError;
use crate::weather::error::FetchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("An API key is required to fetch the current temperature")]
    MissingApiKey,
}

impl DashboardError {
    /// True when the user should be asked for a different API key.
    pub fn needs_api_key(&self) -> bool {
        matches!(
            self,
            DashboardError::MissingApiKey | DashboardError::Fetch(FetchError::InvalidApiKey)
        )
    }
}
