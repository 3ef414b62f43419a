pub(crate) mod aggregate;
pub(crate) mod compare;
mod describe;
pub(crate) mod error;

use bon::Builder;

pub const DEFAULT_ROLLING_WINDOW: usize = 30;
pub const DEFAULT_SIGMA: f64 = 2.0;

/// Tunables shared by the aggregator and the comparator.
///
/// # Examples
///
/// ```
/// use seasonal_temps::AnalysisOptions;
///
/// let defaults = AnalysisOptions::default();
/// assert_eq!(defaults.rolling_window, 30);
/// assert_eq!(defaults.sigma, 2.0);
///
/// let weekly = AnalysisOptions::builder().rolling_window(7).build();
/// assert_eq!(weekly.sigma, 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Builder)]
pub struct AnalysisOptions {
    /// Number of consecutive rows averaged by the rolling mean.
    #[builder(default = DEFAULT_ROLLING_WINDOW)]
    pub rolling_window: usize,
    /// Half-width of the normal band, in standard deviations.
    #[builder(default = DEFAULT_SIGMA)]
    pub sigma: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}
