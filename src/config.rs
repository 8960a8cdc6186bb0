//! Run-time options passed explicitly into every computation.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Largest number of decimal places that still changes an `f64` value.
pub const MAX_DECIMAL_PLACES: u32 = 15;

/// Options controlling numeric precision and diagnostics for one run.
///
/// # Examples
/// ```
/// use movingload::AnalysisConfig;
///
/// let config = AnalysisConfig::default();
/// assert_eq!(config.decimal_places, 2);
/// assert_eq!(config.round(0.965_1), 0.97);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Number of decimal places kept for axle locations and influence ordinates,
    /// at most [`MAX_DECIMAL_PLACES`].
    pub decimal_places: u32,
    /// Dump complete matrices at `trace` level while computing.
    pub log_matrices: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            decimal_places: 2,
            log_matrices: false,
        }
    }
}

impl AnalysisConfig {
    /// Check the options before they are used for a run.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDecimalPlaces`] when
    /// [`decimal_places`](Self::decimal_places) exceeds [`MAX_DECIMAL_PLACES`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(ConfigError::InvalidDecimalPlaces {
                places: self.decimal_places,
                max: MAX_DECIMAL_PLACES,
            });
        }
        Ok(())
    }

    /// Round `value` half-to-even at [`decimal_places`](Self::decimal_places).
    #[must_use]
    pub fn round(&self, value: f64) -> f64 {
        round_to(value, self.decimal_places)
    }
}

/// Round `value` half-to-even at `places` decimal places.
///
/// `places` is at most [`MAX_DECIMAL_PLACES`] for validated configurations.
pub(crate) fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10_f64.powi(places.min(MAX_DECIMAL_PLACES) as i32);
    (value * scale).round_ties_even() / scale
}
