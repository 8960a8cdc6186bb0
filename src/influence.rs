//! Influence lines for a simply supported beam.
//!
//! An influence line gives a response quantity per unit load placed at a
//! location along the span. Only support shear and reactions are provided;
//! bending moment would be another implementor of [`InfluenceLine`].

use crate::config::AnalysisConfig;

/// Response per unit load at a location on a simply supported beam.
pub trait InfluenceLine {
    /// Unrounded value of the line's formula for a unit load at `location`
    /// (metres from the near support) on a span of `beam_length` metres.
    fn raw_ordinate(&self, location: f64, beam_length: f64) -> f64;

    /// Ordinate rounded at the configured precision.
    ///
    /// Rounded values outside `[0, 1]` belong to loads that are off the span
    /// and are reported as exactly zero.
    fn ordinate(&self, location: f64, beam_length: f64, config: &AnalysisConfig) -> f64 {
        let rounded = config.round(self.raw_ordinate(location, beam_length));
        if rounded > 0.0 && rounded <= 1.0 {
            rounded
        } else {
            0.0
        }
    }
}

/// Shear at, and reaction of, the support at the start of the span: `(L - x) / L`.
///
/// # Examples
/// ```
/// use movingload::{AnalysisConfig, InfluenceLine, NearSupportShear};
///
/// let config = AnalysisConfig::default();
/// assert_eq!(NearSupportShear.ordinate(1.2, 30.0, &config), 0.96);
/// assert_eq!(NearSupportShear.ordinate(30.0, 30.0, &config), 0.0);
/// assert_eq!(NearSupportShear.ordinate(-1.2, 30.0, &config), 0.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NearSupportShear;

impl InfluenceLine for NearSupportShear {
    fn raw_ordinate(&self, location: f64, beam_length: f64) -> f64 {
        (beam_length - location) / beam_length
    }
}

/// Reaction of the support at the end of the span: `x / L`.
///
/// Together with [`NearSupportShear`] it sums to one for a load on the span.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FarSupportReaction;

impl InfluenceLine for FarSupportReaction {
    fn raw_ordinate(&self, location: f64, beam_length: f64) -> f64 {
        location / beam_length
    }
}
