//! Sweep a vehicle across a simply supported beam.
//!
//! The vehicle's first axle is placed at each point of a regular sample grid
//! in turn. For every placement the absolute location of each axle is
//! recorded, giving a samples × axles matrix, and the matrix is mapped through
//! an [`InfluenceLine`] to obtain the ordinate under each axle.

use ndarray::{Array1, Array2};
use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::errors::{ConfigError, SimulationError};
use crate::influence::{InfluenceLine, NearSupportShear};

/// Relative tolerance used to decide whether the span is a whole number of intervals.
const WHOLE_STEP_TOLERANCE: f64 = 1.0e-9;

/// Largest sample grid a beam may produce.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Span and sampling step of a simply supported beam, in metres.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Beam {
    /// Span between the supports in metres.
    length: f64,
    /// Distance between sample points in metres.
    sampling_interval: f64,
}

impl Beam {
    /// Validate and create a beam.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidBeamLength`] when `length` is not a positive
    /// finite number and [`SimulationError::InvalidSamplingInterval`] when
    /// `sampling_interval` is not positive and finite, exceeds `length`, or would
    /// give a grid of more than [`MAX_SAMPLES`] points.
    ///
    /// # Examples
    /// ```
    /// use movingload::{Beam, SimulationError};
    ///
    /// assert!(Beam::new(30.0, 1.0).is_ok());
    /// assert_eq!(
    ///     Beam::new(0.0, 1.0),
    ///     Err(SimulationError::InvalidBeamLength { length: 0.0 })
    /// );
    /// ```
    pub fn new(length: f64, sampling_interval: f64) -> Result<Self, SimulationError> {
        if !(length.is_finite() && length > 0.0) {
            return Err(SimulationError::InvalidBeamLength { length });
        }
        if !(sampling_interval.is_finite() && sampling_interval > 0.0)
            || sampling_interval > length
        {
            return Err(SimulationError::InvalidSamplingInterval {
                interval: sampling_interval,
                beam_length: length,
            });
        }
        let beam = Self {
            length,
            sampling_interval,
        };
        let steps = length / sampling_interval;
        if !steps.is_finite() || steps > (MAX_SAMPLES - 1) as f64 {
            return Err(SimulationError::InvalidSamplingInterval {
                interval: sampling_interval,
                beam_length: length,
            });
        }
        Ok(beam)
    }

    /// Span in metres.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Distance between consecutive sample points in metres.
    #[must_use]
    pub fn sampling_interval(&self) -> f64 {
        self.sampling_interval
    }

    /// Number of points in the sample grid, `ceil(L / I) + 1`.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        let steps = self.length / self.sampling_interval;
        let whole = steps.round();
        let steps = if (steps - whole).abs() <= WHOLE_STEP_TOLERANCE * whole.max(1.0) {
            whole
        } else {
            steps.ceil()
        };
        // Bounded by `MAX_SAMPLES` in `Beam::new`.
        (steps as usize).saturating_add(1)
    }

    /// Sample points from the near support to the far support inclusive.
    ///
    /// Points are spaced by the sampling interval. When the span is not a whole
    /// number of intervals the last step is shorter, so the grid always ends
    /// exactly at the far support and never beyond it.
    ///
    /// # Examples
    /// ```
    /// use movingload::Beam;
    ///
    /// let beam = Beam::new(5.5, 1.0).unwrap();
    /// let grid = beam.sample_positions();
    /// assert_eq!(grid.len(), 7);
    /// assert_eq!(grid[5], 5.0);
    /// assert_eq!(grid[6], 5.5);
    /// ```
    #[must_use]
    pub fn sample_positions(&self) -> Array1<f64> {
        let count = self.sample_count();
        Array1::from_shape_fn(count, |index| {
            if index + 1 == count {
                self.length
            } else {
                index as f64 * self.sampling_interval
            }
        })
    }
}

/// Result of sweeping one vehicle across one beam.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimulationData {
    /// Beam the vehicle crossed.
    beam: Beam,
    /// Axle offsets from the first axle, in metres.
    axle_positions: Vec<f64>,
    /// First-axle position for each row.
    sample_positions: Array1<f64>,
    /// Rounded axle locations, samples × axles.
    axle_locations: Array2<f64>,
    /// Near-support shear ordinates, samples × axles.
    shear_ordinates: Array2<f64>,
}

impl SimulationData {
    /// Beam the vehicle crossed.
    #[must_use]
    pub fn beam(&self) -> &Beam {
        &self.beam
    }

    /// Axle offsets from the vehicle's first axle, as supplied.
    #[must_use]
    pub fn axle_positions(&self) -> &[f64] {
        &self.axle_positions
    }

    /// Position of the first axle for each row of the matrices.
    #[must_use]
    pub fn sample_positions(&self) -> &Array1<f64> {
        &self.sample_positions
    }

    /// Samples × axles matrix of axle locations measured from the near support.
    #[must_use]
    pub fn axle_locations(&self) -> &Array2<f64> {
        &self.axle_locations
    }

    /// Samples × axles matrix of near-support shear ordinates.
    #[must_use]
    pub fn shear_ordinates(&self) -> &Array2<f64> {
        &self.shear_ordinates
    }

    /// Map the stored axle locations through another influence line.
    #[must_use]
    pub fn ordinates_for<L: InfluenceLine>(&self, line: &L, config: &AnalysisConfig) -> Array2<f64> {
        influence_ordinates(line, &self.axle_locations, self.beam.length, config)
    }
}

/// Moving-load simulator configured for one run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MovingLoadSimulator {
    /// Validated rounding and diagnostic options.
    config: AnalysisConfig,
}

impl MovingLoadSimulator {
    /// Create a simulator using `config` for rounding and diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `config` fails [`AnalysisConfig::validate`].
    pub fn new(config: AnalysisConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Options used by this simulator.
    #[must_use]
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Sweep a vehicle with the given axle offsets across a beam.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError`] when the beam length or sampling interval is invalid.
    pub fn simulate(
        &self,
        beam_length: f64,
        sampling_interval: f64,
        axle_positions: &[f64],
    ) -> Result<SimulationData, SimulationError> {
        let beam = Beam::new(beam_length, sampling_interval)?;
        Ok(self.run(beam, axle_positions))
    }

    /// Sweep a vehicle across an already validated beam.
    #[must_use]
    pub fn run(&self, beam: Beam, axle_positions: &[f64]) -> SimulationData {
        let sample_positions = beam.sample_positions();
        log::debug!(
            "sweeping {} axles across {} m beam at {} m steps ({} samples)",
            axle_positions.len(),
            beam.length,
            beam.sampling_interval,
            sample_positions.len()
        );

        let axle_locations = axle_locations(&sample_positions, axle_positions, &self.config);
        let shear_ordinates =
            influence_ordinates(&NearSupportShear, &axle_locations, beam.length, &self.config);

        if self.config.log_matrices {
            log::trace!("axle locations:\n{axle_locations}");
            log::trace!("shear ordinates:\n{shear_ordinates}");
        }

        SimulationData {
            beam,
            axle_positions: axle_positions.to_vec(),
            sample_positions,
            axle_locations,
            shear_ordinates,
        }
    }
}

/// Location of every axle for every sample, `round(p - a)`.
///
/// Row `i` holds the axle locations while the first axle sits at
/// `sample_positions[i]`; column `j` follows axle `j`. Negative values belong
/// to axles that have not yet reached the beam.
#[must_use]
pub fn axle_locations(
    sample_positions: &Array1<f64>,
    axle_positions: &[f64],
    config: &AnalysisConfig,
) -> Array2<f64> {
    Array2::from_shape_fn(
        (sample_positions.len(), axle_positions.len()),
        |(sample, axle)| config.round(sample_positions[sample] - axle_positions[axle]),
    )
}

/// Ordinate of `line` under every entry of an axle-location matrix.
#[must_use]
pub fn influence_ordinates<L: InfluenceLine>(
    line: &L,
    axle_locations: &Array2<f64>,
    beam_length: f64,
    config: &AnalysisConfig,
) -> Array2<f64> {
    axle_locations.mapv(|location| line.ordinate(location, beam_length, config))
}

/// Sweep a vehicle across a beam with the default configuration.
///
/// # Errors
///
/// Returns [`SimulationError`] when the beam length or sampling interval is invalid.
///
/// # Examples
/// ```
/// use movingload::simulate;
///
/// let data = simulate(5.0, 1.0, &[0.0, 1.2]).expect("valid beam");
/// assert_eq!(data.axle_locations().dim(), (6, 2));
/// assert_eq!(data.axle_locations().row(2).to_vec(), vec![2.0, 0.8]);
/// ```
pub fn simulate(
    beam_length: f64,
    sampling_interval: f64,
    axle_positions: &[f64],
) -> Result<SimulationData, SimulationError> {
    MovingLoadSimulator::default().simulate(beam_length, sampling_interval, axle_positions)
}
