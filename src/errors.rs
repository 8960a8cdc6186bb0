//! Error types produced while looking up vehicles, sweeping them across a
//! beam and reducing the results to support reactions.

use thiserror::Error;

/// Error returned when a vehicle cannot be taken from the catalog.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CatalogError {
    /// Returned when the identifier does not name a catalogued vehicle.
    #[error(
        "'{requested}' is not a valid vehicle type (expected one of LM1, LM2, SV80, SV100, SV196)"
    )]
    InvalidVehicleType {
        /// Identifier as supplied by the caller.
        requested: String,
    },
    /// Returned when the critical distance is not one of the regulatory values.
    #[error("{requested} m is not a valid critical distance (permitted: {permitted:?} m)")]
    InvalidCriticalDistance {
        /// Rejected distance in metres.
        requested: f64,
        /// Distances the catalog accepts, in metres.
        permitted: Vec<f64>,
    },
}

/// Error returned when the beam geometry cannot be sampled.
///
/// Both variants are raised by [`Beam::new`](crate::Beam::new) before any
/// matrix is built, so a failed simulation never yields partial output.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum SimulationError {
    /// Returned when the span is zero, negative or not finite.
    #[error("beam length must be a positive finite number of metres (received {length})")]
    InvalidBeamLength {
        /// Rejected span in metres.
        length: f64,
    },
    /// Returned when the sampling step is zero, negative, not finite, longer than
    /// the span, or so short that the grid would exceed
    /// [`MAX_SAMPLES`](crate::simulator::MAX_SAMPLES) points.
    #[error(
        "sampling interval must be positive, no longer than the beam and give at most \
         {max_samples} samples (received {interval} m for a {beam_length} m beam)",
        max_samples = crate::simulator::MAX_SAMPLES
    )]
    InvalidSamplingInterval {
        /// Rejected interval in metres.
        interval: f64,
        /// Span the interval was checked against, in metres.
        beam_length: f64,
    },
}

/// Error returned when an [`AnalysisConfig`](crate::AnalysisConfig) cannot be used.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Returned when more decimal places are requested than an `f64` can hold.
    #[error("decimal places must be at most {max} (received {places})")]
    InvalidDecimalPlaces {
        /// Rejected number of places.
        places: u32,
        /// Largest accepted number of places.
        max: u32,
    },
}

/// Error returned when axle loads cannot be combined with influence ordinates.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AnalysisError {
    /// Returned when the number of axle loads differs from the number of ordinate columns.
    #[error("{loads} axle loads supplied for {axles} axles")]
    ShapeMismatch {
        /// Number of loads supplied.
        loads: usize,
        /// Number of axles (columns) in the ordinate matrix.
        axles: usize,
    },
    /// Returned when a vehicle has no load set with the requested name.
    #[error("vehicle has no axle-load set named '{name}'")]
    UnknownLoadSet {
        /// Name that was requested.
        name: String,
    },
    /// Returned when the configuration used to round ordinates is invalid.
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}

/// Any failure raised along the catalog, simulation and analysis pipeline.
///
/// # Examples
///
/// ```
/// use movingload::{lookup, Error};
///
/// let error: Error = lookup("xyz", 1.2).expect_err("unknown vehicle").into();
/// assert!(error.to_string().contains("xyz"));
/// ```
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    /// See [`ConfigError`].
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// See [`CatalogError`].
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// See [`SimulationError`].
    #[error(transparent)]
    Simulation(#[from] SimulationError),
    /// See [`AnalysisError`].
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}
