#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_doc_code_examples)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

pub mod analysis;
pub mod config;
pub mod errors;
pub mod influence;
pub mod simulator;
pub mod vehicle;

pub use analysis::{
    analyse_load_set, compute_reactions, governing_reactions, reaction_totals, LoadSetAnalysis,
    ReactionEnvelope, Reactions,
};
pub use config::{AnalysisConfig, MAX_DECIMAL_PLACES};
pub use errors::{AnalysisError, CatalogError, ConfigError, Error, SimulationError};
pub use influence::{FarSupportReaction, InfluenceLine, NearSupportShear};
pub use simulator::{
    axle_locations, influence_ordinates, simulate, Beam, MovingLoadSimulator, SimulationData,
    MAX_SAMPLES,
};
pub use vehicle::{lookup, Catalog, CriticalDistance, Units, Vehicle, VehicleType, UNITS};
