use movingload::{
    analyse_load_set, lookup, AnalysisConfig, Error, LoadSetAnalysis, MovingLoadSimulator,
    SimulationData, Vehicle,
};
use serde::Serialize;

use crate::options::Options;

/// Everything produced by one run, in the order it was computed.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Vehicle taken from the catalog.
    pub vehicle: Vehicle,
    /// Options used for rounding and diagnostics.
    pub config: AnalysisConfig,
    /// Axle locations and shear ordinates for the crossing.
    pub simulation: SimulationData,
    /// Reactions for each analysed load set.
    pub load_sets: Vec<LoadSetAnalysis>,
}

/// Look up the vehicle, sweep it across the beam and reduce to reactions.
///
/// Validation happens in the component that owns each input, so the first
/// invalid input aborts the run before anything is returned.
pub fn run(options: &Options, config: &AnalysisConfig) -> Result<RunSummary, Error> {
    let vehicle = lookup(&options.vehicle, options.critical_distance)?;
    let simulation = MovingLoadSimulator::new(*config)?.simulate(
        options.span,
        options.interval,
        vehicle.axle_positions(),
    )?;

    let names: Vec<String> = match &options.load_set {
        Some(name) => vec![name.clone()],
        None => vehicle.axle_loads().keys().map(|name| name.to_string()).collect(),
    };
    let load_sets = names
        .iter()
        .map(|name| analyse_load_set(&vehicle, name, &simulation, config))
        .collect::<Result<Vec<_>, _>>()?;

    log::info!(
        "analysed {} load set(s) for {} over {} samples",
        load_sets.len(),
        vehicle.designation(),
        simulation.sample_positions().len()
    );

    Ok(RunSummary {
        vehicle,
        config: *config,
        simulation,
        load_sets,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use clap::Parser;
    use movingload::{AnalysisError, CatalogError, ConfigError, SimulationError};

    use super::*;

    fn options(args: &[&str]) -> Options {
        Options::try_parse_from(std::iter::once("movingload").chain(args.iter().copied()))
            .expect("arguments parse")
    }

    #[test]
    fn runs_every_load_set_by_default() {
        let summary = run(
            &options(&["-t", "lm1", "-s", "30", "-i", "0.2"]),
            &AnalysisConfig::default(),
        )
        .expect("valid run");
        assert_eq!(summary.load_sets.len(), 4);
        assert_eq!(summary.simulation.shear_ordinates().dim(), (151, 2));
        assert_relative_eq!(
            summary.load_sets[0].envelope.max_reaction,
            588.0,
            epsilon = 1.0e-9
        );
    }

    #[test]
    fn single_load_set_can_be_selected() {
        let summary = run(
            &options(&["-t", "lm1", "-s", "30", "-l", "nl2"]),
            &AnalysisConfig::default(),
        )
        .expect("valid run");
        assert_eq!(summary.load_sets.len(), 1);
        assert_eq!(summary.load_sets[0].envelope.load_set, "NL2");
    }

    #[test]
    fn errors_identify_the_failing_component() {
        let config = AnalysisConfig::default();

        let error = run(&options(&["-t", "xyz", "-s", "30"]), &config).expect_err("bad vehicle");
        assert!(matches!(
            error,
            Error::Catalog(CatalogError::InvalidVehicleType { .. })
        ));

        let error = run(&options(&["-t", "lm1", "-s", "0"]), &config).expect_err("bad span");
        assert_eq!(
            error,
            Error::Simulation(SimulationError::InvalidBeamLength { length: 0.0 })
        );

        let error = run(&options(&["-t", "lm2", "-s", "30", "-l", "NL1"]), &config)
            .expect_err("LM2 has no NL1");
        assert!(matches!(
            error,
            Error::Analysis(AnalysisError::UnknownLoadSet { .. })
        ));

        let precise = AnalysisConfig {
            decimal_places: 400,
            ..AnalysisConfig::default()
        };
        let error = run(&options(&["-t", "lm1", "-s", "30"]), &precise)
            .expect_err("400 places rejected");
        assert!(matches!(
            error,
            Error::Config(ConfigError::InvalidDecimalPlaces { places: 400, .. })
        ));
    }
}
