#![warn(clippy::pedantic)]

use approx::assert_relative_eq;
use ndarray::array;
use movingload::{
    analyse_load_set, compute_reactions, governing_reactions, lookup, simulate, AnalysisConfig,
    AnalysisError, Beam, CatalogError, Error, MovingLoadSimulator, SimulationError, Vehicle,
};

#[derive(Debug, Clone, Copy)]
struct Crossing {
    span: f64,
    interval: f64,
}

impl Default for Crossing {
    fn default() -> Self {
        Self {
            span: 30.0,
            interval: 1.0,
        }
    }
}

fn cross(vehicle: &Vehicle, crossing: Crossing) -> movingload::SimulationData {
    simulate(crossing.span, crossing.interval, vehicle.axle_positions())
        .expect("crossing geometry is valid")
}

#[test]
fn tandem_on_a_short_beam() {
    let vehicle = lookup("lm1", 1.2).expect("LM1 exists");
    let data = cross(
        &vehicle,
        Crossing {
            span: 5.0,
            interval: 1.0,
        },
    );

    assert_eq!(
        data.sample_positions().to_vec(),
        vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]
    );
    assert_eq!(data.axle_locations().row(2).to_vec(), vec![2.0, 0.8]);
    assert_eq!(data.shear_ordinates().row(2).to_vec(), vec![0.6, 0.84]);
}

#[test]
fn grid_ends_on_the_far_support() {
    for (span, interval) in [(30.0, 1.0), (30.0, 0.7), (12.5, 2.0), (7.3, 7.3)] {
        let beam = Beam::new(span, interval).expect("valid beam");
        let grid = beam.sample_positions();
        let expected = (span / interval - 1.0e-9).ceil() as usize + 1;
        assert_eq!(grid.len(), expected, "{span} / {interval}");
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[grid.len() - 1], span);
    }
}

#[test]
fn locations_follow_the_rounding_law() {
    let config = AnalysisConfig::default();
    let vehicle = lookup("sv196", 5.0).expect("SV196 exists");
    let data = cross(
        &vehicle,
        Crossing {
            span: 24.0,
            interval: 0.3,
        },
    );
    for ((sample, axle), location) in data.axle_locations().indexed_iter() {
        let expected =
            config.round(data.sample_positions()[sample] - vehicle.axle_positions()[axle]);
        assert_eq!(*location, expected);
    }
    assert!(data
        .shear_ordinates()
        .iter()
        .all(|ordinate| (0.0..=1.0).contains(ordinate)));
}

#[test]
fn ordinate_at_far_support_is_zero() {
    let data = simulate(30.0, 1.0, &[0.0]).expect("valid beam");
    let last = data.axle_locations().nrows() - 1;
    assert_eq!(data.axle_locations()[[last, 0]], 30.0);
    assert_eq!(data.shear_ordinates()[[last, 0]], 0.0);
}

#[test]
fn reaction_row_matches_hand_calculation() {
    let reactions =
        compute_reactions(&[300.0, 300.0], &array![[1.0, 0.96]]).expect("shapes agree");
    assert_relative_eq!(reactions[[0, 0]], 300.0);
    assert_relative_eq!(reactions[[0, 1]], 288.0, epsilon = 1.0e-9);
    assert_relative_eq!(reactions.row(0).sum(), 588.0, epsilon = 1.0e-9);
}

#[test]
fn heavier_special_vehicle_governs() {
    let config = AnalysisConfig::default();
    let crossing = Crossing {
        span: 40.0,
        interval: 0.2,
    };

    let sv80 = lookup("sv80", 1.2).expect("SV80 exists");
    let sv100 = lookup("sv100", 1.2).expect("SV100 exists");
    let light = analyse_load_set(&sv80, "NL", &cross(&sv80, crossing), &config)
        .expect("NL exists")
        .envelope;
    let heavy = analyse_load_set(&sv100, "NL", &cross(&sv100, crossing), &config)
        .expect("NL exists")
        .envelope;

    // Same layout, so the governing position is shared and the reaction scales with load.
    assert_eq!(light.sample_index, heavy.sample_index);
    assert_relative_eq!(
        heavy.max_reaction / light.max_reaction,
        165.0 / 130.0,
        epsilon = 1.0e-9
    );
    // Cannot exceed the full vehicle weight.
    assert!(heavy.max_reaction <= 6.0 * 165.0);
}

#[test]
fn longer_critical_gap_reduces_the_reaction() {
    let config = AnalysisConfig::default();
    let crossing = Crossing::default();
    let envelope = |distance: f64| {
        let vehicle = lookup("sv100", distance).expect("SV100 exists");
        let envelopes = governing_reactions(&vehicle, &cross(&vehicle, crossing), &config)
            .expect("valid sets");
        envelopes[0].max_reaction
    };
    assert!(envelope(9.0) < envelope(1.2));
}

#[test]
fn invalid_requests_fail_without_results() {
    assert_eq!(
        lookup("xyz", 1.2).map(|_| ()),
        Err(CatalogError::InvalidVehicleType {
            requested: "xyz".to_string()
        })
    );
    assert!(matches!(
        lookup("sv80", 3.0),
        Err(CatalogError::InvalidCriticalDistance { .. })
    ));
    assert_eq!(
        simulate(0.0, 1.0, &[0.0]).map(|_| ()),
        Err(SimulationError::InvalidBeamLength { length: 0.0 })
    );
    assert!(matches!(
        simulate(10.0, 12.0, &[0.0]),
        Err(SimulationError::InvalidSamplingInterval { .. })
    ));

    let vehicle = lookup("lm1", 1.2).expect("LM1 exists");
    let data = simulate(10.0, 1.0, &[0.0]).expect("valid beam");
    let error: Error = analyse_load_set(&vehicle, "NL1", &data, &AnalysisConfig::default())
        .expect_err("one-axle simulation for a tandem")
        .into();
    assert_eq!(
        error,
        Error::Analysis(AnalysisError::ShapeMismatch { loads: 2, axles: 1 })
    );
}

#[test]
fn simulation_is_repeatable() {
    let simulator = MovingLoadSimulator::default();
    let vehicle = lookup("sv196", 9.0).expect("SV196 exists");
    let first = simulator
        .simulate(50.0, 0.25, vehicle.axle_positions())
        .expect("valid beam");
    let second = simulator
        .simulate(50.0, 0.25, vehicle.axle_positions())
        .expect("valid beam");
    assert_eq!(first, second);
}
