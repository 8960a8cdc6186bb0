use movingload::{governing_reactions, lookup, AnalysisConfig, CriticalDistance, MovingLoadSimulator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AnalysisConfig::default();
    let simulator = MovingLoadSimulator::new(config)?;

    // Compare every special vehicle at every permitted critical distance on a 25 m span
    for vehicle_type in ["SV80", "SV100", "SV196"] {
        for distance in CriticalDistance::ALL {
            let vehicle = lookup(vehicle_type, distance.metres())?;
            let simulation = simulator.simulate(25.0, 0.25, vehicle.axle_positions())?;
            for envelope in governing_reactions(&vehicle, &simulation, &config)? {
                println!(
                    "{:<10} c = {:>3.1} m  {:<3} {:>8.1} kN at {:>5.2} m",
                    vehicle.designation(),
                    distance.metres(),
                    envelope.load_set,
                    envelope.max_reaction,
                    envelope.position
                );
            }
        }
    }

    Ok(())
}
