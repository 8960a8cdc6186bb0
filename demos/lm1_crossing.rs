use movingload::{analyse_load_set, lookup, AnalysisConfig, MovingLoadSimulator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Look up the LM1 tandem and sweep it across a 30 m span in 0.5 m steps
    let config = AnalysisConfig::default();
    let vehicle = lookup("lm1", 1.2)?;
    let simulation = MovingLoadSimulator::new(config)?.simulate(30.0, 0.5, vehicle.axle_positions())?;

    // Print the first few rows of the influence-ordinate matrix
    for (position, row) in simulation
        .sample_positions()
        .iter()
        .zip(simulation.shear_ordinates().rows())
        .take(6)
    {
        println!("first axle at {position:>5.2} m: ordinates {row}");
    }

    // Reduce the NL1 axle loads to the governing support reaction
    let analysis = analyse_load_set(&vehicle, "NL1", &simulation, &config)?;
    println!(
        "Max reaction {:.1} kN with the first axle at {:.2} m",
        analysis.envelope.max_reaction, analysis.envelope.position
    );

    Ok(())
}
