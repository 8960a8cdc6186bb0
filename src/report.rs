use crate::pipeline::RunSummary;
use std::fmt::Write;

/// Render a textual summary of a moving-load run.
///
/// The report lists the vehicle geometry and sampling first, then the
/// governing near-support reaction of every analysed load set.
#[must_use]
pub fn render_summary(summary: &RunSummary) -> String {
    let mut output = String::new();
    let vehicle = &summary.vehicle;
    let beam = summary.simulation.beam();
    let units = vehicle.units();

    write!(&mut output, "Moving load analysis: {}", vehicle.designation())
        .expect("writing to string cannot fail");
    if let Some(distance) = vehicle.critical_distance() {
        write!(&mut output, " (critical distance {distance:.1} {})", units.linear)
            .expect("writing to string cannot fail");
    }
    writeln!(
        &mut output,
        " on a {:.3} {} simply supported span",
        beam.length(),
        units.linear
    )
    .expect("writing to string cannot fail");

    let positions: Vec<String> = vehicle
        .axle_positions()
        .iter()
        .map(|position| format!("{position:.2}"))
        .collect();
    writeln!(
        &mut output,
        "Axles: {} at [{}] {}, vehicle length {:.2} {}",
        vehicle.axle_count(),
        positions.join(", "),
        units.linear,
        vehicle.length(),
        units.linear
    )
    .expect("writing to string cannot fail");

    writeln!(
        &mut output,
        "Sample grid: {} positions at {:.3} {} intervals",
        summary.simulation.sample_positions().len(),
        beam.sampling_interval(),
        units.linear
    )
    .expect("writing to string cannot fail");

    output.push_str("Governing near-support reaction per load set:\n");
    for analysis in &summary.load_sets {
        let envelope = &analysis.envelope;
        writeln!(
            &mut output,
            "  {:<4} {:>10.2} {} with first axle at {:.2} {} (sample {})",
            envelope.load_set,
            envelope.max_reaction,
            units.point_loads,
            envelope.position,
            units.linear,
            envelope.sample_index
        )
        .expect("writing to string cannot fail");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;
    use crate::pipeline::run;
    use clap::Parser;
    use movingload::AnalysisConfig;

    fn summary(args: &[&str]) -> RunSummary {
        let options =
            Options::try_parse_from(std::iter::once("movingload").chain(args.iter().copied()))
                .expect("arguments parse");
        run(&options, &AnalysisConfig::default()).expect("valid run")
    }

    #[test]
    fn formats_human_readable_report() {
        let report = render_summary(&summary(&["-t", "lm1", "-s", "30", "-i", "0.2"]));
        assert!(report.contains("Moving load analysis: LM1 on a 30.000 m"));
        assert!(report.contains("Axles: 2 at [0.00, 1.20] m"));
        assert!(report.contains("Sample grid: 151 positions"));
        assert!(report.contains("  NL1 "));
        assert!(report.contains("588.00 kN with first axle at 1.20 m (sample 6)"));
    }

    #[test]
    fn special_vehicles_report_their_critical_distance() {
        let report = render_summary(&summary(&["-t", "sv80", "-c", "5", "-s", "30"]));
        assert!(report.contains("LM3_SV80 (critical distance 5.0 m)"));
        assert!(report.contains("vehicle length 9.80 m"));
    }
}
