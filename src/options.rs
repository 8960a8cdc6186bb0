use std::error::Error;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;
use movingload::AnalysisConfig;

/// Command-line options for one moving-load run.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "movingload",
    version,
    about = "Support reactions for a vehicle crossing a simply supported beam",
    allow_negative_numbers = true
)]
pub struct Options {
    /// Vehicle type: LM1, LM2, SV80, SV100 or SV196 (any case).
    #[arg(short = 't', long)]
    pub vehicle: String,
    /// Critical distance in metres for special vehicles (1.2, 5.0 or 9.0).
    #[arg(short, long, default_value_t = 1.2)]
    pub critical_distance: f64,
    /// Beam span in metres.
    #[arg(short, long)]
    pub span: f64,
    /// Distance in metres between sampled positions of the first axle.
    #[arg(short, long, default_value_t = 1.0)]
    pub interval: f64,
    /// Only analyse this axle-load set (all sets when omitted).
    #[arg(short, long)]
    pub load_set: Option<String>,
    /// Print the whole run as JSON instead of a summary.
    #[arg(long)]
    pub json: bool,
    /// JSON file holding an analysis configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Decimal places for axle locations and ordinates (overrides the config file).
    #[arg(long)]
    pub decimal_places: Option<u32>,
    /// Dump full matrices at trace level.
    #[arg(long)]
    pub log_matrices: bool,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Options {
    /// Log level selected by the verbosity count.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Configuration from the optional file with command-line overrides applied.
    pub fn analysis_config(&self) -> Result<AnalysisConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
            None => AnalysisConfig::default(),
        };
        if let Some(places) = self.decimal_places {
            config.decimal_places = places;
        }
        if self.log_matrices {
            config.log_matrices = true;
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Options {
        Options::try_parse_from(std::iter::once("movingload").chain(args.iter().copied()))
            .expect("arguments parse")
    }

    #[test]
    fn defaults_match_the_common_case() {
        let options = parse(&["--vehicle", "lm1", "--span", "30"]);
        assert_eq!(options.critical_distance, 1.2);
        assert_eq!(options.interval, 1.0);
        assert_eq!(options.log_level(), LevelFilter::Warn);
        assert_eq!(
            options.analysis_config().expect("default config"),
            AnalysisConfig::default()
        );
    }

    #[test]
    fn flags_override_configuration() {
        let options = parse(&[
            "-t",
            "sv80",
            "-s",
            "20",
            "--decimal-places",
            "3",
            "--log-matrices",
            "-vv",
        ]);
        let config = options.analysis_config().expect("config builds");
        assert_eq!(config.decimal_places, 3);
        assert!(config.log_matrices);
        assert_eq!(options.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn excessive_precision_is_rejected() {
        let options = parse(&["-t", "lm1", "-s", "30", "--decimal-places", "400"]);
        let error = options
            .analysis_config()
            .expect_err("400 places rejected");
        assert_eq!(
            error.to_string(),
            "decimal places must be at most 15 (received 400)"
        );
    }

    #[test]
    fn negative_spans_reach_the_library() {
        let options = parse(&["-t", "lm1", "-s", "-5"]);
        assert_eq!(options.span, -5.0);
    }
}
