mod options;
mod pipeline;
mod report;

use clap::Parser;
use options::Options;
use pipeline::run;
use report::render_summary;
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse the request first so the verbosity is known before anything logs.
    let options = Options::parse();

    // The library only emits through the `log` facade; installing the logger
    // here keeps logging configuration out of the computation itself.
    // RUST_LOG, when set, takes precedence over -v.
    env_logger::Builder::new()
        .filter_level(options.log_level())
        .parse_default_env()
        .init();

    match try_main(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(options: &Options) -> Result<(), Box<dyn Error>> {
    let config = options.analysis_config()?;

    // Catalog lookup, moving-load sweep and reaction analysis, in that order.
    // Any invalid input stops the run before output is produced.
    let summary = run(options, &config)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", render_summary(&summary));
    }

    Ok(())
}
