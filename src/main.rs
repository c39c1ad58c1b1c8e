use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use ski_results::modules::config::REPORT_FILE_NAME;
use ski_results::modules::helpers::logging::setup_logging;
use ski_results::modules::models::general::DataSources;
use ski_results::modules::publisher::LocalFilePublisher;
use ski_results::modules::report::build_report;

/// Render the results of a two heat race into a static html report
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// sqlite database holding TTIMEINFOS_HEAT1 and TTIMEINFOS_HEAT2
    heats_db: PathBuf,

    /// sqlite database holding TCOMPETITORS
    competitors_db: PathBuf,

    /// where to write the report
    #[arg(long, default_value = REPORT_FILE_NAME)]
    output: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(err) = setup_logging() {
        eprintln!("Failed to setup logging: {}", err);
        return ExitCode::FAILURE;
    }

    let mut sources = match DataSources::open(&args.heats_db, &args.competitors_db) {
        Ok(sources) => sources,
        Err(err) => {
            error!(target: "ski_results", "{}", err);
            return ExitCode::FAILURE;
        }
    };

    let outcome = build_report(&mut sources)
        .and_then(|document| LocalFilePublisher::new(&args.output).publish(&document));

    // the connections are released whether or not the report was written
    sources.close();

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(target: "ski_results", "{}", err);
            ExitCode::FAILURE
        }
    }
}
