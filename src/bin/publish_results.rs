use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use ski_results::modules::config::{PublishConfig, REPORT_FILE_NAME};
use ski_results::modules::helpers::logging::setup_logging;
use ski_results::modules::models::general::DataSources;
use ski_results::modules::publisher::ObjectStorePublisher;
use ski_results::modules::report::build_report;

/// Render the results of a two heat race and upload the report to an s3 bucket
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// sqlite database holding TTIMEINFOS_HEAT1 and TTIMEINFOS_HEAT2
    heats_db: PathBuf,

    /// sqlite database holding TCOMPETITORS
    competitors_db: PathBuf,

    /// bucket to upload the report to
    bucket: String,

    /// object key of the report
    #[arg(long, default_value = REPORT_FILE_NAME)]
    key: String,

    /// region of the bucket, taken from the environment when omitted
    #[arg(long)]
    region: Option<String>,

    /// custom endpoint for s3 compatible stores
    #[arg(long)]
    endpoint: Option<String>,
}

impl Args {
    fn publish_config(&self) -> PublishConfig {
        let mut config = PublishConfig::new(self.bucket.clone());
        config.key = self.key.clone();
        config.region = self.region.clone();
        config.endpoint = self.endpoint.clone();
        config
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(err) = setup_logging() {
        eprintln!("Failed to setup logging: {}", err);
        return ExitCode::FAILURE;
    }

    let publisher = match ObjectStorePublisher::from_config(&args.publish_config()) {
        Ok(publisher) => publisher,
        Err(err) => {
            error!(target: "publish_results", "{}", err);
            return ExitCode::FAILURE;
        }
    };

    let mut sources = match DataSources::open(&args.heats_db, &args.competitors_db) {
        Ok(sources) => sources,
        Err(err) => {
            error!(target: "publish_results", "{}", err);
            return ExitCode::FAILURE;
        }
    };

    let report = build_report(&mut sources);
    sources.close();

    let document = match report {
        Ok(document) => document,
        Err(err) => {
            error!(target: "publish_results", "{}", err);
            return ExitCode::FAILURE;
        }
    };
    info!(target: "publish_results", "{}", document);

    match publisher.publish(&document).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(target: "publish_results", "{}", err);
            ExitCode::FAILURE
        }
    }
}
