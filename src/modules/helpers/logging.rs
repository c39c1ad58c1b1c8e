use std::env;
use dotenvy::dotenv;
use fern::Dispatch;
use log::{Level, LevelFilter};

fn level_from_env() -> LevelFilter {
    let verbosity = env::var("LOGGING_LEVEL").unwrap_or_default();

    match verbosity.to_uppercase().as_str() {
        "OFF" => LevelFilter::Off,
        "ERROR" => LevelFilter::Error,
        "WARN" => LevelFilter::Warn,
        "DEBUG" => LevelFilter::Debug,
        "TRACE" => LevelFilter::Trace,
        // default to info
        _ => LevelFilter::Info,
    }
}

/// # setup logging
/// status lines go to stdout, warnings and errors to stderr.
/// the level is read from `LOGGING_LEVEL`, if `LOG_FILE` is set every record is appended there as well
pub fn setup_logging() -> Result<(), fern::InitError> {
    dotenv().ok();

    let mut base_config = Dispatch::new()
        .level(level_from_env())
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .chain(
            Dispatch::new()
                .filter(|metadata| metadata.level() > Level::Warn)
                .chain(std::io::stdout()),
        )
        .chain(
            Dispatch::new()
                .filter(|metadata| metadata.level() <= Level::Warn)
                .chain(std::io::stderr()),
        );

    if let Ok(path) = env::var("LOG_FILE") {
        base_config = base_config.chain(fern::log_file(path)?);
    }

    base_config.apply()?;

    Ok(())
}
