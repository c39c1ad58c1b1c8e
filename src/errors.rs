use std::path::PathBuf;

use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Could not resolve {} database path {}: {}", role, path.display(), source))]
    ResolvePath {
        role: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Error connecting to {} SQLite database at {}: {}", role, path.display(), source))]
    Connect {
        role: &'static str,
        path: PathBuf,
        source: diesel::ConnectionError,
    },

    #[snafu(display("Error querying the {} table: {}", table, source))]
    Query {
        table: &'static str,
        source: diesel::result::Error,
    },

    #[snafu(display("Error compiling the report template: {}", source))]
    Template { source: handlebars::TemplateError },

    #[snafu(display("Error rendering the report: {}", source))]
    Render { source: handlebars::RenderError },

    #[snafu(display("Error writing HTML file {}: {}", path.display(), source))]
    WriteReport {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Error configuring object store for bucket {}: {}", bucket, source))]
    StoreConfig {
        bucket: String,
        source: object_store::Error,
    },

    #[snafu(display("Error uploading {}: {}", key, source))]
    Upload {
        key: String,
        source: object_store::Error,
    },
}

pub type CustomResult<T> = Result<T, Error>;
