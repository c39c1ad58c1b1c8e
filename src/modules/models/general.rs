use std::path::{Path, PathBuf};

use diesel::{Connection, SqliteConnection};
use log::info;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use snafu::ResultExt;

use crate::errors::{ConnectSnafu, CustomResult, ResolvePathSnafu};

/// characters sqlite would otherwise read as part of the uri syntax
const URI_PATH: &AsciiSet = &CONTROLS.add(b'%').add(b'?').add(b'#');

/// drop the `\\?\` prefix `canonicalize` puts in front of windows paths
fn strip_verbatim_prefix(path: &str) -> String {
    if let Some(share) = path.strip_prefix(r"\\?\UNC\") {
        return format!(r"\\{share}");
    }

    path.strip_prefix(r"\\?\").unwrap_or(path).to_string()
}

/// # build a read-only sqlite uri
///
/// ## Arguments
/// * `path` - an absolute path
/// * `windows` - whether `\` separates the components of `path`
///
/// ## Returns
/// * `String` - a `file:` uri with the path percent encoded
fn database_uri(path: &str, windows: bool) -> String {
    let mut path = if windows {
        strip_verbatim_prefix(path).replace('\\', "/")
    } else {
        path.to_string()
    };

    // `C:/races` has to become `/C:/races`
    if !path.starts_with('/') {
        path.insert(0, '/');
    }

    format!("file://{}?mode=ro", utf8_percent_encode(&path, URI_PATH))
}

/// # establish a connection
/// open a sqlite database read-only. the path has to exist, a mistyped path is
/// an error instead of a new empty database
///
/// ## Arguments
/// * `role` - which database this is, used in errors
/// * `path` - the path of the database file
///
/// ## Returns
/// * `(SqliteConnection, PathBuf)` - the connection and the resolved path
pub fn establish_connection(role: &'static str, path: &Path) -> CustomResult<(SqliteConnection, PathBuf)> {
    let resolved = path
        .canonicalize()
        .context(ResolvePathSnafu { role, path })?;

    let database_url = database_uri(&resolved.to_string_lossy(), cfg!(windows));
    let connection = SqliteConnection::establish(&database_url)
        .context(ConnectSnafu { role, path: &resolved })?;

    Ok((connection, resolved))
}

/// the two databases read for one report
pub struct DataSources {
    pub results: SqliteConnection,
    pub competitors: SqliteConnection,
}

impl DataSources {
    /// # open both databases
    ///
    /// ## Arguments
    /// * `heats_db` - the database holding the heat tables
    /// * `competitors_db` - the database holding the competitors table
    pub fn open(heats_db: &Path, competitors_db: &Path) -> CustomResult<DataSources> {
        let (results, results_path) = establish_connection("heats", heats_db)?;
        info!(target: "data_sources", "Connected to the SQLite database at {}", results_path.display());

        let (competitors, competitors_path) = establish_connection("competitors", competitors_db)?;
        info!(
            target: "data_sources",
            "Connected to the competitors SQLite database at {}",
            competitors_path.display()
        );

        Ok(DataSources { results, competitors })
    }

    /// release both connections. sqlite closes a connection when it is dropped
    pub fn close(self) {
        let DataSources { results, competitors } = self;

        drop(results);
        info!(target: "data_sources", "Main database connection closed.");

        drop(competitors);
        info!(target: "data_sources", "Competitors database connection closed.");
    }
}
