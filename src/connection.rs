//! Connection acquisition and resource release.
//!
//! Every call to [`ConnectionProvider::get_connection`] opens a fresh physical
//! connection; nothing is pooled or cached. Resources are handed back through
//! [`close`], which logs a failed release and carries on so the remaining
//! resources still get released and the primary outcome is never replaced.

use rusqlite::{Connection, OpenFlags, Statement};
use tracing::{error, info, warn};

use crate::config::DbConfig;
use crate::error::{RepositoryError, Result};

/// Opens connections for a fixed [`DbConfig`].
#[derive(Debug, Clone)]
pub struct ConnectionProvider {
    config: DbConfig,
}

impl ConnectionProvider {
    pub fn new(config: DbConfig) -> Self {
        ConnectionProvider { config }
    }

    pub fn config(&self) -> &DbConfig {
        &self.config
    }

    /// Open a new connection. No retries.
    pub fn get_connection(&self) -> Result<Connection> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;

        match Connection::open_with_flags(&self.config.url, flags) {
            Ok(conn) => {
                info!(
                    url = %self.config.url,
                    user = %self.config.username,
                    "get connection"
                );
                Ok(conn)
            }
            Err(source) => {
                error!(url = %self.config.url, error = %source, "db error");
                Err(RepositoryError::Connection {
                    url: self.config.url.clone(),
                    source,
                })
            }
        }
    }
}

/// A resource that must be handed back explicitly.
///
/// Cursors (`rusqlite::Rows`) have no fallible close and are released by drop,
/// which the borrow checker orders before their statement.
pub trait Release {
    const RESOURCE: &'static str;

    fn release(self) -> std::result::Result<(), rusqlite::Error>;
}

impl Release for Statement<'_> {
    const RESOURCE: &'static str = "statement";

    fn release(self) -> std::result::Result<(), rusqlite::Error> {
        self.finalize()
    }
}

impl Release for Connection {
    const RESOURCE: &'static str = "connection";

    // On failure rusqlite hands the connection back; dropping it closes it anyway.
    fn release(self) -> std::result::Result<(), rusqlite::Error> {
        self.close().map_err(|(_conn, err)| err)
    }
}

/// Release `resource`, logging instead of returning any failure.
///
/// Returns whether the release succeeded.
pub fn close<R: Release>(resource: R) -> bool {
    match resource.release() {
        Ok(()) => true,
        Err(err) => {
            warn!(resource = R::RESOURCE, error = %err, "error");
            false
        }
    }
}
