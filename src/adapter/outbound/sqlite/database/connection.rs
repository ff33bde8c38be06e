//! Database connection management using Diesel ORM.
//!
//! Connections are handed out by an r2d2 pool and returned to it when the
//! guard drops, so every operation holds a connection only for its own
//! duration.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::SqliteConnection;

use crate::error::{Error, Result};

/// Type alias for a SQLite connection pool.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Pool sizing and per-connection settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolOptions {
    pub max_size: u32,
    /// How long SQLite waits on a locked database before failing a query.
    pub busy_timeout: Duration,
    /// How long a checkout waits for a free connection.
    pub connection_timeout: Duration,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            max_size: 5,
            busy_timeout: Duration::from_millis(5000),
            connection_timeout: Duration::from_secs(30),
        }
    }
}

/// Applies pragmas to every connection as the pool opens it.
#[derive(Debug, Clone, Copy)]
struct SqlitePragmas {
    busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(
        &self,
        conn: &mut SqliteConnection,
    ) -> std::result::Result<(), diesel::r2d2::Error> {
        configure_sqlite_connection(conn, self.busy_timeout)
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Configure SQLite connection pragmas.
///
/// Enables foreign key enforcement and sets the busy timeout.
///
/// # Errors
/// Returns an error if a pragma fails to apply.
pub fn configure_sqlite_connection(
    conn: &mut SqliteConnection,
    busy_timeout: Duration,
) -> std::result::Result<(), diesel::result::Error> {
    conn.batch_execute(&format!(
        "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = {};",
        busy_timeout.as_millis()
    ))
}

/// Create a connection pool for the given database URL.
///
/// # Errors
/// Returns an error if the pool cannot be created.
pub fn create_pool(database_url: &str, options: PoolOptions) -> Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .max_size(options.max_size)
        .connection_timeout(options.connection_timeout)
        .connection_customizer(Box::new(SqlitePragmas {
            busy_timeout: options.busy_timeout,
        }))
        .build(manager)
        .map_err(|e| Error::Connection(e.to_string()))
}
