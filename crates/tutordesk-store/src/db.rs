//! Database connection management

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

/// Open (creating if needed) a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Apply the connection settings every directory handle relies on
///
/// - `foreign_keys = ON` so references and cascades are enforced
/// - `journal_mode = WAL` for concurrent readers (in-memory databases stay `memory`)
/// - `synchronous = NORMAL`
/// - a busy timeout so contending writers wait instead of failing at once
pub fn configure(conn: &Connection, busy_timeout: Duration) -> Result<()> {
    // Set first so the journal-mode switch below also waits on contention
    conn.busy_timeout(busy_timeout).map_err(from_rusqlite)?;

    conn.pragma_update(None, "foreign_keys", true)
        .map_err(from_rusqlite)?;

    let journal_mode: String = conn
        .pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))
        .map_err(from_rusqlite)?;
    tracing::debug!(journal_mode = %journal_mode, "journal mode set");

    conn.pragma_update(None, "synchronous", "NORMAL")
        .map_err(from_rusqlite)?;

    Ok(())
}
