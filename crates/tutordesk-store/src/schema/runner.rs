use crate::errors::{checksum_mismatch, from_rusqlite, schema_error, Result};
use crate::schema::checksums::compute_checksum;
use crate::schema::embedded::directory_schema;
use rusqlite::{Connection, OptionalExtension, TransactionBehavior};

/// What `ensure_schema` found on the connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaStatus {
    /// Tables were created by this call
    Created,
    /// Tables already existed and were left untouched
    Existing,
}

/// Create the directory tables unless they were created before
///
/// # Errors
/// `Persistence` if the SQL fails, `ConstraintViolation` if the store was
/// created from different schema SQL.
pub fn ensure_schema(conn: &mut Connection) -> Result<SchemaStatus> {
    create_schema_version_table(conn)?;

    let script = directory_schema();
    let checksum = compute_checksum(script.sql);

    if let Some(recorded) = recorded_checksum(conn, script.id)? {
        return existing(script.id, &recorded, &checksum);
    }

    // IMMEDIATE so two first-time openers cannot both run the script
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(from_rusqlite)?;

    if let Some(recorded) = recorded_checksum(&tx, script.id)? {
        return existing(script.id, &recorded, &checksum);
    }

    tx.execute_batch(script.sql)
        .map_err(|e| schema_error(script.id, &e.to_string()))?;

    let now = chrono::Utc::now().timestamp();
    tx.execute(
        "INSERT INTO schema_version (schema_id, applied_at, checksum) VALUES (?1, ?2, ?3)",
        rusqlite::params![script.id, now, checksum],
    )
    .map_err(from_rusqlite)?;

    tx.commit().map_err(from_rusqlite)?;

    tracing::debug!(schema_id = script.id, "schema created");
    Ok(SchemaStatus::Created)
}

fn recorded_checksum(conn: &Connection, schema_id: &str) -> Result<Option<String>> {
    conn.query_row(
        "SELECT checksum FROM schema_version WHERE schema_id = ?1",
        [schema_id],
        |row| row.get(0),
    )
    .optional()
    .map_err(from_rusqlite)
}

fn existing(schema_id: &str, recorded: &str, checksum: &str) -> Result<SchemaStatus> {
    if recorded != checksum {
        return Err(checksum_mismatch(schema_id, recorded, checksum));
    }
    tracing::debug!(schema_id = schema_id, "schema already present");
    Ok(SchemaStatus::Existing)
}

fn create_schema_version_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY,
            schema_id TEXT NOT NULL UNIQUE,
            applied_at INTEGER NOT NULL,
            checksum TEXT NOT NULL
        )",
        [],
    )
    .map_err(from_rusqlite)?;

    Ok(())
}
