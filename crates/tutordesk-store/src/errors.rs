//! Error handling for tutordesk-store
//!
//! Wraps tutordesk-core ExError with store-specific helpers

use rusqlite::ErrorCode;
use tutordesk_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a schema setup error
pub fn schema_error(schema_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("ensure_schema")
        .with_message(format!("Schema {} failed: {}", schema_id, reason))
}

/// Create a checksum mismatch error for a schema recorded with different SQL
pub fn checksum_mismatch(schema_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::ConstraintViolation)
        .with_op("schema_checksum")
        .with_message(format!(
            "Checksum mismatch for schema {}: expected {}, got {}",
            schema_id, expected, actual
        ))
}

/// A row that must exist right after it was written could not be read back
pub fn missing_after_write(op: &str, entity: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::Internal)
        .with_op(op.to_string())
        .with_entity_id(entity)
        .with_message("Row not found immediately after write")
}

/// Create a database error from rusqlite::Error
///
/// Lock contention becomes `Concurrency`; everything else is `Persistence`.
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    let kind = match err.sqlite_error_code() {
        Some(ErrorCode::DatabaseBusy) | Some(ErrorCode::DatabaseLocked) => {
            ExErrorKind::Concurrency
        }
        _ => ExErrorKind::Persistence,
    };
    ExError::new(kind)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// True when `err` is a FOREIGN KEY constraint failure
pub fn is_foreign_key_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_sqlite_error_is_persistence() {
        let err = from_rusqlite(rusqlite::Error::QueryReturnedNoRows);
        assert_eq!(err.kind(), ExErrorKind::Persistence);
        assert_eq!(err.op(), Some("sqlite"));
    }

    #[test]
    fn test_busy_is_concurrency() {
        let busy = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_BUSY),
            None,
        );
        assert_eq!(from_rusqlite(busy).kind(), ExErrorKind::Concurrency);
    }

    #[test]
    fn test_foreign_key_detection() {
        let fk = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY),
            None,
        );
        assert!(is_foreign_key_violation(&fk));

        let unique = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE),
            None,
        );
        assert!(!is_foreign_key_violation(&unique));
    }
}
