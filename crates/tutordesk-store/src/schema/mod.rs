//! First-run schema creation
//!
//! The directory schema is created once, on first open, and recorded in
//! `schema_version` with a SHA-256 checksum of its SQL. Reopening a store
//! verifies the checksum and leaves the tables alone.

mod checksums;
mod embedded;
mod runner;

pub use embedded::DIRECTORY_SCHEMA_ID;
pub use runner::{ensure_schema, SchemaStatus};
