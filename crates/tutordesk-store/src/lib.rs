//! TutorDesk Store - SQLite persistence for the directory
//!
//! Provides:
//! - Connection opening and pragma configuration (foreign keys, WAL)
//! - First-run schema creation with a recorded checksum
//! - Row-level repositories for reference tables, students, tutors and hirings
//!
//! Repositories take `&Connection`, so they work equally on a plain
//! connection or inside a `Transaction`.

pub mod db;
pub mod errors;
pub mod repo;
pub mod schema;

pub use errors::Result;
