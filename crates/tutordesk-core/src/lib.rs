//! TutorDesk Core - domain records, credentials and shared facilities
//!
//! This crate provides the pieces every other TutorDesk crate leans on:
//! - Typed records for majors, class years, students, tutors and hirings
//! - Operation outcome enums (authentication, hiring, deletion)
//! - Argon2 credential hashing and verification
//! - Caller-side input validation rules
//! - The canonical `ExError` facility and structured logging macros

pub mod credentials;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod rules;

// Logging macros expand to `$crate::schema::...`
pub use tutordesk_core_types::schema;

// Re-export commonly used types
pub use errors::{DirectoryError, ExError, ExErrorKind, Result};
pub use model::{
    AuthOutcome, ClassYear, ClassYearId, DeleteOutcome, Hiring, HiringId, HireOutcome, Major,
    MajorId, NewStudent, NewTutor, Student, StudentId, Tutor, TutorId, UnhireOutcome,
};
