//! Repository layer mapping directory records to SQLite rows
//!
//! Each repository is a unit struct of associated functions over
//! `&Connection`. Callers that need atomicity pass a `Transaction`, which
//! derefs to `Connection`.

pub mod hiring_repo;
pub mod reference_repo;
pub mod student_repo;
pub mod tutor_repo;

pub use hiring_repo::HiringRepo;
pub use reference_repo::ReferenceRepo;
pub use student_repo::StudentRepo;
pub use tutor_repo::TutorRepo;
