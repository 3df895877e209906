//! Caller-side input rules
//!
//! The directory store trusts its inputs; request handlers run these checks
//! first and report failures as `InvalidInput`.

pub mod validation;

pub use validation::{validate_new_student, validate_new_tutor};
