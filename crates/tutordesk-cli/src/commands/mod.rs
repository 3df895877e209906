pub mod hire;
pub mod student;
pub mod tutor;

use serde::Serialize;
use tutordesk_core::errors::{DirectoryError, ExError, ExErrorKind};

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Print `value` to stdout as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> CommandResult {
    let text = serde_json::to_string_pretty(value).map_err(DirectoryError::from)?;
    println!("{}", text);
    Ok(())
}

/// The error a failed login reports, whichever part of the pair was wrong
pub fn login_denied(op: &str) -> ExError {
    ExError::new(ExErrorKind::Unauthorised)
        .with_op(op)
        .with_message("Invalid username or password")
}
