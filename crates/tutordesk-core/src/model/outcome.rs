//! Tagged results for directory operations
//!
//! These replace "None vs empty vs false" sentinels: each operation says
//! exactly which of its non-error outcomes happened.

use serde::Serialize;

/// Result of a username/password check
///
/// `Denied` is deliberately the same for an unknown username and a wrong
/// password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "id", rename_all = "snake_case")]
pub enum AuthOutcome<Id> {
    Granted(Id),
    Denied,
}

impl<Id: Copy> AuthOutcome<Id> {
    pub fn granted_id(&self) -> Option<Id> {
        match self {
            AuthOutcome::Granted(id) => Some(*id),
            AuthOutcome::Denied => None,
        }
    }

    pub fn is_granted(&self) -> bool {
        matches!(self, AuthOutcome::Granted(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HireOutcome {
    /// A new hiring row was written
    Hired,
    /// The pair was already hired; nothing changed
    AlreadyHired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnhireOutcome {
    Removed,
    /// No hiring row existed; nothing changed
    NotHired,
}

/// Result of deleting a student or tutor
///
/// Deleting an unknown id is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}
