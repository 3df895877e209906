use serde::{Deserialize, Serialize};
use tutordesk_core_types::Sensitive;

use super::ids::StudentId;

/// Joined view of a student
///
/// Reference columns are resolved to their values (class year, major name);
/// credentials never leave the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "student_id")]
    pub id: StudentId,
    pub name: String,
    pub age: i64,
    pub class_year: i64,
    pub major: String,
}

/// Registration input for a student
#[derive(Debug, Clone, Deserialize)]
pub struct NewStudent {
    pub username: String,
    pub password: Sensitive<String>,
    pub name: String,
    pub age: i64,
    pub class_year: i64,
    pub major: String,
}

impl NewStudent {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<Sensitive<String>>,
        name: impl Into<String>,
        age: i64,
        class_year: i64,
        major: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            name: name.into(),
            age,
            class_year,
            major: major.into(),
        }
    }
}
