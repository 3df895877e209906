use serde::{Deserialize, Serialize};
use tutordesk_core_types::Sensitive;

use super::ids::TutorId;

/// Joined view of a tutor; `area_of_expertise` is a major name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tutor {
    #[serde(rename = "tutor_id")]
    pub id: TutorId,
    pub name: String,
    pub age: i64,
    pub area_of_expertise: String,
    pub cost: i64,
}

/// Registration input for a tutor
#[derive(Debug, Clone, Deserialize)]
pub struct NewTutor {
    pub username: String,
    pub password: Sensitive<String>,
    pub name: String,
    pub age: i64,
    pub area_of_expertise: String,
    pub cost: i64,
}

impl NewTutor {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<Sensitive<String>>,
        name: impl Into<String>,
        age: i64,
        area_of_expertise: impl Into<String>,
        cost: i64,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            name: name.into(),
            age,
            area_of_expertise: area_of_expertise.into(),
            cost,
        }
    }
}
