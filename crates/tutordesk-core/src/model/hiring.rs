use serde::{Deserialize, Serialize};

use super::ids::{HiringId, StudentId, TutorId};

/// One row of the student/tutor join table
///
/// At most one row exists per (student, tutor) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hiring {
    #[serde(rename = "student_tutor_id")]
    pub id: HiringId,
    pub student_id: StudentId,
    pub tutor_id: TutorId,
}
