use serde::{Deserialize, Serialize};

use super::ids::{ClassYearId, MajorId};

/// A field of study, shared by student majors and tutor areas of expertise
///
/// Rows are deduplicated on `name` and never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Major {
    #[serde(rename = "major_id")]
    pub id: MajorId,
    #[serde(rename = "major")]
    pub name: String,
}

/// A graduating class year, deduplicated on `year`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassYear {
    #[serde(rename = "class_year_id")]
    pub id: ClassYearId,
    #[serde(rename = "class_year")]
    pub year: i64,
}
