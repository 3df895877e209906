//! Store-assigned primary keys
//!
//! Each table gets its own id type so a tutor id can never be passed where a
//! student id is expected. All of them wrap the SQLite `INTEGER PRIMARY KEY`.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! row_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

row_id!(
    /// Primary key of a `major` row
    MajorId
);
row_id!(
    /// Primary key of a `class_year` row
    ClassYearId
);
row_id!(
    /// Primary key of a `student` row
    StudentId
);
row_id!(
    /// Primary key of a `tutor` row
    TutorId
);
row_id!(
    /// Primary key of a `student_tutor` row
    HiringId
);
