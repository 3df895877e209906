mod hiring;
mod ids;
mod outcome;
mod reference;
mod student;
mod tutor;

pub use hiring::Hiring;
pub use ids::{ClassYearId, HiringId, MajorId, StudentId, TutorId};
pub use outcome::{AuthOutcome, DeleteOutcome, HireOutcome, UnhireOutcome};
pub use reference::{ClassYear, Major};
pub use student::{NewStudent, Student};
pub use tutor::{NewTutor, Tutor};
