//! The student/tutor join table
//!
//! A pair is inserted with `INSERT OR IGNORE` against `UNIQUE (student_id,
//! tutor_id)` and removed with a plain `DELETE`, so repeated or concurrent
//! hire/unhire calls converge on the same state.

use crate::errors::{from_rusqlite, is_foreign_key_violation, Result};
use crate::repo::student_repo::{student_from_row, STUDENT_VIEW_SQL};
use crate::repo::tutor_repo::{tutor_from_row, TUTOR_VIEW_SQL};
use rusqlite::{Connection, OptionalExtension};
use tutordesk_core::errors::{DirectoryError, ExError};
use tutordesk_core::{Hiring, HiringId, Student, StudentId, Tutor, TutorId};

pub struct HiringRepo;

impl HiringRepo {
    /// Link the pair; returns `true` if a new row was written
    ///
    /// # Errors
    /// `NotFound` when the student or the tutor does not exist.
    pub fn insert(conn: &Connection, student_id: StudentId, tutor_id: TutorId) -> Result<bool> {
        let inserted = conn
            .execute(
                "INSERT OR IGNORE INTO student_tutor (student_id, tutor_id) VALUES (?1, ?2)",
                [student_id.get(), tutor_id.get()],
            )
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    ExError::from(DirectoryError::HiringPartyMissing {
                        student_id: student_id.get(),
                        tutor_id: tutor_id.get(),
                    })
                } else {
                    from_rusqlite(e)
                }
            })?;
        Ok(inserted == 1)
    }

    /// Unlink the pair; returns `true` if a row was removed
    pub fn delete(conn: &Connection, student_id: StudentId, tutor_id: TutorId) -> Result<bool> {
        let removed = conn
            .execute(
                "DELETE FROM student_tutor WHERE student_id = ?1 AND tutor_id = ?2",
                [student_id.get(), tutor_id.get()],
            )
            .map_err(from_rusqlite)?;
        Ok(removed > 0)
    }

    pub fn exists(conn: &Connection, student_id: StudentId, tutor_id: TutorId) -> Result<bool> {
        conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM student_tutor WHERE student_id = ?1 AND tutor_id = ?2)",
            [student_id.get(), tutor_id.get()],
            |row| row.get(0),
        )
        .map_err(from_rusqlite)
    }

    pub fn get(
        conn: &Connection,
        student_id: StudentId,
        tutor_id: TutorId,
    ) -> Result<Option<Hiring>> {
        conn.query_row(
            "SELECT student_tutor_id, student_id, tutor_id FROM student_tutor
             WHERE student_id = ?1 AND tutor_id = ?2",
            [student_id.get(), tutor_id.get()],
            |row| {
                Ok(Hiring {
                    id: HiringId::new(row.get(0)?),
                    student_id: StudentId::new(row.get(1)?),
                    tutor_id: TutorId::new(row.get(2)?),
                })
            },
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Tutors hired by the student, in the order they were hired
    pub fn tutors_for_student(conn: &Connection, student_id: StudentId) -> Result<Vec<Tutor>> {
        let sql = format!(
            "{} JOIN student_tutor st ON st.tutor_id = t.tutor_id
             WHERE st.student_id = ?1 ORDER BY st.student_tutor_id",
            TUTOR_VIEW_SQL
        );
        let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;
        let tutors = stmt
            .query_map([student_id.get()], tutor_from_row)
            .map_err(from_rusqlite)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(from_rusqlite)?;
        Ok(tutors)
    }

    /// Students who hired the tutor, in the order they hired
    pub fn students_for_tutor(conn: &Connection, tutor_id: TutorId) -> Result<Vec<Student>> {
        let sql = format!(
            "{} JOIN student_tutor st ON st.student_id = s.student_id
             WHERE st.tutor_id = ?1 ORDER BY st.student_tutor_id",
            STUDENT_VIEW_SQL
        );
        let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;
        let students = stmt
            .query_map([tutor_id.get()], student_from_row)
            .map_err(from_rusqlite)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(from_rusqlite)?;
        Ok(students)
    }
}
