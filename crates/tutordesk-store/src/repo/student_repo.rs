//! Student rows and the student joined view

use crate::errors::{from_rusqlite, Result};
use rusqlite::{Connection, OptionalExtension, Row};
use tutordesk_core::credentials::PasswordDigest;
use tutordesk_core::{ClassYearId, MajorId, NewStudent, Student, StudentId};

/// Joined view: reference ids resolved to class year and major name
pub(crate) const STUDENT_VIEW_SQL: &str = "SELECT s.student_id, s.name, s.age, cy.class_year, m.major
     FROM student s
     JOIN class_year cy ON cy.class_year_id = s.class_year_id
     JOIN major m ON m.major_id = s.major_id";

pub(crate) fn student_from_row(row: &Row<'_>) -> rusqlite::Result<Student> {
    Ok(Student {
        id: StudentId::new(row.get(0)?),
        name: row.get(1)?,
        age: row.get(2)?,
        class_year: row.get(3)?,
        major: row.get(4)?,
    })
}

pub struct StudentRepo;

impl StudentRepo {
    /// Insert a student row whose references have already been resolved
    pub fn insert(
        conn: &Connection,
        input: &NewStudent,
        digest: &PasswordDigest,
        class_year_id: ClassYearId,
        major_id: MajorId,
    ) -> Result<StudentId> {
        conn.execute(
            "INSERT INTO student (username, password, salt, name, age, class_year_id, major_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            rusqlite::params![
                input.username,
                digest.hash,
                digest.salt,
                input.name,
                input.age,
                class_year_id.get(),
                major_id.get(),
            ],
        )
        .map_err(from_rusqlite)?;

        let id = StudentId::new(conn.last_insert_rowid());
        tracing::debug!(student_id = id.get(), "student row inserted");
        Ok(id)
    }

    pub fn get(conn: &Connection, id: StudentId) -> Result<Option<Student>> {
        let sql = format!("{} WHERE s.student_id = ?1", STUDENT_VIEW_SQL);
        conn.query_row(&sql, [id.get()], student_from_row)
            .optional()
            .map_err(from_rusqlite)
    }

    /// Every student, in id order
    pub fn list(conn: &Connection) -> Result<Vec<Student>> {
        let sql = format!("{} ORDER BY s.student_id", STUDENT_VIEW_SQL);
        let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;
        let students = stmt
            .query_map([], student_from_row)
            .map_err(from_rusqlite)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(from_rusqlite)?;
        Ok(students)
    }

    /// Delete the row; returns whether a row was removed
    ///
    /// Hiring rows go with it through `ON DELETE CASCADE`.
    pub fn delete(conn: &Connection, id: StudentId) -> Result<bool> {
        let removed = conn
            .execute("DELETE FROM student WHERE student_id = ?1", [id.get()])
            .map_err(from_rusqlite)?;
        Ok(removed > 0)
    }

    pub fn exists(conn: &Connection, id: StudentId) -> Result<bool> {
        conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM student WHERE student_id = ?1)",
            [id.get()],
            |row| row.get(0),
        )
        .map_err(from_rusqlite)
    }

    /// Stored credentials for every student registered under `username`, oldest first
    pub fn credentials_by_username(
        conn: &Connection,
        username: &str,
    ) -> Result<Vec<(StudentId, PasswordDigest)>> {
        let mut stmt = conn
            .prepare(
                "SELECT student_id, password, salt FROM student
                 WHERE username = ?1 ORDER BY student_id",
            )
            .map_err(from_rusqlite)?;
        let rows = stmt
            .query_map([username], |row| {
                Ok((
                    StudentId::new(row.get(0)?),
                    PasswordDigest {
                        hash: row.get(1)?,
                        salt: row.get(2)?,
                    },
                ))
            })
            .map_err(from_rusqlite)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(from_rusqlite)?;
        Ok(rows)
    }
}
