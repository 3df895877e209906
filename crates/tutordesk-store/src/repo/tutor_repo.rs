//! Tutor rows and the tutor joined view

use crate::errors::{from_rusqlite, Result};
use rusqlite::{Connection, OptionalExtension, Row};
use tutordesk_core::credentials::PasswordDigest;
use tutordesk_core::{MajorId, NewTutor, Tutor, TutorId};

/// Joined view: area of expertise resolved to its major name
pub(crate) const TUTOR_VIEW_SQL: &str = "SELECT t.tutor_id, t.name, t.age, m.major, t.cost
     FROM tutor t
     JOIN major m ON m.major_id = t.area_expertise_id";

pub(crate) fn tutor_from_row(row: &Row<'_>) -> rusqlite::Result<Tutor> {
    Ok(Tutor {
        id: TutorId::new(row.get(0)?),
        name: row.get(1)?,
        age: row.get(2)?,
        area_of_expertise: row.get(3)?,
        cost: row.get(4)?,
    })
}

pub struct TutorRepo;

impl TutorRepo {
    /// Insert a tutor row whose area of expertise has already been resolved
    pub fn insert(
        conn: &Connection,
        input: &NewTutor,
        digest: &PasswordDigest,
        area_of_expertise_id: MajorId,
    ) -> Result<TutorId> {
        conn.execute(
            "INSERT INTO tutor (username, password, salt, name, age, area_expertise_id, cost)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            rusqlite::params![
                input.username,
                digest.hash,
                digest.salt,
                input.name,
                input.age,
                area_of_expertise_id.get(),
                input.cost,
            ],
        )
        .map_err(from_rusqlite)?;

        let id = TutorId::new(conn.last_insert_rowid());
        tracing::debug!(tutor_id = id.get(), "tutor row inserted");
        Ok(id)
    }

    pub fn get(conn: &Connection, id: TutorId) -> Result<Option<Tutor>> {
        let sql = format!("{} WHERE t.tutor_id = ?1", TUTOR_VIEW_SQL);
        conn.query_row(&sql, [id.get()], tutor_from_row)
            .optional()
            .map_err(from_rusqlite)
    }

    /// Every tutor, in id order
    pub fn list(conn: &Connection) -> Result<Vec<Tutor>> {
        let sql = format!("{} ORDER BY t.tutor_id", TUTOR_VIEW_SQL);
        let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;
        let tutors = stmt
            .query_map([], tutor_from_row)
            .map_err(from_rusqlite)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(from_rusqlite)?;
        Ok(tutors)
    }

    pub fn delete(conn: &Connection, id: TutorId) -> Result<bool> {
        let removed = conn
            .execute("DELETE FROM tutor WHERE tutor_id = ?1", [id.get()])
            .map_err(from_rusqlite)?;
        Ok(removed > 0)
    }

    pub fn exists(conn: &Connection, id: TutorId) -> Result<bool> {
        conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM tutor WHERE tutor_id = ?1)",
            [id.get()],
            |row| row.get(0),
        )
        .map_err(from_rusqlite)
    }

    pub fn credentials_by_username(
        conn: &Connection,
        username: &str,
    ) -> Result<Vec<(TutorId, PasswordDigest)>> {
        let mut stmt = conn
            .prepare(
                "SELECT tutor_id, password, salt FROM tutor
                 WHERE username = ?1 ORDER BY tutor_id",
            )
            .map_err(from_rusqlite)?;
        let rows = stmt
            .query_map([username], |row| {
                Ok((
                    TutorId::new(row.get(0)?),
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
