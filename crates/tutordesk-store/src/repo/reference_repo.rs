//! Major and class-year reference tables
//!
//! Upserts are `INSERT OR IGNORE` against the natural-key UNIQUE constraint
//! followed by a lookup, so concurrent callers can never create duplicates.

use crate::errors::{from_rusqlite, missing_after_write, Result};
use rusqlite::{Connection, OptionalExtension};
use tutordesk_core::{ClassYear, ClassYearId, Major, MajorId};

pub struct ReferenceRepo;

impl ReferenceRepo {
    /// Insert the major if absent and return the stored row
    pub fn upsert_major(conn: &Connection, name: &str) -> Result<Major> {
        let inserted = conn
            .execute("INSERT OR IGNORE INTO major (major) VALUES (?1)", [name])
            .map_err(from_rusqlite)?;
        tracing::debug!(major = name, inserted = inserted == 1, "upsert major");

        Self::find_major_by_name(conn, name)?
            .ok_or_else(|| missing_after_write("upsert_major", name))
    }

    pub fn find_major_by_name(conn: &Connection, name: &str) -> Result<Option<Major>> {
        conn.query_row(
            "SELECT major_id, major FROM major WHERE major = ?1",
            [name],
            |row| {
                Ok(Major {
                    id: MajorId::new(row.get(0)?),
                    name: row.get(1)?,
                })
            },
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Insert the class year if absent and return the stored row
    pub fn upsert_class_year(conn: &Connection, year: i64) -> Result<ClassYear> {
        let inserted = conn
            .execute(
                "INSERT OR IGNORE INTO class_year (class_year) VALUES (?1)",
                [year],
            )
            .map_err(from_rusqlite)?;
        tracing::debug!(class_year = year, inserted = inserted == 1, "upsert class year");

        Self::find_class_year_by_year(conn, year)?
            .ok_or_else(|| missing_after_write("upsert_class_year", year.to_string()))
    }

    pub fn find_class_year_by_year(conn: &Connection, year: i64) -> Result<Option<ClassYear>> {
        conn.query_row(
            "SELECT class_year_id, class_year FROM class_year WHERE class_year = ?1",
            [year],
            |row| {
                Ok(ClassYear {
                    id: ClassYearId::new(row.get(0)?),
                    year: row.get(1)?,
                })
            },
        )
        .optional()
        .map_err(from_rusqlite)
    }
}
