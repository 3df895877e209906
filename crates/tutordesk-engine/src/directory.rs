//! Directory Store operations with boundary logging.
//!
//! ## Logging Ownership
//!
//! Each public operation logs:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (store, core) use only `tracing::debug!()` for internal details.
//! Passwords are never logged.
//!
//! ## Concurrency
//!
//! The handle owns a single `rusqlite::Connection`, so it is `Send` but not
//! `Sync`. Concurrent servers give each worker its own handle on the same
//! file; uniqueness is enforced by SQLite constraints, not by locks here.

use std::time::Instant;

use rusqlite::{Connection, Transaction, TransactionBehavior};
use tutordesk_core::credentials::{
    hash_password, verify_decoy, verify_password, PasswordDigest,
};
use tutordesk_core::errors::ExError;
use tutordesk_core::{
    log_op_end, log_op_error, log_op_start, AuthOutcome, ClassYear, DeleteOutcome, Hiring,
    HireOutcome, Major, NewStudent, NewTutor, Student, StudentId, Tutor, TutorId, UnhireOutcome,
};
use tutordesk_core_types::Sensitive;
use tutordesk_store::errors::{from_rusqlite, missing_after_write, Result};
use tutordesk_store::repo::{HiringRepo, ReferenceRepo, StudentRepo, TutorRepo};
use tutordesk_store::schema::{ensure_schema, SchemaStatus};

use crate::config::StoreConfig;

/// Handle to an open directory database
pub struct DirectoryStore {
    conn: Connection,
    schema_status: SchemaStatus,
}

impl DirectoryStore {
    /// Open the directory at `config.path()`, creating the file and schema on first use
    ///
    /// # Errors
    /// `Persistence` if the file cannot be opened or the schema cannot be created.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        log_op_start!("open_store", path = %config.path().display());
        let start = Instant::now();

        let result = tutordesk_store::db::open(config.path())
            .and_then(|conn| Self::initialise(conn, config));

        Self::finish("open_store", start, result)
    }

    /// Open a private in-memory directory (for tests and tooling)
    pub fn open_in_memory() -> Result<Self> {
        log_op_start!("open_store", path = ":memory:");
        let start = Instant::now();

        let config = StoreConfig::new(":memory:");
        let result = tutordesk_store::db::open_in_memory()
            .and_then(|conn| Self::initialise(conn, &config));

        Self::finish("open_store", start, result)
    }

    fn initialise(mut conn: Connection, config: &StoreConfig) -> Result<Self> {
        tutordesk_store::db::configure(&conn, config.busy_timeout())?;
        let schema_status = ensure_schema(&mut conn)?;
        Ok(Self {
            conn,
            schema_status,
        })
    }

    /// Whether opening this handle created the schema
    pub fn schema_status(&self) -> SchemaStatus {
        self.schema_status
    }

    /// Close the underlying connection, reporting any error SQLite raises
    pub fn close(self) -> Result<()> {
        log_op_start!("close_store");
        let start = Instant::now();
        let result = self.conn.close().map_err(|(_, e)| from_rusqlite(e));
        Self::finish("close_store", start, result)
    }

    // ===== Reference tables =====

    pub fn upsert_major(&self, name: &str) -> Result<Major> {
        log_op_start!("upsert_major", major = name);
        let start = Instant::now();
        let result = ReferenceRepo::upsert_major(&self.conn, name);
        Self::finish("upsert_major", start, result)
    }

    pub fn find_major_by_name(&self, name: &str) -> Result<Option<Major>> {
        log_op_start!("find_major_by_name", major = name);
        let start = Instant::now();
        let result = ReferenceRepo::find_major_by_name(&self.conn, name);
        Self::finish("find_major_by_name", start, result)
    }

    pub fn upsert_class_year(&self, year: i64) -> Result<ClassYear> {
        log_op_start!("upsert_class_year", class_year = year);
        let start = Instant::now();
        let result = ReferenceRepo::upsert_class_year(&self.conn, year);
        Self::finish("upsert_class_year", start, result)
    }

    pub fn find_class_year_by_year(&self, year: i64) -> Result<Option<ClassYear>> {
        log_op_start!("find_class_year_by_year", class_year = year);
        let start = Instant::now();
        let result = ReferenceRepo::find_class_year_by_year(&self.conn, year);
        Self::finish("find_class_year_by_year", start, result)
    }

    // ===== Students =====

    /// Register a student and return the joined view
    ///
    /// Major and class year are resolved (and created if new) in the same
    /// transaction as the student row.
    ///
    /// # Errors
    /// `Internal` if hashing fails, `Persistence` on storage failure.
    pub fn create_student(&self, input: &NewStudent) -> Result<Student> {
        log_op_start!("create_student", username = input.username.as_str());
        let start = Instant::now();
        let result = self.create_student_impl(input);
        Self::finish_with("create_student", start, result, |s| s.id.get())
    }

    fn create_student_impl(&self, input: &NewStudent) -> Result<Student> {
        let digest = hash_password(&input.password).map_err(ExError::from)?;

        let tx = self.begin_write()?;
        let class_year = ReferenceRepo::upsert_class_year(&tx, input.class_year)?;
        let major = ReferenceRepo::upsert_major(&tx, &input.major)?;
        let id = StudentRepo::insert(&tx, input, &digest, class_year.id, major.id)?;
        let student = StudentRepo::get(&tx, id)?
            .ok_or_else(|| missing_after_write("create_student", id.to_string()))?;
        tx.commit().map_err(from_rusqlite)?;

        Ok(student)
    }

    pub fn get_student(&self, id: StudentId) -> Result<Option<Student>> {
        log_op_start!("get_student", student_id = id.get());
        let start = Instant::now();
        let result = StudentRepo::get(&self.conn, id);
        Self::finish("get_student", start, result)
    }

    /// Every registered student; callers must not rely on the order
    pub fn list_students(&self) -> Result<Vec<Student>> {
        log_op_start!("list_students");
        let start = Instant::now();
        let result = StudentRepo::list(&self.conn);
        Self::finish_with("list_students", start, result, |v| v.len())
    }

    /// Delete a student and, by cascade, their hirings
    ///
    /// An unknown id is a successful no-op reported as `DeleteOutcome::NotFound`.
    pub fn delete_student(&self, id: StudentId) -> Result<DeleteOutcome> {
        log_op_start!("delete_student", student_id = id.get());
        let start = Instant::now();
        let result = StudentRepo::delete(&self.conn, id).map(delete_outcome);
        Self::finish("delete_student", start, result)
    }

    pub fn student_exists(&self, id: StudentId) -> Result<bool> {
        log_op_start!("student_exists", student_id = id.get());
        let start = Instant::now();
        let result = StudentRepo::exists(&self.conn, id);
        Self::finish("student_exists", start, result)
    }

    /// Check a student's username and password
    ///
    /// Unknown usernames and wrong passwords both yield `AuthOutcome::Denied`.
    pub fn authenticate_student(
        &self,
        username: &str,
        password: &Sensitive<String>,
    ) -> Result<AuthOutcome<StudentId>> {
        log_op_start!("authenticate_student", username = username);
        let start = Instant::now();
        let result = StudentRepo::credentials_by_username(&self.conn, username)
            .map(|candidates| first_match(candidates, password));
        Self::finish_with("authenticate_student", start, result, |o| o.is_granted())
    }

    // ===== Tutors =====

    /// Register a tutor and return the joined view
    pub fn create_tutor(&self, input: &NewTutor) -> Result<Tutor> {
        log_op_start!("create_tutor", username = input.username.as_str());
        let start = Instant::now();
        let result = self.create_tutor_impl(input);
        Self::finish_with("create_tutor", start, result, |t| t.id.get())
    }

    fn create_tutor_impl(&self, input: &NewTutor) -> Result<Tutor> {
        let digest = hash_password(&input.password).map_err(ExError::from)?;

        let tx = self.begin_write()?;
        let area = ReferenceRepo::upsert_major(&tx, &input.area_of_expertise)?;
        let id = TutorRepo::insert(&tx, input, &digest, area.id)?;
        let tutor = TutorRepo::get(&tx, id)?
            .ok_or_else(|| missing_after_write("create_tutor", id.to_string()))?;
        tx.commit().map_err(from_rusqlite)?;

        Ok(tutor)
    }

    pub fn get_tutor(&self, id: TutorId) -> Result<Option<Tutor>> {
        log_op_start!("get_tutor", tutor_id = id.get());
        let start = Instant::now();
        let result = TutorRepo::get(&self.conn, id);
        Self::finish("get_tutor", start, result)
    }

    /// Every registered tutor; callers must not rely on the order
    pub fn list_tutors(&self) -> Result<Vec<Tutor>> {
        log_op_start!("list_tutors");
        let start = Instant::now();
        let result = TutorRepo::list(&self.conn);
        Self::finish_with("list_tutors", start, result, |v| v.len())
    }

    /// Delete a tutor and, by cascade, their hirings
    pub fn delete_tutor(&self, id: TutorId) -> Result<DeleteOutcome> {
        log_op_start!("delete_tutor", tutor_id = id.get());
        let start = Instant::now();
        let result = TutorRepo::delete(&self.conn, id).map(delete_outcome);
        Self::finish("delete_tutor", start, result)
    }

    pub fn tutor_exists(&self, id: TutorId) -> Result<bool> {
        log_op_start!("tutor_exists", tutor_id = id.get());
        let start = Instant::now();
        let result = TutorRepo::exists(&self.conn, id);
        Self::finish("tutor_exists", start, result)
    }

    /// Check a tutor's username and password; same contract as students
    pub fn authenticate_tutor(
        &self,
        username: &str,
        password: &Sensitive<String>,
    ) -> Result<AuthOutcome<TutorId>> {
        log_op_start!("authenticate_tutor", username = username);
        let start = Instant::now();
        let result = TutorRepo::credentials_by_username(&self.conn, username)
            .map(|candidates| first_match(candidates, password));
        Self::finish_with("authenticate_tutor", start, result, |o| o.is_granted())
    }

    // ===== Hiring =====

    /// Record that the student hired the tutor
    ///
    /// # Errors
    /// `NotFound` if either party does not exist.
    pub fn hire(&self, student_id: StudentId, tutor_id: TutorId) -> Result<HireOutcome> {
        log_op_start!(
            "hire",
            student_id = student_id.get(),
            tutor_id = tutor_id.get()
        );
        let start = Instant::now();
        let result = HiringRepo::insert(&self.conn, student_id, tutor_id).map(|inserted| {
            if inserted {
                HireOutcome::Hired
            } else {
                HireOutcome::AlreadyHired
            }
        });
        Self::finish("hire", start, result)
    }

    pub fn unhire(&self, student_id: StudentId, tutor_id: TutorId) -> Result<UnhireOutcome> {
        log_op_start!(
            "unhire",
            student_id = student_id.get(),
            tutor_id = tutor_id.get()
        );
        let start = Instant::now();
        let result = HiringRepo::delete(&self.conn, student_id, tutor_id).map(|removed| {
            if removed {
                UnhireOutcome::Removed
            } else {
                UnhireOutcome::NotHired
            }
        });
        Self::finish("unhire", start, result)
    }

    /// Tutors the student has hired, or `None` when there are none
    pub fn tutors_for_student(&self, student_id: StudentId) -> Result<Option<Vec<Tutor>>> {
        log_op_start!("tutors_for_student", student_id = student_id.get());
        let start = Instant::now();
        let result = HiringRepo::tutors_for_student(&self.conn, student_id).map(non_empty);
        Self::finish_with("tutors_for_student", start, result, |o| {
            o.as_ref().map_or(0, Vec::len)
        })
    }

    /// Students who hired the tutor, or `None` when there are none
    pub fn students_for_tutor(&self, tutor_id: TutorId) -> Result<Option<Vec<Student>>> {
        log_op_start!("students_for_tutor", tutor_id = tutor_id.get());
        let start = Instant::now();
        let result = HiringRepo::students_for_tutor(&self.conn, tutor_id).map(non_empty);
        Self::finish_with("students_for_tutor", start, result, |o| {
            o.as_ref().map_or(0, Vec::len)
        })
    }

    pub fn is_hired(&self, student_id: StudentId, tutor_id: TutorId) -> Result<bool> {
        log_op_start!(
            "is_hired",
            student_id = student_id.get(),
            tutor_id = tutor_id.get()
        );
        let start = Instant::now();
        let result = HiringRepo::exists(&self.conn, student_id, tutor_id);
        Self::finish("is_hired", start, result)
    }

    pub fn get_hiring(&self, student_id: StudentId, tutor_id: TutorId) -> Result<Option<Hiring>> {
        log_op_start!(
            "get_hiring",
            student_id = student_id.get(),
            tutor_id = tutor_id.get()
        );
        let start = Instant::now();
        let result = HiringRepo::get(&self.conn, student_id, tutor_id);
        Self::finish("get_hiring", start, result)
    }

    // ===== Internals =====

    /// IMMEDIATE so the write lock is taken up front rather than on upgrade
    fn begin_write(&self) -> Result<Transaction<'_>> {
        Transaction::new_unchecked(&self.conn, TransactionBehavior::Immediate)
            .map_err(from_rusqlite)
    }

    fn finish<T>(op: &'static str, start: Instant, result: Result<T>) -> Result<T> {
        let duration_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => {
                log_op_end!(op, duration_ms = duration_ms);
            }
            Err(e) => log_op_error!(op, e.clone(), duration_ms = duration_ms),
        }
        result
    }

    fn finish_with<T, F, V>(
        op: &'static str,
        start: Instant,
        result: Result<T>,
        detail: F,
    ) -> Result<T>
    where
        F: FnOnce(&T) -> V,
        V: std::fmt::Debug,
    {
        let duration_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(value) => {
                log_op_end!(op, duration_ms = duration_ms, result = ?detail(value));
            }
            Err(e) => log_op_error!(op, e.clone(), duration_ms = duration_ms),
        }
        result
    }
}

fn delete_outcome(removed: bool) -> DeleteOutcome {
    if removed {
        DeleteOutcome::Deleted
    } else {
        DeleteOutcome::NotFound
    }
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

/// Grant the oldest account under the username whose password matches
///
/// An unknown username still pays for one verification.
fn first_match<Id: Copy>(
    candidates: Vec<(Id, PasswordDigest)>,
    password: &Sensitive<String>,
) -> AuthOutcome<Id> {
    if candidates.is_empty() {
        verify_decoy(password);
        return AuthOutcome::Denied;
    }
    candidates
        .iter()
        .find(|(_, digest)| verify_password(password, digest))
        .map_or(AuthOutcome::Denied, |(id, _)| AuthOutcome::Granted(*id))
}
