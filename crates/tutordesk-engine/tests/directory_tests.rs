//! Integration tests for the Directory Store handle.
//!
//! File-backed tests use a real SQLite database under a TempDir; everything
//! else runs against a private in-memory store.

use std::thread;
use std::time::{Duration, Instant};

use tempfile::TempDir;
use tutordesk_core::errors::ExErrorKind;
use tutordesk_core::{
    AuthOutcome, DeleteOutcome, HireOutcome, NewStudent, NewTutor, StudentId, TutorId,
    UnhireOutcome,
};
use tutordesk_engine::{DirectoryStore, SchemaStatus, StoreConfig};

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

fn store() -> DirectoryStore {
    DirectoryStore::open_in_memory().unwrap()
}

fn shawn() -> NewStudent {
    NewStudent::new("shawn", "secret", "Shawn", 21, 2022, "Economics")
}

fn visa() -> NewTutor {
    NewTutor::new("visa", "pw", "Visa", 30, "Math", 50)
}

fn count(store_path: &std::path::Path, table: &str) -> i64 {
    let conn = rusqlite::Connection::open(store_path).unwrap();
    conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
        row.get(0)
    })
    .unwrap()
}

// ---------------------------------------------------------------------------
// Students and tutors
// ---------------------------------------------------------------------------

#[test]
fn test_create_and_get_student() {
    let store = store();

    let created = store.create_student(&shawn()).unwrap();
    assert_eq!(created.id, StudentId::new(1));
    assert_eq!(created.name, "Shawn");
    assert_eq!(created.age, 21);
    assert_eq!(created.class_year, 2022);
    assert_eq!(created.major, "Economics");

    assert_eq!(store.get_student(created.id).unwrap(), Some(created));
}

#[test]
fn test_create_and_get_tutor() {
    let store = store();

    let created = store.create_tutor(&visa()).unwrap();
    assert_eq!(created.id, TutorId::new(1));
    assert_eq!(created.area_of_expertise, "Math");
    assert_eq!(created.cost, 50);

    assert_eq!(store.get_tutor(created.id).unwrap(), Some(created));
}

#[test]
fn test_get_unknown_ids_return_none() {
    let store = store();
    assert_eq!(store.get_student(StudentId::new(42)).unwrap(), None);
    assert_eq!(store.get_tutor(TutorId::new(42)).unwrap(), None);
    assert!(!store.student_exists(StudentId::new(42)).unwrap());
    assert!(!store.tutor_exists(TutorId::new(42)).unwrap());
}

#[test]
fn test_list_students_empty_then_all() {
    let store = store();
    assert!(store.list_students().unwrap().is_empty());

    for i in 0..3 {
        let name = format!("Student {}", i);
        store
            .create_student(&NewStudent::new(
                format!("s{}", i),
                "pw",
                name,
                20,
                2024,
                "History",
            ))
            .unwrap();
    }

    let mut names: Vec<String> = store
        .list_students()
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    names.sort();
    assert_eq!(names, vec!["Student 0", "Student 1", "Student 2"]);
}

#[test]
fn test_list_tutors_empty_then_all() {
    let store = store();
    assert!(store.list_tutors().unwrap().is_empty());

    store.create_tutor(&visa()).unwrap();
    store
        .create_tutor(&NewTutor::new("ada", "pw", "Ada", 36, "Physics", 80))
        .unwrap();

    assert_eq!(store.list_tutors().unwrap().len(), 2);
}

#[test]
fn test_students_share_reference_rows() {
    let store = store();
    store.create_student(&shawn()).unwrap();
    store
        .create_student(&NewStudent::new("amy", "pw", "Amy", 19, 2022, "Economics"))
        .unwrap();
    store.create_tutor(&NewTutor::new("eco", "pw", "Eco", 40, "Economics", 10)).unwrap();

    let major = store.find_major_by_name("Economics").unwrap().unwrap();
    assert_eq!(store.upsert_major("Economics").unwrap(), major);

    let year = store.find_class_year_by_year(2022).unwrap().unwrap();
    assert_eq!(store.upsert_class_year(2022).unwrap(), year);
    assert_eq!(store.find_class_year_by_year(1999).unwrap(), None);
}

#[test]
fn test_delete_student_unknown_is_noop() {
    let store = store();
    store.create_student(&shawn()).unwrap();

    assert_eq!(
        store.delete_student(StudentId::new(999)).unwrap(),
        DeleteOutcome::NotFound
    );
    assert_eq!(store.list_students().unwrap().len(), 1);
}

#[test]
fn test_delete_student_and_tutor() {
    let store = store();
    let student = store.create_student(&shawn()).unwrap();
    let tutor = store.create_tutor(&visa()).unwrap();

    assert_eq!(store.delete_student(student.id).unwrap(), DeleteOutcome::Deleted);
    assert_eq!(store.delete_tutor(tutor.id).unwrap(), DeleteOutcome::Deleted);
    assert_eq!(store.delete_tutor(tutor.id).unwrap(), DeleteOutcome::NotFound);
    assert_eq!(store.get_student(student.id).unwrap(), None);
    assert!(store.list_tutors().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

#[test]
fn test_authenticate_student() {
    let store = store();
    let student = store.create_student(&shawn()).unwrap();

    assert_eq!(
        store
            .authenticate_student("shawn", &"secret".into())
            .unwrap(),
        AuthOutcome::Granted(student.id)
    );
    assert_eq!(
        store.authenticate_student("shawn", &"wrong".into()).unwrap(),
        AuthOutcome::Denied
    );
    assert_eq!(
        store
            .authenticate_student("nobody", &"secret".into())
            .unwrap(),
        AuthOutcome::Denied
    );
}

#[test]
fn test_authenticate_tutor_failures_are_uniform() {
    let store = store();
    let tutor = store.create_tutor(&visa()).unwrap();

    assert_eq!(
        store.authenticate_tutor("visa", &"pw".into()).unwrap(),
        AuthOutcome::Granted(tutor.id)
    );
    let wrong_password = store.authenticate_tutor("visa", &"nope".into()).unwrap();
    let unknown_user = store.authenticate_tutor("ghost", &"pw".into()).unwrap();
    assert_eq!(wrong_password, AuthOutcome::Denied);
    assert_eq!(wrong_password, unknown_user);
}

#[test]
fn test_unknown_username_costs_a_verification() {
    let store = store();
    store.create_student(&shawn()).unwrap();
    // warm the decoy digest so its one-off hash is not timed
    store.authenticate_student("ghost", &"x".into()).unwrap();

    let time = |username: &str| {
        let start = Instant::now();
        for _ in 0..3 {
            let outcome = store
                .authenticate_student(username, &"wrong".into())
                .unwrap();
            assert_eq!(outcome, AuthOutcome::Denied);
        }
        start.elapsed()
    };

    let wrong_password = time("shawn");
    let unknown_user = time("ghost");
    assert!(
        unknown_user * 5 >= wrong_password,
        "unknown={:?} wrong_password={:?}",
        unknown_user,
        wrong_password
    );
    assert!(unknown_user > Duration::from_micros(100));
}

#[test]
fn test_student_credentials_do_not_authenticate_tutor() {
    let store = store();
    store.create_student(&shawn()).unwrap();
    assert_eq!(
        store.authenticate_tutor("shawn", &"secret".into()).unwrap(),
        AuthOutcome::Denied
    );
}

#[test]
fn test_password_is_not_stored_in_plaintext() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("directory.db");
    let store = DirectoryStore::open(&StoreConfig::new(&db_path)).unwrap();
    store.create_student(&shawn()).unwrap();
    store.close().unwrap();

    let conn = rusqlite::Connection::open(&db_path).unwrap();
    let (password, salt): (String, String) = conn
        .query_row("SELECT password, salt FROM student", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .unwrap();
    assert_ne!(password, "secret");
    assert!(password.starts_with("$argon2"));
    assert!(password.contains(&salt));
}

// ---------------------------------------------------------------------------
// Hiring
// ---------------------------------------------------------------------------

#[test]
fn test_hire_list_unhire_scenario() {
    let store = store();
    let student = store.create_student(&shawn()).unwrap();
    let tutor = store.create_tutor(&visa()).unwrap();
    assert_eq!(student.id.get(), 1);
    assert_eq!(tutor.id.get(), 1);

    assert_eq!(store.hire(student.id, tutor.id).unwrap(), HireOutcome::Hired);

    let tutors = store.tutors_for_student(student.id).unwrap().unwrap();
    assert_eq!(tutors.len(), 1);
    assert_eq!(tutors[0].id, tutor.id);
    assert_eq!(tutors[0].name, "Visa");
    assert_eq!(tutors[0].area_of_expertise, "Math");
    assert_eq!(tutors[0].cost, 50);
    assert_eq!(tutors[0].age, 30);

    assert_eq!(
        store.unhire(student.id, tutor.id).unwrap(),
        UnhireOutcome::Removed
    );
    assert_eq!(store.tutors_for_student(student.id).unwrap(), None);
}

#[test]
fn test_hire_is_idempotent() {
    let store = store();
    let student = store.create_student(&shawn()).unwrap();
    let tutor = store.create_tutor(&visa()).unwrap();

    assert_eq!(store.hire(student.id, tutor.id).unwrap(), HireOutcome::Hired);
    let first = store.get_hiring(student.id, tutor.id).unwrap().unwrap();
    assert_eq!(
        store.hire(student.id, tutor.id).unwrap(),
        HireOutcome::AlreadyHired
    );
    assert_eq!(store.get_hiring(student.id, tutor.id).unwrap(), Some(first));
    assert_eq!(store.tutors_for_student(student.id).unwrap().unwrap().len(), 1);
}

#[test]
fn test_unhire_without_hire_is_noop() {
    let store = store();
    let student = store.create_student(&shawn()).unwrap();
    let tutor = store.create_tutor(&visa()).unwrap();

    assert_eq!(
        store.unhire(student.id, tutor.id).unwrap(),
        UnhireOutcome::NotHired
    );
    assert!(!store.is_hired(student.id, tutor.id).unwrap());
}

#[test]
fn test_is_hired_tracks_state() {
    let store = store();
    let student = store.create_student(&shawn()).unwrap();
    let tutor = store.create_tutor(&visa()).unwrap();

    assert!(!store.is_hired(student.id, tutor.id).unwrap());
    store.hire(student.id, tutor.id).unwrap();
    assert!(store.is_hired(student.id, tutor.id).unwrap());
    store.unhire(student.id, tutor.id).unwrap();
    assert!(!store.is_hired(student.id, tutor.id).unwrap());
    assert_eq!(store.get_hiring(student.id, tutor.id).unwrap(), None);
}

#[test]
fn test_students_for_tutor() {
    let store = store();
    let shawn = store.create_student(&shawn()).unwrap();
    let amy = store
        .create_student(&NewStudent::new("amy", "pw", "Amy", 19, 2023, "Biology"))
        .unwrap();
    let tutor = store.create_tutor(&visa()).unwrap();

    assert_eq!(store.students_for_tutor(tutor.id).unwrap(), None);

    store.hire(shawn.id, tutor.id).unwrap();
    store.hire(amy.id, tutor.id).unwrap();

    let students = store.students_for_tutor(tutor.id).unwrap().unwrap();
    let mut ids: Vec<_> = students.iter().map(|s| s.id).collect();
    ids.sort();
    assert_eq!(ids, vec![shawn.id, amy.id]);
    assert!(students.iter().any(|s| s.major == "Biology" && s.class_year == 2023));
}

#[test]
fn test_hire_unknown_party_is_not_found() {
    let store = store();
    let student = store.create_student(&shawn()).unwrap();

    let err = store.hire(student.id, TutorId::new(77)).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.op(), Some("hire"));
    assert!(!store.is_hired(student.id, TutorId::new(77)).unwrap());
}

#[test]
fn test_delete_cascades_to_hirings() {
    let store = store();
    let student = store.create_student(&shawn()).unwrap();
    let tutor = store.create_tutor(&visa()).unwrap();
    store.hire(student.id, tutor.id).unwrap();

    store.delete_tutor(tutor.id).unwrap();
    assert_eq!(store.tutors_for_student(student.id).unwrap(), None);
    assert!(!store.is_hired(student.id, tutor.id).unwrap());

    let tutor = store.create_tutor(&visa()).unwrap();
    store.hire(student.id, tutor.id).unwrap();
    store.delete_student(student.id).unwrap();
    assert_eq!(store.students_for_tutor(tutor.id).unwrap(), None);
}

// ---------------------------------------------------------------------------
// Persistence and concurrency
// ---------------------------------------------------------------------------

#[test]
fn test_reopen_keeps_data_and_schema() {
    let temp_dir = TempDir::new().unwrap();
    let config = StoreConfig::new(temp_dir.path().join("directory.db"));

    let store = DirectoryStore::open(&config).unwrap();
    assert_eq!(store.schema_status(), SchemaStatus::Created);
    let student = store.create_student(&shawn()).unwrap();
    store.close().unwrap();

    let store = DirectoryStore::open(&config).unwrap();
    assert_eq!(store.schema_status(), SchemaStatus::Existing);
    assert_eq!(store.get_student(student.id).unwrap(), Some(student));
    assert!(store
        .authenticate_student("shawn", &"secret".into())
        .unwrap()
        .is_granted());
}

#[test]
fn test_concurrent_upserts_yield_one_row() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("directory.db");
    let config = StoreConfig::new(&db_path);
    DirectoryStore::open(&config).unwrap().close().unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let config = config.clone();
            thread::spawn(move || {
                let store = DirectoryStore::open(&config).unwrap();
                let major = store.upsert_major("Chemistry").unwrap();
                let year = store.upsert_class_year(2030).unwrap();
                (major, year)
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(count(&db_path, "major"), 1);
    assert_eq!(count(&db_path, "class_year"), 1);
}

#[test]
fn test_concurrent_hires_yield_one_row() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("directory.db");
    let config = StoreConfig::new(&db_path);

    let store = DirectoryStore::open(&config).unwrap();
    let student = store.create_student(&shawn()).unwrap();
    let tutor = store.create_tutor(&visa()).unwrap();
    store.close().unwrap();

    let handles: Vec<_> = (0..6)
        .map(|_| {
            let config = config.clone();
            thread::spawn(move || {
                let store = DirectoryStore::open(&config).unwrap();
                store.hire(student.id, tutor.id).unwrap()
            })
        })
        .collect();

    let outcomes: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let hired = outcomes
        .iter()
        .filter(|o| **o == HireOutcome::Hired)
        .count();
    assert_eq!(hired, 1);
    assert_eq!(count(&db_path, "student_tutor"), 1);
}
