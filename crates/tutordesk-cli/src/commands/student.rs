//! Student commands
//!
//! Usage: tutordesk student <add|get|list|delete|login> ...

use clap::{Args, Subcommand};
use tutordesk_core::errors::{DirectoryError, ExError};
use tutordesk_core::rules::validate_new_student;
use tutordesk_core::{DeleteOutcome, NewStudent, StudentId};
use tutordesk_engine::DirectoryStore;

use super::{login_denied, print_json, CommandResult};

#[derive(Debug, Args)]
pub struct StudentArgs {
    #[command(subcommand)]
    pub command: StudentCommand,
}

#[derive(Debug, Subcommand)]
pub enum StudentCommand {
    /// Register a student
    Add(AddArgs),
    /// Show one student
    Get { id: i64 },
    /// Show every student
    List,
    /// Delete a student and their hirings
    Delete { id: i64 },
    /// Check a student's credentials
    Login { username: String, password: String },
}

#[derive(Debug, Args)]
pub struct AddArgs {
    pub username: String,
    pub password: String,
    pub name: String,
    pub age: i64,
    pub class_year: i64,
    pub major: String,
}

pub fn execute(args: StudentArgs, store: &DirectoryStore) -> CommandResult {
    match args.command {
        StudentCommand::Add(add) => {
            let input = NewStudent::new(
                add.username,
                add.password,
                add.name,
                add.age,
                add.class_year,
                add.major,
            );
            validate_new_student(&input).map_err(ExError::from)?;
            let student = store.create_student(&input)?;
            print_json(&student)
        }
        StudentCommand::Get { id } => match store.get_student(StudentId::new(id))? {
            Some(student) => print_json(&student),
            None => Err(not_found(id, "get_student").into()),
        },
        StudentCommand::List => print_json(&store.list_students()?),
        StudentCommand::Delete { id } => match store.delete_student(StudentId::new(id))? {
            DeleteOutcome::Deleted => print_json(&DeleteOutcome::Deleted),
            DeleteOutcome::NotFound => Err(not_found(id, "delete_student").into()),
        },
        StudentCommand::Login { username, password } => {
            let outcome = store.authenticate_student(&username, &password.into())?;
            match outcome.granted_id() {
                Some(_) => print_json(&outcome),
                None => Err(login_denied("student_login").into()),
            }
        }
    }
}

pub(crate) fn not_found(id: i64, op: &str) -> ExError {
    ExError::from(DirectoryError::StudentNotFound { student_id: id }).with_op(op)
}
