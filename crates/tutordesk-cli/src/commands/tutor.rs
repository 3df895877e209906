//! Tutor commands
//!
//! Usage: tutordesk tutor <add|get|list|delete|login> ...

use clap::{Args, Subcommand};
use tutordesk_core::errors::{DirectoryError, ExError};
use tutordesk_core::rules::validate_new_tutor;
use tutordesk_core::{DeleteOutcome, NewTutor, TutorId};
use tutordesk_engine::DirectoryStore;

use super::{login_denied, print_json, CommandResult};

#[derive(Debug, Args)]
pub struct TutorArgs {
    #[command(subcommand)]
    pub command: TutorCommand,
}

#[derive(Debug, Subcommand)]
pub enum TutorCommand {
    /// Register a tutor
    Add(AddArgs),
    /// Show one tutor
    Get { id: i64 },
    /// Show every tutor
    List,
    /// Delete a tutor and their hirings
    Delete { id: i64 },
    /// Check a tutor's credentials
    Login { username: String, password: String },
}

#[derive(Debug, Args)]
pub struct AddArgs {
    pub username: String,
    pub password: String,
    pub name: String,
    pub age: i64,
    /// Subject taught; shares the list of majors
    pub area: String,
    /// Hourly cost
    pub cost: i64,
}

pub fn execute(args: TutorArgs, store: &DirectoryStore) -> CommandResult {
    match args.command {
        TutorCommand::Add(add) => {
            let input = NewTutor::new(
                add.username,
                add.password,
                add.name,
                add.age,
                add.area,
                add.cost,
            );
            validate_new_tutor(&input).map_err(ExError::from)?;
            let tutor = store.create_tutor(&input)?;
            print_json(&tutor)
        }
        TutorCommand::Get { id } => match store.get_tutor(TutorId::new(id))? {
            Some(tutor) => print_json(&tutor),
            None => Err(not_found(id, "get_tutor").into()),
        },
        TutorCommand::List => print_json(&store.list_tutors()?),
        TutorCommand::Delete { id } => match store.delete_tutor(TutorId::new(id))? {
            DeleteOutcome::Deleted => print_json(&DeleteOutcome::Deleted),
            DeleteOutcome::NotFound => Err(not_found(id, "delete_tutor").into()),
        },
        TutorCommand::Login { username, password } => {
            let outcome = store.authenticate_tutor(&username, &password.into())?;
            match outcome.granted_id() {
                Some(_) => print_json(&outcome),
                None => Err(login_denied("tutor_login").into()),
            }
        }
    }
}

pub(crate) fn not_found(id: i64, op: &str) -> ExError {
    ExError::from(DirectoryError::TutorNotFound { tutor_id: id }).with_op(op)
}
