//! Hiring commands
//!
//! Usage:
//!   tutordesk hire <STUDENT_ID> <TUTOR_ID>
//!   tutordesk unhire <STUDENT_ID> <TUTOR_ID>
//!   tutordesk hires <student|tutor> <ID>

use clap::{Args, Subcommand};
use serde_json::json;
use tutordesk_core::{StudentId, TutorId};
use tutordesk_engine::DirectoryStore;

use super::{print_json, student, tutor, CommandResult};

#[derive(Debug, Args)]
pub struct PairArgs {
    pub student_id: i64,
    pub tutor_id: i64,
}

#[derive(Debug, Args)]
pub struct HiresArgs {
    #[command(subcommand)]
    pub command: HiresCommand,
}

#[derive(Debug, Subcommand)]
pub enum HiresCommand {
    /// Tutors hired by a student
    Student { id: i64 },
    /// Students who hired a tutor
    Tutor { id: i64 },
}

pub fn execute_hire(args: PairArgs, store: &DirectoryStore) -> CommandResult {
    let (student_id, tutor_id) = existing_pair(&args, store, "hire")?;
    let outcome = store.hire(student_id, tutor_id)?;
    print_json(&json!({
        "student_id": student_id,
        "tutor_id": tutor_id,
        "outcome": outcome,
    }))
}

pub fn execute_unhire(args: PairArgs, store: &DirectoryStore) -> CommandResult {
    let student_id = StudentId::new(args.student_id);
    let tutor_id = TutorId::new(args.tutor_id);
    let outcome = store.unhire(student_id, tutor_id)?;
    print_json(&json!({
        "student_id": student_id,
        "tutor_id": tutor_id,
        "outcome": outcome,
    }))
}

/// Lists print `[]` when nothing is hired
pub fn execute_hires(args: HiresArgs, store: &DirectoryStore) -> CommandResult {
    match args.command {
        HiresCommand::Student { id } => {
            let student_id = StudentId::new(id);
            if !store.student_exists(student_id)? {
                return Err(student::not_found(id, "tutors_for_student").into());
            }
            print_json(&store.tutors_for_student(student_id)?.unwrap_or_default())
        }
        HiresCommand::Tutor { id } => {
            let tutor_id = TutorId::new(id);
            if !store.tutor_exists(tutor_id)? {
                return Err(tutor::not_found(id, "students_for_tutor").into());
            }
            print_json(&store.students_for_tutor(tutor_id)?.unwrap_or_default())
        }
    }
}

fn existing_pair(
    args: &PairArgs,
    store: &DirectoryStore,
    op: &str,
) -> Result<(StudentId, TutorId), Box<dyn std::error::Error>> {
    let student_id = StudentId::new(args.student_id);
    let tutor_id = TutorId::new(args.tutor_id);
    if !store.student_exists(student_id)? {
        return Err(student::not_found(args.student_id, op).into());
    }
    if !store.tutor_exists(tutor_id)? {
        return Err(tutor::not_found(args.tutor_id, op).into());
    }
    Ok((student_id, tutor_id))
}
