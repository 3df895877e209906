//! TutorDesk CLI
//!
//! Command-line front end for the tutoring directory

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tutordesk_core::errors::{ExError, ExErrorKind};
use tutordesk_core::logging_facility::{self, Profile};
use tutordesk_engine::config::DEFAULT_BUSY_TIMEOUT_MS;
use tutordesk_engine::{DirectoryStore, StoreConfig};

mod commands;

use commands::CommandResult;

#[derive(Debug, Parser)]
#[command(name = "tutordesk")]
#[command(about = "TutorDesk - students, tutors and who hired whom", long_about = None)]
struct Cli {
    /// Path to the directory database
    #[arg(
        long,
        global = true,
        env = "TUTORDESK_DB",
        default_value = ".tutordesk/directory.db"
    )]
    db: PathBuf,

    /// How long to wait on a locked database, in milliseconds
    #[arg(
        long,
        global = true,
        env = "TUTORDESK_BUSY_TIMEOUT_MS",
        default_value_t = DEFAULT_BUSY_TIMEOUT_MS
    )]
    busy_timeout_ms: u64,

    /// Emit logs as JSON lines instead of human-readable text
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Student operations
    Student(commands::student::StudentArgs),
    /// Tutor operations
    Tutor(commands::tutor::TutorArgs),
    /// Record that a student hired a tutor
    Hire(commands::hire::PairArgs),
    /// Remove a hiring
    Unhire(commands::hire::PairArgs),
    /// List hirings for a student or a tutor
    Hires(commands::hire::HiresArgs),
}

fn main() {
    // A missing .env is fine; flags and real env vars still apply
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    logging_facility::init(if cli.log_json {
        Profile::Production
    } else {
        Profile::Development
    });

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> CommandResult {
    if let Some(parent) = cli.db.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            ExError::new(ExErrorKind::Io)
                .with_op("create_db_dir")
                .with_entity_id(parent.display().to_string())
                .with_message(e.to_string())
        })?;
    }

    let config =
        StoreConfig::new(&cli.db).with_busy_timeout(Duration::from_millis(cli.busy_timeout_ms));
    let store = DirectoryStore::open(&config)?;

    let result = match cli.command {
        Commands::Student(args) => commands::student::execute(args, &store),
        Commands::Tutor(args) => commands::tutor::execute(args, &store),
        Commands::Hire(args) => commands::hire::execute_hire(args, &store),
        Commands::Unhire(args) => commands::hire::execute_unhire(args, &store),
        Commands::Hires(args) => commands::hire::execute_hires(args, &store),
    };

    store.close()?;
    result
}
