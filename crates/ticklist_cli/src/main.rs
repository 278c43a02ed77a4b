//! Interactive task tracker entry point.
//!
//! # Responsibility
//! - Resolve configuration from flags and environment.
//! - Select the store variant and hand it to the session loop.
//! - Keep logging best-effort: a session must start even when logs cannot.

mod command;
mod repl;

use clap::Parser;
use log::{error, info};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use ticklist_core::db::open_db;
use ticklist_core::{default_log_level, init_logging, MemoryTaskStore, SqliteTaskStore};

/// Interactive task tracker.
///
/// Tasks live in a SQLite database by default; pass `--memory` for a
/// throwaway session that keeps everything in process memory.
#[derive(Parser, Debug)]
#[command(name = "ticklist", version, about = "Interactive task tracker")]
struct Cli {
    /// Keep tasks in memory only; nothing is written to disk
    #[arg(long)]
    memory: bool,

    /// Path of the task database file
    #[arg(long, env = "TICKLIST_DB")]
    db: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, env = "TICKLIST_LOG")]
    log_level: Option<String>,

    /// Directory for rolling log files
    #[arg(long, env = "TICKLIST_LOG_DIR")]
    log_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("event=cli_start module=cli status=error error={message}");
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    if cli.memory {
        info!("event=store_select module=cli status=ok variant=memory");
        let mut store = MemoryTaskStore::new();
        return repl::run(&mut store, stdin.lock(), stdout.lock())
            .map_err(|err| format!("session i/o failed: {err}"));
    }

    let path = resolve_db_path(cli)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|err| {
            format!("cannot create data directory `{}`: {err}", parent.display())
        })?;
    }

    let conn = open_db(&path)
        .map_err(|err| format!("cannot open task database `{}`: {err}", path.display()))?;
    info!(
        "event=store_select module=cli status=ok variant=sqlite path={}",
        path.display()
    );

    let mut store = SqliteTaskStore::try_new(&conn)
        .map_err(|err| format!("task database `{}` is not usable: {err}", path.display()))?;
    repl::run(&mut store, stdin.lock(), stdout.lock())
        .map_err(|err| format!("session i/o failed: {err}"))
}

/// Resolution order: `--db` flag, `TICKLIST_DB`, then the platform data
/// directory.
fn resolve_db_path(cli: &Cli) -> Result<PathBuf, String> {
    if let Some(path) = &cli.db {
        return Ok(path.clone());
    }
    dirs::data_dir()
        .map(|dir| dir.join("ticklist").join("tasks.db"))
        .ok_or_else(|| "could not determine a data directory; pass --db or --memory".to_string())
}

/// Initializes file logging, falling back to a silent session on failure.
fn setup_logging(cli: &Cli) {
    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| default_log_level().to_string());
    let log_dir = cli
        .log_dir
        .clone()
        .or_else(|| dirs::data_dir().map(|dir| dir.join("ticklist").join("logs")));

    let Some(log_dir) = log_dir else {
        eprintln!("warning: logging disabled: could not determine a log directory");
        return;
    };
    if let Err(message) = init_logging(&level, &log_dir.to_string_lossy()) {
        eprintln!("warning: logging disabled: {message}");
    }
}
