//! Library catalog CLI.
//!
//! # Responsibility
//! - Parse command-line options and start file logging.
//! - Open the catalog and hand it to the interactive shell.

mod shell;

use clap::Parser;
use library_core::{default_log_level, init_logging, open_catalog, DEFAULT_DB_FILE};
use log::{error, info};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "library")]
#[command(about = "Manage a local library catalog from an interactive menu", version)]
struct Cli {
    /// SQLite database file (created if missing)
    #[arg(long, default_value = DEFAULT_DB_FILE)]
    db: PathBuf,

    /// Log level: trace, debug, info, warn or error
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for log files (defaults to the platform data dir)
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_dir = cli.log_dir.unwrap_or_else(default_log_dir);
    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    if let Err(err) = init_logging(level, &log_dir) {
        // Logging is diagnostics only; the catalog still works without it.
        eprintln!("warning: logging disabled: {err}");
    }

    let catalog = match open_catalog(&cli.db) {
        Ok(catalog) => catalog,
        Err(err) => {
            error!("event=shell_start module=cli status=error error={err}");
            eprintln!("error: cannot open catalog `{}`: {err}", cli.db.display());
            return ExitCode::FAILURE;
        }
    };
    info!("event=shell_start module=cli status=ok");

    let stdin = io::stdin();
    match shell::run(catalog, stdin.lock(), io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=shell_exit module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("library")
        .join("logs")
}
