//! taski - To-Do List CLI
//!
//! A to-do list in one JSON file: add, change, view, soft-delete, restore,
//! with automatic purging of trash older than the retention window.

use clap::Parser;
use taski::cli::Cli;
use taski::config::Config;
use taski::output::{emit_error, infer_command_name_from_args};
use taski::store::TaskStore;
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    // Tracing is opt-in via RUST_LOG.
    // Keep startup robust: ignore invalid/huge filters.
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| {
            let raw = raw.trim();
            if raw.is_empty() || raw.len() > 4096 {
                return None;
            }
            EnvFilter::try_new(raw).ok()
        })
        .unwrap_or_else(|| EnvFilter::new("off"));

    // Logs go to stderr; stdout is reserved for command output (including
    // the --json envelopes).
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let command = infer_command_name_from_args();
    let cli = Cli::parse();

    // Best-effort janitor pass: purge trash past the retention window
    // before the requested command runs. Its failure never blocks the
    // command; a corrupt file will fail again with a proper error once the
    // command itself touches it.
    match Config::load() {
        Ok(config) => {
            let store = TaskStore::new(config.resolve_data_file(cli.file.as_deref()));
            if let Err(err) = store.clean_up(config.retention()) {
                warn!("startup cleanup failed: {err}");
            }
        }
        Err(err) => warn!("startup cleanup skipped: {err}"),
    }

    let json = cli.json;
    if let Err(err) = cli.run() {
        let _ = emit_error(&command, &err, json);
        std::process::exit(err.exit_code());
    }
}
