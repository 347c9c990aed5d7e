//! `taski purge` - drop expired trash on demand
//!
//! The same pass runs automatically at startup; this command exists to run
//! it explicitly, optionally with a tighter window than the configured one.

use std::path::PathBuf;

use chrono::Duration;
use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::store::TaskStore;

/// Options for `taski purge`
pub struct PurgeOptions {
    pub retention_days: Option<u32>,
    pub file: Option<PathBuf>,
    pub output: OutputOptions,
}

/// Output for `taski purge`
#[derive(Debug, Serialize)]
pub struct PurgeOutput {
    pub purged: usize,
    pub retention_days: u32,
}

pub fn run(opts: PurgeOptions) -> Result<()> {
    let config = Config::load()?;
    let retention_days = opts.retention_days.unwrap_or(config.trash.retention_days);
    let store = TaskStore::new(config.resolve_data_file(opts.file.as_deref()));

    let purged = store.clean_up(Duration::days(i64::from(retention_days)))?;

    let output = PurgeOutput {
        purged,
        retention_days,
    };

    let mut human = HumanOutput::new("Purged expired trash");
    human.push_summary("Purged", purged.to_string());
    human.push_summary("Retention", format!("{retention_days} days"));
    human.push_next_step("taski view");

    emit_success(opts.output, "purge", &output, Some(&human))
}
