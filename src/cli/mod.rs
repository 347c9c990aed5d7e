//! Command-line interface for taski
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is defined in its own submodule.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::store::TaskStore;

mod add;
mod change;
mod delete;
mod purge;
mod restore;
mod view;

/// taski - a to-do list in one JSON file
///
/// Add, change, view, soft-delete, and restore tasks. Deleted tasks sit in
/// the trash until a retention window expires, then get purged for good.
#[derive(Parser, Debug)]
#[command(name = "taski")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the task data file (defaults to the platform data dir)
    #[arg(long, global = true, env = "TASKI_FILE")]
    pub file: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task
    Add {
        /// Task title
        #[arg(short, long, required = true)]
        title: String,

        /// Task description
        #[arg(short = 'd', long = "desc", required = true)]
        description: String,
    },

    /// Change a task's title and/or description
    Change {
        /// Index of the targeted task (as shown by `taski view`)
        #[arg(short, long, required = true, allow_negative_numbers = true)]
        index: i64,

        /// New title (omit to keep the current one)
        #[arg(short, long, default_value = "")]
        title: String,

        /// New description (omit to keep the current one)
        #[arg(short = 'd', long = "desc", default_value = "")]
        description: String,
    },

    /// Move a task to the trash
    Delete {
        /// Index of the targeted task
        #[arg(short, long, required = true, allow_negative_numbers = true)]
        index: i64,
    },

    /// Bring tasks back from the trash
    Restore {
        /// Index of the targeted task
        #[arg(short, long, allow_negative_numbers = true)]
        index: Option<i64>,

        /// Restore every trashed task
        #[arg(short, long, conflicts_with = "index")]
        all: bool,
    },

    /// List your tasks
    View,

    /// Permanently drop trashed tasks older than the retention window
    Purge {
        /// Override the configured retention window
        #[arg(long)]
        retention_days: Option<u32>,
    },
}

/// Resolve the data file from flag, config, and defaults, and wrap it in a
/// store. Shared by every subcommand.
fn open_store(file: Option<&PathBuf>) -> Result<TaskStore> {
    let config = Config::load()?;
    Ok(TaskStore::new(config.resolve_data_file(file.map(|p| p.as_path()))))
}

/// Map a CLI index (signed, so negatives can be reported per contract) to a
/// store index.
fn parse_index(index: i64) -> Result<usize> {
    usize::try_from(index)
        .map_err(|_| Error::InvalidArgument(format!("index cannot be negative: {index}")))
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let opts = crate::output::OutputOptions {
            json: self.json,
            quiet: self.quiet,
        };

        match self.command {
            Commands::Add { title, description } => add::run(add::AddOptions {
                title,
                description,
                file: self.file,
                output: opts,
            }),
            Commands::Change {
                index,
                title,
                description,
            } => change::run(change::ChangeOptions {
                index,
                title,
                description,
                file: self.file,
                output: opts,
            }),
            Commands::Delete { index } => delete::run(delete::DeleteOptions {
                index,
                file: self.file,
                output: opts,
            }),
            Commands::Restore { index, all } => restore::run(restore::RestoreOptions {
                index,
                all,
                file: self.file,
                output: opts,
            }),
            Commands::View => view::run(view::ViewOptions {
                file: self.file,
                output: opts,
            }),
            Commands::Purge { retention_days } => purge::run(purge::PurgeOptions {
                retention_days,
                file: self.file,
                output: opts,
            }),
        }
    }
}
