//! `taski add` - create a new task

use std::path::PathBuf;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::task::TaskDraft;

/// Options for `taski add`
pub struct AddOptions {
    pub title: String,
    pub description: String,
    pub file: Option<PathBuf>,
    pub output: OutputOptions,
}

/// Output for `taski add`
#[derive(Debug, Serialize)]
pub struct AddOutput {
    pub id: u64,
    pub index: usize,
    pub title: String,
    pub description: String,
}

pub fn run(opts: AddOptions) -> Result<()> {
    if opts.title.is_empty() || opts.description.is_empty() {
        return Err(Error::InvalidArgument(
            "add requires both --title and --desc to be non-empty".to_string(),
        ));
    }

    let store = super::open_store(opts.file.as_ref())?;
    let task = store.add_task(TaskDraft {
        title: opts.title,
        description: opts.description,
    })?;

    // The new task is always the last record in the sequence.
    let index = store.read_tasks()?.tasks.last().map(|(i, _)| *i).unwrap_or(0);

    let output = AddOutput {
        id: task.id,
        index,
        title: task.title.clone(),
        description: task.description.clone(),
    };

    let mut human = HumanOutput::new("Added new task");
    human.push_summary("Title", &output.title);
    human.push_summary("Description", &output.description);
    human.push_summary("Index", output.index.to_string());
    human.push_next_step("taski view");

    emit_success(opts.output, "add", &output, Some(&human))
}
