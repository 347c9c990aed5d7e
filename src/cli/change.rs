//! `taski change` - edit a task's title and/or description

use std::path::PathBuf;

use serde::Serialize;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};

/// Options for `taski change`
pub struct ChangeOptions {
    pub index: i64,
    pub title: String,
    pub description: String,
    pub file: Option<PathBuf>,
    pub output: OutputOptions,
}

/// Output for `taski change`
#[derive(Debug, Serialize)]
pub struct ChangeOutput {
    pub index: usize,
    pub title: String,
    pub description: String,
}

pub fn run(opts: ChangeOptions) -> Result<()> {
    let index = super::parse_index(opts.index)?;

    let store = super::open_store(opts.file.as_ref())?;
    let task = store.change_task(index, &opts.title, &opts.description)?;

    let output = ChangeOutput {
        index,
        title: task.title.clone(),
        description: task.description.clone(),
    };

    let mut human = HumanOutput::new("Changed task");
    human.push_summary("Index", index.to_string());
    human.push_summary("Title", &output.title);
    human.push_summary("Description", &output.description);
    human.push_next_step("taski view");

    emit_success(opts.output, "change", &output, Some(&human))
}
