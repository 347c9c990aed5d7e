//! `taski delete` - move a task to the trash (soft delete)

use std::path::PathBuf;

use serde::Serialize;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};

/// Options for `taski delete`
pub struct DeleteOptions {
    pub index: i64,
    pub file: Option<PathBuf>,
    pub output: OutputOptions,
}

/// Output for `taski delete`
#[derive(Debug, Serialize)]
pub struct DeleteOutput {
    pub index: usize,
    pub title: String,
}

pub fn run(opts: DeleteOptions) -> Result<()> {
    let index = super::parse_index(opts.index)?;

    let store = super::open_store(opts.file.as_ref())?;
    let task = store.remove_task(index)?;

    let output = DeleteOutput {
        index,
        title: task.title.clone(),
    };

    let mut human = HumanOutput::new("Deleted task");
    human.push_summary("Index", index.to_string());
    human.push_summary("Title", &output.title);
    human.push_next_step("taski view");
    human.push_next_step(format!("taski restore --index {index}"));

    emit_success(opts.output, "delete", &output, Some(&human))
}
