//! `taski restore` - bring tasks back from the trash

use std::path::PathBuf;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::output::{emit_success, HumanOutput, OutputOptions};

/// Options for `taski restore`
pub struct RestoreOptions {
    pub index: Option<i64>,
    pub all: bool,
    pub file: Option<PathBuf>,
    pub output: OutputOptions,
}

/// Output for `taski restore`
#[derive(Debug, Serialize)]
pub struct RestoreOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    pub restored: usize,
}

pub fn run(opts: RestoreOptions) -> Result<()> {
    let store = super::open_store(opts.file.as_ref())?;

    if opts.all {
        let restored = store.restore_all()?;

        let output = RestoreOutput {
            index: None,
            restored,
        };

        let mut human = HumanOutput::new("Restored all trashed tasks");
        human.push_summary("Restored", restored.to_string());
        human.push_next_step("taski view");

        return emit_success(opts.output, "restore", &output, Some(&human));
    }

    let index = match opts.index {
        Some(index) => super::parse_index(index)?,
        None => {
            return Err(Error::InvalidArgument(
                "restore requires --index or --all".to_string(),
            ))
        }
    };

    let (task, changed) = store.restore_task(index)?;

    let output = RestoreOutput {
        index: Some(index),
        restored: usize::from(changed),
    };

    let mut human = if changed {
        HumanOutput::new("Task restored")
    } else {
        HumanOutput::new("Task was not in the trash; nothing to do")
    };
    human.push_summary("Index", index.to_string());
    human.push_summary("Title", &task.title);
    human.push_next_step("taski view");

    emit_success(opts.output, "restore", &output, Some(&human))
}
