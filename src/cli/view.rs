//! `taski view` - list tasks that are not in the trash

use std::path::PathBuf;

use serde::Serialize;

use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};

/// Options for `taski view`
pub struct ViewOptions {
    pub file: Option<PathBuf>,
    pub output: OutputOptions,
}

/// One listed task
#[derive(Debug, Serialize)]
pub struct ViewEntry {
    /// Raw index, the number `change`/`delete`/`restore` target
    pub index: usize,
    pub id: u64,
    pub title: String,
    pub description: String,
    pub date: chrono::DateTime<chrono::Utc>,
}

/// Output for `taski view`
#[derive(Debug, Serialize)]
pub struct ViewOutput {
    pub total: usize,
    pub tasks: Vec<ViewEntry>,
}

pub fn run(opts: ViewOptions) -> Result<()> {
    let store = super::open_store(opts.file.as_ref())?;
    let visible = store.read_tasks()?;

    let output = ViewOutput {
        total: visible.size,
        tasks: visible
            .tasks
            .into_iter()
            .map(|(index, task)| ViewEntry {
                index,
                id: task.id,
                title: task.title,
                description: task.description,
                date: task.date,
            })
            .collect(),
    };

    let mut human = HumanOutput::new("Here are your tasks");
    if output.tasks.is_empty() {
        human.push_detail("(none - add one with: taski add --title <t> --desc <d>)");
    }
    for entry in &output.tasks {
        human.push_detail(format!(
            "[{}] {} ({})",
            entry.index,
            entry.title,
            entry.date.format("%d %b %Y, %H:%M")
        ));
        human.push_detail(format!("    {}", entry.description));
    }
    human.push_summary("Tasks", output.total.to_string());
    human.push_next_step("taski add --title <title> --desc <description>");
    human.push_next_step("taski change --index <index> --title <title> --desc <description>");
    human.push_next_step("taski delete --index <index>");
    human.push_next_step("taski restore --index <index> | --all");

    emit_success(opts.output, "view", &output, Some(&human))
}
