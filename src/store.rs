//! File-level task store: lock, load, mutate, save
//!
//! Each operation is one full round trip through the codec. There is no
//! in-memory state between invocations; the data file owns the collection.
//! The whole sequence runs under an exclusive flock on `<file>.lock` so two
//! concurrent taski processes cannot lose each other's updates.

use std::path::{Path, PathBuf};

use chrono::{Duration, Utc};
use tracing::debug;

use crate::codec;
use crate::error::Result;
use crate::lock::{self, FileLock, DEFAULT_LOCK_TIMEOUT_MS};
use crate::task::{Task, TaskBook, TaskDraft};

/// Tasks visible through `view`, each with the raw index to target it.
#[derive(Debug, Clone)]
pub struct VisibleTasks {
    /// Stored active count.
    pub size: usize,
    /// `(raw index, task)` pairs in original order.
    pub tasks: Vec<(usize, Task)>,
}

/// Handle on a task data file.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn with_book<T>(&self, f: impl FnOnce(&mut TaskBook) -> Result<T>) -> Result<T> {
        let _lock = FileLock::acquire(lock::lock_path(&self.path), DEFAULT_LOCK_TIMEOUT_MS)?;
        let mut book = codec::load(&self.path)?;
        let result = f(&mut book)?;
        codec::save(&self.path, &book)?;
        Ok(result)
    }

    /// Append a new task. Returns the stored record.
    pub fn add_task(&self, draft: TaskDraft) -> Result<Task> {
        self.with_book(|book| Ok(book.add(draft, Utc::now()).clone()))
    }

    /// All non-deleted tasks with their raw indices.
    pub fn read_tasks(&self) -> Result<VisibleTasks> {
        let _lock = FileLock::acquire(lock::lock_path(&self.path), DEFAULT_LOCK_TIMEOUT_MS)?;
        let book = codec::load(&self.path)?;
        Ok(VisibleTasks {
            size: book.size,
            tasks: book
                .visible()
                .into_iter()
                .map(|(index, task)| (index, task.clone()))
                .collect(),
        })
    }

    /// Update title and/or description of the task at `index`.
    pub fn change_task(&self, index: usize, new_title: &str, new_description: &str) -> Result<Task> {
        self.with_book(|book| {
            Ok(book
                .change(index, new_title, new_description, Utc::now())?
                .clone())
        })
    }

    /// Soft-delete the task at `index`.
    pub fn remove_task(&self, index: usize) -> Result<Task> {
        self.with_book(|book| Ok(book.remove(index, Utc::now())?.clone()))
    }

    /// Restore the task at `index` from the trash. Restoring an active task
    /// is a no-op; the returned flag says whether anything changed.
    pub fn restore_task(&self, index: usize) -> Result<(Task, bool)> {
        self.with_book(|book| {
            let was_deleted = book.tasks.get(index).map(|t| t.is_deleted).unwrap_or(false);
            let task = book.restore_one(index)?.clone();
            Ok((task, was_deleted))
        })
    }

    /// Restore every trashed task. Returns how many were restored.
    pub fn restore_all(&self) -> Result<usize> {
        self.with_book(|book| Ok(book.restore_all()))
    }

    /// Permanently drop trashed tasks older than `retention`. Returns how
    /// many records were purged.
    pub fn clean_up(&self, retention: Duration) -> Result<usize> {
        self.with_book(|book| {
            let purged = book.purge_expired(retention, Utc::now());
            if purged > 0 {
                debug!(purged, "purged expired tasks");
            }
            Ok(purged)
        })
    }
}
