//! Task records and the in-memory task book
//!
//! A task lives in one of two observable states: active, or soft-deleted
//! (in the trash). Soft-deleted tasks stay in the sequence so they can be
//! restored; they only leave it for good when a purge pass finds their
//! `deleted_at` older than the retention window.
//!
//! All mutations here are pure in-memory transforms. File-level
//! load-mutate-save plumbing lives in [`crate::store`].

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single to-do item as persisted in the data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Monotonic identifier assigned at creation, never reused.
    #[serde(default)]
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Creation time, reset on every change.
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub is_deleted: bool,
    /// Set if and only if `is_deleted` is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn is_active(&self) -> bool {
        !self.is_deleted
    }
}

/// Fields supplied by the user when creating a task.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
}

/// The full ordered task collection, mirroring the on-disk layout.
///
/// `size` tracks the active (non-deleted) count. Mutations keep it in step
/// incrementally; the codec reconciles it against the actual records on
/// every load so a drifted file heals itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskBook {
    #[serde(default)]
    pub size: usize,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl TaskBook {
    /// Number of records in the raw sequence, deleted ones included.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Active count derived from the records themselves.
    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_active()).count()
    }

    /// Recompute `size` from the records. Called by the codec after decode.
    pub fn reconcile_size(&mut self) {
        self.size = self.active_count();
    }

    fn next_id(&self) -> u64 {
        self.tasks.iter().map(|t| t.id + 1).max().unwrap_or(0)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.tasks.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.tasks.len(),
            });
        }
        Ok(())
    }

    /// Append a new active task at the end of the sequence.
    pub fn add(&mut self, draft: TaskDraft, now: DateTime<Utc>) -> &Task {
        let task = Task {
            id: self.next_id(),
            title: draft.title,
            description: draft.description,
            date: now,
            is_deleted: false,
            deleted_at: None,
        };
        let index = self.tasks.len();
        self.tasks.push(task);
        self.size += 1;
        &self.tasks[index]
    }

    /// Non-deleted tasks paired with their raw position in the sequence,
    /// original order preserved. The position is what `change`, `delete`,
    /// and `restore` address.
    pub fn visible(&self) -> Vec<(usize, &Task)> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_active())
            .collect()
    }

    /// Update title and/or description of the task at `index`.
    ///
    /// An empty string leaves the field unchanged; asking to change nothing
    /// is rejected. The timestamp is reset on success.
    pub fn change(
        &mut self,
        index: usize,
        new_title: &str,
        new_description: &str,
        now: DateTime<Utc>,
    ) -> Result<&Task> {
        if new_title.is_empty() && new_description.is_empty() {
            return Err(Error::InvalidArgument("no value is changed".to_string()));
        }
        self.check_index(index)?;

        let task = &mut self.tasks[index];
        if !new_title.is_empty() {
            task.title = new_title.to_string();
        }
        if !new_description.is_empty() {
            task.description = new_description.to_string();
        }
        task.date = now;
        Ok(&self.tasks[index])
    }

    /// Soft-delete the task at `index`. The record stays in the sequence.
    pub fn remove(&mut self, index: usize, now: DateTime<Utc>) -> Result<&Task> {
        self.check_index(index)?;

        let task = &mut self.tasks[index];
        if task.is_active() {
            task.is_deleted = true;
            task.deleted_at = Some(now);
            self.size -= 1;
        } else {
            task.deleted_at = Some(now);
        }
        Ok(&self.tasks[index])
    }

    /// Bring the task at `index` back from the trash.
    ///
    /// Restoring a task that is not deleted is a silent no-op.
    pub fn restore_one(&mut self, index: usize) -> Result<&Task> {
        self.check_index(index)?;

        let task = &mut self.tasks[index];
        if task.is_deleted {
            task.is_deleted = false;
            task.deleted_at = None;
            self.size += 1;
        }
        Ok(&self.tasks[index])
    }

    /// Bring every trashed task back. Returns how many were restored.
    pub fn restore_all(&mut self) -> usize {
        let mut restored = 0;
        for task in &mut self.tasks {
            if task.is_deleted {
                task.is_deleted = false;
                task.deleted_at = None;
                restored += 1;
            }
        }
        self.size = self.tasks.len();
        restored
    }

    /// Drop soft-deleted tasks whose trash age has reached `retention`.
    ///
    /// Kept: active tasks, deleted tasks younger than the window, and
    /// deleted tasks missing a `deleted_at` (malformed, retained rather
    /// than silently destroyed). Returns how many records were purged.
    pub fn purge_expired(&mut self, retention: Duration, now: DateTime<Utc>) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| {
            if task.is_active() {
                return true;
            }
            match task.deleted_at {
                Some(deleted_at) => now - deleted_at < retention,
                None => true,
            }
        });
        before - self.tasks.len()
    }
}
