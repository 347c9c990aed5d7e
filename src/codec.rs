//! Persistence codec: the data file <-> in-memory [`TaskBook`]
//!
//! One JSON file holds the whole collection; every save rewrites it in full.
//! A missing file is created empty on first load, and a zero-byte file
//! decodes to an empty book, so `taski` works out of the box with no setup.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::lock;
use crate::task::TaskBook;

/// Read the task book from `path`.
///
/// Creates the file (empty) if it does not exist. Malformed contents fail
/// with [`Error::Decode`]. The `size` counter is reconciled with the
/// decoded records before the book is returned.
pub fn load(path: &Path) -> Result<TaskBook> {
    if !path.exists() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::File::create(path)?;
        return Ok(TaskBook::default());
    }

    let contents = fs::read_to_string(path)?;
    if contents.trim().is_empty() {
        return Ok(TaskBook::default());
    }

    let mut book: TaskBook = serde_json::from_str(&contents).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    book.reconcile_size();
    Ok(book)
}

/// Serialize the full book and replace the file's entire content.
pub fn save(path: &Path, book: &TaskBook) -> Result<()> {
    let json = serde_json::to_string_pretty(book).map_err(Error::Encode)?;
    lock::write_atomic(path, json.as_bytes())
}
