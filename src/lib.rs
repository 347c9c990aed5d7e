//! taski - To-Do List Library
//!
//! This library provides the core functionality for the taski CLI tool:
//! a to-do list persisted in a single JSON file, with soft delete, restore,
//! and time-based purging of old trash.
//!
//! # Core Concepts
//!
//! - **Task book**: the ordered collection of tasks, owned by one JSON file
//! - **Soft delete**: deleted tasks stay in the file, hidden from `view`,
//!   until restored or purged
//! - **Retention**: a trashed task older than the retention window is
//!   permanently dropped by the janitor pass that runs at startup
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `codec`: JSON encoding/decoding of the data file
//! - `config`: Configuration loading from `taski.toml`
//! - `error`: Error types and result aliases
//! - `lock`: File locking and atomic writes
//! - `output`: Human and JSON output formatting
//! - `store`: File-level load-mutate-save operations
//! - `task`: Task records and in-memory mutations

pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod lock;
pub mod output;
pub mod store;
pub mod task;

pub use error::{Error, Result};
