//! # Storage Layer
//!
//! The [`NotebookStore`] trait abstracts where the notebook document lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production `.ipynb` file on disk, read whole and
//!   written whole
//! - [`memory::InMemoryStore`]: in-memory document for testing, with a
//!   record of what (if anything) was persisted
//!
//! The document is loaded fresh for every command invocation; there is no
//! persistent process state and no cross-invocation locking. Concurrent runs
//! against the same file are not coordinated — an accepted limitation of a
//! single-user CLI tool.

use crate::error::Result;
use crate::model::Notebook;

pub mod fs;
pub mod memory;

/// Abstract interface for loading and persisting one notebook document.
pub trait NotebookStore {
    /// Load the full document into memory
    fn load(&self) -> Result<Notebook>;

    /// Write the in-memory document back, preserving format markers
    fn save(&mut self, notebook: &Notebook) -> Result<()>;
}
