//! # API Facade
//!
//! A **thin facade** over the command layer — the single entry point for all
//! cellz operations regardless of the UI driving them. It dispatches to the
//! right command function and returns structured `Result<CmdResult>` values;
//! business logic lives in `commands/*.rs` and presentation stays in the
//! CLI layer.
//!
//! `NotebookApi<S: NotebookStore>` is generic over the storage backend:
//! `FileStore` in production, `InMemoryStore` in tests.

use crate::commands;
use crate::error::Result;
use crate::model::CellType;
use crate::render::Truncate;
use crate::store::NotebookStore;
use std::path::PathBuf;

pub struct NotebookApi<S: NotebookStore> {
    store: S,
}

impl<S: NotebookStore> NotebookApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list(
        &self,
        fields: &[String],
        limit: Truncate,
        cell_type: Option<CellType>,
    ) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, fields, limit, cell_type)
    }

    pub fn get(&self, id: &str, fields: &[String], limit: Truncate) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, id, fields, limit)
    }

    pub fn update(
        &mut self,
        id: &str,
        field: &str,
        content: String,
        dry_run: bool,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, field, content, dry_run)
    }

    pub fn delete(&mut self, id: &str, limit: Truncate, dry_run: bool) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id, limit, dry_run)
    }

    pub fn insert(
        &mut self,
        cell_type: CellType,
        content: String,
        before_id: Option<&str>,
        dry_run: bool,
    ) -> Result<commands::CmdResult> {
        commands::insert::run(&mut self.store, cell_type, content, before_id, dry_run)
    }

    pub fn bulk_update_source(
        &mut self,
        update_files: &[PathBuf],
        dry_run: bool,
    ) -> Result<commands::CmdResult> {
        commands::bulk_update::run(&mut self.store, update_files, dry_run)
    }
}
