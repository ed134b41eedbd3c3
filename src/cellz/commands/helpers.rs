use crate::error::{CellzError, Result};
use crate::model::{Cell, Notebook};
use std::fs;
use std::path::Path;

/// Linear scan for the first cell matching `id`, returning it with its
/// position. Missing ids terminate the command.
pub fn find_cell<'a>(notebook: &'a Notebook, id: &str) -> Result<(usize, &'a Cell)> {
    notebook
        .cells
        .iter()
        .enumerate()
        .find(|(_, cell)| cell.id == id)
        .ok_or_else(|| CellzError::CellNotFound(id.to_string()))
}

/// Resolve replacement content from an inline argument or a file, exactly
/// one of which must be given.
pub fn read_content(content: Option<String>, content_file: Option<&Path>) -> Result<String> {
    if let Some(path) = content_file {
        return fs::read_to_string(path).map_err(CellzError::Io);
    }
    content.ok_or(CellzError::ContentMissing)
}
