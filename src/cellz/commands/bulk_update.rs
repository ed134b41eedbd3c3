use crate::commands::{record, CmdResult};
use crate::error::{CellzError, Result};
use crate::model::Source;
use crate::store::NotebookStore;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

use super::helpers::find_cell;

/// One parsed instruction file: target cell id, replacement source, and the
/// file it came from (for reporting).
struct Instruction {
    id: String,
    content: String,
    file: PathBuf,
}

fn parse_instruction(path: &Path) -> Result<Instruction> {
    if !path.exists() {
        return Err(CellzError::Usage(format!(
            "update file not found: {}",
            path.display()
        )));
    }
    let text = fs::read_to_string(path).map_err(CellzError::Io)?;
    if text.trim().is_empty() {
        return Err(CellzError::Usage(format!(
            "{}: file has no content",
            path.display()
        )));
    }

    // First line names the target; the remainder, line endings intact, is
    // the replacement source.
    let mut lines = text.split_inclusive('\n');
    let id = lines.next().unwrap_or("").trim().to_string();
    if id.is_empty() {
        return Err(CellzError::Usage(format!(
            "{}: first line must contain the target cell id",
            path.display()
        )));
    }
    let content: String = lines.collect();

    Ok(Instruction {
        id,
        content,
        file: path.to_path_buf(),
    })
}

pub fn run<S: NotebookStore>(
    store: &mut S,
    update_files: &[PathBuf],
    dry_run: bool,
) -> Result<CmdResult> {
    if update_files.is_empty() {
        return Err(CellzError::Usage(
            "provide at least one --update-file".to_string(),
        ));
    }

    let mut notebook = store.load()?;
    let instructions = update_files
        .iter()
        .map(|path| parse_instruction(path))
        .collect::<Result<Vec<_>>>()?;

    // Every id must resolve before anything is touched.
    let missing: Vec<&str> = instructions
        .iter()
        .filter(|ins| !notebook.contains_id(&ins.id))
        .map(|ins| ins.id.as_str())
        .collect();
    if !missing.is_empty() {
        return Err(CellzError::CellsNotFound(missing.join(", ")));
    }

    let mut details: Vec<Value> = Vec::with_capacity(instructions.len());
    for ins in &instructions {
        let (_, cell) = find_cell(&notebook, &ins.id)?;
        details.push(json!({
            "id": ins.id,
            "file": ins.file.display().to_string(),
            "old_chars": cell.source.char_count(),
            "new_chars": ins.content.chars().count(),
        }));
    }

    if dry_run {
        return Ok(CmdResult::default().with_outcome(record(json!({
            "action": "bulk-update-source",
            "updates": details,
        }))));
    }

    for ins in instructions {
        let (pos, _) = find_cell(&notebook, &ins.id)?;
        notebook.cells[pos].source = Source::Text(ins.content);
    }
    store.save(&notebook)?;

    Ok(CmdResult::default().with_outcome(record(json!({
        "status": "bulk-updated",
        "updated": details.len(),
        "details": details,
    }))))
}
