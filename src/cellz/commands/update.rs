use crate::commands::{record, CmdResult};
use crate::error::{CellzError, Result};
use crate::model::Source;
use crate::store::NotebookStore;
use serde_json::json;

use super::helpers::find_cell;

pub fn run<S: NotebookStore>(
    store: &mut S,
    id: &str,
    field: &str,
    content: String,
    dry_run: bool,
) -> Result<CmdResult> {
    if field != "source" {
        return Err(CellzError::FieldNotEditable(field.to_string()));
    }

    let mut notebook = store.load()?;
    let (pos, cell) = find_cell(&notebook, id)?;
    let old_chars = cell.source.char_count();
    let new_chars = content.chars().count();

    if dry_run {
        return Ok(CmdResult::default().with_outcome(record(json!({
            "action": "update",
            "id": id,
            "field": field,
            "old_chars": old_chars,
            "new_chars": new_chars,
        }))));
    }

    notebook.cells[pos].source = Source::Text(content);
    store.save(&notebook)?;

    Ok(CmdResult::default().with_outcome(record(json!({
        "status": "updated",
        "id": id,
        "field": field,
        "chars": new_chars,
    }))))
}
