use crate::commands::{record, CmdResult};
use crate::error::Result;
use crate::render::Truncate;
use crate::store::NotebookStore;
use serde_json::json;

use super::helpers::find_cell;

pub fn run<S: NotebookStore>(
    store: &mut S,
    id: &str,
    limit: Truncate,
    dry_run: bool,
) -> Result<CmdResult> {
    let mut notebook = store.load()?;
    let (pos, cell) = find_cell(&notebook, id)?;

    if dry_run {
        return Ok(CmdResult::default().with_outcome(record(json!({
            "action": "delete",
            "id": id,
            "type": cell.cell_type.as_str(),
            "source": limit.apply(&cell.source.as_text()),
        }))));
    }

    notebook.cells.remove(pos);
    store.save(&notebook)?;

    Ok(CmdResult::default().with_outcome(record(json!({
        "status": "deleted",
        "id": id,
    }))))
}
