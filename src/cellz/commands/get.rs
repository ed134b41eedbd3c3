use crate::commands::CmdResult;
use crate::error::Result;
use crate::render::{render_fields, Truncate};
use crate::store::NotebookStore;

use super::helpers::find_cell;

pub fn run<S: NotebookStore>(
    store: &S,
    id: &str,
    fields: &[String],
    limit: Truncate,
) -> Result<CmdResult> {
    let notebook = store.load()?;
    let (_, cell) = find_cell(&notebook, id)?;
    let record = render_fields(cell, fields, limit)?;
    Ok(CmdResult::default().with_outcome(record))
}
