use crate::commands::CmdResult;
use crate::error::{CellzError, Result};
use crate::model::CellType;
use crate::render::{render_fields, Truncate};
use crate::store::NotebookStore;

pub fn run<S: NotebookStore>(
    store: &S,
    fields: &[String],
    limit: Truncate,
    cell_type: Option<CellType>,
) -> Result<CmdResult> {
    // Execution outputs are unbounded; refuse to dump them without a limit.
    if limit == Truncate::Unlimited && fields.iter().any(|f| f == "outputs") {
        return Err(CellzError::Usage(
            "listing outputs without a truncation limit is not allowed".to_string(),
        ));
    }

    let notebook = store.load()?;
    let mut records = Vec::new();
    for cell in &notebook.cells {
        if let Some(wanted) = cell_type {
            if cell.cell_type != wanted {
                continue;
            }
        }
        records.push(render_fields(cell, fields, limit)?);
    }

    Ok(CmdResult::default().with_records(records))
}
