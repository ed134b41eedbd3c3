use crate::commands::{record, CmdResult};
use crate::error::{CellzError, Result};
use crate::model::{new_cell_id, Cell, CellType};
use crate::store::NotebookStore;
use serde_json::json;

use super::helpers::find_cell;

pub fn run<S: NotebookStore>(
    store: &mut S,
    cell_type: CellType,
    content: String,
    before_id: Option<&str>,
    dry_run: bool,
) -> Result<CmdResult> {
    // CLI parsing already restricts the type; guard for library callers.
    if cell_type == CellType::Raw {
        return Err(CellzError::Usage(
            "cell type must be 'markdown' or 'code'".to_string(),
        ));
    }

    let mut notebook = store.load()?;
    let chars = content.chars().count();
    let mut cell = Cell::new(cell_type, content);
    while notebook.contains_id(&cell.id) {
        cell.id = new_cell_id();
    }

    let position = match before_id {
        Some(target) => find_cell(&notebook, target)?.0,
        None => notebook.cells.len(),
    };

    if dry_run {
        return Ok(CmdResult::default().with_outcome(record(json!({
            "action": "insert",
            "new_id": cell.id,
            "type": cell.cell_type.as_str(),
            "chars": chars,
            "position": position,
        }))));
    }

    let new_id = cell.id.clone();
    notebook.cells.insert(position, cell);
    store.save(&notebook)?;

    Ok(CmdResult::default().with_outcome(record(json!({
        "status": "inserted",
        "new_id": new_id,
        "type": cell_type.as_str(),
        "position": position,
    }))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use serde_json::json;

    fn store() -> InMemoryStore {
        InMemoryStore::new(
            serde_json::from_value(json!({
                "cells": [
                    {"id": "a", "cell_type": "code", "source": "x = 1", "outputs": [], "execution_count": null, "metadata": {}},
                    {"id": "b", "cell_type": "markdown", "source": "# title", "metadata": {}}
                ],
                "metadata": {},
                "nbformat": 4,
                "nbformat_minor": 5
            }))
            .unwrap(),
        )
    }

    #[test]
    fn appends_when_no_target_is_given() {
        let mut st = store();
        let result = run(&mut st, CellType::Code, "y = 2".to_string(), None, false).unwrap();

        let outcome = result.outcome.unwrap();
        assert_eq!(outcome["status"], json!("inserted"));
        assert_eq!(outcome["position"], json!(2));

        let new_id = outcome["new_id"].as_str().unwrap();
        assert_eq!(new_id.len(), 32);
        assert_eq!(st.notebook().cells[2].id, new_id);
        assert_eq!(st.notebook().cells[2].source.as_text(), "y = 2");
    }

    #[test]
    fn inserts_before_the_named_cell() {
        let mut st = store();
        let result = run(
            &mut st,
            CellType::Markdown,
            "intro".to_string(),
            Some("b"),
            false,
        )
        .unwrap();

        assert_eq!(result.outcome.unwrap()["position"], json!(1));
        let ids: Vec<_> = st.notebook().cells.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids[0], "a");
        assert_eq!(ids[2], "b");
    }

    #[test]
    fn dry_run_previews_the_would_be_cell() {
        let mut st = store();
        let result = run(&mut st, CellType::Code, "y = 2".to_string(), Some("a"), true).unwrap();

        let outcome = result.outcome.unwrap();
        assert_eq!(outcome["action"], json!("insert"));
        assert_eq!(outcome["type"], json!("code"));
        assert_eq!(outcome["chars"], json!(5));
        assert_eq!(outcome["position"], json!(0));

        assert_eq!(st.save_count(), 0);
        assert_eq!(st.notebook().cells.len(), 2);
    }

    #[test]
    fn unknown_target_fails_before_any_write() {
        let mut st = store();
        let err = run(&mut st, CellType::Code, "y".to_string(), Some("zzz"), false).unwrap_err();
        assert!(matches!(err, CellzError::CellNotFound(_)));
        assert_eq!(st.save_count(), 0);
    }

    #[test]
    fn raw_cells_cannot_be_inserted() {
        let mut st = store();
        let err = run(&mut st, CellType::Raw, "".to_string(), None, false).unwrap_err();
        assert!(matches!(err, CellzError::Usage(_)));
    }

    #[test]
    fn insert_then_delete_restores_the_sequence() {
        let mut st = store();
        let before: Vec<_> = st.notebook().cells.iter().map(|c| c.id.clone()).collect();

        let result = run(&mut st, CellType::Code, "tmp".to_string(), Some("b"), false).unwrap();
        let new_id = result.outcome.unwrap()["new_id"].as_str().unwrap().to_string();

        crate::commands::delete::run(&mut st, &new_id, crate::render::Truncate::default(), false)
            .unwrap();

        let after: Vec<_> = st.notebook().cells.iter().map(|c| c.id.clone()).collect();
        assert_eq!(before, after);
    }
}
