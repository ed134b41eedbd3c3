use super::NotebookStore;
use crate::error::{CellzError, Result};
use crate::model::Notebook;
use std::fs;
use std::path::PathBuf;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl NotebookStore for FileStore {
    fn load(&self) -> Result<Notebook> {
        if !self.path.exists() {
            return Err(CellzError::NotebookNotFound(self.path.clone()));
        }
        let content = fs::read_to_string(&self.path).map_err(CellzError::Io)?;
        let notebook = serde_json::from_str(&content).map_err(CellzError::Serialization)?;
        Ok(notebook)
    }

    fn save(&mut self, notebook: &Notebook) -> Result<()> {
        let content = serde_json::to_string_pretty(notebook).map_err(CellzError::Serialization)?;
        fs::write(&self.path, content).map_err(CellzError::Io)?;
        Ok(())
    }
}
