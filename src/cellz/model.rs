use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    Code,
    Markdown,
    // Accepted on load so real notebooks round-trip; new cells never get it.
    Raw,
}

impl CellType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CellType::Code => "code",
            CellType::Markdown => "markdown",
            CellType::Raw => "raw",
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CellType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "code" => Ok(CellType::Code),
            "markdown" => Ok(CellType::Markdown),
            _ => Err(format!("cell type must be 'markdown' or 'code', got '{}'", s)),
        }
    }
}

/// A cell's source text as it appears on disk: either one string or a list
/// of line-strings. Both shapes are accepted; rendering concatenates lines
/// with no separator. Edits always write the canonical `Text` form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Source {
    Text(String),
    Lines(Vec<String>),
}

impl Default for Source {
    fn default() -> Self {
        Source::Text(String::new())
    }
}

impl Source {
    pub fn as_text(&self) -> String {
        match self {
            Source::Text(text) => text.clone(),
            Source::Lines(lines) => lines.concat(),
        }
    }

    pub fn char_count(&self) -> usize {
        match self {
            Source::Text(text) => text.chars().count(),
            Source::Lines(lines) => lines.iter().map(|l| l.chars().count()).sum(),
        }
    }
}

/// One notebook cell. `id`, `cell_type` and `source` are modeled; everything
/// else the document carries (outputs, metadata, execution_count, ...) is
/// preserved verbatim in `rest` and written back untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    // Notebooks older than nbformat 4.5 have no cell ids; tolerate the gap
    // on read and never invent an id on write.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub cell_type: CellType,
    #[serde(default)]
    pub source: Source,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Cell {
    /// Build a new cell with a fresh id and the baseline fields the notebook
    /// format expects for its type.
    pub fn new(cell_type: CellType, content: String) -> Self {
        let mut rest = Map::new();
        rest.insert("metadata".to_string(), Value::Object(Map::new()));
        if cell_type == CellType::Code {
            rest.insert("execution_count".to_string(), Value::Null);
            rest.insert("outputs".to_string(), Value::Array(Vec::new()));
        }
        Self {
            id: new_cell_id(),
            cell_type,
            source: Source::Text(content),
            rest,
        }
    }

    /// Raw access to a preserved field by its on-disk name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.rest.get(name)
    }
}

/// The full notebook document: ordered cell sequence, document metadata, and
/// the format version markers. Unknown top-level fields survive round-trips.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notebook {
    pub cells: Vec<Cell>,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    pub nbformat: u64,
    pub nbformat_minor: u64,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Notebook {
    pub fn contains_id(&self, id: &str) -> bool {
        self.cells.iter().any(|cell| cell.id == id)
    }
}

/// Random 128-bit cell id rendered as 32 lowercase hex chars, the shape
/// nbformat's own helpers produce.
pub fn new_cell_id() -> String {
    Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn source_accepts_both_shapes() {
        let text: Source = serde_json::from_value(json!("x = 1\ny = 2\n")).unwrap();
        assert_eq!(text.as_text(), "x = 1\ny = 2\n");

        let lines: Source = serde_json::from_value(json!(["x = 1\n", "y = 2\n"])).unwrap();
        assert_eq!(lines.as_text(), "x = 1\ny = 2\n");
        assert_eq!(lines.char_count(), 12);
    }

    #[test]
    fn line_shape_survives_round_trip() {
        let lines = Source::Lines(vec!["a\n".to_string(), "b".to_string()]);
        let value = serde_json::to_value(&lines).unwrap();
        assert_eq!(value, json!(["a\n", "b"]));
    }

    #[test]
    fn cell_preserves_unknown_fields() {
        let cell: Cell = serde_json::from_value(json!({
            "id": "abc",
            "cell_type": "code",
            "source": "x = 1",
            "execution_count": 3,
            "outputs": [{"output_type": "stream", "text": "hi"}],
            "metadata": {"collapsed": true}
        }))
        .unwrap();

        assert_eq!(cell.field("execution_count"), Some(&json!(3)));
        let back = serde_json::to_value(&cell).unwrap();
        assert_eq!(back["outputs"], json!([{"output_type": "stream", "text": "hi"}]));
        assert_eq!(back["metadata"], json!({"collapsed": true}));
    }

    #[test]
    fn cell_without_id_round_trips_without_one() {
        let cell: Cell = serde_json::from_value(json!({
            "cell_type": "markdown",
            "source": "# hi"
        }))
        .unwrap();
        assert!(cell.id.is_empty());

        let back = serde_json::to_value(&cell).unwrap();
        assert!(back.get("id").is_none());
    }

    #[test]
    fn new_code_cell_carries_baseline_fields() {
        let cell = Cell::new(CellType::Code, "x = 1".to_string());
        assert_eq!(cell.id.len(), 32);
        assert_eq!(cell.field("outputs"), Some(&json!([])));
        assert_eq!(cell.field("execution_count"), Some(&Value::Null));

        let md = Cell::new(CellType::Markdown, "# hi".to_string());
        assert!(md.field("outputs").is_none());
        assert_eq!(md.field("metadata"), Some(&json!({})));
    }

    #[test]
    fn raw_cells_parse_but_raw_is_not_a_cli_type() {
        let cell: Cell = serde_json::from_value(json!({
            "id": "r1",
            "cell_type": "raw",
            "source": ""
        }))
        .unwrap();
        assert_eq!(cell.cell_type, CellType::Raw);
        assert!("raw".parse::<CellType>().is_err());
        assert_eq!("markdown".parse::<CellType>().unwrap(), CellType::Markdown);
    }
}
