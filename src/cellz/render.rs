//! Field rendering for console output.
//!
//! Cells expose a small public field vocabulary: `id`, `type` (the on-disk
//! `cell_type`), `source`, and the computed `summary`. Any other requested
//! name must be literally present on the cell record (`outputs`,
//! `execution_count`, ...). Rendered values are strings: line-list sources
//! concatenate, non-string JSON is compact-encoded, then the truncation
//! limit applies.

use crate::commands::Record;
use crate::error::{CellzError, Result};
use crate::model::Cell;
use serde_json::Value;
use std::str::FromStr;

/// Default field set for `list`.
pub const LIST_FIELDS: &[&str] = &["id", "type", "summary"];
/// Default field set for `get`.
pub const GET_FIELDS: &[&str] = &["id", "type", "source"];

const SUMMARY_LIMIT: usize = 80;

/// Character limit for rendered fields. `Unlimited` disables truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Truncate {
    Chars(usize),
    Unlimited,
}

impl Default for Truncate {
    fn default() -> Self {
        Truncate::Chars(100)
    }
}

impl Truncate {
    pub fn apply(&self, text: &str) -> String {
        match *self {
            Truncate::Unlimited => text.to_string(),
            Truncate::Chars(limit) => {
                if text.chars().count() <= limit {
                    text.to_string()
                } else {
                    text.chars().take(limit).collect()
                }
            }
        }
    }
}

impl FromStr for Truncate {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "none" | "unlimited" | "-1" => Ok(Truncate::Unlimited),
            other => other.parse::<usize>().map(Truncate::Chars).map_err(|_| {
                format!(
                    "invalid truncation limit '{}' (expected a count, or 'none' for unlimited)",
                    other
                )
            }),
        }
    }
}

/// Split a comma-separated `--fields` value, falling back to the command's
/// default set when the flag is omitted.
pub fn parse_fields(raw: Option<&str>, default: &[&str]) -> Result<Vec<String>> {
    match raw {
        None => Ok(default.iter().map(|f| f.to_string()).collect()),
        Some(raw) => {
            let fields: Vec<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(String::from)
                .collect();
            if fields.is_empty() {
                return Err(CellzError::Usage("provide at least one field".to_string()));
            }
            Ok(fields)
        }
    }
}

/// Flatten a JSON value to one string: strings pass through, lists of
/// strings concatenate with no separator, everything else is
/// compact-encoded JSON.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => {
            items.iter().filter_map(Value::as_str).collect()
        }
        other => other.to_string(),
    }
}

/// Whitespace-collapsed synopsis, capped at 80 chars with an ellipsis.
pub fn summarize(text: &str) -> String {
    let flattened = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flattened.chars().count() <= SUMMARY_LIMIT {
        flattened
    } else {
        let head: String = flattened.chars().take(SUMMARY_LIMIT - 3).collect();
        format!("{}...", head)
    }
}

pub fn render_field(cell: &Cell, field: &str, limit: Truncate) -> Result<Value> {
    let text = match field {
        "id" => cell.id.clone(),
        "type" | "cell_type" => cell.cell_type.as_str().to_string(),
        "source" => cell.source.as_text(),
        "summary" => summarize(&cell.source.as_text()),
        other => {
            let value = cell
                .field(other)
                .ok_or_else(|| CellzError::FieldNotFound(other.to_string()))?;
            stringify(value)
        }
    };
    Ok(Value::String(limit.apply(&text)))
}

/// Render the requested fields of one cell as a JSON record, in request
/// order.
pub fn render_fields(cell: &Cell, fields: &[String], limit: Truncate) -> Result<Record> {
    let mut record = Record::new();
    for field in fields {
        record.insert(field.clone(), render_field(cell, field, limit)?);
    }
    Ok(record)
}
