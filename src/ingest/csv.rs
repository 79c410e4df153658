//! Minimal CSV reading
//!
//! Quote-aware line parsing: fields may be wrapped in double quotes to
//! protect embedded commas, and `""` inside a quoted field is a literal
//! quote. That covers what the study templates export; no multi-line fields.

use super::error::{IngestError, Result};
use std::path::Path;

/// A raw table: header plus string records.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    /// Header cells as they appeared in the file
    pub columns: Vec<String>,
    /// One record per non-empty data line
    pub records: Vec<Vec<String>>,
}

/// Read a CSV file into a [`Table`].
pub fn read_csv(path: &Path) -> Result<Table> {
    let content = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_csv(&content)
}

/// Parse CSV text into a [`Table`].
pub fn parse_csv(content: &str) -> Result<Table> {
    let mut lines = content.lines().filter(|l| !l.trim().is_empty());

    let header = lines.next().ok_or(IngestError::EmptyInput)?;
    let columns = split_line(header)
        .into_iter()
        .map(|c| c.trim().to_string())
        .collect();

    let records = lines.map(split_line).collect();

    Ok(Table { columns, records })
}

fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut field));
            }
            _ => field.push(ch),
        }
    }
    fields.push(field);

    fields
}
