//! Tabular reader: delimited text → `Record`s.

use std::path::Path;

pub mod delimiter;

pub use delimiter::Delimiter;

use crate::domain::{DelimiterStrategy, Record};
use crate::error::EnvSplitError;
use crate::utils::read_text;

pub const FILE_COLUMN: &str = "file";
pub const KEY_COLUMN: &str = "key";
pub const VALUE_COLUMN: &str = "value";

const BOM: char = '\u{feff}';

/// Zero-based positions of the required columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    pub file: usize,
    pub key: usize,
    pub value: usize,
}

impl ColumnIndex {
    /// First exact, case-sensitive match of each required header.
    pub fn locate(headers: &[String]) -> Result<Self, EnvSplitError> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        match (find(FILE_COLUMN), find(KEY_COLUMN), find(VALUE_COLUMN)) {
            (Some(file), Some(key), Some(value)) => Ok(Self { file, key, value }),
            (file, key, value) => {
                let missing = [(FILE_COLUMN, file), (KEY_COLUMN, key), (VALUE_COLUMN, value)]
                    .into_iter()
                    .filter(|(_, idx)| idx.is_none())
                    .map(|(name, _)| name)
                    .collect();
                Err(EnvSplitError::MissingColumns { missing, headers: headers.to_vec() })
            }
        }
    }
}

/// Read `path` and parse it with `strategy`.
pub fn read_records(
    path: &Path,
    strategy: DelimiterStrategy,
) -> Result<Vec<Record>, EnvSplitError> {
    let content = read_text(path)?;
    parse_records(&content, strategy)
}

/// Whitespace and byte-order marks at either end of the content are dropped.
fn trim_content(content: &str) -> &str {
    content.trim_matches(|c: char| c.is_whitespace() || c == BOM)
}

/// Parse table text into records, dropping rows whose `file` or `key` is empty.
pub fn parse_records(
    content: &str,
    strategy: DelimiterStrategy,
) -> Result<Vec<Record>, EnvSplitError> {
    let normalized = strategy.normalize_newlines(content);
    let mut lines = trim_content(&normalized).split('\n');

    let header = match lines.next() {
        Some(line) if !line.is_empty() => line,
        _ => return Err(EnvSplitError::EmptyInput),
    };

    let delimiter = strategy.resolve(header);
    tracing::debug!("Using {:?} delimiter ({:?} strategy)", delimiter, strategy);

    let headers: Vec<String> =
        delimiter.split(header).into_iter().map(|h| h.trim().to_string()).collect();
    let columns = ColumnIndex::locate(&headers)?;

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for (offset, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let fields = delimiter.split(line);
        let field = |idx: usize| fields.get(idx).map_or("", |f| f.trim());

        let file = field(columns.file);
        let key = field(columns.key);
        if file.is_empty() || key.is_empty() {
            skipped += 1;
            tracing::debug!("Skipping row {}: empty file or key", offset + 2);
            continue;
        }

        records.push(Record {
            file: file.to_string(),
            key: key.to_string(),
            value: field(columns.value).to_string(),
        });
    }

    tracing::debug!("Parsed {} records, skipped {} rows", records.len(), skipped);
    Ok(records)
}
