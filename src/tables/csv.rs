//! Row-level helpers shared by the enemy and motion loaders
//!
//! Both tables are plain comma-separated text with a header line. Fields are
//! positional, numeric cells hold percentages.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::core::error::{DamageError, Result};

pub const DELIMITER: char = ',';
/// Path reported for sources handed in as readers
pub const READER_SOURCE: &str = "<reader>";

/// Read a whole table source into memory
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| DamageError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a whole table source from an already-open reader
pub fn read_reader<R: Read>(mut reader: R) -> Result<String> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|source| DamageError::SourceUnavailable {
            path: PathBuf::from(READER_SOURCE),
            source,
        })?;
    Ok(content)
}

/// Split table text into its header line and the non-empty data lines.
///
/// Data lines carry their 1-based line number in the source.
pub fn split_table<'a>(
    content: &'a str,
) -> (Option<&'a str>, impl Iterator<Item = (usize, &'a str)> + 'a) {
    let mut lines = content.lines().enumerate();
    let header = lines.next().map(|(_, line)| line);
    let rows = lines
        .filter(|(_, line)| !line.is_empty())
        .map(|(index, line)| (index + 1, line));
    (header, rows)
}

/// Split a row into its positional fields
pub fn fields(line: &str) -> std::str::Split<'_, char> {
    line.split(DELIMITER)
}

/// Take the next positional field, failing if the row is too short
pub fn next_field<'a, I>(fields: &mut I, line: usize, column: usize) -> Result<&'a str>
where
    I: Iterator<Item = &'a str>,
{
    fields.next().ok_or_else(|| DamageError::Parse {
        line,
        column,
        value: String::new(),
    })
}

/// Parse a percentage cell into a fraction (`120.5` -> `1.205`).
/// `nan` and `inf` are rejected.
pub fn parse_percent(cell: &str, line: usize, column: usize) -> Result<f64> {
    match cell.trim().parse::<f64>() {
        Ok(percent) if percent.is_finite() => Ok(percent / 100.0),
        _ => Err(DamageError::Parse {
            line,
            column,
            value: cell.to_string(),
        }),
    }
}
