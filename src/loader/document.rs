//! Structured document loaders

use super::csv::parse_csv;
use super::options::CsvOptions;
use super::text::read_error;
use crate::codec::{decode_record, visit_json_lines};
use crate::error::{Error, Result};
use crate::types::Record;
use std::fs;
use std::path::Path;

/// Load a JSON document
///
/// Supports three layouts:
/// 1. JSON array: `[{...}, {...}]`
/// 2. JSON object: `{"key": {...}}`, returned as-is
/// 3. NDJSON: one value per line, returned as an array
///
/// Files with an `.ndjson` extension are always read as NDJSON; otherwise
/// the first non-whitespace character decides.
pub fn load_json(path: impl AsRef<Path>) -> Result<Record> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| read_error(path, e))?;

    let is_ndjson = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ndjson"));

    let first = content.trim_start().chars().next();
    if first.is_none() && !is_ndjson {
        return Err(Error::decode(format!(
            "invalid JSON in '{}': document is empty",
            path.display()
        )));
    }

    if !is_ndjson && matches!(first, Some('[' | '{')) {
        return decode_record(&content)
            .map_err(|e| Error::decode(format!("invalid JSON in '{}': {e}", path.display())));
    }

    let mut records = Vec::new();
    visit_json_lines(&content, |record| {
        records.push(record);
        Ok(())
    })
    .map_err(|e| Error::decode(format!("invalid NDJSON in '{}': {e}", path.display())))?;
    Ok(Record::Array(records))
}

/// Load a CSV file as rows of strings
pub fn load_csv(path: impl AsRef<Path>, options: &CsvOptions) -> Result<Vec<Vec<String>>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| read_error(path, e))?;

    parse_csv(&content, options).map_err(|e| match e {
        Error::CsvParse { message } => Error::csv(format!(
            "failed to parse CSV '{}': {message}",
            path.display()
        )),
        other => other,
    })
}
