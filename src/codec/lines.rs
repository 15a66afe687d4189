//! JSON Lines encoding and decoding

use super::record::{decode_line, encode_record};
use crate::error::{Error, Result};
use crate::types::Record;

/// Join the encoded records with `\n`; an empty batch yields an empty string
pub fn encode_json_lines(records: &[Record]) -> Result<String> {
    let mut out = String::new();
    for (index, record) in records.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let line = encode_record(record).map_err(|e| {
            Error::Other(format!("failed to encode object at index {index}: {e}"))
        })?;
        out.push_str(&line);
    }
    Ok(out)
}

/// Decode JSON Lines text, skipping blank lines
///
/// Empty or whitespace-only input yields no records.
pub fn decode_json_lines(text: &str) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    visit_json_lines(text, |record| {
        records.push(record);
        Ok(())
    })?;
    Ok(records)
}

/// Decode JSON Lines text one record at a time, handing each to `visit`.
///
/// Stops at the first malformed line (reported with its 1-based line
/// number) or the first error returned by `visit`. Returns the number of
/// records visited.
pub fn visit_json_lines<F>(text: &str, mut visit: F) -> Result<usize>
where
    F: FnMut(Record) -> Result<()>,
{
    let mut count = 0;
    for (line_num, line) in text.split('\n').enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        visit(decode_line(line, line_num + 1)?)?;
        count += 1;
    }
    Ok(count)
}
