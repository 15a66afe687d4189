//! Single-record encoding
//!
//! `serde_json` escapes quotes, backslashes and every control character
//! (including `\n` and `\r`), so an encoded record never spans lines.
//! Non-ASCII text is emitted as raw UTF-8.

use crate::error::{Error, Result};
use crate::types::Record;
use std::io::Write;

/// Encode one record as a single line of JSON
pub fn encode_record(record: &Record) -> Result<String> {
    Ok(serde_json::to_string(record)?)
}

/// Decode one line of JSON into a record
///
/// The error reports line 1; line-oriented callers renumber it.
pub fn decode_record(text: &str) -> Result<Record> {
    decode_line(text, 1)
}

/// Decode one line of JSON, reporting failures at `line`
pub(crate) fn decode_line(text: &str, line: usize) -> Result<Record> {
    serde_json::from_str(text).map_err(|e| Error::malformed_json(line, e))
}

/// Write the encoded form of `record` straight into `writer`
pub fn write_record<W: Write>(writer: &mut W, record: &Record) -> Result<()> {
    serde_json::to_writer(writer, record).map_err(|e| {
        if e.is_io() {
            Error::Io(e.into())
        } else {
            Error::JsonParse(e)
        }
    })
}
