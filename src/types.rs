//! Common types used throughout Solidafy Streamloader
//!
//! Records are plain `serde_json::Value`s: a tagged enum over
//! object/array/string/number/bool/null, so every codec path matches on
//! the same variants.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// A single JSON record
pub type Record = serde_json::Value;

/// JSON type name of a record, for error messages
pub(crate) fn json_type_name(value: &Record) -> &'static str {
    match value {
        Record::Null => "null",
        Record::Bool(_) => "boolean",
        Record::Number(_) => "number",
        Record::String(_) => "string",
        Record::Array(_) => "array",
        Record::Object(_) => "object",
    }
}

// ============================================================================
// Record Sources
// ============================================================================

/// One input to an array materialization.
///
/// Sources are borrowed; the materializer only ever holds one source's
/// decoded records at a time.
#[derive(Debug, Clone, Copy)]
pub enum RecordSource<'a> {
    /// Records already in memory
    Records(&'a [Record]),
    /// Newline-delimited JSON text
    JsonLines(&'a str),
    /// Base64 encoded gzip of newline-delimited JSON text
    Compressed(&'a str),
}

impl<'a> RecordSource<'a> {
    /// Short name used in log output
    pub fn kind(&self) -> &'static str {
        match self {
            RecordSource::Records(_) => "records",
            RecordSource::JsonLines(_) => "jsonl",
            RecordSource::Compressed(_) => "compressed",
        }
    }
}

impl<'a> From<&'a [Record]> for RecordSource<'a> {
    fn from(records: &'a [Record]) -> Self {
        RecordSource::Records(records)
    }
}

impl<'a> From<&'a Vec<Record>> for RecordSource<'a> {
    fn from(records: &'a Vec<Record>) -> Self {
        RecordSource::Records(records.as_slice())
    }
}

// ============================================================================
// Source Format
// ============================================================================

/// Text format of a record source, as selected on the command line
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// JSON Lines (default)
    #[default]
    Jsonl,
    /// Base64 encoded gzip JSON Lines
    Compressed,
}

impl SourceFormat {
    /// Wrap text of this format as a record source
    pub fn source<'a>(&self, text: &'a str) -> RecordSource<'a> {
        match self {
            SourceFormat::Jsonl => RecordSource::JsonLines(text),
            SourceFormat::Compressed => RecordSource::Compressed(text),
        }
    }
}
