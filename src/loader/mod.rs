//! Loader module
//!
//! Read files that feed or inspect materialized output.
//!
//! # Overview
//!
//! The loader module provides:
//! - `load_text`, `head`, `tail` - raw line-oriented readers
//! - `load_json` - JSON array, JSON object or NDJSON documents
//! - `load_csv` - quoted-field aware CSV rows
//! - `CsvOptions` / `ProcessCsvOptions` - declarative CSV option shapes

mod csv;
mod document;
mod options;
mod text;

pub use document::{load_csv, load_json};
pub use options::{
    CsvOptions, FieldConfig, FieldType, FilterConfig, FilterType, GroupByConfig,
    ProcessCsvOptions, TransformConfig, TransformType,
};
pub use text::{head, load_text, tail};
pub(crate) use text::read_error;
