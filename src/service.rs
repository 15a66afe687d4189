//! StreamLoader facade
//!
//! A stateless entry point bundling every conversion, materialization and
//! loading operation behind one value, for hosts that bind methods rather
//! than free functions.

use crate::codec;
use crate::compress::{self, CompressionLevel};
use crate::error::Result;
use crate::loader::{self, CsvOptions, ProcessCsvOptions};
use crate::output;
use crate::resample::{self, WeightedGroup};
use crate::types::{Record, RecordSource};
use serde_json::Value;
use std::path::Path;

/// Stateless record loader
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamLoader;

impl StreamLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self
    }

    // ========================================================================
    // Codecs
    // ========================================================================

    /// Encode records as JSON Lines
    pub fn encode_json_lines(&self, records: &[Record]) -> Result<String> {
        codec::encode_json_lines(records)
    }

    /// Decode JSON Lines text, skipping blank lines
    pub fn decode_json_lines(&self, text: &str) -> Result<Vec<Record>> {
        codec::decode_json_lines(text)
    }

    /// Encode records as base64 gzip JSON Lines
    pub fn encode_compressed_json_lines(
        &self,
        records: &[Record],
        level: Option<CompressionLevel>,
    ) -> Result<String> {
        compress::encode_compressed_json_lines(records, level)
    }

    /// Decode base64 gzip JSON Lines
    pub fn decode_compressed_json_lines(&self, text: &str) -> Result<Vec<Record>> {
        compress::decode_compressed_json_lines(text)
    }

    // ========================================================================
    // Materialization
    // ========================================================================

    /// Write one source to `path` as a JSON array
    pub fn materialize_array_file(
        &self,
        source: RecordSource<'_>,
        path: impl AsRef<Path>,
    ) -> Result<usize> {
        output::materialize_array_file(source, path)
    }

    /// Write in-memory records to `path` as a JSON array
    pub fn materialize_array_file_direct(
        &self,
        records: &[Record],
        path: impl AsRef<Path>,
    ) -> Result<usize> {
        output::materialize_array_file_direct(records, path)
    }

    /// Write several compressed batches to `path` as one array
    pub fn materialize_multiple_batches<S: AsRef<str>>(
        &self,
        batches: &[S],
        path: impl AsRef<Path>,
    ) -> Result<usize> {
        output::materialize_multiple_batches(batches, path)
    }

    /// Write several JSON Lines texts to `path` as one array
    pub fn materialize_multiple_json_lines<S: AsRef<str>>(
        &self,
        batches: &[S],
        path: impl AsRef<Path>,
    ) -> Result<usize> {
        output::materialize_multiple_json_lines(batches, path)
    }

    /// Compress records, then write them through the compressed path
    pub fn materialize_compressed_records(
        &self,
        records: &[Record],
        path: impl AsRef<Path>,
        level: Option<CompressionLevel>,
    ) -> Result<usize> {
        output::materialize_compressed_records(records, path, level)
    }

    /// Write mixed sources to `path` in order
    pub fn materialize_sources(
        &self,
        sources: &[RecordSource<'_>],
        path: impl AsRef<Path>,
    ) -> Result<usize> {
        output::materialize_sources(sources, path)
    }

    /// Resample each group to its weight and write all groups to `path`
    pub fn materialize_weighted_groups(
        &self,
        groups: &[WeightedGroup],
        path: impl AsRef<Path>,
    ) -> Result<usize> {
        resample::materialize_weighted_groups(groups, path)
    }

    /// Like [`materialize_weighted_groups`](Self::materialize_weighted_groups),
    /// but takes an untyped `[[batches, weight], ...]` plan.
    ///
    /// The whole plan is validated before any batch is decoded.
    pub fn materialize_weighted_groups_value(
        &self,
        plan: &Value,
        path: impl AsRef<Path>,
    ) -> Result<usize> {
        let groups = resample::parse_weighted_groups(plan)?;
        resample::materialize_weighted_groups(&groups, path)
    }

    /// Concatenate JSON array files into one array file
    pub fn combine_array_files<P: AsRef<Path>>(
        &self,
        inputs: &[P],
        path: impl AsRef<Path>,
    ) -> Result<usize> {
        output::combine_array_files(inputs, path)
    }

    // ========================================================================
    // Loading
    // ========================================================================

    pub fn load_text(&self, path: impl AsRef<Path>) -> Result<String> {
        loader::load_text(path)
    }

    /// First `n` lines; `n <= 0` returns an empty string
    pub fn head(&self, path: impl AsRef<Path>, n: i64) -> Result<String> {
        match usize::try_from(n) {
            Ok(n) => loader::head(path, n),
            Err(_) => Ok(String::new()),
        }
    }

    /// Last `n` lines; `n <= 0` returns an empty string
    pub fn tail(&self, path: impl AsRef<Path>, n: i64) -> Result<String> {
        match usize::try_from(n) {
            Ok(n) => loader::tail(path, n),
            Err(_) => Ok(String::new()),
        }
    }

    pub fn load_json(&self, path: impl AsRef<Path>) -> Result<Value> {
        loader::load_json(path)
    }

    pub fn load_csv(&self, path: impl AsRef<Path>, options: &CsvOptions) -> Result<Vec<Vec<String>>> {
        loader::load_csv(path, options)
    }

    // ========================================================================
    // Option Echo
    // ========================================================================

    /// Return CSV processing options unchanged
    pub fn debug_csv_options(&self, options: ProcessCsvOptions) -> ProcessCsvOptions {
        options
    }

    /// Return CSV reader options unchanged
    pub fn debug_options(&self, options: CsvOptions) -> CsvOptions {
        options
    }
}
