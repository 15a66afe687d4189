//! Array materializers
//!
//! Every entry point funnels into [`materialize_sources_with_config`]: open
//! the writer, append each source in order, finish. Only one source's
//! decoded records are alive at a time.

use super::writer::{ArrayFileWriter, ArrayWriterConfig};
use crate::codec::visit_json_lines;
use crate::compress::{decompress_to_json_lines, encode_compressed_json_lines, CompressionLevel};
use crate::error::Result;
use crate::types::{Record, RecordSource};
use std::path::Path;
use tracing::debug;

/// Write `sources`, in order, into one JSON array file at `path`
pub fn materialize_sources(sources: &[RecordSource<'_>], path: impl AsRef<Path>) -> Result<usize> {
    materialize_sources_with_config(sources, path, &ArrayWriterConfig::default())
}

/// Write `sources` into one JSON array file using a custom writer config
///
/// A failing source aborts the call; with the default (atomic) config the
/// destination is left as it was.
pub fn materialize_sources_with_config(
    sources: &[RecordSource<'_>],
    path: impl AsRef<Path>,
    config: &ArrayWriterConfig,
) -> Result<usize> {
    let mut writer = ArrayFileWriter::new(path, config)?;
    let tag_batches = sources.len() > 1;

    for (index, source) in sources.iter().enumerate() {
        append_indexed(&mut writer, source, index, tag_batches)?;
    }

    writer.finish()
}

/// Append one source, tagging failures with its caller-side index
fn append_indexed(
    writer: &mut ArrayFileWriter,
    source: &RecordSource<'_>,
    index: usize,
    tag_batches: bool,
) -> Result<usize> {
    let written = append_source(writer, source).map_err(|e| {
        if tag_batches {
            e.in_batch(index)
        } else {
            e
        }
    })?;
    debug!(
        "Appended {} records from {} source {}",
        written,
        source.kind(),
        index
    );
    Ok(written)
}

/// Append a single source to an open writer, returning its record count
pub fn append_source(writer: &mut ArrayFileWriter, source: &RecordSource<'_>) -> Result<usize> {
    match source {
        RecordSource::Records(records) => writer.write_records(records.iter()),
        RecordSource::JsonLines(text) => visit_json_lines(text, |record| writer.write_record(&record)),
        RecordSource::Compressed(text) => {
            let json_lines = decompress_to_json_lines(text)?;
            visit_json_lines(&json_lines, |record| writer.write_record(&record))
        }
    }
}

/// Write one source of any kind to `path`
pub fn materialize_array_file(source: RecordSource<'_>, path: impl AsRef<Path>) -> Result<usize> {
    materialize_sources(&[source], path)
}

/// Write in-memory records to `path`
pub fn materialize_array_file_direct(records: &[Record], path: impl AsRef<Path>) -> Result<usize> {
    materialize_sources(&[RecordSource::Records(records)], path)
}

/// Write JSON Lines text to `path`
pub fn materialize_json_lines(json_lines: &str, path: impl AsRef<Path>) -> Result<usize> {
    materialize_sources(&[RecordSource::JsonLines(json_lines)], path)
}

/// Write compressed JSON Lines text to `path`
pub fn materialize_compressed(compressed: &str, path: impl AsRef<Path>) -> Result<usize> {
    materialize_sources(&[RecordSource::Compressed(compressed)], path)
}

/// Write several JSON Lines texts to `path` as one array
///
/// Empty strings contribute nothing.
pub fn materialize_multiple_json_lines<S: AsRef<str>>(
    batches: &[S],
    path: impl AsRef<Path>,
) -> Result<usize> {
    let sources: Vec<RecordSource<'_>> = batches
        .iter()
        .map(|b| RecordSource::JsonLines(b.as_ref()))
        .collect();
    materialize_sources(&sources, path)
}

/// Write several compressed JSON Lines texts to `path` as one array
///
/// Empty strings are skipped rather than treated as corrupt gzip; errors
/// still report the batch's position in `batches`.
pub fn materialize_multiple_batches<S: AsRef<str>>(
    batches: &[S],
    path: impl AsRef<Path>,
) -> Result<usize> {
    let mut writer = ArrayFileWriter::new(path, &ArrayWriterConfig::default())?;
    let tag_batches = batches.len() > 1;

    for (index, batch) in batches.iter().enumerate() {
        let batch = batch.as_ref();
        if batch.trim().is_empty() {
            debug!("Skipping empty batch {}", index);
            continue;
        }
        append_indexed(&mut writer, &RecordSource::Compressed(batch), index, tag_batches)?;
    }

    writer.finish()
}

/// Compress `records` at `level`, then write them through the compressed path
pub fn materialize_compressed_records(
    records: &[Record],
    path: impl AsRef<Path>,
    level: Option<CompressionLevel>,
) -> Result<usize> {
    let compressed = encode_compressed_json_lines(records, level)?;
    materialize_compressed(&compressed, path)
}
