//! Truncate-or-cycle resampling and the weighted materializer

use super::types::WeightedGroup;
use crate::compress::decode_compressed_json_lines;
use crate::error::Result;
use crate::output::{ArrayFileWriter, ArrayWriterConfig};
use crate::types::Record;
use std::path::Path;
use tracing::debug;

/// Number of records emitted for `available` inputs at `weight`
///
/// Non-positive weights and empty inputs emit nothing; otherwise exactly
/// `weight` records are emitted.
pub fn resampled_len(available: usize, weight: i64) -> usize {
    if weight <= 0 || available == 0 {
        return 0;
    }
    usize::try_from(weight).unwrap_or(usize::MAX)
}

/// Iterator over `records` resampled to a target count
///
/// Position `i` yields `records[i % records.len()]`, so a target at or below
/// the input length is a prefix and a larger target cycles round-robin.
#[derive(Debug, Clone)]
pub struct ResampleIter<'a> {
    records: &'a [Record],
    position: usize,
    len: usize,
}

impl<'a> Iterator for ResampleIter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.len {
            return None;
        }
        let record = &self.records[self.position % self.records.len()];
        self.position += 1;
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ResampleIter<'_> {}

/// Resample `records` to `weight` entries
pub fn resample(records: &[Record], weight: i64) -> ResampleIter<'_> {
    ResampleIter {
        records,
        position: 0,
        len: resampled_len(records.len(), weight),
    }
}

/// Decode every group, resample it to its weight and write all groups, in
/// order, into one JSON array file
pub fn materialize_weighted_groups(
    groups: &[WeightedGroup],
    path: impl AsRef<Path>,
) -> Result<usize> {
    materialize_weighted_groups_with_config(groups, path, &ArrayWriterConfig::default())
}

/// Weighted materialization with a custom writer config
pub fn materialize_weighted_groups_with_config(
    groups: &[WeightedGroup],
    path: impl AsRef<Path>,
    config: &ArrayWriterConfig,
) -> Result<usize> {
    let mut writer = ArrayFileWriter::new(path, config)?;

    for (group_index, group) in groups.iter().enumerate() {
        let records = decode_group(group_index, group)?;
        let written = writer.write_records(resample(&records, group.weight))?;
        debug!(
            "Group {}: {} decoded records, weight {}, wrote {}",
            group_index,
            records.len(),
            group.weight,
            written
        );
    }

    writer.finish()
}

/// Decompress and concatenate a group's batches; empty batch strings are skipped
fn decode_group(group_index: usize, group: &WeightedGroup) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for (batch_index, batch) in group.batches.iter().enumerate() {
        if batch.trim().is_empty() {
            continue;
        }
        let decoded = decode_compressed_json_lines(batch)
            .map_err(|e| e.at(format!("group {group_index}, batch {batch_index}")))?;
        records.extend(decoded);
    }
    Ok(records)
}
