//! Output module
//!
//! Handles streaming JSON array files to disk.
//!
//! # Overview
//!
//! This module provides utilities for:
//! - Writing records to a JSON array file incrementally
//! - Materializing records, JSON Lines and compressed JSON Lines into one array
//! - Combining existing JSON array files

mod combine;
mod materialize;
mod writer;

pub use combine::combine_array_files;
pub use materialize::{
    append_source, materialize_array_file, materialize_array_file_direct,
    materialize_compressed, materialize_compressed_records, materialize_json_lines,
    materialize_multiple_batches, materialize_multiple_json_lines, materialize_sources,
    materialize_sources_with_config,
};
pub use writer::{ArrayFileWriter, ArrayWriterConfig, DEFAULT_BUFFER_SIZE};

#[cfg(test)]
mod tests;
