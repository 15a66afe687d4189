//! Merge existing JSON array files into one

use super::writer::{ArrayFileWriter, ArrayWriterConfig};
use crate::error::{Error, Result};
use crate::loader::read_error;
use crate::types::Record;
use std::fs;
use std::path::Path;

/// Concatenate the arrays stored in `inputs` into a single array at `path`
pub fn combine_array_files<P: AsRef<Path>>(inputs: &[P], path: impl AsRef<Path>) -> Result<usize> {
    let mut writer = ArrayFileWriter::new(path, &ArrayWriterConfig::default())?;

    for input in inputs {
        let records = read_array_file(input.as_ref())?;
        let written = writer.write_records(records.iter())?;
        tracing::debug!("Combined {} records from {}", written, input.as_ref().display());
    }

    writer.finish()
}

/// Read one JSON array file into memory
fn read_array_file(path: &Path) -> Result<Vec<Record>> {
    let content = fs::read_to_string(path).map_err(|e| read_error(path, e))?;

    serde_json::from_str(&content).map_err(|e| {
        Error::decode(format!(
            "expected JSON array in '{}': {e}",
            path.display()
        ))
    })
}
