//! JSON array file writer
//!
//! Streams records into a single JSON array document without holding the
//! array in memory.

use crate::codec::write_record;
use crate::error::{Error, Result};
use crate::types::Record;
use std::fs::{self, File, Permissions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Default write buffer size (64 KiB)
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Configuration for the array file writer
#[derive(Debug, Clone)]
pub struct ArrayWriterConfig {
    buffer_size: usize,
    atomic: bool,
}

impl ArrayWriterConfig {
    /// Get the write buffer size
    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Whether output is staged in a temp file and renamed on success
    #[must_use]
    pub fn is_atomic(&self) -> bool {
        self.atomic
    }
}

impl Default for ArrayWriterConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            atomic: true,
        }
    }
}

impl ArrayWriterConfig {
    /// Create a new config with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the write buffer size; 0 selects the default
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = if size == 0 { DEFAULT_BUFFER_SIZE } else { size };
        self
    }

    /// Enable or disable staged (temp file + rename) output
    #[must_use]
    pub fn atomic(mut self, enabled: bool) -> Self {
        self.atomic = enabled;
        self
    }
}

/// Where bytes go before the array is complete
enum Sink {
    /// Temp file next to the destination, renamed over it on finish
    Staged(BufWriter<NamedTempFile>),
    /// The destination itself, truncated on open
    Direct(BufWriter<File>),
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            Sink::Staged(w) => w.write(buf),
            Sink::Direct(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            Sink::Staged(w) => w.flush(),
            Sink::Direct(w) => w.flush(),
        }
    }
}

/// JSON array file writer
///
/// Dropping the writer without calling [`ArrayFileWriter::finish`] discards
/// staged output; the destination is only replaced on a successful finish.
pub struct ArrayFileWriter {
    /// Destination path
    path: PathBuf,
    /// Output sink
    sink: Sink,
    /// Number of records written
    records_written: usize,
    /// Mode of the destination being replaced, reapplied before the rename
    existing_permissions: Option<Permissions>,
}

impl ArrayFileWriter {
    /// Create a writer for `path` and emit the opening bracket
    pub fn new(path: impl AsRef<Path>, config: &ArrayWriterConfig) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut existing_permissions = None;

        let sink = if config.is_atomic() {
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            existing_permissions = fs::metadata(&path).ok().map(|m| m.permissions());

            let mut builder = tempfile::Builder::new();
            builder.prefix(".streamloader-").suffix(".tmp");
            // Same creation mode as File::create, so the umask applies
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                builder.permissions(Permissions::from_mode(0o666));
            }
            let temp = builder.tempfile_in(dir)?;
            Sink::Staged(BufWriter::with_capacity(config.buffer_size(), temp))
        } else {
            let file = File::create(&path)?;
            Sink::Direct(BufWriter::with_capacity(config.buffer_size(), file))
        };

        let mut writer = Self {
            path,
            sink,
            records_written: 0,
            existing_permissions,
        };
        writer.sink.write_all(b"[")?;
        Ok(writer)
    }

    /// Append one record to the array
    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        if self.records_written > 0 {
            self.sink.write_all(b",")?;
        }
        write_record(&mut self.sink, record)?;
        self.records_written += 1;
        Ok(())
    }

    /// Append every record from `records`, returning how many were written
    pub fn write_records<'r, I>(&mut self, records: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'r Record>,
    {
        let before = self.records_written;
        for record in records {
            self.write_record(record)?;
        }
        Ok(self.records_written - before)
    }

    /// Get the number of records written so far
    #[must_use]
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Destination path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Close the array, flush and publish the file
    pub fn finish(mut self) -> Result<usize> {
        self.sink.write_all(b"]")?;

        match self.sink {
            Sink::Staged(w) => {
                let temp = w.into_inner().map_err(|e| Error::Io(e.into_error()))?;
                if let Some(permissions) = self.existing_permissions {
                    temp.as_file().set_permissions(permissions)?;
                }
                temp.as_file().sync_all()?;
                temp.persist(&self.path).map_err(|e| Error::Io(e.error))?;
            }
            Sink::Direct(w) => {
                let file = w.into_inner().map_err(|e| Error::Io(e.into_error()))?;
                file.sync_all()?;
            }
        }

        tracing::info!(
            "Wrote {} records to {}",
            self.records_written,
            self.path.display()
        );
        Ok(self.records_written)
    }
}
