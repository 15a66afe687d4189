//! Compression settings

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Gzip compression level
///
/// 0 stores without compression (still gzip framed), 1 is fastest and 9 is
/// smallest. The default is 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CompressionLevel(u32);

impl CompressionLevel {
    /// Store only
    pub const NONE: Self = Self(0);
    /// Fastest compression
    pub const FASTEST: Self = Self(1);
    /// Level used when none is given
    pub const DEFAULT: Self = Self(6);
    /// Smallest output
    pub const BEST: Self = Self(9);

    /// Create a level, rejecting values above 9
    pub fn new(level: u32) -> Result<Self> {
        if level > 9 {
            return Err(Error::InvalidConfigValue {
                field: "compression_level".to_string(),
                message: format!("expected 0-9, got {level}"),
            });
        }
        Ok(Self(level))
    }

    /// Create a level from a loosely typed integer, falling back to the
    /// default when it is out of range
    pub fn new_or_default(level: i64) -> Self {
        match u32::try_from(level).ok().and_then(|l| Self::new(l).ok()) {
            Some(level) => level,
            None => {
                tracing::warn!(
                    "Compression level {} out of range, using default {}",
                    level,
                    Self::DEFAULT.0
                );
                Self::DEFAULT
            }
        }
    }

    /// Numeric level
    pub fn level(&self) -> u32 {
        self.0
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for CompressionLevel {
    type Error = Error;

    fn try_from(level: u32) -> Result<Self> {
        Self::new(level)
    }
}

impl From<CompressionLevel> for u32 {
    fn from(level: CompressionLevel) -> Self {
        level.0
    }
}

impl From<CompressionLevel> for flate2::Compression {
    fn from(level: CompressionLevel) -> Self {
        flate2::Compression::new(level.0)
    }
}
