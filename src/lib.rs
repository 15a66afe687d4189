// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # Solidafy Streamloader
//!
//! Convert JSON records between in-memory values, JSON Lines and
//! gzip+base64 JSON Lines, and stream them into JSON array files.
//!
//! ## Features
//!
//! - **Record Codecs**: JSON Lines encode/decode with 1-based error lines
//! - **Compression**: gzip at levels 0-9, base64 (standard alphabet) framing
//! - **Array Materialization**: stream any mix of sources into one `[...]` file
//!   without holding the whole array in memory
//! - **Weighted Resampling**: truncate or cycle each group to a target count
//! - **Loaders**: text/head/tail previews, JSON/NDJSON and CSV documents
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use solidafy_streamloader::{StreamLoader, WeightedGroup, Result};
//! use serde_json::json;
//!
//! fn main() -> Result<()> {
//!     let loader = StreamLoader::new();
//!
//!     let batch = loader.encode_compressed_json_lines(&[json!({"name": "Alice"})], None)?;
//!     let groups = [WeightedGroup::new([batch], 3)];
//!
//!     let count = loader.materialize_weighted_groups(&groups, "out.json")?;
//!     assert_eq!(count, 3);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! records ──► codec (JSON Lines) ──► compress (gzip + base64)
//!                 │                         │
//!                 ▼                         ▼
//!         output (ArrayFileWriter) ◄── resample (weighted groups)
//!                 │
//!                 ▼
//!           [r1,r2,...,rN] on disk
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: document option struct fields and loader functions

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// JSON Lines record codec
pub mod codec;

/// Gzip + base64 compression of JSON Lines
pub mod compress;

/// Streaming JSON array output
pub mod output;

/// Weighted resampling of compressed batches
pub mod resample;

/// Text, JSON and CSV loaders
pub mod loader;

/// Stateless facade over every operation
pub mod service;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use compress::CompressionLevel;
pub use output::{ArrayFileWriter, ArrayWriterConfig};
pub use resample::WeightedGroup;
pub use service::StreamLoader;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
