//! Compression module
//!
//! Wraps JSON Lines text in gzip and base64 for transport as a plain string,
//! and reverses it.
//!
//! # Overview
//!
//! - `CompressionLevel` - gzip level 0 (store) through 9 (smallest)
//! - `encode_compressed_json_lines` / `decode_compressed_json_lines`

mod gzip;
mod types;

pub use gzip::{
    compress_json_lines, decode_compressed_json_lines, decompress_to_json_lines,
    encode_compressed_json_lines, gunzip_bytes, gzip_bytes,
};
pub use types::CompressionLevel;
