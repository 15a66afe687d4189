//! Gzip + base64 implementation

use super::types::CompressionLevel;
use crate::codec::{decode_json_lines, encode_json_lines};
use crate::error::{Error, Result};
use crate::types::Record;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use std::io::{Read, Write};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

// ============================================================================
// Byte Level
// ============================================================================

/// Gzip `data` at the given level
pub fn gzip_bytes(data: &[u8], level: CompressionLevel) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), level.into());
    encoder
        .write_all(data)
        .map_err(|e| Error::Other(format!("failed to compress data: {e}")))?;
    encoder
        .finish()
        .map_err(|e| Error::Other(format!("failed to close gzip writer: {e}")))
}

/// Decompress a complete gzip stream (all members)
pub fn gunzip_bytes(data: &[u8]) -> Result<Vec<u8>> {
    // A gzip member header is at least 10 bytes
    if data.len() < 10 || data[..2] != GZIP_MAGIC {
        return Err(Error::invalid_gzip("invalid gzip header"));
    }

    let mut decoder = MultiGzDecoder::new(data);
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(|e| Error::invalid_gzip(format!("failed to decompress data: {e}")))?;
    Ok(out)
}

// ============================================================================
// Text Level
// ============================================================================

/// Gzip and base64-encode already encoded JSON Lines text
pub fn compress_json_lines(json_lines: &str, level: CompressionLevel) -> Result<String> {
    let compressed = gzip_bytes(json_lines.as_bytes(), level)?;
    Ok(STANDARD.encode(compressed))
}

/// Reverse `compress_json_lines`, returning the JSON Lines text
pub fn decompress_to_json_lines(compressed: &str) -> Result<String> {
    let bytes = STANDARD
        .decode(compressed.trim())
        .map_err(Error::invalid_base64)?;
    let raw = gunzip_bytes(&bytes)?;
    String::from_utf8(raw)
        .map_err(|e| Error::malformed_json(1, format!("decompressed data is not UTF-8: {e}")))
}

// ============================================================================
// Record Level
// ============================================================================

/// Encode records as JSON Lines, gzip at `level` (default when `None`),
/// then base64-encode
pub fn encode_compressed_json_lines(
    records: &[Record],
    level: Option<CompressionLevel>,
) -> Result<String> {
    let json_lines = encode_json_lines(records)?;
    compress_json_lines(&json_lines, level.unwrap_or_default())
}

/// Decode base64, gunzip and parse the JSON Lines inside
pub fn decode_compressed_json_lines(compressed: &str) -> Result<Vec<Record>> {
    let json_lines = decompress_to_json_lines(compressed)?;
    decode_json_lines(&json_lines)
}
