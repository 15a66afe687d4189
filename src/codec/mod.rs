//! Record codec module
//!
//! Supports: single records, JSON Lines
//!
//! # Overview
//!
//! The codec module turns records into single-line JSON text and back.
//! Every other path in the crate (compression, array materialization,
//! resampling) goes through these functions so the three write paths stay
//! byte-for-byte compatible.

mod lines;
mod record;

pub use lines::{decode_json_lines, encode_json_lines, visit_json_lines};
pub use record::{decode_record, encode_record, write_record};

#[cfg(test)]
mod tests;
