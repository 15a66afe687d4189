//! CLI module
//!
//! Command-line interface for converting and materializing record batches.
//!
//! # Commands
//!
//! - `encode` - JSON array file to JSON Lines (optionally compressed)
//! - `decode` - JSON Lines (optionally compressed) to a JSON array on stdout
//! - `materialize` - batch files into one JSON array file
//! - `weighted` - resample a weighted plan into a JSON array file
//! - `combine` - concatenate JSON array files
//! - `head` / `tail` - preview a file

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
