//! CLI commands and argument parsing

use crate::types::SourceFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Solidafy Streamloader CLI
#[derive(Parser, Debug)]
#[command(name = "solidafy-streamloader")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a JSON array file to JSON Lines
    Encode {
        /// Input JSON array file
        input: PathBuf,

        /// Gzip and base64 encode the output
        #[arg(long)]
        compress: bool,

        /// Gzip level (0-9); out-of-range values use the default
        #[arg(long, requires = "compress")]
        level: Option<i64>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decode JSON Lines into a pretty JSON array on stdout
    Decode {
        /// Input JSON Lines file
        input: PathBuf,

        /// Input is base64 gzip JSON Lines
        #[arg(long)]
        compressed: bool,
    },

    /// Write one or more batch files into a single JSON array file
    Materialize {
        /// Batch files, written in order
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Format of every input file
        #[arg(long, value_enum, default_value = "jsonl")]
        format: SourceFormat,

        /// Destination array file
        #[arg(short, long)]
        output: PathBuf,

        /// Write the destination in place instead of via a temp file
        #[arg(long)]
        no_atomic: bool,
    },

    /// Resample a weighted plan (JSON or YAML) into a JSON array file
    Weighted {
        /// Plan file shaped `[[["<b64>", ...], weight], ...]`
        plan: PathBuf,

        /// Destination array file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Concatenate JSON array files
    Combine {
        /// Input array files, in order
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Destination array file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Print the first lines of a file
    Head {
        file: PathBuf,

        /// Number of lines
        #[arg(short = 'n', long, default_value = "10", allow_negative_numbers = true)]
        lines: i64,
    },

    /// Print the last lines of a file
    Tail {
        file: PathBuf,

        /// Number of lines
        #[arg(short = 'n', long, default_value = "10", allow_negative_numbers = true)]
        lines: i64,
    },
}
