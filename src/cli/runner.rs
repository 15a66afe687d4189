//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::codec::{decode_json_lines, encode_json_lines};
use crate::compress::{compress_json_lines, decode_compressed_json_lines, CompressionLevel};
use crate::error::{Error, Result};
use crate::loader::{head, load_json, load_text, tail};
use crate::output::{append_source, combine_array_files, ArrayFileWriter, ArrayWriterConfig};
use crate::resample::{materialize_weighted_groups, parse_weighted_groups};
use crate::types::{json_type_name, Record, SourceFormat};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Encode {
                input,
                compress,
                level,
                output,
            } => self.encode(input, *compress, *level, output.as_deref()),
            Commands::Decode { input, compressed } => self.decode(input, *compressed),
            Commands::Materialize {
                inputs,
                format,
                output,
                no_atomic,
            } => self.materialize(inputs, *format, output, !*no_atomic),
            Commands::Weighted { plan, output } => self.weighted(plan, output),
            Commands::Combine { inputs, output } => {
                let count = combine_array_files(inputs.as_slice(), output)?;
                self.output_summary(output, count);
                Ok(())
            }
            Commands::Head { file, lines } => {
                println!("{}", head(file, Self::line_count(*lines))?);
                Ok(())
            }
            Commands::Tail { file, lines } => {
                println!("{}", tail(file, Self::line_count(*lines))?);
                Ok(())
            }
        }
    }

    /// Non-positive counts select nothing
    fn line_count(lines: i64) -> usize {
        usize::try_from(lines).unwrap_or(0)
    }

    /// Encode a JSON array file as (optionally compressed) JSON Lines
    fn encode(
        &self,
        input: &Path,
        compress: bool,
        level: Option<i64>,
        output: Option<&Path>,
    ) -> Result<()> {
        let records = Self::load_records(input)?;
        let mut text = encode_json_lines(&records)?;

        if compress {
            let level = level.map_or(CompressionLevel::DEFAULT, CompressionLevel::new_or_default);
            text = compress_json_lines(&text, level)?;
        }

        debug!("Encoded {} records from {}", records.len(), input.display());

        match output {
            Some(path) => fs::write(path, text)?,
            None => println!("{text}"),
        }
        Ok(())
    }

    /// Decode a JSON Lines file and print it as a JSON array
    fn decode(&self, input: &Path, compressed: bool) -> Result<()> {
        let text = load_text(input)?;
        let records = if compressed {
            decode_compressed_json_lines(&text)?
        } else {
            decode_json_lines(&text)?
        };

        println!("{}", serde_json::to_string_pretty(&records)?);
        Ok(())
    }

    /// Stream batch files into one array file, reading one file at a time
    fn materialize(
        &self,
        inputs: &[PathBuf],
        format: SourceFormat,
        output: &Path,
        atomic: bool,
    ) -> Result<()> {
        let config = ArrayWriterConfig::new().atomic(atomic);
        let mut writer = ArrayFileWriter::new(output, &config)?;

        for input in inputs {
            let text = load_text(input)?;
            if format == SourceFormat::Compressed && text.trim().is_empty() {
                debug!("Skipping empty batch {}", input.display());
                continue;
            }
            let written = append_source(&mut writer, &format.source(&text))
                .map_err(|e| e.at(input.display()))?;
            debug!("Appended {} records from {}", written, input.display());
        }

        let count = writer.finish()?;
        self.output_summary(output, count);
        Ok(())
    }

    /// Resample a weighted plan into an array file
    fn weighted(&self, plan: &Path, output: &Path) -> Result<()> {
        let groups = parse_weighted_groups(&Self::load_plan(plan)?)?;
        let count = materialize_weighted_groups(&groups, output)?;
        self.output_summary(output, count);
        Ok(())
    }

    /// Load a JSON array of records
    fn load_records(path: &Path) -> Result<Vec<Record>> {
        match load_json(path)? {
            Value::Array(records) => Ok(records),
            other => Err(Error::decode(format!(
                "expected JSON array in '{}', got {}",
                path.display(),
                json_type_name(&other)
            ))),
        }
    }

    /// Load a weighted plan; `.yaml`/`.yml` files are parsed as YAML
    fn load_plan(path: &Path) -> Result<Value> {
        let content = load_text(path)?;
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| matches!(ext.to_ascii_lowercase().as_str(), "yaml" | "yml"));

        if is_yaml {
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(serde_json::from_str(&content)?)
        }
    }

    /// Print a one-line JSON summary of a finished write
    fn output_summary(&self, output: &Path, count: usize) {
        let summary = json!({
            "output": output.display().to_string(),
            "records": count,
        });
        println!("{}", serde_json::to_string(&summary).unwrap_or_default());
    }
}
