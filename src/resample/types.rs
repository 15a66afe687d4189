//! Weighted group types and plan parsing

use crate::error::{Error, Result};
use crate::types::json_type_name;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Compressed batches paired with the number of records to emit for them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedGroup {
    /// Base64 encoded gzip JSON Lines batches, concatenated in order
    pub batches: Vec<String>,
    /// Target record count; zero or negative emits nothing
    pub weight: i64,
}

impl WeightedGroup {
    /// Create a new group
    pub fn new<I, S>(batches: I, weight: i64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            batches: batches.into_iter().map(Into::into).collect(),
            weight,
        }
    }

    /// Parse one `[batches, weight]` entry
    pub fn from_value(value: &Value) -> Result<Self> {
        let entry = match value.as_array() {
            Some(entry) if entry.len() == 2 => entry,
            _ => {
                return Err(Error::config(
                    "invalid entry: expected [multipleCompressedJsonLines, weight]",
                ))
            }
        };

        let batches = parse_batches(&entry[0])?;
        let weight = parse_weight(&entry[1])?;
        Ok(Self { batches, weight })
    }
}

/// Parse and validate a whole weighted plan before anything is decoded
pub fn parse_weighted_groups(value: &Value) -> Result<Vec<WeightedGroup>> {
    let entries = value
        .as_array()
        .ok_or_else(|| Error::config("weighted groups must be an array"))?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            WeightedGroup::from_value(entry).map_err(|e| e.at(format!("entry {index}")))
        })
        .collect()
}

fn parse_batches(value: &Value) -> Result<Vec<String>> {
    let items = value.as_array().ok_or_else(|| {
        Error::config(format!(
            "expected array of compressed JSON lines strings, got {}",
            json_type_name(value)
        ))
    })?;

    items
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                Error::config(format!(
                    "expected compressed JSON lines string, got {}",
                    json_type_name(item)
                ))
            })
        })
        .collect()
}

/// Integers pass through; integral floats such as `3.0` are accepted
fn parse_weight(value: &Value) -> Result<i64> {
    let number = match value {
        Value::Number(n) => n,
        other => {
            return Err(Error::config(format!(
                "invalid weight: expected number, got {}",
                json_type_name(other)
            )))
        }
    };

    if let Some(weight) = number.as_i64() {
        return Ok(weight);
    }

    // i64 range is [-2^63, 2^63); the upper bound itself is not representable
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    match number.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= -LIMIT && f < LIMIT => Ok(f as i64),
        Some(f) if f.fract() == 0.0 => Err(Error::config(format!(
            "invalid weight: {number} is out of range"
        ))),
        _ => Err(Error::config(format!(
            "invalid weight: expected integral number, got {number}"
        ))),
    }
}
