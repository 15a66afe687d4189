//! CSV option shapes
//!
//! These structures are passed through host APIs unchanged, so absent and
//! explicit-null fields must survive a serialize/deserialize cycle.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ============================================================================
// LoadCSV Options
// ============================================================================

/// Options for [`load_csv`](super::load_csv)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvOptions {
    /// Allow stray quotes inside fields
    #[serde(default = "default_true")]
    pub lazy_quotes: bool,

    /// Drop whitespace at the start of each field
    #[serde(default = "default_true")]
    pub trim_leading_space: bool,

    /// Drop whitespace at both ends of each field
    #[serde(default)]
    pub trim_space: bool,

    /// Reuse row buffers between records
    #[serde(default = "default_true")]
    pub reuse_record: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            lazy_quotes: true,
            trim_leading_space: true,
            trim_space: false,
            reuse_record: true,
        }
    }
}

impl CsvOptions {
    /// Default options with an explicit lazy-quotes setting
    pub fn with_lazy_quotes(lazy_quotes: bool) -> Self {
        Self {
            lazy_quotes,
            ..Default::default()
        }
    }
}

// ============================================================================
// ProcessCsv Options
// ============================================================================

/// Declarative filter/transform/group/project options for CSV rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessCsvOptions {
    /// Skip the first row
    #[serde(default = "default_true")]
    pub skip_header: bool,

    #[serde(default = "default_true")]
    pub lazy_quotes: bool,

    #[serde(default = "default_true")]
    pub trim_leading_space: bool,

    #[serde(default)]
    pub trim_space: bool,

    #[serde(default = "default_true")]
    pub reuse_record: bool,

    /// Row filters
    #[serde(default)]
    pub filters: Vec<FilterConfig>,

    /// In-place value transforms
    #[serde(default)]
    pub transforms: Vec<TransformConfig>,

    /// Optional grouping column
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_by: Option<GroupByConfig>,

    /// Output projection
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
}

impl Default for ProcessCsvOptions {
    fn default() -> Self {
        Self {
            skip_header: true,
            lazy_quotes: true,
            trim_leading_space: true,
            trim_space: false,
            reuse_record: true,
            filters: Vec::new(),
            transforms: Vec::new(),
            group_by: None,
            fields: Vec::new(),
        }
    }
}

impl ProcessCsvOptions {
    /// Parse and validate options from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Parse and validate options from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let options: Self = serde_yaml::from_str(yaml)?;
        options.validate()?;
        Ok(options)
    }

    /// The CSV reader settings embedded in these options
    pub fn csv_options(&self) -> CsvOptions {
        CsvOptions {
            lazy_quotes: self.lazy_quotes,
            trim_leading_space: self.trim_leading_space,
            trim_space: self.trim_space,
            reuse_record: self.reuse_record,
        }
    }

    /// Check that every filter, transform and field carries what its type needs
    pub fn validate(&self) -> Result<()> {
        for (i, filter) in self.filters.iter().enumerate() {
            filter.validate().map_err(|e| e.at(format!("filters[{i}]")))?;
        }
        for (i, transform) in self.transforms.iter().enumerate() {
            transform
                .validate()
                .map_err(|e| e.at(format!("transforms[{i}]")))?;
        }
        for (i, field) in self.fields.iter().enumerate() {
            field.validate().map_err(|e| e.at(format!("fields[{i}]")))?;
        }
        Ok(())
    }
}

// ============================================================================
// Filters
// ============================================================================

/// Filter kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterType {
    /// Drop rows whose column is empty
    EmptyString,
    /// Keep rows whose column matches `pattern`
    RegexMatch,
    /// Keep rows whose numeric column lies in `[min, max]`
    ValueRange,
}

/// Row filter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(rename = "type")]
    pub filter_type: FilterType,

    pub column: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl FilterConfig {
    fn validate(&self) -> Result<()> {
        match self.filter_type {
            FilterType::EmptyString => Ok(()),
            FilterType::RegexMatch => {
                let pattern = self
                    .pattern
                    .as_deref()
                    .ok_or_else(|| Error::config("regexMatch filter requires a pattern"))?;
                regex::Regex::new(pattern).map_err(|e| Error::InvalidConfigValue {
                    field: "pattern".to_string(),
                    message: e.to_string(),
                })?;
                Ok(())
            }
            FilterType::ValueRange => match (self.min, self.max) {
                (None, None) => Err(Error::config("valueRange filter requires min or max")),
                (Some(min), Some(max)) if min > max => Err(Error::config(format!(
                    "valueRange min {min} is greater than max {max}"
                ))),
                _ => Ok(()),
            },
        }
    }
}

// ============================================================================
// Transforms
// ============================================================================

/// Transform kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransformType {
    ParseInt,
    FixedValue,
    Substring,
}

/// Value transform configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformConfig {
    #[serde(rename = "type")]
    pub transform_type: TransformType,

    pub column: usize,

    /// `Some(Value::Null)` is an explicit null, `None` an absent key
    #[serde(
        default,
        deserialize_with = "explicit_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Value>,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub start: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
}

impl TransformConfig {
    fn validate(&self) -> Result<()> {
        if self.transform_type == TransformType::FixedValue && self.value.is_none() {
            return Err(Error::config("fixedValue transform requires a value"));
        }
        Ok(())
    }
}

// ============================================================================
// Grouping / Projection
// ============================================================================

/// Grouping configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupByConfig {
    pub column: usize,
}

/// Projection field kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    /// Copy a column
    Column,
    /// Emit a constant
    Fixed,
}

/// Projection field configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    #[serde(rename = "type")]
    pub field_type: FieldType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,

    #[serde(
        default,
        deserialize_with = "explicit_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Value>,
}

impl FieldConfig {
    fn validate(&self) -> Result<()> {
        match self.field_type {
            FieldType::Column if self.column.is_none() => {
                Err(Error::config("column field requires a column"))
            }
            FieldType::Fixed if self.value.is_none() => {
                Err(Error::config("fixed field requires a value"))
            }
            _ => Ok(()),
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn default_true() -> bool {
    true
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(n: &usize) -> bool {
    *n == 0
}

/// Present keys (including `null`) become `Some`; absent keys use the default
fn explicit_value<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
