//! Storage schema recommendation types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Column storage type suggested for a field path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum StorageType {
    Int64,
    Float64,
    Bool,
    String,
    /// Nested structure needing its own struct definition
    Record,
    ArrayInt64,
    ArrayFloat64,
    ArrayBool,
    ArrayString,
}

impl StorageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageType::Int64 => "INT64",
            StorageType::Float64 => "FLOAT64",
            StorageType::Bool => "BOOL",
            StorageType::String => "STRING",
            StorageType::Record => "RECORD",
            StorageType::ArrayInt64 => "ARRAY<INT64>",
            StorageType::ArrayFloat64 => "ARRAY<FLOAT64>",
            StorageType::ArrayBool => "ARRAY<BOOL>",
            StorageType::ArrayString => "ARRAY<STRING>",
        }
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<StorageType> for String {
    fn from(value: StorageType) -> Self {
        value.as_str().to_string()
    }
}

impl TryFrom<String> for StorageType {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        [
            StorageType::Int64,
            StorageType::Float64,
            StorageType::Bool,
            StorageType::String,
            StorageType::Record,
            StorageType::ArrayInt64,
            StorageType::ArrayFloat64,
            StorageType::ArrayBool,
            StorageType::ArrayString,
        ]
        .into_iter()
        .find(|t| t.as_str() == s)
        .ok_or_else(|| format!("unknown storage type: {}", s))
    }
}

/// Whether a column may hold nulls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColumnMode {
    Required,
    Nullable,
}

impl ColumnMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnMode::Required => "REQUIRED",
            ColumnMode::Nullable => "NULLABLE",
        }
    }
}

/// One flattened column definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaColumn {
    /// Sanitised column name, `^[A-Za-z][A-Za-z0-9_]*$`
    pub name: String,
    #[serde(rename = "type")]
    pub storage_type: StorageType,
    pub mode: ColumnMode,
    pub description: String,
    /// Field path the column was derived from
    pub source_path: String,
}

/// Suggested tabular schema for commonly present fields
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaRecommendation {
    pub columns: Vec<SchemaColumn>,
    pub notes: Vec<String>,
}
