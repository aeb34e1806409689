//! Common types shared across the profiling core
//!
//! This module contains the closed vocabularies the walker works with (structural
//! context tags and value type classifications), the metadata returned by the field
//! dictionary, and the finalised per-path [`FieldEntry`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Structural container a field path was discovered under
///
/// Tagging is purely name-based: entering a key with one of these names switches the
/// context for everything below it; any other key keeps the parent's context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ContextTag {
    /// `mc` - market change list
    #[serde(rename = "mc")]
    MarketChange,
    /// `oc` - order change list
    #[serde(rename = "oc")]
    OrderChange,
    /// `marketDefinition` - embedded market definition object
    #[serde(rename = "marketDefinition")]
    MarketDefinition,
    /// `rc` - runner change list (prices and ladders)
    #[serde(rename = "rc")]
    RunnerChange,
    /// `runners` - runner definition list inside a market definition
    #[serde(rename = "runners")]
    RunnerDefinition,
    /// `orc` - order runner change list (per-selection order detail)
    #[serde(rename = "orc")]
    OrderRunnerChange,
    /// `uo` - unmatched order list
    #[serde(rename = "uo")]
    UnmatchedOrder,
}

impl ContextTag {
    pub const ALL: [ContextTag; 7] = [
        ContextTag::MarketChange,
        ContextTag::OrderChange,
        ContextTag::MarketDefinition,
        ContextTag::RunnerChange,
        ContextTag::RunnerDefinition,
        ContextTag::OrderRunnerChange,
        ContextTag::UnmatchedOrder,
    ];

    /// Context introduced by entering `key`, if it names a significant container
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "mc" => Some(ContextTag::MarketChange),
            "oc" => Some(ContextTag::OrderChange),
            "marketDefinition" => Some(ContextTag::MarketDefinition),
            "rc" => Some(ContextTag::RunnerChange),
            "runners" => Some(ContextTag::RunnerDefinition),
            "orc" => Some(ContextTag::OrderRunnerChange),
            "uo" => Some(ContextTag::UnmatchedOrder),
            _ => None,
        }
    }

    /// The container key this tag stands for
    pub fn key(&self) -> &'static str {
        match self {
            ContextTag::MarketChange => "mc",
            ContextTag::OrderChange => "oc",
            ContextTag::MarketDefinition => "marketDefinition",
            ContextTag::RunnerChange => "rc",
            ContextTag::RunnerDefinition => "runners",
            ContextTag::OrderRunnerChange => "orc",
            ContextTag::UnmatchedOrder => "uo",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ContextTag::MarketChange => "Market Change",
            ContextTag::OrderChange => "Order Change",
            ContextTag::MarketDefinition => "Market Definition",
            ContextTag::RunnerChange => "Runner Change",
            ContextTag::RunnerDefinition => "Runner Definition",
            ContextTag::OrderRunnerChange => "Order Runner Change",
            ContextTag::UnmatchedOrder => "Unmatched Order",
        }
    }
}

impl fmt::Display for ContextTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ContextTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContextTag::from_key(s).ok_or_else(|| {
            let known: Vec<&str> = ContextTag::ALL.iter().map(|c| c.key()).collect();
            format!("unknown context '{}' (expected one of {})", s, known.join(", "))
        })
    }
}

/// Runtime classification of a JSON scalar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Null,
    Bool,
    Int,
    Float,
    Str,
}

impl ScalarType {
    /// Classify a scalar value; containers return `None`
    pub fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(ScalarType::Null),
            Value::Bool(_) => Some(ScalarType::Bool),
            Value::Number(n) if n.is_i64() || n.is_u64() => Some(ScalarType::Int),
            Value::Number(_) => Some(ScalarType::Float),
            Value::String(_) => Some(ScalarType::Str),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarType::Null => "null",
            ScalarType::Bool => "bool",
            ScalarType::Int => "int",
            ScalarType::Float => "float",
            ScalarType::Str => "str",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "null" => Some(ScalarType::Null),
            "bool" => Some(ScalarType::Bool),
            "int" => Some(ScalarType::Int),
            "float" => Some(ScalarType::Float),
            "str" => Some(ScalarType::Str),
            _ => None,
        }
    }
}

/// Type recorded for a field path when its entry is created
///
/// Later observations never change it: a batch mixing types for one path keeps
/// whichever type was seen first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ValueType {
    Scalar(ScalarType),
    Object,
    /// Array with no first element to inspect
    EmptyArray,
    ArrayOfObject,
    ArrayOfArray,
    ArrayOf(ScalarType),
}

impl ValueType {
    /// Classify a value; arrays are classified by their first element
    pub fn classify(value: &Value) -> Self {
        match value {
            Value::Object(_) => ValueType::Object,
            Value::Array(items) => match items.first() {
                None => ValueType::EmptyArray,
                Some(Value::Object(_)) => ValueType::ArrayOfObject,
                Some(Value::Array(_)) => ValueType::ArrayOfArray,
                Some(first) => ValueType::ArrayOf(
                    ScalarType::of(first).unwrap_or(ScalarType::Null),
                ),
            },
            scalar => ValueType::Scalar(ScalarType::of(scalar).unwrap_or(ScalarType::Null)),
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(
            self,
            ValueType::EmptyArray
                | ValueType::ArrayOfObject
                | ValueType::ArrayOfArray
                | ValueType::ArrayOf(_)
        )
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Scalar(s) => f.write_str(s.as_str()),
            ValueType::Object => f.write_str("object"),
            ValueType::EmptyArray => f.write_str("array"),
            ValueType::ArrayOfObject => f.write_str("array[object]"),
            ValueType::ArrayOfArray => f.write_str("array[array]"),
            ValueType::ArrayOf(s) => write!(f, "array[{}]", s.as_str()),
        }
    }
}

impl From<ValueType> for String {
    fn from(value: ValueType) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for ValueType {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.as_str() {
            "object" => Ok(ValueType::Object),
            "array" => Ok(ValueType::EmptyArray),
            "array[object]" => Ok(ValueType::ArrayOfObject),
            "array[array]" => Ok(ValueType::ArrayOfArray),
            other => {
                if let Some(inner) = other
                    .strip_prefix("array[")
                    .and_then(|rest| rest.strip_suffix(']'))
                {
                    ScalarType::parse(inner)
                        .map(ValueType::ArrayOf)
                        .ok_or_else(|| format!("unknown array element type: {}", inner))
                } else {
                    ScalarType::parse(other)
                        .map(ValueType::Scalar)
                        .ok_or_else(|| format!("unknown value type: {}", other))
                }
            }
        }
    }
}

/// Descriptive metadata for one field key, as returned by the field dictionary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMetadata {
    pub name: String,
    pub description: String,
    pub category: String,
    pub ml_relevance: String,
}

/// Display metadata for a field category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDescriptor {
    pub icon: String,
    pub description: String,
    pub color: String,
}

/// One discovered field path, finalised after the walk
///
/// Metadata and `value_type` come from the first observation of the path and are
/// never overwritten; `count` is the number of records exhibiting the path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldEntry {
    pub path: String,
    pub key: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub ml_relevance: String,
    #[serde(rename = "type")]
    pub value_type: ValueType,
    pub count: usize,
    pub sample_values: Vec<Value>,
    pub contexts: Vec<ContextTag>,
    pub presence_pct: f64,
}

impl FieldEntry {
    /// True for paths directly under the record root
    pub fn is_top_level(&self) -> bool {
        !self.path.contains('.') && !self.path.contains('[')
    }

    /// Number of dot-separated segments in the path
    pub fn depth(&self) -> usize {
        self.path.split('.').count()
    }
}
