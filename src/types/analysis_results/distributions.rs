//! Categorical value distribution types

use serde::{Deserialize, Serialize};

/// Most frequent values of one categorical field path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueDistribution {
    /// Full field path the values were resolved from
    pub field: String,

    /// Display name of the field
    pub field_name: String,

    /// Distinct stringified values seen in the scanned records
    pub unique_values: usize,

    /// Non-null scalar values sampled (denominator for `pct`)
    pub sample_size: usize,

    /// Top values, most frequent first
    pub distribution: Vec<ValueFrequency>,
}

/// One value and how often it occurred
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueFrequency {
    pub value: String,
    pub count: usize,
    pub pct: f64,
}
