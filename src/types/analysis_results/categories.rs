//! Category grouping types

use serde::{Deserialize, Serialize};

/// Fields sharing one dictionary category, with the category's display metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryGroup {
    /// Category name as returned by the field dictionary
    pub category: String,
    pub icon: String,
    pub description: String,
    pub color: String,
    pub field_count: usize,
    /// Fields in registry order (most universal first)
    pub fields: Vec<CategoryFieldSummary>,
}

/// Flattened per-field view used inside a category group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryFieldSummary {
    pub path: String,
    pub key: String,
    pub name: String,
    #[serde(rename = "type")]
    pub value_type: String,
    pub presence_pct: f64,
    pub ml_relevance: String,
}
