//! Flat storage schema suggestion for commonly present fields

use crate::config::ProfilingConfig;
use crate::types::analysis_results::{ColumnMode, SchemaColumn, SchemaRecommendation, StorageType};
use crate::types::{FieldEntry, ScalarType, ValueType};
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

lazy_static! {
    static ref NON_ALPHANUMERIC: Regex =
        Regex::new(r"[^A-Za-z0-9]+").expect("valid regex literal");
}

const SCHEMA_NOTES: &[&str] = &[
    "Nested fields flattened with underscore separators",
    "Array fields may need additional handling",
];

pub struct SchemaRecommender;

impl SchemaRecommender {
    /// Columns for entries at or above the presence threshold, in entry order
    ///
    /// A column is REQUIRED only when its path occurs in all `total_records` records;
    /// the rounded presence percentage alone can read 100 for a field that is
    /// occasionally missing.
    pub fn recommend(
        entries: &[FieldEntry],
        total_records: usize,
        config: &ProfilingConfig,
    ) -> SchemaRecommendation {
        let columns = entries
            .iter()
            .filter(|e| e.presence_pct >= config.schema_min_presence)
            .take(config.schema_max_columns)
            .map(|e| SchemaColumn {
                name: sanitize_column_name(&e.path, config.column_name_max_len),
                storage_type: infer_storage_type(e.value_type, &e.sample_values),
                mode: if total_records > 0 && e.count >= total_records {
                    ColumnMode::Required
                } else {
                    ColumnMode::Nullable
                },
                description: e.description.clone(),
                source_path: e.path.clone(),
            })
            .collect();

        let mut notes = vec![format!(
            "Schema based on fields present in ≥{}% of records",
            config.schema_min_presence
        )];
        notes.extend(SCHEMA_NOTES.iter().map(|n| n.to_string()));

        SchemaRecommendation { columns, notes }
    }
}

/// Storage type for a value type, using the first sample when the type is ambiguous
pub fn infer_storage_type(value_type: ValueType, samples: &[Value]) -> StorageType {
    match value_type {
        ValueType::Scalar(ScalarType::Int) => StorageType::Int64,
        ValueType::Scalar(ScalarType::Float) => StorageType::Float64,
        ValueType::Scalar(ScalarType::Bool) => StorageType::Bool,
        ValueType::Object | ValueType::ArrayOfObject => StorageType::Record,
        // Nested arrays are stored serialised
        ValueType::ArrayOfArray => StorageType::String,
        ValueType::ArrayOf(ScalarType::Int) => StorageType::ArrayInt64,
        ValueType::ArrayOf(ScalarType::Float) => StorageType::ArrayFloat64,
        ValueType::ArrayOf(ScalarType::Bool) => StorageType::ArrayBool,
        ValueType::ArrayOf(_) => StorageType::ArrayString,
        ValueType::Scalar(ScalarType::Null | ScalarType::Str) | ValueType::EmptyArray => {
            match samples.first() {
                Some(Value::Bool(_)) => StorageType::Bool,
                Some(Value::Number(n)) if n.is_i64() || n.is_u64() => StorageType::Int64,
                Some(Value::Number(_)) => StorageType::Float64,
                _ => StorageType::String,
            }
        }
    }
}

/// Flat column name for a field path
///
/// Non-alphanumeric runs become `_`, leading and trailing underscores are removed,
/// a non-letter start gets an `f_` prefix and the result is capped at `max_len`.
///
/// ```
/// use market_feed_profiler::analysis::schema_recommendation::sanitize_column_name;
///
/// assert_eq!(sanitize_column_name("mc[0].rc[0].ltp", 128), "mc_0_rc_0_ltp");
/// assert_eq!(sanitize_column_name("[0].op", 128), "f_0_op");
/// ```
pub fn sanitize_column_name(path: &str, max_len: usize) -> String {
    let collapsed = NON_ALPHANUMERIC.replace_all(path, "_");
    let trimmed = collapsed.trim_matches('_');

    let mut name = match trimmed.chars().next() {
        None => "field".to_string(),
        Some(c) if c.is_ascii_alphabetic() => trimmed.to_string(),
        Some(_) => format!("f_{}", trimmed),
    };

    // Only ASCII remains, so byte truncation is safe
    name.truncate(max_len);
    while name.ends_with('_') {
        name.pop();
    }
    name
}
