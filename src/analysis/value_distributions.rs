//! Value distributions for well-known categorical fields
//!
//! Only paths whose leaf key is on the categorical allow-list are counted, and only
//! over a prefix of the batch.

use super::path::{leaf_key, resolve_path};
use crate::config::ProfilingConfig;
use crate::types::analysis_results::{ValueDistribution, ValueFrequency};
use crate::types::FieldEntry;
use crate::utils::math::presence_percentage;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Leaf keys treated as categorical
pub const CATEGORICAL_KEYS: &[&str] = &[
    "op",
    "status",
    "marketType",
    "bettingType",
    "countryCode",
    "venue",
    "ct",
    "inPlay",
    "complete",
    "side",
];

pub struct ValueDistributionAnalyser;

impl ValueDistributionAnalyser {
    /// Distributions keyed by path; paths with no sampled value are left out
    pub fn analyse(
        records: &[Value],
        entries: &[FieldEntry],
        config: &ProfilingConfig,
    ) -> BTreeMap<String, ValueDistribution> {
        let scanned = &records[..records.len().min(config.distribution_scan_limit)];

        entries
            .iter()
            .filter(|entry| is_categorical(&entry.path))
            .filter_map(|entry| {
                distribution_for(scanned, entry, config.distribution_top_n)
                    .map(|dist| (entry.path.clone(), dist))
            })
            .collect()
    }
}

pub fn is_categorical(path: &str) -> bool {
    CATEGORICAL_KEYS.contains(&leaf_key(path).as_str())
}

/// Strings render raw; numbers and booleans as JSON text
pub fn stringify_scalar(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Object(_) | Value::Array(_) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn distribution_for(records: &[Value], entry: &FieldEntry, top_n: usize) -> Option<ValueDistribution> {
    // (value, count) in first-seen order
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut sample_size = 0usize;

    for record in records {
        let Some(value) = resolve_path(record, &entry.path).and_then(stringify_scalar) else {
            continue;
        };
        sample_size += 1;
        match index.get(&value) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }

    if sample_size == 0 {
        return None;
    }

    let unique_values = counts.len();
    // Stable sort keeps first-seen order among ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let distribution = counts
        .into_iter()
        .take(top_n)
        .map(|(value, count)| ValueFrequency {
            value,
            count,
            pct: presence_percentage(count, sample_size),
        })
        .collect();

    Some(ValueDistribution {
        field: entry.path.clone(),
        field_name: entry.name.clone(),
        unique_values,
        sample_size,
        distribution,
    })
}
