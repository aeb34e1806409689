//! Publish-time span analysis

use crate::types::analysis_results::TemporalSummary;
use crate::utils::math::safe_mean_rounded;
use crate::utils::time::{format_duration, timestamp_ms_to_iso};
use serde_json::Value;

/// Top-level field holding the publish time
pub const TIMESTAMP_FIELD: &str = "pt";

const TIMESTAMP_LABEL: &str = "pt (Publish Time)";

pub struct TemporalAnalyser;

impl TemporalAnalyser {
    /// Numeric publish times of every record, in record order
    pub fn collect_timestamps(records: &[Value]) -> Vec<i64> {
        records
            .iter()
            .filter_map(|record| record.get(TIMESTAMP_FIELD))
            .filter_map(timestamp_value)
            .collect()
    }

    /// `None` when no record carries a publish time
    pub fn analyse(timestamps: &[i64]) -> Option<TemporalSummary> {
        let mut sorted = timestamps.to_vec();
        sorted.sort_unstable();

        let first = *sorted.first()?;
        let last = *sorted.last()?;
        let count = sorted.len();

        let (duration_ms, duration_readable, avg_interval_ms) = if count > 1 {
            // Extreme publish times clamp instead of overflowing
            let duration = last.saturating_sub(first);
            (
                duration,
                format_duration(duration),
                safe_mean_rounded(duration, count),
            )
        } else {
            (0, "N/A".to_string(), 0)
        };

        Some(TemporalSummary {
            timestamp_field: TIMESTAMP_LABEL.to_string(),
            first_timestamp: first,
            last_timestamp: last,
            first_timestamp_iso: timestamp_ms_to_iso(first),
            last_timestamp_iso: timestamp_ms_to_iso(last),
            duration_ms,
            duration_readable,
            total_timestamps: count,
            avg_interval_ms,
        })
    }
}

/// Integral or fractional milliseconds; anything else is ignored
fn timestamp_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|v| v.min(i64::MAX as u64) as i64))
            .or_else(|| n.as_f64().map(|v| v as i64)),
        _ => None,
    }
}
