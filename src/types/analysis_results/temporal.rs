//! Publish-time span types

use serde::{Deserialize, Serialize};

/// Span of publish timestamps across a batch
///
/// With fewer than two timestamps the duration and interval are zero and the
/// readable duration is `N/A`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalSummary {
    /// Field the timestamps were read from
    pub timestamp_field: String,

    /// Earliest timestamp (milliseconds since epoch)
    pub first_timestamp: i64,

    /// Latest timestamp (milliseconds since epoch)
    pub last_timestamp: i64,

    /// Earliest timestamp as RFC 3339 (UTC)
    pub first_timestamp_iso: String,

    /// Latest timestamp as RFC 3339 (UTC)
    pub last_timestamp_iso: String,

    pub duration_ms: i64,

    /// Duration as `Xh Ym Zs`, `Ym Zs` or `Zs`
    pub duration_readable: String,

    pub total_timestamps: usize,

    /// Mean inter-arrival interval, `round(duration / count)`
    pub avg_interval_ms: i64,
}
