//! Time utilities for temporal analysis
//!
//! Publish times in the feed are milliseconds since the Unix epoch.

use chrono::{TimeZone, Utc};

/// Convert a millisecond Unix timestamp to an RFC 3339 string (UTC)
///
/// Returns "1970-01-01T00:00:00.000Z" for out-of-range timestamps.
///
/// # Examples
/// ```
/// use market_feed_profiler::utils::time::timestamp_ms_to_iso;
/// assert_eq!(timestamp_ms_to_iso(0), "1970-01-01T00:00:00.000Z");
/// assert_eq!(timestamp_ms_to_iso(1704067200123), "2024-01-01T00:00:00.123Z");
/// ```
pub fn timestamp_ms_to_iso(timestamp_ms: i64) -> String {
    Utc.timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|dt| dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
        .unwrap_or_else(|| "1970-01-01T00:00:00.000Z".to_string())
}

/// Render a millisecond duration as `Xh Ym Zs`, `Ym Zs` or `Zs`
///
/// Sub-second remainders are dropped.
///
/// # Examples
/// ```
/// use market_feed_profiler::utils::time::format_duration;
/// assert_eq!(format_duration(9), "0s");
/// assert_eq!(format_duration(61_000), "1m 1s");
/// assert_eq!(format_duration(3_723_000), "1h 2m 3s");
/// ```
pub fn format_duration(duration_ms: i64) -> String {
    let total_seconds = duration_ms.max(0) / 1000;
    let (minutes, seconds) = (total_seconds / 60, total_seconds % 60);
    let (hours, minutes) = (minutes / 60, minutes % 60);

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
