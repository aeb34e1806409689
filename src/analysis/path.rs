//! Field path resolution against raw records

use serde_json::Value;

/// Resolve a registry path such as `mc[0].rc[1].ltp` inside `record`
///
/// Object segments are looked up by key and numeric segments index into arrays.
/// Any mismatch along the way, or a `null` at any step, yields `None`.
///
/// ```
/// use market_feed_profiler::analysis::path::resolve_path;
/// use serde_json::json;
///
/// let record = json!({"mc": [{"rc": [{"ltp": 2.5}]}]});
/// assert_eq!(resolve_path(&record, "mc[0].rc[0].ltp"), Some(&json!(2.5)));
/// assert_eq!(resolve_path(&record, "mc[1].rc"), None);
/// ```
pub fn resolve_path<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    let normalised = path.replace('[', ".").replace(']', "");
    let mut current = record;

    for part in normalised.split('.').filter(|p| !p.is_empty()) {
        current = match current {
            Value::Object(map) => map.get(part)?,
            Value::Array(items) => items.get(part.parse::<usize>().ok()?)?,
            _ => return None,
        };
        if current.is_null() {
            return None;
        }
    }

    Some(current)
}

/// Final path segment with array markers removed (`mc[0].rc[2]` → `rc`)
pub fn leaf_key(path: &str) -> String {
    let last = path.rsplit('.').next().unwrap_or(path);
    let mut key = String::with_capacity(last.len());
    let mut in_index = false;
    for c in last.chars() {
        match c {
            '[' => in_index = true,
            ']' => in_index = false,
            _ if !in_index => key.push(c),
            _ => {}
        }
    }
    key
}
