//! Representative example records

use crate::config::ProfilingConfig;
use crate::types::analysis_results::ExampleRecords;
use serde_json::Value;

/// Runner change keys that mark a record as carrying price data
pub const PRICE_KEYS: &[&str] = &["ltp", "batb", "batl", "trd"];

pub struct ExampleRecordFinder;

impl ExampleRecordFinder {
    /// First record, plus the first market definition and price carriers
    /// within the scan limit
    pub fn find(records: &[Value], config: &ProfilingConfig) -> ExampleRecords {
        let scanned = &records[..records.len().min(config.example_scan_limit)];

        ExampleRecords {
            first_record: records.first().cloned(),
            with_market_definition: scanned
                .iter()
                .find(|r| has_market_definition(r))
                .cloned(),
            with_price_data: scanned.iter().find(|r| has_price_data(r)).cloned(),
        }
    }
}

fn market_changes(record: &Value) -> impl Iterator<Item = &serde_json::Map<String, Value>> {
    record
        .get("mc")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_object)
}

fn has_market_definition(record: &Value) -> bool {
    market_changes(record).any(|mc| mc.contains_key("marketDefinition"))
}

fn has_price_data(record: &Value) -> bool {
    market_changes(record)
        .filter_map(|mc| mc.get("rc").and_then(Value::as_array))
        .flatten()
        .filter_map(Value::as_object)
        .any(|rc| PRICE_KEYS.iter().any(|k| rc.contains_key(*k)))
}
