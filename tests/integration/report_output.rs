//! Formatted output for a profiled stream

use crate::common::mixed_stream_records;
use market_feed_profiler::analysis::{OutputFormat, ProfileDocument, ProfilingEngine, ReportFormatter};
use market_feed_profiler::dictionary::{BetfairDictionary, FieldMetadataLookup};
use market_feed_profiler::loader::LoadStats;
use market_feed_profiler::types::ContextTag;
use serde_json::Value;

fn document_output(format: OutputFormat) -> String {
    let records = mixed_stream_records();
    let report = ProfilingEngine::default().analyse(&records);
    let stats = LoadStats {
        files_read: 1,
        lines_read: 4,
        records_loaded: 4,
        ..LoadStats::default()
    };
    let document = ProfileDocument {
        generated_at: "2026-01-01T00:00:00+00:00".to_string(),
        source: "fixtures/stream.ndjson",
        load_stats: &stats,
        report: &report,
    };
    ReportFormatter::format_profile(&document, &format).unwrap()
}

#[test]
fn test_json_document_wraps_report() {
    let output = document_output(OutputFormat::Json);
    let parsed: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["source"], "fixtures/stream.ndjson");
    assert_eq!(parsed["load_stats"]["records_loaded"], 4);
    assert_eq!(parsed["report"]["total_records"], 4);
    assert!(parsed["report"]["discovered_fields"].as_array().unwrap().len() > 20);
    assert!(parsed["report"].get("generated_at").is_none());
    assert_eq!(parsed["report"]["value_distributions"]["op"]["distribution"][0]["value"], "mcm");
}

#[test]
fn test_csv_table_has_one_row_per_field() {
    let records = mixed_stream_records();
    let report = ProfilingEngine::default().analyse(&records);
    let output = ReportFormatter::format_field_table(&report).unwrap();

    let mut reader = csv::Reader::from_reader(output.as_bytes());
    let headers = reader.headers().unwrap().clone();
    assert_eq!(&headers[0], "path");
    assert_eq!(&headers[6], "presence_pct");

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), report.discovered_fields.len());
    assert_eq!(&rows[0][0], report.discovered_fields[0].path.as_str());
}

#[test]
fn test_console_summary_mentions_key_sections() {
    let output = document_output(OutputFormat::Console);
    assert!(output.contains("=== MARKET FEED PROFILE ==="));
    assert!(output.contains("mc[0].rc[0].ltp"));
}

#[test]
fn test_dictionary_lookup_and_listing() {
    let dict = BetfairDictionary::new();
    let metadata = dict.lookup("ltp", Some(ContextTag::RunnerChange));

    let json = ReportFormatter::format_lookup("ltp", Some(ContextTag::RunnerChange), &metadata, &OutputFormat::Json)
        .unwrap();
    let parsed: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["key"], "ltp");
    assert_eq!(parsed["context"], "rc");
    assert_eq!(parsed["name"], "Last Traded Price");

    let listing = ReportFormatter::format_dictionary(&dict.listing(), &OutputFormat::Json).unwrap();
    let parsed: Value = serde_json::from_str(&listing).unwrap();
    assert_eq!(parsed["source"], "built-in");
    assert!(parsed["categories"].as_object().unwrap().len() > 5);
}
