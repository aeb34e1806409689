//! Profiling engine behaviour on small hand-built batches

use crate::common::{scenario_a_records, scenario_b_records};
use market_feed_profiler::analysis::ProfilingEngine;
use market_feed_profiler::types::analysis_results::{ColumnMode, CompletenessTier};
use serde_json::json;

const SCENARIO_A_PATHS: [&str; 6] = [
    "pt",
    "mc",
    "mc[0].id",
    "mc[0].rc",
    "mc[0].rc[0].id",
    "mc[0].rc[0].ltp",
];

#[test]
fn test_uniform_batch_discovers_every_path_at_full_presence() {
    let report = ProfilingEngine::default().analyse(&scenario_a_records());

    assert_eq!(report.total_records, 10);
    assert_eq!(report.discovered_fields.len(), SCENARIO_A_PATHS.len());
    for path in SCENARIO_A_PATHS {
        let field = report
            .field(path)
            .unwrap_or_else(|| panic!("missing path {}", path));
        assert_eq!(field.count, 10, "count for {}", path);
        assert_eq!(field.presence_pct, 100.0, "presence for {}", path);
    }
}

#[test]
fn test_uniform_batch_temporal_span() {
    let report = ProfilingEngine::default().analyse(&scenario_a_records());
    let temporal = report.temporal_analysis.expect("pt is present");

    assert!(temporal.timestamp_field.starts_with("pt"));
    assert_eq!(temporal.first_timestamp, 1000);
    assert_eq!(temporal.last_timestamp, 1009);
    assert_eq!(temporal.duration_ms, 9);
    assert_eq!(temporal.total_timestamps, 10);
}

#[test]
fn test_uniform_batch_schema_is_all_required() {
    let report = ProfilingEngine::default().analyse(&scenario_a_records());
    let columns = &report.schema_recommendations.columns;

    assert_eq!(columns.len(), 6);
    assert!(columns.iter().all(|c| c.mode == ColumnMode::Required));

    let mut names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
    names.sort();
    assert_eq!(
        names,
        vec!["mc", "mc_0_id", "mc_0_rc", "mc_0_rc_0_id", "mc_0_rc_0_ltp", "pt"]
    );
}

#[test]
fn test_half_present_field_is_sometimes_and_nullable() {
    let report = ProfilingEngine::default().analyse(&scenario_b_records());
    let ltp = report.field("mc[0].rc[0].ltp").unwrap();

    assert_eq!(ltp.count, 5);
    assert_eq!(ltp.presence_pct, 50.0);
    assert_eq!(
        CompletenessTier::for_presence(ltp.presence_pct),
        CompletenessTier::Sometimes
    );
    assert_eq!(report.data_quality.completeness.sometimes_present, 1);
    assert_eq!(report.data_quality.completeness.always_present, 5);

    let column = report
        .schema_recommendations
        .columns
        .iter()
        .find(|c| c.source_path == "mc[0].rc[0].ltp")
        .unwrap();
    assert_eq!(column.mode, ColumnMode::Nullable);
}

#[test]
fn test_empty_array_registers_container_only() {
    let records = vec![json!({"pt": 1, "mc": []})];
    let report = ProfilingEngine::default().analyse(&records);

    assert!(report.field("mc").is_some());
    assert!(report
        .discovered_fields
        .iter()
        .all(|f| !f.path.starts_with("mc[")));
}

#[test]
fn test_empty_array_in_one_record_does_not_hide_children_of_another() {
    let records = vec![
        json!({"mc": []}),
        json!({"mc": [{"id": "1.1"}]}),
    ];
    let report = ProfilingEngine::default().analyse(&records);

    assert_eq!(report.field("mc").unwrap().presence_pct, 100.0);
    assert_eq!(report.field("mc[0].id").unwrap().presence_pct, 50.0);
}

#[test]
fn test_status_distribution_sorted_by_count() {
    let records = vec![
        json!({"status": "OPEN"}),
        json!({"status": "OPEN"}),
        json!({"status": "SUSPENDED"}),
    ];
    let report = ProfilingEngine::default().analyse(&records);
    let dist = &report.value_distributions["status"];

    assert_eq!(dist.unique_values, 2);
    assert_eq!(dist.sample_size, 3);
    assert_eq!(dist.distribution[0].value, "OPEN");
    assert_eq!(dist.distribution[0].count, 2);
    assert_eq!(dist.distribution[0].pct, 66.67);
    assert_eq!(dist.distribution[1].value, "SUSPENDED");
    assert_eq!(dist.distribution[1].count, 1);
    assert_eq!(dist.distribution[1].pct, 33.33);
}

#[test]
fn test_profiling_twice_gives_identical_reports() {
    let records = scenario_b_records();
    let engine = ProfilingEngine::default();

    let first = serde_json::to_string(&engine.analyse(&records)).unwrap();
    let second = serde_json::to_string(&engine.analyse(&records)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_batch_yields_empty_report() {
    let report = ProfilingEngine::default().analyse(&[]);

    assert_eq!(report.total_records, 0);
    assert!(report.discovered_fields.is_empty());
    assert!(report.field_categories.is_empty());
    assert!(report.temporal_analysis.is_none());
    assert!(report.schema_recommendations.columns.is_empty());
}

#[test]
fn test_scalar_records_have_no_fields() {
    let records = vec![json!(42), json!("text"), json!(null)];
    let report = ProfilingEngine::default().analyse(&records);

    assert_eq!(report.total_records, 3);
    assert!(report.discovered_fields.is_empty());
    assert!(report.temporal_analysis.is_none());
}

#[test]
fn test_extreme_publish_times_do_not_panic() {
    let records = vec![json!({"pt": i64::MIN}), json!({"pt": i64::MAX})];
    let report = ProfilingEngine::default().analyse(&records);

    let temporal = report.temporal_analysis.unwrap();
    assert_eq!(temporal.duration_ms, i64::MAX);
    assert!(temporal.avg_interval_ms > 0);
}

#[test]
fn test_field_missing_once_is_nullable_even_when_rounded_to_full() {
    let mut records: Vec<_> = (0..20_000).map(|i| json!({"pt": i, "a": 1})).collect();
    records.push(json!({"pt": 20_000}));
    let report = ProfilingEngine::default().analyse(&records);

    let a = report.field("a").unwrap();
    assert_eq!(a.presence_pct, 100.0);
    assert_eq!(a.count, 20_000);

    let column = report
        .schema_recommendations
        .columns
        .iter()
        .find(|c| c.source_path == "a")
        .unwrap();
    assert_eq!(column.mode, ColumnMode::Nullable);
    assert_eq!(report.data_quality.field_summary.always_present_fields, vec!["pt"]);
    assert_eq!(report.data_quality.completeness.mostly_present, 1);
}
