//! Properties that must hold for any batch

use crate::common::{mixed_stream_records, scenario_b_records};
use market_feed_profiler::analysis::ProfilingEngine;
use market_feed_profiler::config::ProfilingConfig;
use market_feed_profiler::dictionary::BetfairDictionary;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::Arc;

fn engine_with(config: ProfilingConfig) -> ProfilingEngine {
    ProfilingEngine::new(Arc::new(BetfairDictionary::new()), config)
}

/// 60 records with rotating shapes so that chunk boundaries matter
fn varied_records() -> Vec<Value> {
    let mut records = Vec::new();
    for i in 0..60 {
        let mut record = mixed_stream_records()[i % 4].clone();
        record["pt"] = json!(1_700_000_000_000_i64 + i as i64 * 50);
        if i % 7 == 0 {
            record["extra"] = json!({"seq": i, "tags": ["a", "b"]});
        }
        records.push(record);
    }
    records
}

#[test]
fn test_paths_are_unique() {
    let report = ProfilingEngine::default().analyse(&varied_records());
    let unique: HashSet<&str> = report
        .discovered_fields
        .iter()
        .map(|f| f.path.as_str())
        .collect();
    assert_eq!(unique.len(), report.discovered_fields.len());
}

#[test]
fn test_presence_is_bounded_and_matches_count() {
    let records = varied_records();
    let report = ProfilingEngine::default().analyse(&records);

    for field in &report.discovered_fields {
        assert!(field.count >= 1 && field.count <= records.len(), "{}", field.path);
        assert!(
            field.presence_pct > 0.0 && field.presence_pct <= 100.0,
            "{}",
            field.path
        );
        let exact = field.count as f64 / records.len() as f64 * 100.0;
        assert!((field.presence_pct - exact).abs() <= 0.005 + 1e-9, "{}", field.path);
    }
}

#[test]
fn test_sample_values_are_capped() {
    let records: Vec<Value> = (0..50).map(|i| json!({"seq": i})).collect();
    let config = ProfilingConfig {
        max_samples: 3,
        ..ProfilingConfig::default()
    };
    let report = engine_with(config).analyse(&records);

    let seq = report.field("seq").unwrap();
    assert_eq!(seq.sample_values, vec![json!(0), json!(1), json!(2)]);
    assert!(report
        .discovered_fields
        .iter()
        .all(|f| f.sample_values.len() <= 3));
}

#[test]
fn test_fields_ordered_by_presence_then_path() {
    let report = ProfilingEngine::default().analyse(&varied_records());

    for pair in report.discovered_fields.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.presence_pct > b.presence_pct
                || (a.presence_pct == b.presence_pct && a.path < b.path),
            "{} before {}",
            a.path,
            b.path
        );
    }
}

#[test]
fn test_column_names_are_valid_identifiers() {
    let records = vec![
        json!({"9lives": 1, "a-b": {"c d": 2}, "__x__": 3, "ok": [1, 2]}),
    ];
    let config = ProfilingConfig {
        column_name_max_len: 8,
        ..ProfilingConfig::default()
    };
    let report = engine_with(config).analyse(&records);

    assert!(!report.schema_recommendations.columns.is_empty());
    for column in &report.schema_recommendations.columns {
        let name = &column.name;
        assert!(!name.is_empty());
        assert!(name.len() <= 8, "{}", name);
        assert!(name.chars().next().unwrap().is_ascii_alphabetic(), "{}", name);
        assert!(
            name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
            "{}",
            name
        );
    }
}

#[test]
fn test_parallel_walk_matches_sequential() {
    let records = varied_records();
    let sequential = ProfilingEngine::default().analyse(&records);

    for workers in [2, 3, 8] {
        let config = ProfilingConfig {
            workers,
            ..ProfilingConfig::default()
        };
        let parallel = engine_with(config).analyse(&records);
        assert_eq!(parallel, sequential, "workers = {}", workers);
    }
}

#[test]
fn test_depth_ceiling_limits_paths() {
    let mut nested = json!({"leaf": 1});
    for i in 0..15 {
        nested = json!({ format!("n{}", i): nested });
    }
    let records = vec![nested];

    let config = ProfilingConfig {
        max_depth: 3,
        ..ProfilingConfig::default()
    };
    let shallow = engine_with(config).analyse(&records);
    assert_eq!(shallow.structure_analysis.max_depth, 4);
    assert_eq!(shallow.discovered_fields.len(), 4);

    let full = ProfilingEngine::default().analyse(&records);
    assert_eq!(full.structure_analysis.max_depth, 11);
}

#[test]
fn test_first_observed_type_wins() {
    let records = vec![json!({"v": 1}), json!({"v": "one"}), json!({"v": [1]})];
    let report = ProfilingEngine::default().analyse(&records);

    let v = report.field("v").unwrap();
    assert_eq!(v.value_type.to_string(), "int");
    assert_eq!(v.count, 3);
}

#[test]
fn test_repeated_path_counts_once_per_record() {
    let records = scenario_b_records();
    let report = ProfilingEngine::default().analyse(&records);
    assert!(report.discovered_fields.iter().all(|f| f.count <= 10));

    // Second array element resolves to a distinct indexed path
    let two_runners = vec![json!({"rc": [{"id": 1}, {"id": 2}]})];
    let report = ProfilingEngine::default().analyse(&two_runners);
    assert_eq!(report.field("rc[0].id").unwrap().count, 1);
    assert_eq!(report.field("rc[1].id").unwrap().count, 1);
}
