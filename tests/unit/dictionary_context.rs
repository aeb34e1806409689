//! Context-aware field naming as seen through a full profile

use crate::common::mixed_stream_records;
use market_feed_profiler::analysis::ProfilingEngine;
use market_feed_profiler::types::ContextTag;

#[test]
fn test_id_is_named_by_its_container() {
    let report = ProfilingEngine::default().analyse(&mixed_stream_records());
    let name = |path: &str| report.field(path).unwrap().name.clone();

    assert_eq!(name("mc[0].id"), "Market ID");
    assert_eq!(name("mc[0].rc[0].id"), "Selection ID");
    assert_eq!(name("mc[0].marketDefinition.runners[0].id"), "Selection ID");
    assert_eq!(name("oc[0].orc[0].id"), "Selection ID");
    assert_eq!(name("oc[0].orc[0].uo[0].id"), "Bet ID");
}

#[test]
fn test_contexts_record_the_parent_container() {
    let report = ProfilingEngine::default().analyse(&mixed_stream_records());

    assert!(report.field("mc").unwrap().contexts.is_empty());
    assert_eq!(
        report.field("mc[0].id").unwrap().contexts,
        vec![ContextTag::MarketChange]
    );
    assert_eq!(
        report.field("mc[0].rc[0].ltp").unwrap().contexts,
        vec![ContextTag::RunnerChange]
    );
    assert_eq!(
        report.field("oc[0].orc[0].uo[0].side").unwrap().contexts,
        vec![ContextTag::UnmatchedOrder]
    );
}

#[test]
fn test_order_runner_fields_resolve() {
    let report = ProfilingEngine::default().analyse(&mixed_stream_records());
    let uo = report.field("oc[0].orc[0].uo").unwrap();
    assert_ne!(uo.name, "Uo");
    assert_ne!(uo.category, "Unknown");
}

#[test]
fn test_unknown_keys_fall_back_to_title_case() {
    let records = vec![serde_json::json!({"someVendor_flag": true})];
    let report = ProfilingEngine::default().analyse(&records);
    let field = report.field("someVendor_flag").unwrap();

    assert_eq!(field.description, "Field: someVendor_flag");
    assert_eq!(field.category, "Unknown");
    assert_eq!(field.ml_relevance, "unknown");
    assert_eq!(report.field_categories.len(), 1);
    assert_eq!(report.field_categories[0].category, "Unknown");
}

#[test]
fn test_category_groups_cover_every_field_once() {
    let report = ProfilingEngine::default().analyse(&mixed_stream_records());

    let grouped: usize = report.field_categories.iter().map(|g| g.field_count).sum();
    assert_eq!(grouped, report.discovered_fields.len());
    for group in &report.field_categories {
        assert_eq!(group.field_count, group.fields.len());
        assert!(!group.icon.is_empty());
    }
}
