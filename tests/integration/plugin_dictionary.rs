//! Profiling with a field dictionary loaded from a plugin directory

use crate::common::{scenario_a_records, write_plugin};
use market_feed_profiler::analysis::ProfilingEngine;
use market_feed_profiler::config::ProfilingConfig;
use market_feed_profiler::dictionary::{FieldMetadataLookup, PluginDictionary};
use market_feed_profiler::errors::AppError;
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_plugin_names_flow_into_report() {
    let dir = TempDir::new().unwrap();
    let plugin = PluginDictionary::load(&write_plugin(dir.path())).unwrap();
    assert_eq!(plugin.manifest().plugin_id, "racing");
    assert_eq!(plugin.len(), 3);

    let engine = ProfilingEngine::new(Arc::new(plugin), ProfilingConfig::default());
    let report = engine.analyse(&scenario_a_records());

    let pt = report.field("pt").unwrap();
    assert_eq!(pt.name, "Publish Time");
    assert_eq!(pt.category, "Timing");
    assert_eq!(pt.ml_relevance, "high");

    // Plugin fields ignore context, so every id shares one definition
    let selection = report.field("mc[0].rc[0].id").unwrap();
    assert_eq!(selection.name, "id");
    assert_eq!(selection.category, "Identity");
    assert_eq!(selection.ml_relevance, "low");

    let timing = report
        .field_categories
        .iter()
        .find(|g| g.category == "Timing")
        .unwrap();
    assert_eq!(timing.color, "#111111");

    let pricing = report
        .field_categories
        .iter()
        .find(|g| g.category == "Pricing")
        .unwrap();
    assert_eq!(pricing.icon, "📁");
    assert_eq!(pricing.color, "#8B5CF6");
}

#[test]
fn test_plugin_listing_skips_underscore_keys() {
    let dir = TempDir::new().unwrap();
    let plugin = PluginDictionary::load(&write_plugin(dir.path())).unwrap();
    let listing = plugin.listing();

    assert_eq!(listing.source, "plugin:racing");
    assert_eq!(listing.field_count(), 3);
    assert!(listing
        .sections
        .iter()
        .all(|s| !s.fields.contains_key("_comment")));
}

#[test]
fn test_plugin_without_fields_file_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("manifest.json"), "{\"plugin_id\": \"empty\"}").unwrap();

    let err = PluginDictionary::load(dir.path()).unwrap_err();
    assert!(matches!(err, AppError::Plugin { .. }));
}
