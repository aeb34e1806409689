//! Integration Tests Module
//!
//! End-to-end tests that verify the complete pipeline from NDJSON files on disk
//! to formatted reports.

pub mod loader_pipeline;
pub mod plugin_dictionary;
pub mod report_output;
