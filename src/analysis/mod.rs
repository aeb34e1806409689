//! Profiling engine for raw market feed records
//!
//! ## Overview
//!
//! The analysis module is organised around the [`ProfilingEngine`]:
//!
//! - **Field discovery** - the [`StructuralWalker`] visits every record and fills a
//!   [`FieldRegistry`] with one entry per distinct field path
//! - **Statistics passes** - categories, structure, value distributions, temporal
//!   span, examples, completeness, schema recommendation and model suggestions,
//!   each reading the finalised entry list
//! - **Report generation** - formatted output for console, JSON and CSV
//!
//! ## Usage
//!
//! ```rust
//! use market_feed_profiler::analysis::ProfilingEngine;
//! use serde_json::json;
//!
//! let records = vec![
//!     json!({"op": "mcm", "pt": 1000, "mc": [{"id": "1.1"}]}),
//!     json!({"op": "mcm", "pt": 1009}),
//! ];
//!
//! let engine = ProfilingEngine::default();
//! let report = engine.analyse(&records);
//!
//! assert_eq!(report.total_records, 2);
//! assert_eq!(report.field("mc").map(|f| f.presence_pct), Some(50.0));
//! ```

pub mod categorization;
pub mod completeness;
pub mod example_records;
pub mod model_suggestions;
pub mod path;
pub mod registry;
pub mod reports;
pub mod schema_recommendation;
pub mod structure;
pub mod temporal;
pub mod value_distributions;
pub mod walker;

// Re-export main types and interfaces
pub use categorization::CategoryAnalyser;
pub use completeness::CompletenessAnalyser;
pub use example_records::ExampleRecordFinder;
pub use model_suggestions::ModelSuggestionAnalyser;
pub use registry::{FieldRegistry, PendingEntry};
pub use reports::{OutputFormat, ProfileDocument, ReportFormatter};
pub use schema_recommendation::SchemaRecommender;
pub use structure::StructureAnalyser;
pub use temporal::TemporalAnalyser;
pub use value_distributions::ValueDistributionAnalyser;
pub use walker::{FieldObservation, StructuralWalker};

use crate::config::ProfilingConfig;
use crate::dictionary::{BetfairDictionary, FieldMetadataLookup};
use crate::types::analysis_results::ProfileReport;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Main profiling engine
///
/// Holds the field dictionary and the caps every pass works within. The engine keeps
/// no state between runs: each call builds its own registry and drops it when the
/// report is assembled.
#[derive(Clone)]
pub struct ProfilingEngine {
    lookup: Arc<dyn FieldMetadataLookup>,
    config: ProfilingConfig,
}

impl Default for ProfilingEngine {
    /// Built-in exchange stream dictionary with default caps
    fn default() -> Self {
        Self::new(Arc::new(BetfairDictionary::new()), ProfilingConfig::default())
    }
}

impl ProfilingEngine {
    /// Create a new profiling engine
    ///
    /// # Arguments
    /// * `lookup` - Field dictionary consulted for every new path
    /// * `config` - Depth ceiling, sample caps and pass limits
    pub fn new(lookup: Arc<dyn FieldMetadataLookup>, config: ProfilingConfig) -> Self {
        Self { lookup, config }
    }

    pub fn config(&self) -> &ProfilingConfig {
        &self.config
    }

    pub fn lookup(&self) -> &dyn FieldMetadataLookup {
        self.lookup.as_ref()
    }

    /// Walk every record and return the populated registry
    pub fn discover_fields(&self, records: &[Value]) -> FieldRegistry {
        info!("Discovering fields across {} records", records.len());
        let registry = FieldRegistry::build(records, self.lookup.as_ref(), &self.config);
        info!("Discovered {} unique field paths", registry.len());
        registry
    }

    /// Run every statistics pass over a registry built from `records`
    pub fn profile(&self, records: &[Value], registry: FieldRegistry) -> ProfileReport {
        let total_records = registry.total_records();
        if total_records == 0 {
            return ProfileReport::empty(0);
        }

        let discovered_fields = registry.finalize();

        debug!("Categorising fields");
        let field_categories = CategoryAnalyser::analyse(&discovered_fields, self.lookup.as_ref());

        debug!("Analysing structure");
        let structure_analysis = StructureAnalyser::analyse(&discovered_fields);

        debug!("Computing value distributions");
        let value_distributions =
            ValueDistributionAnalyser::analyse(records, &discovered_fields, &self.config);

        debug!("Analysing temporal span");
        let timestamps = TemporalAnalyser::collect_timestamps(records);
        let temporal_analysis = TemporalAnalyser::analyse(&timestamps);

        debug!("Collecting example records");
        let examples = ExampleRecordFinder::find(records, &self.config);

        debug!("Assessing completeness");
        let data_quality =
            CompletenessAnalyser::analyse(&discovered_fields, total_records, &self.config);

        debug!("Recommending schema");
        let schema_recommendations = SchemaRecommender::recommend(&discovered_fields, total_records, &self.config);

        debug!("Suggesting models");
        let shape =
            ModelSuggestionAnalyser::data_shape(&discovered_fields, timestamps.len(), &self.config);
        let ml_suggestions = ModelSuggestionAnalyser::suggest(&shape);

        ProfileReport {
            total_records,
            discovered_fields,
            field_categories,
            structure_analysis,
            value_distributions,
            temporal_analysis,
            examples,
            data_quality,
            schema_recommendations,
            ml_suggestions,
        }
    }

    /// Discover fields and profile in one call
    ///
    /// An empty batch yields [`ProfileReport::empty`] without running any pass.
    pub fn analyse(&self, records: &[Value]) -> ProfileReport {
        if records.is_empty() {
            info!("No records to analyse");
            return ProfileReport::empty(0);
        }

        let registry = self.discover_fields(records);
        let report = self.profile(records, registry);
        info!(
            "Profiled {} records: {} fields in {} categories",
            report.total_records,
            report.discovered_fields.len(),
            report.field_categories.len()
        );
        report
    }
}
