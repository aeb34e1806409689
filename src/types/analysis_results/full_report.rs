//! Full profile report type

use super::categories::CategoryGroup;
use super::completeness::DataQualityReport;
use super::distributions::ValueDistribution;
use super::examples::ExampleRecords;
use super::schema::SchemaRecommendation;
use super::structure::StructureSummary;
use super::suggestions::ModelSuggestion;
use super::temporal::TemporalSummary;
use crate::types::FieldEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything one profiling run produces
///
/// Contains no wall-clock data, so profiling the same batch twice yields
/// identical reports.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileReport {
    pub total_records: usize,

    /// Sorted by presence descending, then path
    pub discovered_fields: Vec<FieldEntry>,

    /// Category groups in order of first appearance
    pub field_categories: Vec<CategoryGroup>,

    pub structure_analysis: StructureSummary,

    /// Keyed by field path
    pub value_distributions: BTreeMap<String, ValueDistribution>,

    /// Absent when no record carries a publish time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temporal_analysis: Option<TemporalSummary>,

    pub examples: ExampleRecords,

    pub data_quality: DataQualityReport,

    pub schema_recommendations: SchemaRecommendation,

    pub ml_suggestions: Vec<ModelSuggestion>,
}

impl ProfileReport {
    /// Zeroed report shell for a batch of `total_records` records
    pub fn empty(total_records: usize) -> Self {
        Self {
            total_records,
            ..Default::default()
        }
    }

    /// Look up a discovered field by path
    pub fn field(&self, path: &str) -> Option<&FieldEntry> {
        self.discovered_fields.iter().find(|f| f.path == path)
    }
}
