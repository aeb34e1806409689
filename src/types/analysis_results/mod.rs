//! Analysis result types and data structures
//!
//! One structure per statistics pass, plus [`ProfileReport`] which assembles them.
//! Everything here is plain serialisable data consumed by the report formatters.

mod categories;
mod completeness;
mod distributions;
mod examples;
mod full_report;
mod schema;
mod structure;
mod suggestions;
mod temporal;

pub use categories::{CategoryFieldSummary, CategoryGroup};
pub use completeness::{CompletenessCounts, CompletenessTier, DataQualityReport, FieldSummary};
pub use distributions::{ValueDistribution, ValueFrequency};
pub use examples::ExampleRecords;
pub use full_report::ProfileReport;
pub use schema::{ColumnMode, SchemaColumn, SchemaRecommendation, StorageType};
pub use structure::StructureSummary;
pub use suggestions::{DataShape, ModelSuggestion};
pub use temporal::TemporalSummary;
