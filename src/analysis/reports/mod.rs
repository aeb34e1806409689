//! Report formatting and output generation
//!
//! Provides formatting for profiling results via the [`ReportFormatter`] facade.
//! Supports Console, JSON, and CSV output formats.

pub mod dictionary;
pub mod profile;
pub mod utils;

pub use profile::ProfileDocument;

use crate::dictionary::DictionaryListing;
use crate::errors::AppResult;
use crate::types::analysis_results::ProfileReport;
use crate::types::{ContextTag, FieldMetadata};
use std::fmt;
use std::str::FromStr;

/// Output format options for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
    /// One row per discovered field
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "console" => Ok(OutputFormat::Console),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!(
                "unknown format '{}' (expected console, json or csv)",
                other
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Console => "console",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        })
    }
}

/// Facade for all report formatting operations
pub struct ReportFormatter;

impl ReportFormatter {
    // Utilities
    pub fn format_number(n: usize) -> String {
        utils::format_number(n)
    }

    // Profiling
    pub fn format_profile(d: &ProfileDocument<'_>, f: &OutputFormat) -> AppResult<String> {
        profile::format_profile(d, f)
    }
    pub fn format_field_table(r: &ProfileReport) -> AppResult<String> {
        profile::format_field_table(r)
    }

    // Dictionary
    pub fn format_lookup(
        key: &str,
        context: Option<ContextTag>,
        metadata: &FieldMetadata,
        f: &OutputFormat,
    ) -> AppResult<String> {
        dictionary::format_lookup(key, context, metadata, f)
    }
    pub fn format_dictionary(l: &DictionaryListing, f: &OutputFormat) -> AppResult<String> {
        dictionary::format_listing(l, f)
    }
}
