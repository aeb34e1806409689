//! Profile report formatters
//!
//! Console summary, JSON document and CSV field table for a [`ProfileReport`].

use super::utils::{export_json, fit, format_number, preview_value};
use super::OutputFormat;
use crate::errors::{AppError, AppResult};
use crate::loader::LoadStats;
use crate::types::analysis_results::ProfileReport;
use serde::Serialize;

/// Fields listed in the console summary
const CONSOLE_FIELD_LIMIT: usize = 40;

/// Values listed per distribution in the console summary
const CONSOLE_VALUE_LIMIT: usize = 5;

/// JSON document written by the CLI
///
/// The wall-clock timestamp and input description live here, outside the report.
#[derive(Debug, Serialize)]
pub struct ProfileDocument<'a> {
    pub generated_at: String,
    pub source: &'a str,
    pub load_stats: &'a LoadStats,
    pub report: &'a ProfileReport,
}

/// Format a profile for the chosen output
pub fn format_profile(document: &ProfileDocument<'_>, format: &OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => export_json(document),
        OutputFormat::Csv => format_field_table(document.report),
        OutputFormat::Console => Ok(format_console(document)),
    }
}

fn format_console(document: &ProfileDocument<'_>) -> String {
    let report = document.report;
    let stats = document.load_stats;
    let mut output = String::new();

    output.push_str("=== MARKET FEED PROFILE ===\n");
    output.push_str(&format!("Source: {}\n", document.source));
    output.push_str(&format!(
        "Records: {} ({} files, {} malformed lines skipped)\n",
        format_number(report.total_records),
        format_number(stats.files_read),
        format_number(stats.malformed_lines)
    ));

    if report.total_records == 0 {
        output.push_str("No records to profile.\n");
        return output;
    }

    let structure = &report.structure_analysis;
    output.push_str(&format!(
        "Unique field paths: {} (max depth {})\n",
        format_number(structure.total_unique_paths),
        structure.max_depth
    ));
    output.push_str(&format!(
        "Top-level fields: {}\n",
        structure.top_level_fields.join(", ")
    ));

    output.push_str("\n--- Fields ---\n");
    for field in report.discovered_fields.iter().take(CONSOLE_FIELD_LIMIT) {
        let sample = field
            .sample_values
            .first()
            .map(|v| preview_value(v, 24))
            .unwrap_or_default();
        output.push_str(&format!(
            "{:>7.2}%  {} {} {} {}\n",
            field.presence_pct,
            fit(&field.path, 36),
            fit(&field.value_type.to_string(), 14),
            fit(&field.name, 28),
            sample
        ));
    }
    if report.discovered_fields.len() > CONSOLE_FIELD_LIMIT {
        output.push_str(&format!(
            "  ... {} more\n",
            format_number(report.discovered_fields.len() - CONSOLE_FIELD_LIMIT)
        ));
    }

    output.push_str("\n--- Categories ---\n");
    for group in &report.field_categories {
        output.push_str(&format!(
            "{} {} ({} fields) - {}\n",
            group.icon, group.category, group.field_count, group.description
        ));
    }

    if let Some(temporal) = &report.temporal_analysis {
        output.push_str("\n--- Temporal ---\n");
        output.push_str(&format!(
            "{}: {} -> {}\n",
            temporal.timestamp_field, temporal.first_timestamp_iso, temporal.last_timestamp_iso
        ));
        output.push_str(&format!(
            "Duration: {} ({} timestamps, avg interval {} ms)\n",
            temporal.duration_readable,
            format_number(temporal.total_timestamps),
            temporal.avg_interval_ms
        ));
    }

    if !report.value_distributions.is_empty() {
        output.push_str("\n--- Value distributions ---\n");
        for dist in report.value_distributions.values() {
            output.push_str(&format!(
                "{} ({}): {} unique, {} sampled\n",
                dist.field,
                dist.field_name,
                format_number(dist.unique_values),
                format_number(dist.sample_size)
            ));
            for freq in dist.distribution.iter().take(CONSOLE_VALUE_LIMIT) {
                output.push_str(&format!(
                    "    {} {:>10} {:>7.2}%\n",
                    fit(&freq.value, 24),
                    format_number(freq.count),
                    freq.pct
                ));
            }
        }
    }

    let quality = &report.data_quality.completeness;
    output.push_str("\n--- Data quality ---\n");
    output.push_str(&format!(
        "Always: {}  Mostly: {}  Sometimes: {}  Rarely: {}\n",
        quality.always_present,
        quality.mostly_present,
        quality.sometimes_present,
        quality.rarely_present
    ));

    let schema = &report.schema_recommendations;
    output.push_str(&format!(
        "\n--- Schema recommendation ({} columns) ---\n",
        schema.columns.len()
    ));
    for column in &schema.columns {
        output.push_str(&format!(
            "  {} {} {}\n",
            fit(&column.name, 40),
            fit(column.storage_type.as_str(), 14),
            column.mode.as_str()
        ));
    }
    for note in &schema.notes {
        output.push_str(&format!("  * {}\n", note));
    }

    if !report.ml_suggestions.is_empty() {
        output.push_str("\n--- Model suggestions ---\n");
        for suggestion in &report.ml_suggestions {
            output.push_str(&format!(
                "{} [{}] - {}\n",
                suggestion.model_type, suggestion.complexity, suggestion.approach
            ));
        }
    }

    output
}

/// One CSV row per discovered field, in report order
pub fn format_field_table(report: &ProfileReport) -> AppResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "path",
        "key",
        "name",
        "category",
        "type",
        "count",
        "presence_pct",
        "ml_relevance",
        "contexts",
        "sample_values",
    ])?;

    for field in &report.discovered_fields {
        let value_type = field.value_type.to_string();
        let count = field.count.to_string();
        let presence = format!("{:.2}", field.presence_pct);
        let contexts = field
            .contexts
            .iter()
            .map(|c| c.key())
            .collect::<Vec<_>>()
            .join("|");
        let samples = serde_json::to_string(&field.sample_values)?;

        writer.write_record([
            field.path.as_str(),
            field.key.as_str(),
            field.name.as_str(),
            field.category.as_str(),
            value_type.as_str(),
            count.as_str(),
            presence.as_str(),
            field.ml_relevance.as_str(),
            contexts.as_str(),
            samples.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| AppError::InvalidInput(format!("CSV output: {}", e)))
}
