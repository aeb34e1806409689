//! Field dictionary formatters

use super::utils::{export_json, fit};
use super::OutputFormat;
use crate::dictionary::DictionaryListing;
use crate::errors::AppResult;
use crate::types::{ContextTag, FieldMetadata};
use serde::Serialize;

#[derive(Serialize)]
struct LookupResult<'a> {
    key: &'a str,
    context: Option<ContextTag>,
    #[serde(flatten)]
    metadata: &'a FieldMetadata,
}

/// Format a single key lookup
pub fn format_lookup(
    key: &str,
    context: Option<ContextTag>,
    metadata: &FieldMetadata,
    format: &OutputFormat,
) -> AppResult<String> {
    match format {
        OutputFormat::Json | OutputFormat::Csv => export_json(&LookupResult {
            key,
            context,
            metadata,
        }),
        OutputFormat::Console => {
            let context_label = context
                .map(|c| format!("{} ({})", c.key(), c.display_name()))
                .unwrap_or_else(|| "none".to_string());
            Ok(format!(
                "Key: {}\nContext: {}\nName: {}\nDescription: {}\nCategory: {}\nML relevance: {}\n",
                key,
                context_label,
                metadata.name,
                metadata.description,
                metadata.category,
                metadata.ml_relevance
            ))
        }
    }
}

/// Format every known field and category
pub fn format_listing(listing: &DictionaryListing, format: &OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json | OutputFormat::Csv => export_json(listing),
        OutputFormat::Console => {
            let mut output = format!(
                "=== FIELD DICTIONARY ({}) ===\n{} fields, {} categories\n",
                listing.source,
                listing.field_count(),
                listing.categories.len()
            );
            for section in &listing.sections {
                output.push_str(&format!("\n--- {} ---\n", section.name));
                for (key, meta) in &section.fields {
                    output.push_str(&format!(
                        "  {} {} {}\n",
                        fit(key, 24),
                        fit(&meta.name, 32),
                        meta.category
                    ));
                }
            }
            output.push_str("\n--- Categories ---\n");
            for (name, descriptor) in &listing.categories {
                output.push_str(&format!(
                    "  {} {} - {}\n",
                    descriptor.icon, name, descriptor.description
                ));
            }
            Ok(output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{BetfairDictionary, FieldMetadataLookup};

    #[test]
    fn test_lookup_json_is_flat() {
        let dict = BetfairDictionary::new();
        let meta = dict.lookup("ltp", Some(ContextTag::RunnerChange));
        let json = format_lookup("ltp", Some(ContextTag::RunnerChange), &meta, &OutputFormat::Json)
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["context"], "rc");
        assert_eq!(parsed["name"], "Last Traded Price");
    }

    #[test]
    fn test_listing_console() {
        let listing = BetfairDictionary::new().listing();
        let text = format_listing(&listing, &OutputFormat::Console).unwrap();
        assert!(text.starts_with("=== FIELD DICTIONARY (built-in) ==="));
        assert!(text.contains("--- Runner Change (Prices) ---"));
        assert!(text.contains("batb"));
    }
}
