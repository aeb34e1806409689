//! Field dictionary - maps raw feed keys to display metadata
//!
//! The profiling core only sees the [`FieldMetadataLookup`] trait. Two implementations
//! are provided:
//! - [`BetfairDictionary`]: built-in tables for exchange stream messages
//! - [`PluginDictionary`]: definitions loaded from a local plugin directory
//!
//! Lookups never fail. Keys missing from every table resolve to
//! [`fallback_metadata`], and categories without a descriptor resolve to
//! [`unknown_category`] at the point of use.

pub mod betfair;
pub mod plugin;

pub use betfair::BetfairDictionary;
pub use plugin::PluginDictionary;

use crate::types::{CategoryDescriptor, ContextTag, FieldMetadata};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category assigned to keys no table knows about
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// ML relevance assigned to keys no table knows about
pub const UNKNOWN_RELEVANCE: &str = "unknown";

/// Pure `(key, context) -> metadata` function consumed by the walker
///
/// Implementations must be deterministic: the same key and context always yield the
/// same metadata, otherwise profiling the same batch twice could differ.
pub trait FieldMetadataLookup: Send + Sync {
    /// Resolve display metadata for `key` seen under `context`
    fn lookup(&self, key: &str, context: Option<ContextTag>) -> FieldMetadata;

    /// Display descriptor for a category, if the dictionary defines one
    fn category_info(&self, category: &str) -> Option<CategoryDescriptor>;

    /// Every field and category the dictionary knows, for inspection
    fn listing(&self) -> DictionaryListing;
}

/// Known fields grouped by table, plus the category descriptors
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DictionaryListing {
    /// Where the definitions came from (built-in or plugin id)
    pub source: String,
    pub sections: Vec<DictionarySection>,
    pub categories: BTreeMap<String, CategoryDescriptor>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DictionarySection {
    pub name: String,
    pub fields: BTreeMap<String, FieldMetadata>,
}

impl DictionaryListing {
    pub fn field_count(&self) -> usize {
        self.sections.iter().map(|s| s.fields.len()).sum()
    }
}

/// Deterministic metadata for an unrecognised key
///
/// ```
/// use market_feed_profiler::dictionary::fallback_metadata;
///
/// let meta = fallback_metadata("total_matched");
/// assert_eq!(meta.name, "Total Matched");
/// assert_eq!(meta.description, "Field: total_matched");
/// assert_eq!(meta.category, "Unknown");
/// ```
pub fn fallback_metadata(key: &str) -> FieldMetadata {
    FieldMetadata {
        name: title_case(&key.replace('_', " ")),
        description: format!("Field: {}", key),
        category: UNKNOWN_CATEGORY.to_string(),
        ml_relevance: UNKNOWN_RELEVANCE.to_string(),
    }
}

/// Descriptor used for categories the dictionary has no entry for
pub fn unknown_category() -> CategoryDescriptor {
    CategoryDescriptor {
        icon: "❓".to_string(),
        description: "Undocumented fields".to_string(),
        color: "#9CA3AF".to_string(),
    }
}

/// Upper-case the first letter of every alphabetic run and lower-case the rest
///
/// `"marketId"` becomes `"Marketid"`, `"x2y"` becomes `"X2Y"`.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_alpha = false;
    for c in input.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
