//! Category grouping of discovered fields

use crate::dictionary::{unknown_category, FieldMetadataLookup};
use crate::types::analysis_results::{CategoryFieldSummary, CategoryGroup};
use crate::types::FieldEntry;
use std::collections::HashMap;

/// Groups sorted entries by dictionary category
pub struct CategoryAnalyser;

impl CategoryAnalyser {
    /// Groups appear in the order their first field appears in `entries`
    pub fn analyse(entries: &[FieldEntry], lookup: &dyn FieldMetadataLookup) -> Vec<CategoryGroup> {
        let mut groups: Vec<CategoryGroup> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for entry in entries {
            let slot = *index.entry(entry.category.as_str()).or_insert_with(|| {
                let descriptor = lookup
                    .category_info(&entry.category)
                    .unwrap_or_else(unknown_category);
                groups.push(CategoryGroup {
                    category: entry.category.clone(),
                    icon: descriptor.icon,
                    description: descriptor.description,
                    color: descriptor.color,
                    field_count: 0,
                    fields: Vec::new(),
                });
                groups.len() - 1
            });

            let group = &mut groups[slot];
            group.field_count += 1;
            group.fields.push(CategoryFieldSummary {
                path: entry.path.clone(),
                key: entry.key.clone(),
                name: entry.name.clone(),
                value_type: entry.value_type.to_string(),
                presence_pct: entry.presence_pct,
                ml_relevance: entry.ml_relevance.clone(),
            });
        }

        groups
    }
}
