//! Structure summary derived from path strings

use crate::types::analysis_results::StructureSummary;
use crate::types::FieldEntry;
use std::collections::BTreeSet;

/// Describes the path tree without re-walking records
pub struct StructureAnalyser;

impl StructureAnalyser {
    pub fn analyse(entries: &[FieldEntry]) -> StructureSummary {
        let top_level_fields = entries
            .iter()
            .filter(|e| e.is_top_level())
            .map(|e| e.key.clone())
            .collect();

        let mut prefixes = BTreeSet::new();
        for entry in entries {
            let parts: Vec<&str> = entry.path.split('.').collect();
            for i in 1..parts.len() {
                prefixes.insert(parts[..i].join("."));
            }
        }

        StructureSummary {
            top_level_fields,
            nested_structures: prefixes.into_iter().collect(),
            max_depth: entries.iter().map(FieldEntry::depth).max().unwrap_or(0),
            total_unique_paths: entries.len(),
        }
    }
}
