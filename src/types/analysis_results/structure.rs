//! Structure summary types

use serde::{Deserialize, Serialize};

/// Shape of the discovered path tree, derived from path strings alone
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureSummary {
    /// Keys of paths directly under the record root
    pub top_level_fields: Vec<String>,

    /// Every strict dot-prefix of every path, sorted
    pub nested_structures: Vec<String>,

    /// Largest number of dot-separated segments in any path
    pub max_depth: usize,

    pub total_unique_paths: usize,
}
