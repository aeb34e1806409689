//! Structural walker - turns one record into field observations
//!
//! The walker keeps no state between records. Everything it learns goes into the
//! [`FieldRegistry`] passed in by the caller.

use super::registry::FieldRegistry;
use crate::config::ProfilingConfig;
use crate::dictionary::FieldMetadataLookup;
use crate::types::{ContextTag, ValueType};
use serde_json::Value;
use std::collections::HashSet;

/// One sighting of a field path within one record
#[derive(Debug, Clone, PartialEq)]
pub struct FieldObservation<'a> {
    pub path: String,
    /// Raw key (final path segment)
    pub key: &'a str,
    /// Context of the container the key was found in
    pub parent_context: Option<ContextTag>,
    /// Context the key itself establishes for metadata lookup
    pub context: Option<ContextTag>,
    pub value_type: ValueType,
    pub value: &'a Value,
}

/// Depth-bounded recursive walk over one record
pub struct StructuralWalker<'a> {
    lookup: &'a dyn FieldMetadataLookup,
    config: &'a ProfilingConfig,
}

impl<'a> StructuralWalker<'a> {
    pub fn new(lookup: &'a dyn FieldMetadataLookup, config: &'a ProfilingConfig) -> Self {
        Self { lookup, config }
    }

    /// Register every field reachable in `record` within the depth ceiling
    ///
    /// Each path is registered at most once per record.
    pub fn walk_record(&self, record: &Value, registry: &mut FieldRegistry) {
        let mut seen = HashSet::new();
        self.walk_value(record, "", 0, None, &mut seen, registry);
    }

    fn walk_value(
        &self,
        value: &Value,
        path: &str,
        depth: usize,
        context: Option<ContextTag>,
        seen: &mut HashSet<String>,
        registry: &mut FieldRegistry,
    ) {
        if depth > self.config.max_depth {
            return;
        }

        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    let child_path = if path.is_empty() {
                        key.clone()
                    } else {
                        format!("{}.{}", path, key)
                    };
                    let child_context = ContextTag::from_key(key).or(context);

                    if seen.insert(child_path.clone()) {
                        let observation = FieldObservation {
                            path: child_path.clone(),
                            key,
                            parent_context: context,
                            context: child_context,
                            value_type: ValueType::classify(child),
                            value: child,
                        };
                        registry.observe(observation, self.lookup, self.config);
                    }

                    if child.is_object() || child.is_array() {
                        self.walk_value(child, &child_path, depth + 1, child_context, seen, registry);
                    }
                }
            }
            // Array elements share the depth of the array itself
            Value::Array(items) => {
                for (index, item) in items
                    .iter()
                    .take(self.config.array_recursion_width)
                    .enumerate()
                {
                    if item.is_object() {
                        let item_path = format!("{}[{}]", path, index);
                        self.walk_value(item, &item_path, depth, context, seen, registry);
                    }
                }
            }
            _ => {}
        }
    }
}
