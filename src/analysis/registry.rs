//! Field registry - one accumulating entry per distinct path
//!
//! Entries are created on first observation and mutated afterwards. Metadata and
//! value type are fixed at creation. [`FieldRegistry::finalize`] turns the registry
//! into the sorted entry list every statistics pass reads.

use super::walker::{FieldObservation, StructuralWalker};
use crate::config::ProfilingConfig;
use crate::dictionary::FieldMetadataLookup;
use crate::types::{ContextTag, FieldEntry, FieldMetadata, ValueType};
use crate::utils::math::presence_percentage;
use rayon::prelude::*;
use serde_json::Value;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, info, warn};

/// Accumulating state for one path
#[derive(Debug, Clone, PartialEq)]
pub struct PendingEntry {
    pub key: String,
    pub metadata: FieldMetadata,
    pub value_type: ValueType,
    pub count: usize,
    pub samples: Vec<Value>,
    pub contexts: BTreeSet<ContextTag>,
}

/// Per-run accumulator keyed by path
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRegistry {
    entries: HashMap<String, PendingEntry>,
    total_records: usize,
    max_samples: usize,
}

impl FieldRegistry {
    /// Empty registry for a batch of `total_records` records
    pub fn new(total_records: usize, max_samples: usize) -> Self {
        Self {
            entries: HashMap::new(),
            total_records,
            max_samples,
        }
    }

    /// Walk every record and collect the registry
    ///
    /// With `config.workers > 1` contiguous chunks are walked on a rayon pool and
    /// merged in chunk order, which yields the same registry as a sequential walk.
    pub fn build(
        records: &[Value],
        lookup: &dyn FieldMetadataLookup,
        config: &ProfilingConfig,
    ) -> Self {
        if config.workers > 1 && records.len() > 1 {
            match rayon::ThreadPoolBuilder::new()
                .num_threads(config.workers)
                .build()
            {
                Ok(pool) => return pool.install(|| Self::build_parallel(records, lookup, config)),
                Err(e) => warn!("Could not start {} workers, walking sequentially: {}", config.workers, e),
            }
        }
        Self::build_sequential(records, lookup, config, true)
    }

    fn build_sequential(
        records: &[Value],
        lookup: &dyn FieldMetadataLookup,
        config: &ProfilingConfig,
        log_progress: bool,
    ) -> Self {
        let walker = StructuralWalker::new(lookup, config);
        let mut registry = Self::new(records.len(), config.max_samples);

        for (i, record) in records.iter().enumerate() {
            walker.walk_record(record, &mut registry);

            if log_progress && config.progress_interval > 0 && (i + 1) % config.progress_interval == 0 {
                info!(
                    "Scanned {} records, found {} unique field paths",
                    i + 1,
                    registry.len()
                );
            }
        }

        registry
    }

    fn build_parallel(
        records: &[Value],
        lookup: &dyn FieldMetadataLookup,
        config: &ProfilingConfig,
    ) -> Self {
        let chunk_size = records.len().div_ceil(config.workers).max(1);
        debug!(
            "Walking {} records in chunks of {} on {} workers",
            records.len(),
            chunk_size,
            config.workers
        );

        let partials: Vec<FieldRegistry> = records
            .par_chunks(chunk_size)
            .map(|chunk| Self::build_sequential(chunk, lookup, config, false))
            .collect();

        let mut merged = Self::new(0, config.max_samples);
        for partial in partials {
            merged.merge(partial);
        }
        merged
    }

    /// Apply one observation, resolving metadata only for new paths
    pub fn observe(
        &mut self,
        observation: FieldObservation<'_>,
        lookup: &dyn FieldMetadataLookup,
        config: &ProfilingConfig,
    ) {
        let FieldObservation {
            path,
            key,
            parent_context,
            context,
            value_type,
            value,
        } = observation;

        let entry = self.entries.entry(path).or_insert_with(|| PendingEntry {
            key: key.to_string(),
            metadata: lookup.lookup(key, context),
            value_type,
            count: 0,
            samples: Vec::new(),
            contexts: BTreeSet::new(),
        });

        entry.count += 1;
        if let Some(ctx) = parent_context {
            entry.contexts.insert(ctx);
        }
        if entry.samples.len() < self.max_samples {
            if let Some(sample) = sample_value(value, config) {
                entry.samples.push(sample);
            }
        }
    }

    /// Fold a registry built over the records following this one's
    ///
    /// Counts add, contexts union, samples concatenate then truncate; metadata and
    /// type already present here win.
    pub fn merge(&mut self, other: FieldRegistry) {
        self.total_records += other.total_records;
        for (path, incoming) in other.entries {
            match self.entries.get_mut(&path) {
                Some(existing) => {
                    existing.count += incoming.count;
                    existing.contexts.extend(incoming.contexts);
                    existing.samples.extend(incoming.samples);
                    existing.samples.truncate(self.max_samples);
                }
                None => {
                    let mut incoming = incoming;
                    incoming.samples.truncate(self.max_samples);
                    self.entries.insert(path, incoming);
                }
            }
        }
    }

    /// Sorted entries with presence percentages, most universal first
    pub fn finalize(self) -> Vec<FieldEntry> {
        let total = self.total_records;
        let mut entries: Vec<FieldEntry> = self
            .entries
            .into_iter()
            .map(|(path, pending)| FieldEntry {
                presence_pct: presence_percentage(pending.count, total),
                path,
                key: pending.key,
                name: pending.metadata.name,
                description: pending.metadata.description,
                category: pending.metadata.category,
                ml_relevance: pending.metadata.ml_relevance,
                value_type: pending.value_type,
                count: pending.count,
                sample_values: pending.samples,
                contexts: pending.contexts.into_iter().collect(),
            })
            .collect();

        entries.sort_by(|a, b| {
            b.presence_pct
                .total_cmp(&a.presence_pct)
                .then_with(|| a.path.cmp(&b.path))
        });
        entries
    }

    pub fn get(&self, path: &str) -> Option<&PendingEntry> {
        self.entries.get(path)
    }

    /// Paths in no particular order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn total_records(&self) -> usize {
        self.total_records
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Sample form of a value, or `None` if it is not sampled
///
/// Scalars are kept whole. Short arrays keep their leading elements; objects and
/// long arrays are skipped.
fn sample_value(value: &Value, config: &ProfilingConfig) -> Option<Value> {
    match value {
        Value::Object(_) => None,
        Value::Array(items) if items.len() >= config.sample_array_max_len => None,
        Value::Array(items) => Some(Value::Array(
            items
                .iter()
                .take(config.sample_array_truncate)
                .cloned()
                .collect(),
        )),
        scalar => Some(scalar.clone()),
    }
}
