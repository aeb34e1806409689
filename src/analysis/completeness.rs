//! Completeness tiering by presence percentage

use crate::config::ProfilingConfig;
use crate::types::analysis_results::{
    CompletenessCounts, CompletenessTier, DataQualityReport, FieldSummary,
};
use crate::types::FieldEntry;

pub struct CompletenessAnalyser;

impl CompletenessAnalyser {
    pub fn analyse(
        entries: &[FieldEntry],
        total_records: usize,
        config: &ProfilingConfig,
    ) -> DataQualityReport {
        let mut completeness = CompletenessCounts::default();
        let mut field_summary = FieldSummary::default();

        for entry in entries {
            match CompletenessTier::for_counts(entry.count, total_records) {
                CompletenessTier::Always => {
                    completeness.always_present += 1;
                    field_summary.always_present_fields.push(entry.path.clone());
                }
                CompletenessTier::Mostly => completeness.mostly_present += 1,
                CompletenessTier::Sometimes => completeness.sometimes_present += 1,
                CompletenessTier::Rarely => {
                    completeness.rarely_present += 1;
                    if field_summary.rarely_present_fields.len() < config.rarely_present_limit {
                        field_summary.rarely_present_fields.push(entry.path.clone());
                    }
                }
            }
        }

        DataQualityReport {
            completeness,
            field_summary,
            record_count: total_records,
            unique_field_paths: entries.len(),
        }
    }
}
