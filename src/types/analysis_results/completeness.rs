//! Completeness tier types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Presence band a field path falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletenessTier {
    /// Present in every record (100%)
    Always,
    /// [95, 100)
    Mostly,
    /// [50, 95)
    Sometimes,
    /// Below 50%
    Rarely,
}

impl CompletenessTier {
    /// Tier from exact counts
    ///
    /// `Always` requires the path in every record; a field missing from a handful of
    /// records in a large batch is `Mostly` even when its rounded percentage is 100.
    pub fn for_counts(count: usize, total_records: usize) -> Self {
        if total_records > 0 && count >= total_records {
            return CompletenessTier::Always;
        }
        let exact_pct = if total_records == 0 {
            0.0
        } else {
            count as f64 / total_records as f64 * 100.0
        };
        match Self::for_presence(exact_pct) {
            CompletenessTier::Always => CompletenessTier::Mostly,
            tier => tier,
        }
    }

    /// Tier from a presence percentage alone
    pub fn for_presence(presence_pct: f64) -> Self {
        if presence_pct >= 100.0 {
            CompletenessTier::Always
        } else if presence_pct >= 95.0 {
            CompletenessTier::Mostly
        } else if presence_pct >= 50.0 {
            CompletenessTier::Sometimes
        } else {
            CompletenessTier::Rarely
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompletenessTier::Always => "always",
            CompletenessTier::Mostly => "mostly",
            CompletenessTier::Sometimes => "sometimes",
            CompletenessTier::Rarely => "rarely",
        }
    }
}

impl fmt::Display for CompletenessTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field counts per completeness tier
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletenessCounts {
    pub always_present: usize,
    pub mostly_present: usize,
    pub sometimes_present: usize,
    pub rarely_present: usize,
}

/// Path listings for the extreme tiers
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSummary {
    /// Every path present in all records
    pub always_present_fields: Vec<String>,

    /// Leading rarely-present paths, in registry order
    pub rarely_present_fields: Vec<String>,
}

/// Data quality summary built from presence percentages
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataQualityReport {
    pub completeness: CompletenessCounts,
    pub field_summary: FieldSummary,
    pub record_count: usize,
    pub unique_field_paths: usize,
}
