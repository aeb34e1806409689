//! Model applicability suggestion types

use serde::{Deserialize, Serialize};

/// Boolean data-shape predicates evaluated over the discovered fields
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataShape {
    /// Last traded price or SP projections present
    pub has_price_scalars: bool,
    /// Best-available or full-depth ladders present
    pub has_order_book: bool,
    /// Traded volume or traded ladder present
    pub has_volume: bool,
    /// Enough publish timestamps to treat the batch as a time series
    pub has_time_series: bool,
    pub has_market_definition: bool,
}

impl DataShape {
    pub fn has_prices(&self) -> bool {
        self.has_price_scalars || self.has_order_book
    }
}

/// One advisory model suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSuggestion {
    pub model_type: String,
    pub approach: String,
    pub description: String,
    pub key_features: Vec<String>,
    pub target: String,
    pub complexity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
