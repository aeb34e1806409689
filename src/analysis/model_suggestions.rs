//! Advisory model suggestions gated on data-shape predicates

use crate::config::ProfilingConfig;
use crate::types::analysis_results::{DataShape, ModelSuggestion};
use crate::types::FieldEntry;

const PRICE_SCALAR_KEYS: &[&str] = &["ltp", "spn", "spf"];
const ORDER_BOOK_KEYS: &[&str] = &["batb", "batl", "atb", "atl", "bdatb", "bdatl"];
const VOLUME_KEYS: &[&str] = &["tv", "trd"];
const MARKET_DEFINITION_KEY: &str = "marketDefinition";

pub struct ModelSuggestionAnalyser;

impl ModelSuggestionAnalyser {
    /// Evaluate the predicates over discovered keys and the timestamp count
    pub fn data_shape(
        entries: &[FieldEntry],
        timestamp_count: usize,
        config: &ProfilingConfig,
    ) -> DataShape {
        let has_key = |keys: &[&str]| entries.iter().any(|e| keys.contains(&e.key.as_str()));

        DataShape {
            has_price_scalars: has_key(PRICE_SCALAR_KEYS),
            has_order_book: has_key(ORDER_BOOK_KEYS),
            has_volume: has_key(VOLUME_KEYS),
            has_time_series: timestamp_count > config.time_series_threshold,
            has_market_definition: has_key(&[MARKET_DEFINITION_KEY]),
        }
    }

    pub fn suggest(shape: &DataShape) -> Vec<ModelSuggestion> {
        let mut suggestions = Vec::new();

        if shape.has_prices() && shape.has_time_series {
            suggestions.push(suggestion(
                "Price Movement Prediction",
                "LSTM / Transformer",
                "Predict price direction using time-series of ltp, batb, batl",
                &["ltp", "batb", "batl", "tv"],
                "Price direction (up/down) or price at T+n",
                "High",
                None,
            ));
        }

        if shape.has_prices() && shape.has_volume {
            suggestions.push(suggestion(
                "Market Microstructure Analysis",
                "Gradient Boosting (XGBoost/LightGBM)",
                "Analyze order book dynamics and trading patterns",
                &["batb", "batl", "trd", "tv", "spread"],
                "Execution quality, market impact",
                "Medium",
                None,
            ));
        }

        if shape.has_prices() {
            suggestions.push(suggestion(
                "Visual Price Patterns (Heat Map CNN)",
                "Convolutional Neural Network",
                "Convert price ladders to images using Gramian Angular Field encoding",
                &["batb", "batl", "ltp time series"],
                "Pattern classification, price prediction",
                "High",
                Some("Novel approach with potential 40%+ improvement over traditional ML"),
            ));
        }

        if shape.has_market_definition {
            suggestions.push(suggestion(
                "Market Classification",
                "Random Forest / Neural Network",
                "Classify market types, predict liquidity",
                &["marketType", "numberOfActiveRunners", "venue", "countryCode"],
                "Market category, expected volume",
                "Low",
                None,
            ));
        }

        suggestions
    }
}

fn suggestion(
    model_type: &str,
    approach: &str,
    description: &str,
    key_features: &[&str],
    target: &str,
    complexity: &str,
    note: Option<&str>,
) -> ModelSuggestion {
    ModelSuggestion {
        model_type: model_type.to_string(),
        approach: approach.to_string(),
        description: description.to_string(),
        key_features: key_features.iter().map(|f| f.to_string()).collect(),
        target: target.to_string(),
        complexity: complexity.to_string(),
        note: note.map(str::to_string),
    }
}
