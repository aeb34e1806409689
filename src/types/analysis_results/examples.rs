//! Representative example record types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Named example records; a slot with no match is omitted from the output
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleRecords {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_record: Option<Value>,

    /// Record carrying a market definition inside its market changes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub with_market_definition: Option<Value>,

    /// Record carrying price or ladder data inside its runner changes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub with_price_data: Option<Value>,
}

impl ExampleRecords {
    /// Number of populated slots
    pub fn len(&self) -> usize {
        [
            &self.first_record,
            &self.with_market_definition,
            &self.with_price_data,
        ]
        .iter()
        .filter(|slot| slot.is_some())
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
