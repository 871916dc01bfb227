//! Tunable inventory rules.

use invtrack_core::Quantity;
use serde::{Deserialize, Serialize};

/// Items strictly below this quantity are reported as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: Quantity = Quantity::new(5);

/// What `Add` does when the item is already stocked.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AddMode {
    /// Overwrite the existing quantity (add and update share semantics).
    #[default]
    Upsert,
    /// Reject the add with a conflict.
    CreateOnly,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryPolicy {
    pub low_stock_threshold: Quantity,
    pub add_mode: AddMode,
}

impl Default for InventoryPolicy {
    fn default() -> Self {
        Self {
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            add_mode: AddMode::default(),
        }
    }
}

impl InventoryPolicy {
    pub fn with_low_stock_threshold(mut self, threshold: Quantity) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    pub fn with_add_mode(mut self, mode: AddMode) -> Self {
        self.add_mode = mode;
        self
    }
}
