use serde::{Deserialize, Serialize};

use shipplan_core::{ItemName, ItemQuantities};

/// Items a customer wants shipped, with requested quantities.
///
/// Lines keep the order in which items were first added; allocation walks them
/// in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderRequest {
    lines: ItemQuantities,
}

impl OrderRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the requested quantity for `item`, replacing any earlier request.
    pub fn insert(&mut self, item: impl Into<ItemName>, quantity: u64) -> Option<u64> {
        self.lines.insert(item, quantity)
    }

    pub fn with_line(mut self, item: impl Into<ItemName>, quantity: u64) -> Self {
        self.insert(item, quantity);
        self
    }

    /// Requested quantity for `item` (zero when the item is not on the order).
    pub fn quantity(&self, item: &str) -> u64 {
        self.lines.get(item).unwrap_or(0)
    }

    pub fn lines(&self) -> impl Iterator<Item = (&ItemName, u64)> + '_ {
        self.lines.iter()
    }

    pub fn as_quantities(&self) -> &ItemQuantities {
        &self.lines
    }

    pub fn total_quantity(&self) -> u128 {
        self.lines.total()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl From<ItemQuantities> for OrderRequest {
    fn from(lines: ItemQuantities) -> Self {
        Self { lines }
    }
}

impl<K: Into<ItemName>> FromIterator<(K, u64)> for OrderRequest {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}
