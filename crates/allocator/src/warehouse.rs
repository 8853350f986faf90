use serde::{Deserialize, Serialize};

use shipplan_core::{ItemQuantities, WarehouseName};

/// A stock location and what it currently holds.
///
/// Warehouses are handed to the allocator cheapest-first; the warehouse itself
/// carries no cost information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    name: WarehouseName,
    inventory: ItemQuantities,
}

impl Warehouse {
    pub fn new(name: impl Into<WarehouseName>, inventory: ItemQuantities) -> Self {
        Self {
            name: name.into(),
            inventory,
        }
    }

    pub fn name(&self) -> &WarehouseName {
        &self.name
    }

    pub fn inventory(&self) -> &ItemQuantities {
        &self.inventory
    }

    /// Units of `item` on hand; an item the warehouse does not list has none.
    pub fn available(&self, item: &str) -> u64 {
        self.inventory.get(item).unwrap_or(0)
    }
}
