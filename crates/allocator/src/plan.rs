use core::fmt;
use std::collections::HashMap;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use shipplan_core::{DomainError, DomainResult, ItemName, ItemQuantities, WarehouseName};

use crate::order::OrderRequest;

/// The part of an order assigned to a single warehouse.
///
/// Serialized as a single-key object: `{"owd": {"apple": 5}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipmentFragment {
    warehouse_name: WarehouseName,
    items: ItemQuantities,
}

impl ShipmentFragment {
    pub fn new(warehouse_name: impl Into<WarehouseName>, items: ItemQuantities) -> Self {
        Self {
            warehouse_name: warehouse_name.into(),
            items,
        }
    }

    pub fn warehouse_name(&self) -> &WarehouseName {
        &self.warehouse_name
    }

    pub fn items(&self) -> &ItemQuantities {
        &self.items
    }

    /// Units of `item` shipped from this warehouse.
    pub fn quantity(&self, item: &str) -> u64 {
        self.items.get(item).unwrap_or(0)
    }
}

impl Serialize for ShipmentFragment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.warehouse_name, &self.items)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for ShipmentFragment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FragmentVisitor;

        impl<'de> Visitor<'de> for FragmentVisitor {
            type Value = ShipmentFragment;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object with exactly one warehouse name key")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let Some((warehouse_name, items)) =
                    access.next_entry::<WarehouseName, ItemQuantities>()?
                else {
                    return Err(de::Error::invalid_length(0, &self));
                };
                if access.next_key::<de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(2, &self));
                }
                Ok(ShipmentFragment::new(warehouse_name, items))
            }
        }

        deserializer.deserialize_map(FragmentVisitor)
    }
}

/// Requested vs shipped for one order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFulfillment {
    pub item: ItemName,
    pub requested: u64,
    pub shipped: u64,
}

impl ItemFulfillment {
    /// Units that could not be placed with any warehouse.
    pub fn unfulfilled(&self) -> u64 {
        self.requested.saturating_sub(self.shipped)
    }

    pub fn is_complete(&self) -> bool {
        self.shipped >= self.requested
    }
}

/// Ordered list of fragments answering one order.
///
/// Fragments appear in the relative order of the warehouses that produced
/// them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShipmentPlan {
    fragments: Vec<ShipmentFragment>,
}

impl ShipmentPlan {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, fragment: ShipmentFragment) {
        self.fragments.push(fragment);
    }

    pub fn fragments(&self) -> &[ShipmentFragment] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn warehouse_names(&self) -> impl Iterator<Item = &WarehouseName> + '_ {
        self.fragments.iter().map(ShipmentFragment::warehouse_name)
    }

    /// Total units of `item` shipped across all fragments.
    pub fn shipped(&self, item: &str) -> u128 {
        self.fragments
            .iter()
            .map(|f| u128::from(f.quantity(item)))
            .sum()
    }

    /// Units shipped per item, summed over every fragment.
    fn shipped_totals(&self) -> HashMap<&ItemName, u128> {
        let mut totals: HashMap<&ItemName, u128> = HashMap::new();
        for (item, qty) in self.fragments.iter().flat_map(|f| f.items().iter()) {
            *totals.entry(item).or_default() += u128::from(qty);
        }
        totals
    }

    /// Per-line comparison of `order` against this plan, in order line order.
    pub fn fulfillment(&self, order: &OrderRequest) -> Vec<ItemFulfillment> {
        let totals = self.shipped_totals();
        order
            .lines()
            .map(|(item, requested)| {
                let shipped = totals.get(item).copied().unwrap_or(0);
                ItemFulfillment {
                    item: item.clone(),
                    requested,
                    shipped: u64::try_from(shipped).unwrap_or(u64::MAX),
                }
            })
            .collect()
    }

    /// Check that this plan is a valid answer to `order`.
    ///
    /// A valid plan has no empty fragments, ships only positive quantities of
    /// items the order asks for, and never ships more of an item than
    /// requested. Warehouse names need not be unique; two warehouses sharing a
    /// name each get their own fragment.
    pub fn verify_against(&self, order: &OrderRequest) -> DomainResult<()> {
        for fragment in &self.fragments {
            let name = fragment.warehouse_name();
            if fragment.items().is_empty() {
                return Err(DomainError::invariant(format!(
                    "fragment for warehouse '{name}' ships nothing"
                )));
            }
            if let Some((item, _)) = fragment.items().iter().find(|(_, qty)| *qty == 0) {
                return Err(DomainError::invariant(format!(
                    "fragment for warehouse '{name}' ships zero units of '{item}'"
                )));
            }
        }

        for (item, total) in self.shipped_totals() {
            let requested = u128::from(order.quantity(item.as_str()));
            if total > requested {
                return Err(DomainError::invariant(format!(
                    "shipped {total} units of '{item}' but only {requested} were requested"
                )));
            }
        }

        Ok(())
    }
}

impl IntoIterator for ShipmentPlan {
    type Item = ShipmentFragment;
    type IntoIter = std::vec::IntoIter<ShipmentFragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.into_iter()
    }
}

impl<'a> IntoIterator for &'a ShipmentPlan {
    type Item = &'a ShipmentFragment;
    type IntoIter = core::slice::Iter<'a, ShipmentFragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.iter()
    }
}

impl FromIterator<ShipmentFragment> for ShipmentPlan {
    fn from_iter<I: IntoIterator<Item = ShipmentFragment>>(iter: I) -> Self {
        Self {
            fragments: iter.into_iter().collect(),
        }
    }
}
