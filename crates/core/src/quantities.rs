//! Insertion-ordered item → quantity mapping.
//!
//! Orders, warehouse inventories and shipment fragments are all "item name to
//! count" mappings whose iteration order is observable (it decides the order
//! items are allocated and printed). `ItemQuantities` keeps entries in the
//! order their keys were first inserted.

use core::fmt;
use std::collections::HashMap;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::id::ItemName;

/// Ordered mapping of item name to a non-negative quantity.
///
/// Keys are unique. Re-inserting an existing key overwrites its quantity but
/// keeps its original position. Lookups and inserts go through a name →
/// position index, so both are O(1) regardless of size.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ItemQuantities {
    entries: Vec<(ItemName, u64)>,
    index: HashMap<ItemName, usize>,
}

impl ItemQuantities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Insert or overwrite `item`. Returns the previous quantity, if any.
    pub fn insert(&mut self, item: impl Into<ItemName>, quantity: u64) -> Option<u64> {
        let item = item.into();
        match self.index.get(&item) {
            Some(&pos) => Some(core::mem::replace(&mut self.entries[pos].1, quantity)),
            None => {
                self.index.insert(item.clone(), self.entries.len());
                self.entries.push((item, quantity));
                None
            }
        }
    }

    /// Quantity recorded for `item`, if the key is present (zero included).
    pub fn get(&self, item: &str) -> Option<u64> {
        self.index.get(item).map(|&pos| self.entries[pos].1)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.index.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all quantities.
    ///
    /// Widened to `u128` so the sum of any number of `u64` entries is exact.
    pub fn total(&self) -> u128 {
        self.entries.iter().map(|(_, qty)| u128::from(*qty)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, u64)> + '_ {
        self.entries.iter().map(|(name, qty)| (name, *qty))
    }

    pub fn items(&self) -> impl Iterator<Item = &ItemName> + '_ {
        self.entries.iter().map(|(name, _)| name)
    }
}

impl fmt::Debug for ItemQuantities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Into<ItemName>> FromIterator<(K, u64)> for ItemQuantities {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

impl<K: Into<ItemName>> Extend<(K, u64)> for ItemQuantities {
    fn extend<I: IntoIterator<Item = (K, u64)>>(&mut self, iter: I) {
        for (item, qty) in iter {
            self.insert(item, qty);
        }
    }
}

impl IntoIterator for ItemQuantities {
    type Item = (ItemName, u64);
    type IntoIter = std::vec::IntoIter<(ItemName, u64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for ItemQuantities {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, qty) in &self.entries {
            map.serialize_entry(name, qty)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ItemQuantities {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct QuantitiesVisitor;

        impl<'de> Visitor<'de> for QuantitiesVisitor {
            type Value = ItemQuantities;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of item names to non-negative integer quantities")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut out = ItemQuantities::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, qty)) = access.next_entry::<ItemName, u64>()? {
                    out.insert(name, qty);
                }
                Ok(out)
            }
        }

        deserializer.deserialize_map(QuantitiesVisitor)
    }
}
