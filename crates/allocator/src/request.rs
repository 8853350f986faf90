//! JSON boundary for allocation requests.

use std::io::Read;

use serde::{Deserialize, Serialize};

use shipplan_core::DomainResult;

use crate::allocate::allocate;
use crate::order::OrderRequest;
use crate::plan::ShipmentPlan;
use crate::warehouse::Warehouse;

/// An order together with the warehouses that may fulfil it.
///
/// Either side may be absent (`null` or missing in JSON); an absent side is
/// not the same as an empty one, though both allocate to an empty plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationRequest {
    #[serde(default)]
    pub order: Option<OrderRequest>,
    #[serde(default)]
    pub warehouses: Option<Vec<Warehouse>>,
}

impl AllocationRequest {
    pub fn new(order: Option<OrderRequest>, warehouses: Option<Vec<Warehouse>>) -> Self {
        Self { order, warehouses }
    }

    /// Decode a request. Negative or fractional quantities are rejected.
    pub fn from_json(input: &str) -> DomainResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> DomainResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn allocate(&self) -> ShipmentPlan {
        allocate(self.order.as_ref(), self.warehouses.as_deref())
    }
}
