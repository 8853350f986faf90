//! Greedy cheapest-first allocation of an order across warehouses.

use tracing::{debug, trace};

use shipplan_core::{ItemName, ItemQuantities};

use crate::order::OrderRequest;
use crate::plan::{ShipmentFragment, ShipmentPlan};
use crate::warehouse::Warehouse;

/// Compute a shipment plan for `order` from `warehouses` (cheapest first).
///
/// Each warehouse is visited once, in order. For every order line that still
/// has units outstanding, the warehouse ships as much as it holds, up to what
/// is still needed. Warehouses that ship nothing are left out of the plan,
/// and once the whole order is covered no further warehouse is consulted.
///
/// Quantities nobody can supply are dropped from the plan without error.
/// `None` for either argument yields an empty plan. Neither input is
/// modified.
pub fn allocate(order: Option<&OrderRequest>, warehouses: Option<&[Warehouse]>) -> ShipmentPlan {
    let (Some(order), Some(warehouses)) = (order, warehouses) else {
        debug!(
            order_present = order.is_some(),
            warehouses_present = warehouses.is_some(),
            "allocation input absent, returning empty plan"
        );
        return ShipmentPlan::empty();
    };

    // Working set: only lines with something to ship.
    let mut remaining: Vec<(&ItemName, u64)> = order.lines().filter(|(_, qty)| *qty > 0).collect();
    let mut outstanding: u128 = remaining.iter().map(|(_, qty)| u128::from(*qty)).sum();

    let mut plan = ShipmentPlan::empty();

    for (position, warehouse) in warehouses.iter().enumerate() {
        if outstanding == 0 {
            debug!(
                consulted = position,
                skipped = warehouses.len() - position,
                "order fully allocated"
            );
            break;
        }

        let mut items = ItemQuantities::new();
        for (item, left) in remaining.iter_mut().filter(|(_, left)| *left > 0) {
            let available = warehouse.available(item.as_str());
            if available == 0 {
                continue;
            }
            let shipped = (*left).min(available);
            items.insert(*item, shipped);
            *left -= shipped;
            outstanding -= u128::from(shipped);
        }

        if items.is_empty() {
            trace!(warehouse = %warehouse.name(), "warehouse contributes nothing");
            continue;
        }

        debug!(
            warehouse = %warehouse.name(),
            lines = items.len(),
            units = %items.total(),
            "fragment allocated"
        );
        plan.push(ShipmentFragment::new(warehouse.name().clone(), items));
    }

    if outstanding > 0 {
        debug!(outstanding = %outstanding, "order only partially allocated");
    }

    plan
}
