//! Shipment allocation domain module.
//!
//! This crate splits an order across cost-ranked warehouses, implemented purely
//! as deterministic domain logic (no IO beyond decoding requests, no storage).

pub mod allocate;
pub mod order;
pub mod plan;
pub mod request;
pub mod warehouse;

pub use allocate::allocate;
pub use order::OrderRequest;
pub use plan::{ItemFulfillment, ShipmentFragment, ShipmentPlan};
pub use request::AllocationRequest;
pub use warehouse::Warehouse;

pub use shipplan_core::{DomainError, DomainResult, ItemName, ItemQuantities, WarehouseName};
