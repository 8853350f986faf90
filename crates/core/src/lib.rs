//! `shipplan-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod error;
pub mod id;
pub mod quantities;

pub use error::{DomainError, DomainResult};
pub use id::{ItemName, WarehouseName};
pub use quantities::ItemQuantities;
