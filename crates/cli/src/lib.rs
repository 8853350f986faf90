//! `shipplan` command-line harness: read an allocation request, print the plan.

pub mod config;
pub mod run;

pub use config::{Config, OutputStyle};
pub use run::run;
