use std::io::{Read, Write};

use anyhow::Context;
use tracing::info;

use shipplan_allocator::{AllocationRequest, ShipmentPlan};

use crate::config::{Config, OutputStyle};

/// Read one allocation request from `input`, write its plan JSON to `output`.
pub fn run(config: &Config, input: impl Read, mut output: impl Write) -> anyhow::Result<ShipmentPlan> {
    let request = AllocationRequest::from_reader(input).context("invalid allocation request")?;

    let plan = request.allocate();

    if let Some(order) = &request.order {
        plan.verify_against(order)
            .context("allocator produced an inconsistent plan")?;

        if config.summary {
            for line in plan.fulfillment(order) {
                info!(
                    item = %line.item,
                    requested = line.requested,
                    shipped = line.shipped,
                    unfulfilled = line.unfulfilled(),
                    "order line"
                );
            }
        }
    }

    info!(
        fragments = plan.len(),
        warehouses = request.warehouses.as_ref().map_or(0, Vec::len),
        "shipment plan computed"
    );

    match config.output {
        OutputStyle::Compact => serde_json::to_writer(&mut output, &plan)?,
        OutputStyle::Pretty => serde_json::to_writer_pretty(&mut output, &plan)?,
    }
    writeln!(output)?;
    output.flush()?;

    Ok(plan)
}
