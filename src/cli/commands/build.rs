//! CLI implementation for `mealprep build`

use anyhow::{Context, Result};

use crate::cli::output::OutputConfig;
use crate::core::catalog::Step;
use crate::core::settings::Settings;

use super::render_order;

/// Execute the build command
pub fn execute(
    settings: &Settings,
    output: &OutputConfig,
    builder: &str,
    steps: &[String],
) -> Result<()> {
    let steps = steps
        .iter()
        .map(|s| s.parse::<Step>())
        .collect::<Result<Vec<_>, _>>()?;

    let order = settings
        .kitchen()
        .order_steps(builder, &steps)
        .with_context(|| format!("Failed to build meal with '{builder}'"))?;

    output.emit(&order, render_order)
}
