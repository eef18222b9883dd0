//! CLI implementation for `mealprep custom`
//!
//! The main course is always added; `--starter`, `--dessert` and `--drink`
//! add the rest.

use anyhow::{Context, Result};

use crate::cli::output::OutputConfig;
use crate::core::director::CustomMealOptions;
use crate::core::settings::Settings;

use super::render_order;

/// Execute the custom command
pub fn execute(
    settings: &Settings,
    output: &OutputConfig,
    builder: &str,
    options: CustomMealOptions,
) -> Result<()> {
    let order = settings
        .kitchen()
        .order_custom(builder, options)
        .with_context(|| format!("Failed to construct custom meal with '{builder}'"))?;

    output.emit(&order, render_order)
}
