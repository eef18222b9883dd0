//! CLI implementation for `mealprep recipe`

use anyhow::{Context, Result};

use crate::cli::output::OutputConfig;
use crate::core::settings::Settings;

use super::render_order;

/// Execute the recipe command
pub fn execute(settings: &Settings, output: &OutputConfig, name: &str) -> Result<()> {
    let order = settings
        .kitchen()
        .order_recipe(name)
        .with_context(|| format!("Failed to construct '{name}' meal"))?;

    output.emit(&order, render_order)
}
