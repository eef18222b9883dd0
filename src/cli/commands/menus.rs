//! CLI implementation for `mealprep menus`

use anyhow::Result;

use crate::cli::output::OutputConfig;
use crate::core::settings::Settings;

/// Execute the menus command
pub fn execute(settings: &Settings, output: &OutputConfig) -> Result<()> {
    let available = settings.kitchen().available();

    output.emit(&available, |builders| {
        builders
            .iter()
            .map(|info| {
                let origin = if info.builtin { "built-in" } else { "menu" };
                format!("{:<12} {:<10} {origin}", info.name, info.policy.as_str())
            })
            .collect::<Vec<_>>()
            .join("\n")
    })
}
