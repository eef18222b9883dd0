//! CLI implementation for `mealprep catalog`

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::OutputConfig;
use crate::core::catalog::{Dessert, Drink, Main, Starter};

#[derive(Debug, Serialize)]
struct CatalogView {
    starter: &'static [Starter],
    main: &'static [Main],
    dessert: &'static [Dessert],
    drink: &'static [Drink],
}

/// Execute the catalog command
pub fn execute(output: &OutputConfig) -> Result<()> {
    let view = CatalogView {
        starter: Starter::ALL,
        main: Main::ALL,
        dessert: Dessert::ALL,
        drink: Drink::ALL,
    };

    output.emit(&view, |_| {
        [
            (Starter::KIND, Starter::names()),
            (Main::KIND, Main::names()),
            (Dessert::KIND, Dessert::names()),
            (Drink::KIND, Drink::names()),
        ]
        .iter()
        .map(|(kind, names)| format!("{kind}: {}", names.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
    })
}
