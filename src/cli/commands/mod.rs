//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod build;
pub mod catalog;
pub mod custom;
pub mod menus;
pub mod recipe;

use anyhow::Result;
use clap::Subcommand;

use crate::cli::output::{status, OutputConfig};
use crate::config::defaults::DEFAULT_BUILDER;
use crate::core::director::CustomMealOptions;
use crate::core::kitchen::Order;
use crate::core::settings::Settings;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Construct a full-course meal by recipe or menu name
    Recipe {
        /// Recipe name (vegan, healthy) or a configured menu
        name: String,
    },

    /// Construct a main course plus selected extras
    Custom {
        /// Builder to use
        #[arg(short, long, default_value = DEFAULT_BUILDER)]
        builder: String,

        /// Add a starter
        #[arg(long)]
        starter: bool,

        /// Add a dessert
        #[arg(long)]
        dessert: bool,

        /// Add a drink
        #[arg(long)]
        drink: bool,
    },

    /// Run individual steps in the given order, then build
    Build {
        /// Builder to use
        #[arg(short, long, default_value = DEFAULT_BUILDER)]
        builder: String,

        /// Steps to run (starter, main, dessert, drink)
        #[arg(value_name = "STEP")]
        steps: Vec<String>,
    },

    /// List every value each slot accepts
    Catalog,

    /// List the builders available by name
    Menus,
}

impl Commands {
    /// Execute the command
    pub fn run(&self, settings: &Settings, output: &OutputConfig) -> Result<()> {
        match self {
            Self::Recipe { name } => recipe::execute(settings, output, name),
            Self::Custom {
                builder,
                starter,
                dessert,
                drink,
            } => {
                let options = CustomMealOptions {
                    with_starter: *starter,
                    with_dessert: *dessert,
                    with_drink: *drink,
                };
                custom::execute(settings, output, builder, options)
            }
            Self::Build { builder, steps } => build::execute(settings, output, builder, steps),
            Self::Catalog => catalog::execute(output),
            Self::Menus => menus::execute(settings, output),
        }
    }
}

/// Text rendering shared by the meal-producing commands
fn render_order(order: &Order) -> String {
    format!(
        "{} {} meal constructed ({})\n{}",
        status::SUCCESS,
        order.builder,
        order.policy,
        order.meal
    )
}
