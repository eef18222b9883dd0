//! Configured menus
//!
//! A menu fixes the value each of the four steps assigns, plus the policy
//! `build` applies. Menus come from the `[[menus]]` tables of the settings
//! file and are served by [`crate::core::builder::MenuBuilder`].

use serde::{Deserialize, Serialize};

use crate::core::catalog::{BuildPolicy, Dessert, Drink, Main, Starter};
use crate::error::SettingsError;

/// Names reserved by the built-in builders
pub const BUILTIN_NAMES: &[&str] = &["vegan", "healthy"];

/// One configured menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    /// Name the menu is ordered by
    pub name: String,

    /// Validation applied by `build`
    #[serde(default = "default_policy")]
    pub policy: BuildPolicy,

    pub starter: Starter,
    pub main: Main,
    pub dessert: Dessert,
    pub drink: Drink,
}

fn default_policy() -> BuildPolicy {
    BuildPolicy::Permissive
}

/// Check a list of menus for empty, padded, reserved or duplicate names
pub fn validate_menus(menus: &[Menu]) -> Result<(), SettingsError> {
    let mut seen: Vec<&str> = Vec::with_capacity(menus.len());

    for menu in menus {
        let name = menu.name.trim();
        if name.is_empty() {
            return Err(SettingsError::InvalidMenu {
                name: menu.name.clone(),
                reason: "name must not be empty".to_string(),
            });
        }
        if name != menu.name {
            return Err(SettingsError::InvalidMenu {
                name: menu.name.clone(),
                reason: "name must not start or end with whitespace".to_string(),
            });
        }
        if BUILTIN_NAMES.iter().any(|b| b.eq_ignore_ascii_case(name)) {
            return Err(SettingsError::InvalidMenu {
                name: menu.name.clone(),
                reason: "name is reserved by a built-in builder".to_string(),
            });
        }
        if seen.iter().any(|s| s.eq_ignore_ascii_case(name)) {
            return Err(SettingsError::InvalidMenu {
                name: menu.name.clone(),
                reason: "name is defined more than once".to_string(),
            });
        }
        seen.push(name);
    }

    Ok(())
}
