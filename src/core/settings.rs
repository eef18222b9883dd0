//! Settings
//!
//! Reads `config.toml` from the config directory. The file holds output
//! preferences and the `[[menus]]` a [`Kitchen`] serves.
//!
//! The binary installs the loaded settings once per process with
//! [`Settings::install`]; [`Settings::global`] hands out that instance, or
//! the defaults when nothing was installed. Both go through a single
//! [`OnceLock`], so concurrent first access still initializes exactly once.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::kitchen::Kitchen;
use crate::core::menu::{validate_menus, Menu};
use crate::error::SettingsError;
use crate::infra::dirs::MealprepDirs;

static GLOBAL: OnceLock<Settings> = OnceLock::new();

/// Contents of `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Output preferences
    #[serde(default)]
    pub output: OutputSettings,

    /// Extra builders served by name
    #[serde(default)]
    pub menus: Vec<Menu>,
}

/// Output preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Emit JSON unless the command line says otherwise
    pub json: Option<bool>,
}

impl Settings {
    /// Load settings from the config directory
    ///
    /// A missing `config.toml` yields the defaults.
    pub fn load(dirs: &MealprepDirs) -> Result<Self, SettingsError> {
        let path = dirs.settings_path();
        if !path.exists() {
            debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&path)
    }

    /// Load settings from a specific path
    ///
    /// The file must exist, parse and define valid menus.
    pub fn load_from_path(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|e| SettingsError::ReadError {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let settings: Self = toml::from_str(&content).map_err(|e| SettingsError::ParseError {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        validate_menus(&settings.menus)?;

        debug!(path = %path.display(), menus = settings.menus.len(), "Loaded settings");
        Ok(settings)
    }

    /// Effective JSON preference
    #[must_use]
    pub fn json_output(&self) -> bool {
        self.output.json.unwrap_or(false)
    }

    /// Kitchen serving the built-ins plus these menus
    pub fn kitchen(&self) -> Kitchen {
        Kitchen::new().with_menus(self.menus.clone())
    }

    /// Make these the process-wide settings
    ///
    /// Fails if settings were already installed or already read through
    /// [`Settings::global`].
    pub fn install(self) -> Result<&'static Settings, SettingsError> {
        let mut installed = false;
        let settings = GLOBAL.get_or_init(|| {
            installed = true;
            self
        });

        if installed {
            Ok(settings)
        } else {
            Err(SettingsError::AlreadyInitialized)
        }
    }

    /// The process-wide settings, defaults if none were installed
    pub fn global() -> &'static Settings {
        GLOBAL.get_or_init(Settings::default)
    }
}
