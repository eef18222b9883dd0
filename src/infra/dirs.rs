//! Config directory resolution
//!
//! Follows the XDG Base Directory Specification on Linux and standard
//! locations on macOS. `MEALPREP_CONFIG_DIR` overrides the default.

use std::env;
use std::path::PathBuf;

use crate::config::defaults::{APP_NAME, CONFIG_FILE_NAME, ENV_CONFIG_DIR};

/// Platform-specific directory provider for mealprep
#[derive(Debug, Clone)]
pub struct MealprepDirs {
    config_dir: PathBuf,
}

impl MealprepDirs {
    /// Checks the environment first, then falls back to platform defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
        }
    }

    /// Use an explicit config directory
    #[must_use]
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// - Linux: `$XDG_CONFIG_HOME/mealprep` or `~/.config/mealprep`
    /// - macOS: `~/Library/Application Support/mealprep`
    #[must_use]
    pub fn config_dir(&self) -> PathBuf {
        self.config_dir.clone()
    }

    /// `config.toml` in the config directory
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    fn resolve_config_dir() -> PathBuf {
        if let Ok(path) = env::var(ENV_CONFIG_DIR) {
            if !path.is_empty() {
                return PathBuf::from(path);
            }
        }

        dirs::config_dir()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                // Fallback to home directory
                dirs::home_dir()
                    .map(|h| h.join(".config").join(APP_NAME))
                    .unwrap_or_else(|| PathBuf::from(".").join(".config").join(APP_NAME))
            })
    }
}

impl Default for MealprepDirs {
    fn default() -> Self {
        Self::new()
    }
}
