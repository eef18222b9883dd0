//! Default configuration values

/// Application name used in directory paths
pub const APP_NAME: &str = "mealprep";

/// Name of the settings file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the config directory
pub const ENV_CONFIG_DIR: &str = "MEALPREP_CONFIG_DIR";

/// Builder used by `mealprep custom` and `mealprep build` when none is given
pub const DEFAULT_BUILDER: &str = "vegan";
