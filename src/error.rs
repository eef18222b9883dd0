//! Error types for mealprep
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Meal construction errors
///
/// Only a strict builder's `build` produces these. Every other core
/// operation is infallible.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MealError {
    /// A required slot was never filled
    #[error("Meal is incomplete: missing {}", missing.join(", "))]
    Incomplete { missing: Vec<&'static str> },
}

/// Step catalog errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Name does not belong to the enumeration
    #[error("Unknown {kind} '{value}': must be one of {choices:?}")]
    UnknownValue {
        kind: &'static str,
        value: String,
        choices: Vec<&'static str>,
    },

    /// Step name not recognized
    #[error("Unknown step '{name}': must be one of starter, main, dessert, drink")]
    UnknownStep { name: String },

    /// Policy name not recognized
    #[error("Unknown policy '{name}': must be strict or permissive")]
    UnknownPolicy { name: String },
}

/// Kitchen dispatch errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KitchenError {
    /// No built-in builder or configured menu with this name
    #[error("Builder '{name}' not found. Available: {}", available.join(", "))]
    UnknownBuilder {
        name: String,
        available: Vec<String>,
    },
}

/// Settings errors
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Failed to read config file
    #[error("Failed to read config file '{path}': {error}")]
    ReadError { path: PathBuf, error: String },

    /// Failed to parse config file
    #[error("Failed to parse config file '{path}': {error}")]
    ParseError { path: PathBuf, error: String },

    /// Menu definition is invalid
    #[error("Menu '{name}' is invalid: {reason}")]
    InvalidMenu { name: String, reason: String },

    /// Process-wide settings were installed twice
    #[error("Settings have already been initialized")]
    AlreadyInitialized,
}

/// Top-level mealprep error type
#[derive(Error, Debug)]
pub enum MealprepError {
    /// Meal error
    #[error(transparent)]
    Meal(#[from] MealError),

    /// Catalog error
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Kitchen error
    #[error(transparent)]
    Kitchen(#[from] KitchenError),

    /// Settings error
    #[error(transparent)]
    Settings(#[from] SettingsError),
}
