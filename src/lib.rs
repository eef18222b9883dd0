//! Mealprep - stepwise meal construction
//!
//! This library assembles meals through interchangeable builder variants,
//! sequenced by a stateless director.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Meal, builders, director and kitchen (no I/O operations)
//! - [`infra`] - Infrastructure layer (config directories)
//! - [`config`] - Constants and defaults
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
