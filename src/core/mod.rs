//! Core business logic module
//!
//! This module contains all meal-construction logic for mealprep.
//! It has NO I/O operations apart from reading the settings file.
//!
//! # Submodules
//!
//! - [`catalog`] - Closed enumerations of slot values, steps and policies
//! - [`meal`] - The meal product and its snapshots
//! - [`builder`] - Builder variants and their validation policies
//! - [`director`] - Fixed and parameterized step sequences
//! - [`menu`] - Configured menus served by the menu builder
//! - [`kitchen`] - Builder dispatch by name and order placement
//! - [`settings`] - `config.toml` loading and the process-wide instance

pub mod builder;
pub mod catalog;
pub mod director;
pub mod kitchen;
pub mod meal;
pub mod menu;
pub mod settings;
