//! Configuration constants
//!
//! Runtime settings loading lives in [`crate::core::settings`].

pub mod defaults;
