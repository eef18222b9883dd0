//! Infrastructure layer
//!
//! The only place that touches the environment.

pub mod dirs;
