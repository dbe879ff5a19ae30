//! Infrastructure layer module
//!
//! Ambient concerns of the tool:
//! - Configuration management (figment)
//! - Logging infrastructure (tracing)

pub mod config;
pub mod logging;
