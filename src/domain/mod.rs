//! Domain layer
//!
//! Core types for agent config validation: the parsed document, its error
//! taxonomy and the port through which raw documents are obtained.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{ConfigReadError, ConfigReadResult};
