//! Application layer: use case orchestration.

pub mod validation;

pub use validation::{ConfigValidator, ValidationOutcome, EXIT_FAILURE, EXIT_SUCCESS};
