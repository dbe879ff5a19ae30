//! Agent Config Check - pre-flight gate for agent configuration files
//!
//! Verifies that `agent_config.yaml` carries the mandatory top-level fields
//! (`name`, `description`, `owner`, `entrypoint`) before deployment or
//! registration tooling consumes it.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): the parsed config, error taxonomy and ports
//! - **Application Layer** (`application`): the validation pass
//! - **Adapters** (`adapters`): filesystem-backed config source
//! - **Infrastructure Layer** (`infrastructure`): settings and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use agent_config_check::{ConfigValidator, ValidationOutcome};
//!
//! let outcome = ConfigValidator::new("agent_config.yaml").validate();
//! if let ValidationOutcome::MissingFields(missing) = &outcome {
//!     eprintln!("missing: {missing:?}");
//! }
//! std::process::exit(i32::from(outcome.exit_code()));
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use adapters::FileConfigSource;
pub use application::{ConfigValidator, ValidationOutcome, EXIT_FAILURE, EXIT_SUCCESS};
pub use domain::models::{AgentConfig, DEFAULT_CONFIG_FILE, REQUIRED_FIELDS};
pub use domain::ports::ConfigSource;
pub use domain::ConfigReadError;
pub use infrastructure::config::{Settings, SettingsError, SettingsLoader};
pub use infrastructure::logging::{LogConfig, LogFormat, LoggerImpl};
