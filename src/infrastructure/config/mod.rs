//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment:
//! - Programmatic defaults
//! - Environment variable overrides (`AGENT_CONFIG_CHECK_*`)
//! - Settings validation
//!
//! These settings tune the tool's own diagnostics. They never change which
//! agent config fields are required or how the outcome is decided.

pub mod loader;
pub mod settings;

pub use loader::{SettingsError, SettingsLoader, ENV_PREFIX};
pub use settings::Settings;
