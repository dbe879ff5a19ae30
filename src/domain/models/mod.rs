//! Domain models for agent config validation.

pub mod agent_config;

pub use agent_config::{AgentConfig, DEFAULT_CONFIG_FILE, REQUIRED_FIELDS};
