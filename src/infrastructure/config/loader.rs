use figment::providers::{Env, Serialized};
use figment::Figment;
use thiserror::Error;

use super::settings::Settings;

/// Prefix for environment overrides, e.g. `AGENT_CONFIG_CHECK_LOGGING__LEVEL`.
pub const ENV_PREFIX: &str = "AGENT_CONFIG_CHECK_";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Settings error types
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Failed to extract settings: {0}")]
    Extract(#[from] Box<figment::Error>),
}

/// Settings loader with hierarchical merging
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. Environment variables (`AGENT_CONFIG_CHECK_*` prefix, `__` nesting)
    pub fn load() -> Result<Settings, SettingsError> {
        Self::load_with_overrides(None)
    }

    /// Load settings, then apply a command-line log level on top.
    pub fn load_with_overrides(log_level: Option<&str>) -> Result<Settings, SettingsError> {
        let mut settings: Settings = Self::figment().extract().map_err(Box::new)?;

        if let Some(level) = log_level {
            settings.logging.level = level.to_string();
        }

        Self::validate(&settings)?;
        Ok(settings)
    }

    /// The merged provider chain, before extraction.
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Validate settings after loading
    pub fn validate(settings: &Settings) -> Result<(), SettingsError> {
        let level = settings.logging.level.to_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(SettingsError::InvalidLogLevel(
                settings.logging.level.clone(),
            ));
        }

        Ok(())
    }
}
