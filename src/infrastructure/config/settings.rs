use serde::{Deserialize, Serialize};

use crate::infrastructure::logging::LogConfig;

/// Tool settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct Settings {
    /// Logging configuration
    #[serde(default)]
    pub logging: LogConfig,
}
