//! Domain errors for agent config validation.

use std::path::PathBuf;
use thiserror::Error;

/// Why a present config document could not become an `AgentConfig`.
///
/// The `Display` text is the detail embedded in the failure message, so the
/// I/O and parse variants render the underlying error verbatim.
#[derive(Debug, Error)]
pub enum ConfigReadError {
    #[error("{source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("expected a mapping at the top level, found {0}")]
    NotAMapping(&'static str),
}

impl ConfigReadError {
    /// Short machine-readable tag for the failure kind.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Io { .. } => "io",
            Self::Parse(_) => "parse",
            Self::NotAMapping(_) => "not_a_mapping",
        }
    }
}

pub type ConfigReadResult<T> = Result<T, ConfigReadError>;
