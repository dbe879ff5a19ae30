//! Filesystem-backed `ConfigSource`.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::errors::{ConfigReadError, ConfigReadResult};
use crate::domain::ports::ConfigSource;

/// Reads the agent config from a file on disk.
///
/// Relative paths resolve against the process working directory at read
/// time, not at construction time.
#[derive(Debug, Clone)]
pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for FileConfigSource {
    fn describe(&self) -> String {
        self.path.file_name().map_or_else(
            || self.path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
    }

    fn read(&self) -> ConfigReadResult<Option<String>> {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "config file not present");
                return Ok(None);
            }
            Err(source) => {
                return Err(ConfigReadError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        // The handle is dropped on return, whichever branch is taken.
        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|source| ConfigReadError::Io {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), bytes = content.len(), "read config file");
        Ok(Some(content))
    }
}
