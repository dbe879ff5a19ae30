//! Agent configuration document.
//!
//! An `AgentConfig` is the parsed top-level mapping of `agent_config.yaml`.
//! Only key presence is inspected; values (including nested structures and
//! nulls) are carried as-is.

use serde_yaml::{Mapping, Value};

use crate::domain::errors::{ConfigReadError, ConfigReadResult};

/// Default file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "agent_config.yaml";

/// Top-level keys every agent config must carry, in reporting order.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "description", "owner", "entrypoint"];

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parsed agent configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentConfig {
    fields: Mapping,
}

impl AgentConfig {
    /// Parse a YAML document into an `AgentConfig`.
    ///
    /// The document must be a mapping at the top level. An empty document
    /// parses to null and is rejected the same way as a sequence or scalar.
    /// A single leading byte order mark is ignored and `<<` merge keys are
    /// resolved before keys are inspected. Duplicate keys are a parse error.
    pub fn from_yaml_str(content: &str) -> ConfigReadResult<Self> {
        let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);
        let mut value: Value = serde_yaml::from_str(content)?;
        value.apply_merge()?;
        Self::from_value(value)
    }

    /// Build from an already-parsed YAML value.
    pub fn from_value(value: Value) -> ConfigReadResult<Self> {
        match value {
            Value::Mapping(fields) => Ok(Self { fields }),
            Value::Tagged(tagged) => Self::from_value(tagged.value),
            other => Err(ConfigReadError::NotAMapping(value_kind(&other))),
        }
    }

    /// Whether `key` is present as a top-level string key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Required fields absent from this config, in `REQUIRED_FIELDS` order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|field| !self.contains_key(field))
            .collect()
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
