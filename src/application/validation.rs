//! Agent Config Validation
//!
//! Runs the single validation pass over an agent config document:
//! absent → skip (or fail in strict mode), unreadable/unparsable → failure,
//! missing required keys → failure, otherwise pass.

use std::path::PathBuf;

use tracing::{debug, info, instrument, warn};

use crate::adapters::FileConfigSource;
use crate::domain::errors::ConfigReadError;
use crate::domain::models::{AgentConfig, DEFAULT_CONFIG_FILE};
use crate::domain::ports::ConfigSource;

/// Process exit status for a passed or skipped validation.
pub const EXIT_SUCCESS: u8 = 0;
/// Process exit status for any validation failure.
pub const EXIT_FAILURE: u8 = 1;

/// Result of one validation pass.
#[derive(Debug)]
pub enum ValidationOutcome {
    /// No config document exists; nothing was checked.
    Skipped,
    /// No config document exists and strict mode requires one.
    NotFound,
    /// The document exists but could not be read or parsed into a mapping.
    ParseFailure(ConfigReadError),
    /// The document parsed but lacks these required fields, in required order.
    MissingFields(Vec<&'static str>),
    /// Every required field is present.
    Passed,
}

impl ValidationOutcome {
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Skipped | Self::Passed)
    }

    pub const fn exit_code(&self) -> u8 {
        if self.is_success() {
            EXIT_SUCCESS
        } else {
            EXIT_FAILURE
        }
    }

    /// Machine-readable status tag.
    pub const fn status(&self) -> &'static str {
        match self {
            Self::Skipped => "skipped",
            Self::NotFound => "not_found",
            Self::ParseFailure(_) => "parse_failure",
            Self::MissingFields(_) => "missing_fields",
            Self::Passed => "passed",
        }
    }

    /// Status line for the given config file name.
    pub fn message(&self, file_name: &str) -> String {
        match self {
            Self::Skipped => format!("⚠️ {file_name} not found. Skipping validation."),
            Self::NotFound => format!("❌ Failed to validate {file_name}: file not found"),
            Self::ParseFailure(err) => format!("❌ Failed to validate {file_name}: {err}"),
            Self::MissingFields(missing) => {
                format!("❌ Validation failed: missing fields: {missing:?}")
            }
            Self::Passed => "✅ Agent config validation passed.".to_string(),
        }
    }
}

/// Checks an agent config for the required top-level fields.
#[derive(Debug, Clone)]
pub struct ConfigValidator<S = FileConfigSource> {
    source: S,
    strict: bool,
}

impl ConfigValidator<FileConfigSource> {
    /// Validator for the config file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_source(FileConfigSource::new(path))
    }
}

impl Default for ConfigValidator<FileConfigSource> {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_FILE)
    }
}

impl<S: ConfigSource> ConfigValidator<S> {
    /// Validator over an arbitrary document source.
    pub const fn with_source(source: S) -> Self {
        Self {
            source,
            strict: false,
        }
    }

    /// Fail instead of skipping when the document is absent.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Name of the checked document, as used in status messages.
    pub fn file_name(&self) -> String {
        self.source.describe()
    }

    /// Run one validation pass.
    ///
    /// Holds no state between calls; repeated runs over an unchanged
    /// document return the same outcome.
    #[instrument(skip(self), fields(source = %self.source.describe(), strict = self.strict))]
    pub fn validate(&self) -> ValidationOutcome {
        debug!("validating agent config");

        let content = match self.source.read() {
            Ok(Some(content)) => content,
            Ok(None) if self.strict => {
                warn!("agent config not found in strict mode");
                return ValidationOutcome::NotFound;
            }
            Ok(None) => {
                info!("agent config not found, skipping validation");
                return ValidationOutcome::Skipped;
            }
            Err(err) => return Self::parse_failure(err),
        };

        let config = match AgentConfig::from_yaml_str(&content) {
            Ok(config) => config,
            Err(err) => return Self::parse_failure(err),
        };

        let missing = config.missing_fields();
        if missing.is_empty() {
            info!(fields = config.len(), "agent config validation passed");
            ValidationOutcome::Passed
        } else {
            warn!(missing = ?missing, "agent config is missing required fields");
            ValidationOutcome::MissingFields(missing)
        }
    }

    fn parse_failure(err: ConfigReadError) -> ValidationOutcome {
        warn!(kind = err.kind(), error = %err, "failed to load agent config");
        ValidationOutcome::ParseFailure(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ConfigReadResult;
    use crate::domain::models::REQUIRED_FIELDS;
    use std::cell::Cell;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    /// In-memory source that counts reads.
    struct StaticSource {
        content: Option<&'static str>,
        reads: Cell<usize>,
    }

    impl StaticSource {
        fn new(content: Option<&'static str>) -> Self {
            Self {
                content,
                reads: Cell::new(0),
            }
        }
    }

    impl ConfigSource for StaticSource {
        fn describe(&self) -> String {
            "agent_config.yaml".to_string()
        }

        fn read(&self) -> ConfigReadResult<Option<String>> {
            self.reads.set(self.reads.get() + 1);
            Ok(self.content.map(str::to_string))
        }
    }

    struct FailingSource;

    impl ConfigSource for FailingSource {
        fn describe(&self) -> String {
            "agent_config.yaml".to_string()
        }

        fn read(&self) -> ConfigReadResult<Option<String>> {
            Err(ConfigReadError::Io {
                path: PathBuf::from("agent_config.yaml"),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied"),
            })
        }
    }

    fn validate_str(content: &'static str) -> ValidationOutcome {
        ConfigValidator::with_source(StaticSource::new(Some(content))).validate()
    }

    #[test]
    fn test_absent_file_is_skipped() {
        let source = StaticSource::new(None);
        let validator = ConfigValidator::with_source(&source);

        let outcome = validator.validate();
        assert!(matches!(outcome, ValidationOutcome::Skipped));
        assert_eq!(outcome.exit_code(), EXIT_SUCCESS);
        assert_eq!(
            outcome.message("agent_config.yaml"),
            "⚠️ agent_config.yaml not found. Skipping validation."
        );
        assert_eq!(source.reads.get(), 1);
    }

    #[test]
    fn test_absent_file_fails_in_strict_mode() {
        let outcome = ConfigValidator::with_source(StaticSource::new(None))
            .strict(true)
            .validate();

        assert!(matches!(outcome, ValidationOutcome::NotFound));
        assert_eq!(outcome.exit_code(), EXIT_FAILURE);
        assert_eq!(
            outcome.message("agent_config.yaml"),
            "❌ Failed to validate agent_config.yaml: file not found"
        );
    }

    #[test]
    fn test_complete_config_passes() {
        let outcome = validate_str("{name: a, description: b, owner: c, entrypoint: d}");

        assert!(matches!(outcome, ValidationOutcome::Passed));
        assert!(outcome.is_success());
        assert_eq!(
            outcome.message("agent_config.yaml"),
            "✅ Agent config validation passed."
        );
    }

    #[test]
    fn test_strict_mode_does_not_change_present_file_outcome() {
        let outcome = ConfigValidator::with_source(StaticSource::new(Some(
            "{name: a, description: b, owner: c, entrypoint: d}",
        )))
        .strict(true)
        .validate();

        assert!(matches!(outcome, ValidationOutcome::Passed));
    }

    #[test]
    fn test_missing_fields_are_listed_in_required_order() {
        let outcome = validate_str("{name: a, owner: c}");

        match &outcome {
            ValidationOutcome::MissingFields(missing) => {
                assert_eq!(missing, &vec!["description", "entrypoint"]);
            }
            other => panic!("Expected MissingFields, got {other:?}"),
        }
        assert_eq!(outcome.exit_code(), EXIT_FAILURE);
        assert_eq!(
            outcome.message("agent_config.yaml"),
            r#"❌ Validation failed: missing fields: ["description", "entrypoint"]"#
        );
    }

    #[test]
    fn test_empty_mapping_misses_all_fields() {
        let outcome = validate_str("{}");
        assert!(
            matches!(outcome, ValidationOutcome::MissingFields(ref m) if m == &REQUIRED_FIELDS.to_vec())
        );
    }

    #[test]
    fn test_invalid_syntax_is_parse_failure() {
        let outcome = validate_str("name: [a, b\ndescription: {");

        assert!(matches!(
            outcome,
            ValidationOutcome::ParseFailure(ConfigReadError::Parse(_))
        ));
        assert_eq!(outcome.exit_code(), EXIT_FAILURE);

        let message = outcome.message("agent_config.yaml");
        let detail = message
            .strip_prefix("❌ Failed to validate agent_config.yaml: ")
            .expect("parse failure message prefix");
        assert!(!detail.is_empty());
    }

    #[test]
    fn test_empty_document_is_parse_failure() {
        let outcome = validate_str("");
        assert!(matches!(
            outcome,
            ValidationOutcome::ParseFailure(ConfigReadError::NotAMapping("null"))
        ));
    }

    #[test]
    fn test_read_error_shares_parse_failure_path() {
        let outcome = ConfigValidator::with_source(FailingSource).validate();

        assert_eq!(outcome.status(), "parse_failure");
        assert_eq!(
            outcome.message("agent_config.yaml"),
            "❌ Failed to validate agent_config.yaml: access denied"
        );
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let source = StaticSource::new(Some("{name: a, owner: c}"));
        let validator = ConfigValidator::with_source(&source);

        let first = validator.validate();
        let second = validator.validate();

        assert_eq!(first.status(), second.status());
        assert_eq!(first.message("x"), second.message("x"));
        assert_eq!(first.exit_code(), second.exit_code());
        assert_eq!(source.reads.get(), 2);
    }

    #[test]
    fn test_file_validator_reads_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "name: a\ndescription: b\nowner: c\nentrypoint: d").unwrap();
        file.flush().unwrap();

        let outcome = ConfigValidator::new(file.path()).validate();
        assert!(matches!(outcome, ValidationOutcome::Passed));
    }

    #[test]
    fn test_file_validator_skips_missing_path() {
        let dir = TempDir::new().unwrap();
        let validator = ConfigValidator::new(dir.path().join("agent_config.yaml"));

        assert_eq!(validator.file_name(), "agent_config.yaml");
        assert!(matches!(validator.validate(), ValidationOutcome::Skipped));
    }

    #[test]
    fn test_default_validator_targets_default_file() {
        let validator: ConfigValidator = ConfigValidator::default();
        assert_eq!(
            validator.source().path(),
            std::path::Path::new(DEFAULT_CONFIG_FILE)
        );
    }
}
