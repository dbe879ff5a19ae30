//! Validate command: the tool's single operation.

use console::style;
use serde::Serialize;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{debug, error};

use crate::application::{ConfigValidator, ValidationOutcome, EXIT_FAILURE};
use crate::cli::output::{write_output, CommandOutput};
use crate::cli::types::ValidateArgs;

#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub status: &'static str,
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationReport {
    pub fn new(file_name: &str, path: String, outcome: &ValidationOutcome) -> Self {
        let (missing, error) = match outcome {
            ValidationOutcome::MissingFields(fields) => {
                (Some(fields.iter().map(ToString::to_string).collect()), None)
            }
            ValidationOutcome::ParseFailure(err) => (None, Some(err.to_string())),
            ValidationOutcome::Skipped | ValidationOutcome::NotFound | ValidationOutcome::Passed => {
                (None, None)
            }
        };

        Self {
            status: outcome.status(),
            path,
            message: outcome.message(file_name),
            missing,
            error,
        }
    }
}

impl CommandOutput for ValidationReport {
    fn to_human(&self) -> String {
        let line = style(&self.message);
        let line = match self.status {
            "passed" => line.green(),
            "skipped" => line.yellow(),
            _ => line.red(),
        };
        line.to_string()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Run the validation, write its status to `writer` and return the exit code.
pub fn run<W: Write>(args: &ValidateArgs, json: bool, writer: &mut W) -> io::Result<u8> {
    let validator = ConfigValidator::new(&args.path).strict(args.strict);
    let outcome = validator.validate();
    debug!(status = outcome.status(), "validation finished");

    let report = ValidationReport::new(
        &validator.file_name(),
        args.path.display().to_string(),
        &outcome,
    );
    write_output(writer, &report, json)?;

    Ok(outcome.exit_code())
}

/// Run the validation and print its status on stdout.
pub fn execute(args: &ValidateArgs, json: bool) -> ExitCode {
    match run(args, json, &mut io::stdout().lock()) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            error!(error = %err, "failed to write validation status");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
