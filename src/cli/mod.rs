//! Command-line interface.

pub mod commands;
pub mod output;
pub mod types;

pub use output::{write_output, CommandOutput};
pub use types::{Cli, ValidateArgs};

use std::process::ExitCode;

use crate::application::EXIT_FAILURE;

/// Report a startup error and return the failure exit code.
///
/// In JSON mode the error goes to stdout as `{"status": "error", ...}` so
/// callers parsing stdout always receive an object.
pub fn handle_error(err: anyhow::Error, json: bool) -> ExitCode {
    if json {
        let value = serde_json::json!({
            "status": "error",
            "error": format!("{err:#}"),
        });
        println!("{}", serde_json::to_string_pretty(&value).unwrap_or_default());
    } else {
        eprintln!("Error: {err:#}");
    }
    ExitCode::from(EXIT_FAILURE)
}
