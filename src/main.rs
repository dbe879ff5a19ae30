//! Agent Config Check CLI entry point.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use agent_config_check::cli::{commands, handle_error, Cli};
use agent_config_check::{LoggerImpl, SettingsLoader};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logger = SettingsLoader::load_with_overrides(cli.log_level.as_deref())
        .context("Failed to load settings")
        .and_then(|settings| LoggerImpl::init(&settings.logging));

    if let Err(err) = logger {
        return handle_error(err, cli.json);
    }

    commands::validate::execute(&cli.validate, cli.json)
}
