//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Args, Parser};
use std::path::PathBuf;

use crate::domain::models::DEFAULT_CONFIG_FILE;

#[derive(Parser, Debug)]
#[command(name = "agent-config-check")]
#[command(about = "Check that agent_config.yaml carries the mandatory agent fields", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub validate: ValidateArgs,

    /// Output in JSON format
    #[arg(short, long)]
    pub json: bool,

    /// Diagnostic log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Agent config file to check
    #[arg(value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    pub path: PathBuf,

    /// Fail when the config file is absent instead of skipping validation
    #[arg(long)]
    pub strict: bool,
}
