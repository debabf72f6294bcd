//! CLI interface module
//!
//! Each command is a thin view over [`LinkService`].

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::config::get_config;
use crate::errors::LinkshelfError;
use crate::services::LinkService;
use commands::{clear_history, config_generate, list_history, open_path, shorten_url};

#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    ValidationError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StorageError(msg) => format!("Storage error: {}", msg),
            CliError::ValidationError(msg) => msg.clone(),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StorageError(msg) => {
                format!("{} {}", "Storage error:".red().bold(), msg.white())
            }
            CliError::ValidationError(msg) => format!("{} {}", "✗".red().bold(), msg.red()),
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<LinkshelfError> for CliError {
    fn from(err: LinkshelfError) -> Self {
        if err.is_validation() {
            CliError::ValidationError(err.message().to_string())
        } else {
            CliError::StorageError(err.to_string())
        }
    }
}

/// Run a CLI command from clap-parsed input
///
/// Reads the global configuration installed by `init_config`.
pub async fn run_cli_command(cmd: Commands) -> Result<(), CliError> {
    // Generate doesn't need the history store
    if let Commands::Config { action } = cmd {
        let ConfigCommands::Generate { output_path, force } = action;
        return config_generate(output_path, force).await;
    }

    let config = get_config();
    let mut service = LinkService::from_config(&config).await?;

    match cmd {
        Commands::Shorten { url, alias, expiry } => {
            shorten_url(&mut service, url, alias, expiry).await
        }
        Commands::List => list_history(&service).await,
        Commands::Open { path } => open_path(&service, path).await,
        Commands::Clear => clear_history(&mut service).await,
        Commands::Config { .. } => unreachable!("handled above"),
    }
}
