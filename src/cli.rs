//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// Linkshelf - a self-contained URL shortener
#[derive(Parser)]
#[command(name = "linkshelf")]
#[command(version)]
#[command(about = "Shorten URLs, keep the recent ones, and preview their redirects", long_about = None)]
pub struct Cli {
    /// Configuration file (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Shorten a URL
    ///
    /// Without --alias a random 6 character code is generated.
    Shorten {
        /// Absolute URL to shorten
        url: String,

        /// Custom alias, used verbatim as the short code
        #[arg(long, short = 'a')]
        alias: Option<String>,

        /// Expiry date, stored as given
        #[arg(long, short = 'e')]
        expiry: Option<String>,
    },

    /// List recently shortened URLs (newest first)
    List,

    /// Open a short path: shows the redirect page or a 404
    ///
    /// Accepts `my-link`, `/my-link` or the full short URL.
    Open {
        /// Path after the origin
        path: String,
    },

    /// Remove every entry from the history
    Clear,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_shorten_with_alias() {
        let cli = Cli::try_parse_from([
            "linkshelf",
            "shorten",
            "https://example.com/page",
            "--alias",
            "my-link",
        ])
        .unwrap();
        match cli.command {
            Commands::Shorten { url, alias, expiry } => {
                assert_eq!(url, "https://example.com/page");
                assert_eq!(alias.as_deref(), Some("my-link"));
                assert!(expiry.is_none());
            }
            _ => panic!("expected shorten"),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["linkshelf", "list", "-c", "custom.toml"]).unwrap();
        assert_eq!(cli.config.as_deref(), Some("custom.toml"));
        assert!(matches!(cli.command, Commands::List));
    }
}
