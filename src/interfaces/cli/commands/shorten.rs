//! Shorten command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::{LinkService, ShortenRequest};

pub async fn shorten_url(
    service: &mut LinkService,
    url: String,
    alias: Option<String>,
    expiry: Option<String>,
) -> Result<(), CliError> {
    let request = ShortenRequest { url, alias, expiry };
    let entry = service.shorten(request).await?;

    println!("{} Shortened URL: {}", "✓".bold().green(), entry.short_url.cyan());
    println!("  {} {}", "→".dimmed(), entry.original_url.blue().underline());
    if let Some(expiry) = entry.expiry() {
        println!("  {}", format!("(expires: {})", expiry).dimmed().yellow());
    }

    if !service.store().is_persistent() {
        println!(
            "{} {}",
            "⚠".bold().yellow(),
            "History storage is unavailable, this link is kept for this session only".yellow()
        );
    }

    Ok(())
}
