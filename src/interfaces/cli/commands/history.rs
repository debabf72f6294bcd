//! History commands

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::LinkService;

pub async fn list_history(service: &LinkService) -> Result<(), CliError> {
    let history = service.history();

    if history.is_empty() {
        println!("{} No recent URLs", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Recent URLs:".bold().green());
    println!();
    for entry in history {
        let mut info_parts = vec![format!(
            "{} -> {}",
            entry.short_url.cyan(),
            entry.original_url.blue().underline()
        )];

        if let Some(created_at) = entry.created_at_datetime() {
            info_parts.push(
                format!("• {}", created_at.format("%Y-%m-%d"))
                    .dimmed()
                    .to_string(),
            );
        }

        if let Some(expiry) = entry.expiry() {
            info_parts.push(
                format!("(expires: {})", expiry)
                    .dimmed()
                    .yellow()
                    .to_string(),
            );
        }

        println!("  {}", info_parts.join(" "));
    }
    println!();
    println!(
        "{} Showing {} most recent links",
        "ℹ".bold().blue(),
        history.len().to_string().green()
    );
    Ok(())
}

pub async fn clear_history(service: &mut LinkService) -> Result<(), CliError> {
    let count = service.history().len();
    service.clear_history().await;
    println!(
        "{} Cleared {} history entries",
        "✓".bold().green(),
        count.to_string().cyan()
    );
    Ok(())
}
