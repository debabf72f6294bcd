//! Open command: the redirect page and the 404 page

use std::sync::Arc;
use std::time::Duration;

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::{LinkService, Navigator, PathOutcome, RedirectHandle, RedirectState};
use crate::system::signal::wait_for_teardown;

/// Stands in for the browser: prints the destination.
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, url: &str) {
        println!("{} {}", "→".bold().green(), url.blue().underline());
    }
}

pub async fn open_path(service: &LinkService, path: String) -> Result<(), CliError> {
    let view = match service.resolve_path(&path) {
        PathOutcome::Home => {
            println!(
                "{} Nothing to open. Use {} to create a short link",
                "ℹ".bold().blue(),
                "linkshelf shorten <URL>".cyan()
            );
            return Ok(());
        }
        PathOutcome::NotFound(code) => {
            println!("{}", "404".bold().blue());
            println!("{}", "Link Not Found".bold());
            println!(
                "{}",
                format!(
                    "The short URL '{}' does not exist or has expired.",
                    code
                )
                .dimmed()
            );
            return Ok(());
        }
        PathOutcome::Redirect(view) => view,
    };

    println!("{}", "Redirecting...".bold());
    println!("{}", "Taking you to your destination".dimmed());
    println!("{}", view.original_url.dimmed());

    let handle = service.start_redirect(&view, Arc::new(TerminalNavigator));
    run_countdown(handle, wait_for_teardown()).await;

    Ok(())
}

/// Ticks the countdown until the redirect settles or `teardown` fires.
async fn run_countdown(
    mut handle: RedirectHandle,
    teardown: impl Future<Output = ()>,
) -> RedirectState {
    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    tokio::pin!(teardown);

    loop {
        tokio::select! {
            state = handle.wait() => {
                if state != RedirectState::Completed {
                    println!("{} Redirect did not complete", "⚠".bold().yellow());
                }
                return state;
            }
            _ = &mut teardown => {
                if handle.cancel() {
                    println!("{} Redirect cancelled", "✗".bold().red());
                }
                return handle.state();
            }
            _ = ticker.tick() => {
                if handle.is_pending() {
                    println!("  {}", format!("{}s", handle.countdown_secs()).dimmed());
                }
            }
        }
    }
}
