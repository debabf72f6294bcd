use tokio::signal;
use tracing::{info, warn};

/// Resolves when the user asks to leave the current view (Ctrl+C).
///
/// If the signal handler cannot be installed this never resolves, so the
/// caller's other branch decides.
pub async fn wait_for_teardown() {
    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Teardown signal received");
        }
        Err(e) => {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
