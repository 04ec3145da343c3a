//! Signal handling for graceful shutdown

use std::sync::Arc;
use signal_hook_tokio::Signals;
use futures::stream::StreamExt;
use tracing::{info, warn};

use crate::state::AppState;

/// Wait for a shutdown signal (SIGTERM, SIGINT) or a quit request from the menu
pub async fn shutdown_signal(state: Arc<AppState>) {
    let signals = Signals::new([
        signal_hook::consts::SIGTERM,
        signal_hook::consts::SIGINT,
    ]);

    match signals {
        Ok(mut signals) => {
            tokio::select! {
                Some(signal) = signals.next() => info!("Received signal: {}", signal),
                _ = state.quit.notified() => {}
            }
        }
        Err(e) => {
            warn!("Failed to register signal handlers, only quit requests will stop the reminder: {}", e);
            state.quit.notified().await;
        }
    }
}
