//! Console alert shown when a reminder cycle ends

use std::{
    io::{self, Write},
    sync::Arc,
};
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

use crate::state::{Alert, AppState};

/// Render the alert box, starting with the terminal bell
pub fn render_alert(alert: &Alert) -> String {
    let title = alert.title();
    let message = alert.message();
    let width = title.chars().count().max(message.chars().count()) + 2;
    let rule = "-".repeat(width);

    format!(
        "\x07\n+{rule}+\n| {title:<inner$} |\n| {message:<inner$} |\n+{rule}+\n",
        rule = rule,
        title = title,
        message = message,
        inner = width - 2,
    )
}

fn show(alert: &Alert) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(render_alert(alert).as_bytes())?;
    stdout.flush()
}

/// Background task presenting every alert raised by the controller
pub async fn alert_presenter_task(state: Arc<AppState>) {
    info!("Starting alert presenter task");

    let mut alert_rx = state.alert_tx.subscribe();
    loop {
        match alert_rx.recv().await {
            Ok(alert) => {
                info!("Showing {:?} alert raised at {}", alert.origin, alert.raised_at);
                if let Err(e) = show(&alert) {
                    warn!("Failed to show alert: {}", e);
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!("Alert presenter fell behind, skipped {} alerts", skipped);
            }
            Err(RecvError::Closed) => break,
        }
    }
}
