//! Activity Reminder - a repeating break reminder
//! 
//! This is the main entry point for the activity-reminder application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use activity_reminder::{
    config::Config,
    state::AppState,
    api::create_router,
    tasks::{alert_presenter_task, status_display_task},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Log to stderr so the status line on stdout stays intact
    tracing_subscriber::fmt()
        .with_env_filter(format!("activity_reminder={},tower_http=info", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting activity-reminder v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, interval={:?}",
          config.host, config.port, config.interval.map(|i| i.id));

    let state = Arc::new(AppState::new(config.port, config.host.clone()));

    // Surfaces subscribe before the countdown can produce anything
    tokio::spawn(status_display_task(Arc::clone(&state)));
    tokio::spawn(alert_presenter_task(Arc::clone(&state)));

    if let Some(interval) = config.interval {
        state.start(interval).map_err(anyhow::Error::msg)?;
    }

    let app = create_router(Arc::clone(&state));

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Control API running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET  /intervals     - List intervals");
    info!("  POST /interval/:id  - Start the countdown");
    info!("  POST /stop          - Stop the countdown");
    info!("  POST /test-alert    - Show the alert now");
    info!("  POST /quit          - Quit");
    info!("  GET  /status        - Check countdown status");
    info!("  GET  /health        - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(Arc::clone(&state)))
        .await?;

    if let Err(e) = state.stop() {
        tracing::warn!("Failed to stop countdown on shutdown: {}", e);
    }

    info!("Shutdown complete");
    Ok(())
}
