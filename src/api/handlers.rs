//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{error, info, warn};

use crate::{intervals, state::AppState};
use super::responses::{menu_entries, ApiResponse, HealthResponse, MenuEntry, StatusResponse};

/// Handle GET /intervals - List the interval menu with the active entry checked
pub async fn intervals_handler(State(state): State<Arc<AppState>>) -> Result<Json<Vec<MenuEntry>>, StatusCode> {
    match state.active_interval() {
        Ok(active) => Ok(Json(menu_entries(active))),
        Err(e) => {
            error!("Failed to read active interval: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /interval/:id - Start the countdown for an interval
pub async fn start_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse>, StatusCode> {
    let Some(interval) = intervals::find(&id) else {
        warn!("Unknown interval requested: {}", id);
        return Err(StatusCode::NOT_FOUND);
    };

    match state.start(interval) {
        Ok(display) => {
            info!("Interval endpoint called - countdown started for {}", interval.label);
            Ok(Json(ApiResponse::running(
                format!("Timer set for {}", interval.label),
                display,
            )))
        }
        Err(e) => {
            error!("Failed to start countdown: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /stop - Stop the countdown
pub async fn stop_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    match state.stop() {
        Ok(()) => {
            info!("Stop endpoint called - countdown stopped");
            Ok(Json(ApiResponse::stopped("Timer stopped".to_string())))
        }
        Err(e) => {
            error!("Failed to stop countdown: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /test-alert - Show the alert without touching the countdown
pub async fn test_alert_handler(State(state): State<Arc<AppState>>) -> Json<ApiResponse> {
    state.trigger_test_alert();
    Json(ApiResponse::unchanged(
        "Test alert dispatched".to_string(),
        state.get_display(),
    ))
}

/// Handle POST /quit - Shut the reminder down
pub async fn quit_handler(State(state): State<Arc<AppState>>) -> Json<ApiResponse> {
    state.request_quit();
    Json(ApiResponse::unchanged(
        "Shutting down".to_string(),
        state.get_display(),
    ))
}

/// Handle GET /status - Return current countdown status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let countdown = match state.get_countdown() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to get countdown: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        running: countdown.is_running(),
        active_interval: countdown.active_interval(),
        remaining_seconds: countdown.remaining_seconds(),
        display: state.get_display(),
        completed_cycles: state.completed_cycles(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
