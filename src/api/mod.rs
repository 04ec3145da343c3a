//! HTTP API module
//! 
//! The control API plays the part of the reminder menu: pick an interval,
//! stop, preview the alert or quit.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/intervals", get(intervals_handler))
        .route("/interval/:id", post(start_handler))
        .route("/stop", post(stop_handler))
        .route("/test-alert", post(test_alert_handler))
        .route("/quit", post(quit_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
