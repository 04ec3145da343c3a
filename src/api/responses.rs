//! API response structures

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    intervals::{Interval, INTERVALS},
    state::DisplayState,
};

/// API response structure for countdown commands
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub display: DisplayState,
}

impl ApiResponse {
    /// Create a new API response
    pub fn new(status: String, message: String, display: DisplayState) -> Self {
        Self {
            status,
            message,
            timestamp: Utc::now(),
            display,
        }
    }

    /// Create a running response
    pub fn running(message: String, display: DisplayState) -> Self {
        Self::new("running".to_string(), message, display)
    }

    /// Create a stopped response
    pub fn stopped(message: String) -> Self {
        Self::new("stopped".to_string(), message, DisplayState::cleared())
    }

    /// Create a response that leaves the countdown untouched
    pub fn unchanged(message: String, display: DisplayState) -> Self {
        Self::new("unchanged".to_string(), message, display)
    }
}

/// One entry of the interval menu
#[derive(Debug, Clone, Serialize)]
pub struct MenuEntry {
    #[serde(flatten)]
    pub interval: Interval,
    pub checked: bool,
}

/// Build the interval menu, checking the entry that matches `active`
pub fn menu_entries(active: Option<Interval>) -> Vec<MenuEntry> {
    INTERVALS
        .iter()
        .map(|&interval| MenuEntry {
            interval,
            checked: active == Some(interval),
        })
        .collect()
}

/// Status response with countdown information
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub running: bool,
    pub active_interval: Option<Interval>,
    pub remaining_seconds: u64,
    pub display: DisplayState,
    pub completed_cycles: u64,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
