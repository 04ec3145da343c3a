//! Break alerts sent to the alert presenter

use chrono::{DateTime, Utc};
use serde::Serialize;

pub const ALERT_TITLE: &str = "Activity Reminder";
pub const ALERT_MESSAGE: &str = "Time to take a break or move around!";

/// Why an alert was raised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertOrigin {
    /// The countdown reached zero
    Expired,
    /// Requested from the menu to preview the alert
    Test,
}

/// A single alert event
#[derive(Debug, Clone, Serialize)]
pub struct Alert {
    pub origin: AlertOrigin,
    pub interval_label: Option<&'static str>,
    pub raised_at: DateTime<Utc>,
}

impl Alert {
    pub fn new(origin: AlertOrigin, interval_label: Option<&'static str>) -> Self {
        Self {
            origin,
            interval_label,
            raised_at: Utc::now(),
        }
    }

    pub fn title(&self) -> &'static str {
        ALERT_TITLE
    }

    pub fn message(&self) -> &'static str {
        ALERT_MESSAGE
    }
}
