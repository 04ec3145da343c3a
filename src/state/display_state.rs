//! Snapshot published to the status display

use serde::Serialize;

use super::countdown::{format_remaining, Countdown};

/// What the status display should currently show
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayState {
    /// Formatted remaining time, `None` when the display is cleared
    pub title: Option<String>,
    /// Label of the active interval
    pub interval_label: Option<&'static str>,
}

impl DisplayState {
    /// Create a cleared display
    pub fn cleared() -> Self {
        Self {
            title: None,
            interval_label: None,
        }
    }

    /// Build the display for the current countdown
    pub fn from_countdown(countdown: &Countdown) -> Self {
        match countdown.active_interval() {
            Some(interval) => Self {
                title: Some(format_remaining(countdown.remaining_seconds())),
                interval_label: Some(interval.label),
            },
            None => Self::cleared(),
        }
    }

    /// Check if the display shows a countdown
    pub fn is_cleared(&self) -> bool {
        self.title.is_none()
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::cleared()
    }
}
