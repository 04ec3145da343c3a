//! State management module
//! 
//! This module contains the countdown state machine and the controller that
//! schedules it.

pub mod alert;
pub mod app_state;
pub mod countdown;
pub mod display_state;

// Re-export main types
pub use alert::{Alert, AlertOrigin};
pub use app_state::AppState;
pub use countdown::{format_remaining, Countdown, Tick};
pub use display_state::DisplayState;
