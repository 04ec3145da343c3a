//! Background tasks module
//! 
//! This module contains the countdown ticker and the tasks that present the
//! countdown to the user.

pub mod alert_presenter;
pub mod countdown_ticker;
pub mod status_display;

// Re-export main functions
pub use alert_presenter::alert_presenter_task;
pub use countdown_ticker::spawn_countdown_ticker;
pub use status_display::status_display_task;
