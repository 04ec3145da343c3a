//! Activity Reminder - a repeating break reminder
//! 
//! This library provides the countdown controller, its one-second ticker, the
//! terminal surfaces that show the countdown and the alert, and a local HTTP
//! API standing in for the interval menu.

pub mod config;
pub mod intervals;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use intervals::{Interval, INTERVALS};
pub use state::AppState;
pub use api::create_router;
pub use utils::signals::shutdown_signal;
