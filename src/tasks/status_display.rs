//! Terminal status line standing in for the menu-bar countdown

use std::{
    io::{self, Write},
    sync::Arc,
};
use tracing::{debug, warn};

use crate::state::{AppState, DisplayState};

const TIMER_GLYPH: &str = "\u{23f1}";

/// Render the status line for a display snapshot
pub fn render_status_line(display: &DisplayState) -> String {
    match (&display.title, display.interval_label) {
        (Some(title), Some(label)) => format!("{} {} ({})", TIMER_GLYPH, title, label),
        (Some(title), None) => format!("{} {}", TIMER_GLYPH, title),
        (None, _) => TIMER_GLYPH.to_string(),
    }
}

fn draw(line: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    // Clear the line first so shorter titles leave no residue
    write!(stdout, "\r\x1b[2K{}", line)?;
    stdout.flush()
}

/// Background task redrawing the status line whenever the display changes
pub async fn status_display_task(state: Arc<AppState>) {
    debug!("Starting status display task");

    let mut display_rx = state.display_tx.subscribe();
    loop {
        let line = render_status_line(&display_rx.borrow_and_update());
        if let Err(e) = draw(&line) {
            warn!("Failed to draw status line: {}", e);
        }

        if display_rx.changed().await.is_err() {
            break;
        }
    }
}
