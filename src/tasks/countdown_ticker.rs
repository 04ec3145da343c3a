//! One-second ticker driving the countdown

use std::{sync::Arc, time::Duration};
use tokio::{
    task::AbortHandle,
    time::{interval_at, Instant, MissedTickBehavior},
};
use tracing::{debug, error};

use crate::state::{AppState, Tick};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Spawn the ticker for schedule `generation` and return its cancel handle.
///
/// The first tick fires one period after this call.
pub fn spawn_countdown_ticker(state: Arc<AppState>, generation: u64) -> AbortHandle {
    let mut ticks = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let task = tokio::spawn(async move {
        debug!("Starting countdown ticker generation {}", generation);
        loop {
            ticks.tick().await;
            match state.tick(generation) {
                Ok(Tick::Ignored) => {
                    debug!("Ticker generation {} retired", generation);
                    break;
                }
                Ok(_) => {}
                Err(e) => error!("Countdown tick failed: {}", e),
            }
        }
    });

    task.abort_handle()
}
