//! Countdown controller shared by the ticker, the surfaces and the HTTP API

use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex,
    },
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::{
    sync::{broadcast, watch, Notify},
    task::AbortHandle,
};
use tracing::{debug, info, warn};

use crate::{intervals::Interval, tasks::spawn_countdown_ticker};
use super::{Alert, AlertOrigin, Countdown, DisplayState, Tick};

/// Handle of the currently scheduled ticker.
///
/// `generation` changes every time the schedule is replaced or cancelled, so a
/// tick from a superseded ticker can be recognised and dropped.
#[derive(Debug, Default)]
struct TickerSlot {
    generation: u64,
    handle: Option<AbortHandle>,
}

impl TickerSlot {
    /// Cancel the current ticker and invalidate its generation
    fn cancel(&mut self) -> u64 {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!("Cancelled ticker generation {}", self.generation);
        }
        self.generation += 1;
        self.generation
    }
}

/// Main application state owning the reminder countdown
#[derive(Debug)]
pub struct AppState {
    countdown: Mutex<Countdown>,
    ticker: Mutex<TickerSlot>,
    completed_cycles: AtomicU64,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Mutex<Option<String>>,
    pub last_action_time: Mutex<Option<DateTime<Utc>>>,
    /// Channel for status display updates
    pub display_tx: watch::Sender<DisplayState>,
    /// Keep the receiver alive to prevent channel closure
    pub _display_rx: watch::Receiver<DisplayState>,
    /// Channel for alerts
    pub alert_tx: broadcast::Sender<Alert>,
    /// Signalled when a quit is requested from the menu
    pub quit: Notify,
}

impl AppState {
    /// Create a new AppState with a stopped countdown
    pub fn new(port: u16, host: String) -> Self {
        let (display_tx, display_rx) = watch::channel(DisplayState::cleared());
        let (alert_tx, _) = broadcast::channel(16);

        Self {
            countdown: Mutex::new(Countdown::new()),
            ticker: Mutex::new(TickerSlot::default()),
            completed_cycles: AtomicU64::new(0),
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
            last_action_time: Mutex::new(None),
            display_tx,
            _display_rx: display_rx,
            alert_tx,
            quit: Notify::new(),
        }
    }

    /// Start a reminder cycle for `interval`, replacing any running one
    pub fn start(self: &Arc<Self>, interval: Interval) -> Result<DisplayState, String> {
        let mut ticker = self.ticker.lock()
            .map_err(|e| format!("Failed to lock ticker: {}", e))?;

        // The previous ticker is gone before the new one exists
        let generation = ticker.cancel();

        let display = {
            let mut countdown = self.countdown.lock()
                .map_err(|e| format!("Failed to lock countdown: {}", e))?;
            countdown.start(interval);
            DisplayState::from_countdown(&countdown)
        };
        self.publish_display(display.clone());

        ticker.handle = Some(spawn_countdown_ticker(Arc::clone(self), generation));
        drop(ticker);

        info!("Timer set for {}", interval.label);
        self.record_action(&format!("start {}", interval.id));
        Ok(display)
    }

    /// Stop the countdown and clear the display
    pub fn stop(&self) -> Result<(), String> {
        let mut ticker = self.ticker.lock()
            .map_err(|e| format!("Failed to lock ticker: {}", e))?;
        ticker.cancel();

        self.countdown.lock()
            .map_err(|e| format!("Failed to lock countdown: {}", e))?
            .stop();
        drop(ticker);

        self.publish_display(DisplayState::cleared());
        info!("Timer stopped");
        self.record_action("stop");
        Ok(())
    }

    /// Advance the countdown on behalf of the ticker of `generation`.
    ///
    /// Ticks from a cancelled ticker, or while stopped, are ignored.
    pub fn tick(&self, generation: u64) -> Result<Tick, String> {
        let ticker = self.ticker.lock()
            .map_err(|e| format!("Failed to lock ticker: {}", e))?;
        if ticker.generation != generation {
            debug!("Ignoring tick from stale ticker generation {}", generation);
            return Ok(Tick::Ignored);
        }

        let mut countdown = self.countdown.lock()
            .map_err(|e| format!("Failed to lock countdown: {}", e))?;
        let tick = countdown.tick();
        let display = DisplayState::from_countdown(&countdown);
        let interval_label = countdown.active_interval().map(|i| i.label);
        drop(countdown);
        drop(ticker);

        match tick {
            Tick::Ignored => {}
            Tick::Remaining(_) => self.publish_display(display),
            Tick::Expired { reset_to } => {
                let cycles = self.completed_cycles.fetch_add(1, Ordering::Relaxed) + 1;
                info!("Reminder cycle {} complete, restarting at {}s", cycles, reset_to);
                self.publish_display(display);
                self.dispatch_alert(Alert::new(AlertOrigin::Expired, interval_label));
            }
        }

        Ok(tick)
    }

    /// Show the alert without touching the countdown
    pub fn trigger_test_alert(&self) {
        info!("Test alert requested");
        self.dispatch_alert(Alert::new(AlertOrigin::Test, None));
        self.record_action("test-alert");
    }

    /// Ask the process to shut down
    pub fn request_quit(&self) {
        info!("Quit requested");
        self.record_action("quit");
        self.quit.notify_one();
    }

    /// Get a copy of the current countdown
    pub fn get_countdown(&self) -> Result<Countdown, String> {
        self.countdown.lock()
            .map(|countdown| countdown.clone())
            .map_err(|e| format!("Failed to lock countdown: {}", e))
    }

    /// Interval currently driving the countdown, if any
    pub fn active_interval(&self) -> Result<Option<Interval>, String> {
        Ok(self.get_countdown()?.active_interval())
    }

    /// Current status display contents
    pub fn get_display(&self) -> DisplayState {
        self.display_tx.borrow().clone()
    }

    /// Number of cycles that have run to zero since start-up
    pub fn completed_cycles(&self) -> u64 {
        self.completed_cycles.load(Ordering::Relaxed)
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }

    fn publish_display(&self, display: DisplayState) {
        // send_replace never fails, even with no display attached
        self.display_tx.send_replace(display);
    }

    fn dispatch_alert(&self, alert: Alert) {
        if let Err(e) = self.alert_tx.send(alert) {
            warn!("No alert presenter attached, dropping alert: {}", e);
        }
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    #[cfg(test)]
    fn current_generation(&self) -> u64 {
        self.ticker.lock().unwrap().generation
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;
    use tokio::{sync::broadcast::error::TryRecvError, time::sleep};

    use super::*;
    use crate::intervals::find;

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState::new(0, "127.0.0.1".to_string()))
    }

    #[tokio::test(start_paused = true)]
    async fn counts_down_once_per_second() {
        let state = test_state();
        let display = state.start(find("15m").unwrap()).unwrap();
        assert_eq!(display.title.as_deref(), Some("15:00"));

        sleep(Duration::from_millis(5_500)).await;

        let countdown = state.get_countdown().unwrap();
        assert_eq!(countdown.remaining_seconds(), 895);
        assert_eq!(state.get_display().title.as_deref(), Some("14:55"));
        assert_eq!(state.get_display().interval_label, Some("15 min"));
    }

    #[tokio::test(start_paused = true)]
    async fn full_cycle_alerts_once_and_repeats() {
        let state = test_state();
        let mut alerts = state.alert_tx.subscribe();
        state.start(find("15m").unwrap()).unwrap();

        sleep(Duration::from_millis(899_500)).await;
        assert_eq!(state.get_countdown().unwrap().remaining_seconds(), 1);
        assert_eq!(state.get_display().title.as_deref(), Some("00:01"));
        assert!(matches!(alerts.try_recv(), Err(TryRecvError::Empty)));

        sleep(Duration::from_secs(1)).await;
        let countdown = state.get_countdown().unwrap();
        assert_eq!(countdown.remaining_seconds(), 900);
        assert_eq!(countdown.active_interval(), find("15m"));
        assert_eq!(state.completed_cycles(), 1);

        let alert = alerts.try_recv().unwrap();
        assert_eq!(alert.origin, AlertOrigin::Expired);
        assert_eq!(alert.interval_label, Some("15 min"));
        assert!(matches!(alerts.try_recv(), Err(TryRecvError::Empty)));

        // Still running after the alert
        sleep(Duration::from_secs(10)).await;
        assert_eq!(state.get_countdown().unwrap().remaining_seconds(), 890);
    }

    #[tokio::test(start_paused = true)]
    async fn restart_cancels_the_previous_ticker() {
        let state = test_state();
        state.start(find("1h").unwrap()).unwrap();
        sleep(Duration::from_millis(2_500)).await;
        assert_eq!(state.get_countdown().unwrap().remaining_seconds(), 3598);

        let old_generation = state.current_generation();
        state.start(find("15m").unwrap()).unwrap();
        assert_ne!(state.current_generation(), old_generation);

        // A late tick from the old schedule is dropped
        assert_eq!(state.tick(old_generation).unwrap(), Tick::Ignored);
        assert_eq!(state.get_countdown().unwrap().remaining_seconds(), 900);

        // Only one ticker is decrementing
        sleep(Duration::from_millis(3_500)).await;
        assert_eq!(state.get_countdown().unwrap().remaining_seconds(), 897);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_clears_state_and_display() {
        let state = test_state();
        let generation_before = state.current_generation();
        state.start(find("30m").unwrap()).unwrap();
        sleep(Duration::from_millis(1_500)).await;

        state.stop().unwrap();
        let countdown = state.get_countdown().unwrap();
        assert_eq!(countdown.active_interval(), None);
        assert_eq!(countdown.remaining_seconds(), 0);
        assert!(state.get_display().is_cleared());
        assert_eq!(state.get_last_action().0.as_deref(), Some("stop"));

        sleep(Duration::from_secs(5)).await;
        assert_eq!(state.get_countdown().unwrap(), Countdown::new());
        assert!(state.current_generation() > generation_before + 1);
    }

    #[tokio::test(start_paused = true)]
    async fn tick_while_stopped_is_a_no_op() {
        let state = test_state();
        let mut alerts = state.alert_tx.subscribe();

        let generation = state.current_generation();
        assert_eq!(state.tick(generation).unwrap(), Tick::Ignored);
        assert_eq!(state.get_countdown().unwrap(), Countdown::new());
        assert!(state.get_display().is_cleared());
        assert!(matches!(alerts.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test]
    async fn test_alert_leaves_countdown_alone() {
        let state = test_state();
        let mut alerts = state.alert_tx.subscribe();

        state.trigger_test_alert();

        let alert = alerts.try_recv().unwrap();
        assert_eq!(alert.origin, AlertOrigin::Test);
        assert_eq!(alert.message(), "Time to take a break or move around!");
        assert_eq!(state.get_countdown().unwrap(), Countdown::new());
        assert_eq!(state.completed_cycles(), 0);
    }

    #[tokio::test]
    async fn quit_request_wakes_a_later_waiter() {
        let state = test_state();
        state.request_quit();
        tokio::time::timeout(Duration::from_secs(1), state.quit.notified())
            .await
            .unwrap();
    }
}
