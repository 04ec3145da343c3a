//! Countdown state machine driving the reminder cycle

use crate::intervals::Interval;

/// Result of advancing the countdown by one second
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The countdown is stopped; nothing changed
    Ignored,
    /// Still counting down, with the new remaining seconds
    Remaining(u64),
    /// The cycle finished and the countdown was reset to the full interval
    Expired { reset_to: u64 },
}

/// Remaining time and active interval of the reminder countdown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Countdown {
    active_interval: Option<Interval>,
    remaining_seconds: u64,
}

impl Countdown {
    /// Create a stopped countdown
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new cycle for `interval`, discarding any previous one
    pub fn start(&mut self, interval: Interval) {
        self.active_interval = Some(interval);
        self.remaining_seconds = interval.seconds;
    }

    /// Return to the stopped shape
    pub fn stop(&mut self) {
        self.active_interval = None;
        self.remaining_seconds = 0;
    }

    /// Advance by one second.
    ///
    /// Reaching zero expires the cycle and resets to the full interval within
    /// the same tick, so a cycle of `n` seconds takes exactly `n` ticks.
    pub fn tick(&mut self) -> Tick {
        let Some(interval) = self.active_interval else {
            return Tick::Ignored;
        };

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds > 0 {
            return Tick::Remaining(self.remaining_seconds);
        }

        self.remaining_seconds = interval.seconds;
        Tick::Expired {
            reset_to: interval.seconds,
        }
    }

    pub fn is_running(&self) -> bool {
        self.active_interval.is_some()
    }

    pub fn active_interval(&self) -> Option<Interval> {
        self.active_interval
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }
}

/// Format seconds as `H:MM:SS` from one hour upwards, `MM:SS` below
pub fn format_remaining(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let seconds = seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intervals::{find, INTERVALS};

    #[test]
    fn formats_minutes_and_hours() {
        assert_eq!(format_remaining(0), "00:00");
        assert_eq!(format_remaining(1), "00:01");
        assert_eq!(format_remaining(59), "00:59");
        assert_eq!(format_remaining(60), "01:00");
        assert_eq!(format_remaining(3599), "59:59");
        assert_eq!(format_remaining(3600), "1:00:00");
        assert_eq!(format_remaining(5400), "1:30:00");
        assert_eq!(format_remaining(14_399), "3:59:59");
    }

    #[test]
    fn starts_stopped() {
        let countdown = Countdown::new();
        assert!(!countdown.is_running());
        assert_eq!(countdown.active_interval(), None);
        assert_eq!(countdown.remaining_seconds(), 0);
    }

    #[test]
    fn tick_while_stopped_changes_nothing() {
        let mut countdown = Countdown::new();
        assert_eq!(countdown.tick(), Tick::Ignored);
        assert_eq!(countdown, Countdown::new());

        countdown.start(INTERVALS[0]);
        countdown.tick();
        countdown.stop();
        assert_eq!(countdown.tick(), Tick::Ignored);
        assert_eq!(countdown, Countdown::new());
    }

    #[test]
    fn one_full_cycle_expires_exactly_once_for_every_interval() {
        for interval in INTERVALS {
            let mut countdown = Countdown::new();
            countdown.start(interval);

            let expirations = (0..interval.seconds)
                .map(|_| countdown.tick())
                .filter(|tick| matches!(tick, Tick::Expired { .. }))
                .count();

            assert_eq!(expirations, 1, "interval {}", interval.id);
            assert_eq!(countdown.remaining_seconds(), interval.seconds);
            assert_eq!(countdown.active_interval(), Some(interval));
        }
    }

    #[test]
    fn fifteen_minute_scenario() {
        let interval = find("15m").unwrap();
        let mut countdown = Countdown::new();
        countdown.start(interval);

        for _ in 0..899 {
            assert!(matches!(countdown.tick(), Tick::Remaining(_)));
        }
        assert_eq!(countdown.remaining_seconds(), 1);
        assert_eq!(format_remaining(countdown.remaining_seconds()), "00:01");

        assert_eq!(countdown.tick(), Tick::Expired { reset_to: 900 });
        assert_eq!(countdown.remaining_seconds(), 900);

        // The cycle repeats on its own
        assert_eq!(countdown.tick(), Tick::Remaining(899));
    }

    #[test]
    fn stop_at_any_point_returns_to_stopped() {
        let interval = find("30m").unwrap();
        for ticks in [0, 1, 1799, 1800, 2500] {
            let mut countdown = Countdown::new();
            countdown.start(interval);
            for _ in 0..ticks {
                countdown.tick();
            }
            countdown.stop();
            assert_eq!(countdown.active_interval(), None);
            assert_eq!(countdown.remaining_seconds(), 0);
        }
    }

    #[test]
    fn restarting_replaces_the_cycle() {
        let mut countdown = Countdown::new();
        countdown.start(find("1h").unwrap());
        countdown.tick();
        countdown.start(find("45m").unwrap());
        assert_eq!(countdown.active_interval(), find("45m"));
        assert_eq!(countdown.remaining_seconds(), 2700);
    }
}
