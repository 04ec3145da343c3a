//! Fixed set of reminder intervals offered in the menu

use serde::Serialize;

/// A named countdown duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interval {
    /// Stable identifier used by the control API and the CLI
    pub id: &'static str,
    /// Human readable menu label
    pub label: &'static str,
    /// Duration of one reminder cycle in seconds
    pub seconds: u64,
}

impl Interval {
    const fn minutes(id: &'static str, label: &'static str, minutes: u64) -> Self {
        Self {
            id,
            label,
            seconds: minutes * 60,
        }
    }
}

/// All intervals, in menu order
pub const INTERVALS: [Interval; 7] = [
    Interval::minutes("15m", "15 min", 15),
    Interval::minutes("30m", "30 min", 30),
    Interval::minutes("45m", "45 min", 45),
    Interval::minutes("1h", "1 hr", 60),
    Interval::minutes("1.5h", "1.5 hr", 90),
    Interval::minutes("2h", "2 hr", 120),
    Interval::minutes("4h", "4 hr", 240),
];

/// Look up an interval by its id
pub fn find(id: &str) -> Option<Interval> {
    INTERVALS.iter().copied().find(|interval| interval.id == id)
}

/// Parser for clap: accepts only known interval ids
pub fn parse_interval(id: &str) -> Result<Interval, String> {
    find(id).ok_or_else(|| {
        let known: Vec<&str> = INTERVALS.iter().map(|i| i.id).collect();
        format!("unknown interval '{}', expected one of: {}", id, known.join(", "))
    })
}
