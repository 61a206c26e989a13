use std::fmt;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::remaining::format_remaining;

const MINUTES_PER_HOUR: i64 = 60;
const HOURS_PER_DAY: i64 = 24;

/// Time left until an occurrence, split into whole days, hours and minutes.
///
/// Each unit is taken from the remainder of the next larger one, so
/// `hours < 24` and `minutes < 60` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Remaining {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
}

impl Remaining {
    /// Split a duration into days/hours/minutes, dropping leftover seconds.
    /// Negative durations count as zero.
    pub fn from_duration(duration: Duration) -> Self {
        let total_seconds = duration.num_seconds().max(0);
        let total_minutes = total_seconds / 60;
        let total_hours = total_minutes / MINUTES_PER_HOUR;
        let total_days = total_hours / HOURS_PER_DAY;

        Self {
            days: total_days as u32,
            hours: (total_hours - HOURS_PER_DAY * total_days) as u32,
            minutes: (total_minutes - MINUTES_PER_HOUR * total_hours) as u32,
        }
    }

    pub fn total_minutes(&self) -> i64 {
        (i64::from(self.days) * HOURS_PER_DAY + i64::from(self.hours)) * MINUTES_PER_HOUR
            + i64::from(self.minutes)
    }

    pub fn to_duration(&self) -> Duration {
        Duration::minutes(self.total_minutes())
    }

    pub fn is_zero(&self) -> bool {
        self.total_minutes() == 0
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_remaining(self.days, self.hours, self.minutes))
    }
}

/// Outcome of evaluating a schedule at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownResult {
    is_live: bool,
    remaining: Option<Remaining>,
}

impl CountdownResult {
    pub fn live() -> Self {
        Self {
            is_live: true,
            remaining: None,
        }
    }

    pub fn upcoming(remaining: Remaining) -> Self {
        Self {
            is_live: false,
            remaining: Some(remaining),
        }
    }

    pub fn is_live(&self) -> bool {
        self.is_live
    }

    /// Present only when the event is not live.
    pub fn remaining(&self) -> Option<Remaining> {
        self.remaining
    }

    /// Pre-formatted remaining time, empty while live.
    pub fn fragment(&self) -> String {
        self.remaining
            .map(|remaining| remaining.to_string())
            .unwrap_or_default()
    }
}
