use chrono::{DateTime, Utc};

use super::models::Remaining;
use super::occurrence::next_occurrence;
use crate::models::schedule::WeeklySchedule;

/// Time from `now` until the next start of `schedule`.
pub fn remaining_until(schedule: &WeeklySchedule, now: DateTime<Utc>) -> Remaining {
    let local = schedule.localize(now);
    let target = next_occurrence(schedule.start(), local);
    Remaining::from_duration(target - local)
}

/// Render a days/hours/minutes triple as text, e.g. `"2 days, 1 hour, 33 minutes"`.
///
/// Zero units are left out, so an all-zero triple yields an empty string.
pub fn format_remaining(days: u32, hours: u32, minutes: u32) -> String {
    [(days, "day"), (hours, "hour"), (minutes, "minute")]
        .into_iter()
        .filter(|(value, _)| *value != 0)
        .map(|(value, unit)| match value {
            1 => format!("1 {unit}"),
            n => format!("{n} {unit}s"),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
