//! Occurrence math: where a weekly day/time lands relative to "now".

use chrono::{DateTime, Duration, FixedOffset};

use crate::models::schedule::WeeklyTime;
use crate::utils::date::{at_offset, shift_to_weekday};

/// The occurrence of `at` in the Sunday-to-Saturday week containing `now`.
///
/// The result may be before or after `now`. Seconds are zeroed and the
/// offset of `now` is taken as the reference offset.
pub fn this_week_occurrence(at: WeeklyTime, now: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    let date = shift_to_weekday(now.date_naive(), at.day());
    at_offset(date, at.time_of_day(), *now.offset())
}

/// The next instant at or after `now` matching `at`.
///
/// If this week's occurrence already passed it rolls forward by seven days,
/// so the result always lies in `[now, now + 7 days)`.
pub fn next_occurrence(at: WeeklyTime, now: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    let occurrence = this_week_occurrence(at, now);
    if occurrence < now {
        occurrence + Duration::days(7)
    } else {
        occurrence
    }
}
