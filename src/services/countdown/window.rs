use chrono::{DateTime, Utc};

use super::occurrence::this_week_occurrence;
use crate::models::schedule::WeeklySchedule;

/// Whether `now` falls inside this week's occurrence of the window.
///
/// Both endpoints are inclusive and anchored to the week containing `now`;
/// `now` itself is compared with its seconds intact.
pub fn is_within_window(schedule: &WeeklySchedule, now: DateTime<Utc>) -> bool {
    let local = schedule.localize(now);
    let window_start = this_week_occurrence(schedule.start(), local);
    let window_end = this_week_occurrence(schedule.end(), local);

    window_start <= local && local <= window_end
}
