use chrono::{DateTime, Utc};

use super::models::CountdownResult;
use super::remaining::remaining_until;
use super::window::is_within_window;
use crate::models::messages::CountdownMessages;
use crate::models::schedule::WeeklySchedule;
use crate::services::clock::Clock;

/// Evaluate `schedule` at `now`.
///
/// Pure: the same schedule and instant always give the same result.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use weekly_countdown::models::schedule::WeeklySchedule;
/// use weekly_countdown::services::countdown::describe;
///
/// let schedule = WeeklySchedule::from_parts(4, 19 * 60, 4, 20 * 60, 0).unwrap();
/// // Monday 2025-01-06 00:00 UTC
/// let now = Utc.with_ymd_and_hms(2025, 1, 6, 0, 0, 0).unwrap();
/// let result = describe(&schedule, now);
/// assert!(!result.is_live());
/// assert_eq!(result.fragment(), "3 days, 19 hours");
/// ```
pub fn describe(schedule: &WeeklySchedule, now: DateTime<Utc>) -> CountdownResult {
    if is_within_window(schedule, now) {
        CountdownResult::live()
    } else {
        CountdownResult::upcoming(remaining_until(schedule, now))
    }
}

/// One named weekly event together with the wording used to display it.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyCountdown {
    name: String,
    schedule: WeeklySchedule,
    messages: CountdownMessages,
}

impl WeeklyCountdown {
    pub fn new(
        name: impl Into<String>,
        schedule: WeeklySchedule,
        messages: CountdownMessages,
    ) -> Self {
        Self {
            name: name.into(),
            schedule,
            messages,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schedule(&self) -> &WeeklySchedule {
        &self.schedule
    }

    pub fn messages(&self) -> &CountdownMessages {
        &self.messages
    }

    /// Read the clock once and evaluate the schedule.
    pub fn evaluate(&self, clock: &dyn Clock) -> CountdownResult {
        let now = clock.now();
        let result = describe(&self.schedule, now);
        log::debug!(
            "Evaluated countdown '{}' at {}: live={} remaining={:?}",
            self.name,
            now,
            result.is_live(),
            result.remaining()
        );
        result
    }

    pub fn render(&self, result: &CountdownResult) -> String {
        self.messages.render(result.is_live(), &result.fragment())
    }
}
