// Schedule module
// Recurring weekly time windows pinned to a fixed UTC offset

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveTime, Utc, Weekday};
use thiserror::Error;

pub const MINUTES_PER_DAY: u16 = 24 * 60;
pub const DAYS_PER_WEEK: u8 = 7;

/// Default reference offset (US Eastern standard time, UTC-05:00).
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = -5 * 60;

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Validation failures raised while building a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("day {0} is out of range (expected 0-6, Sunday=0)")]
    InvalidDay(u8),
    #[error("minute of day {0} is out of range (expected 0-1439)")]
    InvalidMinute(u16),
    #[error("UTC offset of {0} minutes is out of range")]
    InvalidOffset(i32),
    #[error("unknown weekday name {0:?}")]
    UnknownWeekday(String),
    #[error("malformed weekly time {0:?} (expected \"<day> HH:MM\")")]
    MalformedTime(String),
    #[error("window end ({end}) precedes window start ({start}) within the week")]
    EndBeforeStart { start: WeeklyTime, end: WeeklyTime },
}

/// Parse an English weekday name into its Sunday-based index.
///
/// Accepts full names and three-letter abbreviations, ignoring case and
/// surrounding whitespace.
pub fn parse_weekday(name: &str) -> Result<u8, ScheduleError> {
    let needle = name.trim().to_lowercase();
    DAY_NAMES
        .iter()
        .position(|day| {
            let day = day.to_lowercase();
            day == needle || (needle.len() == 3 && day.starts_with(&needle))
        })
        .map(|index| index as u8)
        .ok_or_else(|| ScheduleError::UnknownWeekday(name.trim().to_string()))
}

/// Display name for a Sunday-based day index.
pub fn weekday_name(day: u8) -> Option<&'static str> {
    DAY_NAMES.get(day as usize).copied()
}

/// A day-of-week plus minute-of-day, e.g. "Thursday 19:00".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeeklyTime {
    day: u8,
    minute_of_day: u16,
}

impl WeeklyTime {
    /// Create a weekly time from a Sunday-based day (0-6) and minutes since midnight.
    pub fn new(day: u8, minute_of_day: u16) -> Result<Self, ScheduleError> {
        if day >= DAYS_PER_WEEK {
            return Err(ScheduleError::InvalidDay(day));
        }
        if minute_of_day >= MINUTES_PER_DAY {
            return Err(ScheduleError::InvalidMinute(minute_of_day));
        }
        Ok(Self { day, minute_of_day })
    }

    /// Convenience constructor from an hour/minute pair.
    pub fn from_hm(day: u8, hour: u8, minute: u8) -> Result<Self, ScheduleError> {
        if minute >= 60 {
            return Err(ScheduleError::InvalidMinute(u16::from(hour) * 60 + u16::from(minute)));
        }
        Self::new(day, u16::from(hour) * 60 + u16::from(minute))
    }

    /// Parse `"<day> HH:MM"`, e.g. `"thursday 19:00"` or `"Thu 7:30"`.
    pub fn parse(value: &str) -> Result<Self, ScheduleError> {
        let malformed = || ScheduleError::MalformedTime(value.to_string());

        let mut parts = value.split_whitespace();
        let (Some(day), Some(clock), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed());
        };
        let day = parse_weekday(day)?;

        let (hour, minute) = clock.split_once(':').ok_or_else(malformed)?;
        // `u8::from_str` alone would let "+7" through
        let is_number = |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit());
        if !is_number(hour) || !is_number(minute) {
            return Err(malformed());
        }
        let hour: u8 = hour.parse().map_err(|_| malformed())?;
        let minute: u8 = minute.parse().map_err(|_| malformed())?;
        if hour >= 24 {
            return Err(ScheduleError::InvalidMinute(u16::from(hour) * 60 + u16::from(minute)));
        }
        Self::from_hm(day, hour, minute)
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn minute_of_day(&self) -> u16 {
        self.minute_of_day
    }

    pub fn hour(&self) -> u32 {
        u32::from(self.minute_of_day / 60)
    }

    pub fn minute(&self) -> u32 {
        u32::from(self.minute_of_day % 60)
    }

    pub fn weekday(&self) -> Weekday {
        match self.day {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }

    /// Time of day with seconds and sub-seconds zeroed.
    pub fn time_of_day(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour(), self.minute(), 0).unwrap_or_default()
    }

    /// Minutes since Sunday 00:00.
    pub fn minute_of_week(&self) -> u32 {
        u32::from(self.day) * u32::from(MINUTES_PER_DAY) + u32::from(self.minute_of_day)
    }
}

impl fmt::Display for WeeklyTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = weekday_name(self.day).unwrap_or("?");
        write!(f, "{} {:02}:{:02}", name, self.hour(), self.minute())
    }
}

impl FromStr for WeeklyTime {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A weekly window between two weekly times, both read in `utc_offset`.
///
/// The window must fall within a single Sunday-to-Saturday week: an end that
/// precedes the start is rejected instead of wrapping around the weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklySchedule {
    start: WeeklyTime,
    end: WeeklyTime,
    utc_offset: FixedOffset,
}

impl WeeklySchedule {
    pub fn new(
        start: WeeklyTime,
        end: WeeklyTime,
        utc_offset: FixedOffset,
    ) -> Result<Self, ScheduleError> {
        if end.minute_of_week() < start.minute_of_week() {
            return Err(ScheduleError::EndBeforeStart { start, end });
        }
        Ok(Self {
            start,
            end,
            utc_offset,
        })
    }

    /// Build a schedule from raw numbers, validating each of them.
    ///
    /// # Examples
    /// ```
    /// use weekly_countdown::models::schedule::WeeklySchedule;
    ///
    /// // Thursday 19:00 - 20:00, UTC-05:00
    /// let schedule = WeeklySchedule::from_parts(4, 19 * 60, 4, 20 * 60, -300).unwrap();
    /// assert_eq!(schedule.start().to_string(), "Thursday 19:00");
    /// ```
    pub fn from_parts(
        start_day: u8,
        start_minute_of_day: u16,
        end_day: u8,
        end_minute_of_day: u16,
        utc_offset_minutes: i32,
    ) -> Result<Self, ScheduleError> {
        let start = WeeklyTime::new(start_day, start_minute_of_day)?;
        let end = WeeklyTime::new(end_day, end_minute_of_day)?;
        Self::new(start, end, offset_from_minutes(utc_offset_minutes)?)
    }

    pub fn start(&self) -> WeeklyTime {
        self.start
    }

    pub fn end(&self) -> WeeklyTime {
        self.end
    }

    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset
    }

    /// View an instant on this schedule's wall clock.
    pub fn localize(&self, now: DateTime<Utc>) -> DateTime<FixedOffset> {
        now.with_timezone(&self.utc_offset)
    }
}

impl fmt::Display for WeeklySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} (UTC{})", self.start, self.end, self.utc_offset)
    }
}

/// Convert a signed minute count (east of UTC positive) into a `FixedOffset`.
pub fn offset_from_minutes(minutes: i32) -> Result<FixedOffset, ScheduleError> {
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or(ScheduleError::InvalidOffset(minutes))
}
