// Date utility functions
// Week arithmetic on a fixed-offset wall clock

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveTime};

/// Sunday-based day index (Sunday=0 ... Saturday=6).
pub fn day_of_week(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Move `date` to the given weekday of the same Sunday-to-Saturday week.
///
/// The shift is `day - day_of_week(date)`, so it lies in [-6, 6].
pub fn shift_to_weekday(date: NaiveDate, day: u8) -> NaiveDate {
    let shift = i64::from(day) - i64::from(day_of_week(date));
    date + Duration::days(shift)
}

/// Pin a wall-clock date and time to `offset`.
pub fn at_offset(date: NaiveDate, time: NaiveTime, offset: FixedOffset) -> DateTime<FixedOffset> {
    let local = date.and_time(time);
    let utc = local - Duration::seconds(i64::from(offset.local_minus_utc()));
    DateTime::from_naive_utc_and_offset(utc, offset)
}
