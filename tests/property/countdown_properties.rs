// Property-based tests for weekly countdown calculations
// Checks the occurrence, window and remaining-time laws with random inputs

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use weekly_countdown::models::schedule::{WeeklySchedule, WeeklyTime};
use weekly_countdown::services::countdown::{
    describe, format_remaining, is_within_window, next_occurrence, remaining_until,
    this_week_occurrence,
};

/// Any instant between 2000 and 2100, with sub-second noise.
fn instant() -> impl Strategy<Value = DateTime<Utc>> {
    (946_684_800i64..4_102_444_800i64, 0u32..1_000_000_000u32)
        .prop_map(|(secs, nanos)| Utc.timestamp_opt(secs, nanos).unwrap())
}

fn weekly_time() -> impl Strategy<Value = WeeklyTime> {
    (0u8..7, 0u16..1440).prop_map(|(day, minute)| WeeklyTime::new(day, minute).unwrap())
}

/// Offsets between UTC-12:00 and UTC+14:00 in quarter hours.
fn offset_minutes() -> impl Strategy<Value = i32> {
    (-48i32..=56).prop_map(|quarters| quarters * 15)
}

fn schedule() -> impl Strategy<Value = WeeklySchedule> {
    (weekly_time(), weekly_time(), offset_minutes()).prop_map(|(a, b, offset)| {
        let (start, end) = if a.minute_of_week() <= b.minute_of_week() {
            (a, b)
        } else {
            (b, a)
        };
        WeeklySchedule::from_parts(
            start.day(),
            start.minute_of_day(),
            end.day(),
            end.minute_of_day(),
            offset,
        )
        .unwrap()
    })
}

proptest! {
    /// Property: the next occurrence is never in the past and always within a week
    #[test]
    fn prop_next_occurrence_within_one_week(schedule in schedule(), now in instant()) {
        let local = schedule.localize(now);
        let next = next_occurrence(schedule.start(), local);

        prop_assert!(next >= local);
        prop_assert!(next < local + Duration::days(7));
    }

    /// Property: occurrences land on the scheduled weekday and minute, with zero seconds
    #[test]
    fn prop_next_occurrence_matches_schedule(schedule in schedule(), now in instant()) {
        use chrono::{Datelike, Timelike};

        let next = next_occurrence(schedule.start(), schedule.localize(now));
        prop_assert_eq!(next.weekday(), schedule.start().weekday());
        prop_assert_eq!(next.hour(), schedule.start().hour());
        prop_assert_eq!(next.minute(), schedule.start().minute());
        prop_assert_eq!(next.second(), 0);
        prop_assert_eq!(next.nanosecond(), 0);
    }

    /// Property: a passed occurrence rolls forward by exactly seven days
    #[test]
    fn prop_rollover_is_seven_days(schedule in schedule(), now in instant()) {
        let local = schedule.localize(now);
        let this_week = this_week_occurrence(schedule.start(), local);
        let next = next_occurrence(schedule.start(), local);

        if this_week < local {
            prop_assert_eq!(next, this_week + Duration::days(7));
        } else {
            prop_assert_eq!(next, this_week);
        }
    }

    /// Property: describe is pure
    #[test]
    fn prop_describe_is_deterministic(schedule in schedule(), now in instant()) {
        prop_assert_eq!(describe(&schedule, now), describe(&schedule, now));
    }

    /// Property: live results carry no remaining time, upcoming ones always do
    #[test]
    fn prop_live_and_remaining_are_exclusive(schedule in schedule(), now in instant()) {
        let result = describe(&schedule, now);
        prop_assert_eq!(result.is_live(), is_within_window(&schedule, now));
        prop_assert_eq!(result.is_live(), result.remaining().is_none());
    }

    /// Property: remaining units are normalized and rebuild the floored gap
    #[test]
    fn prop_remaining_reconstructs(schedule in schedule(), now in instant()) {
        let remaining = remaining_until(&schedule, now);
        prop_assert!(remaining.hours < 24);
        prop_assert!(remaining.minutes < 60);
        prop_assert!(remaining.days < 7);

        let local = schedule.localize(now);
        let gap = next_occurrence(schedule.start(), local) - local;
        prop_assert_eq!(remaining.total_minutes(), gap.num_seconds() / 60);
        prop_assert_eq!(remaining.to_duration(), Duration::minutes(gap.num_seconds() / 60));
    }

    /// Property: both window endpoints are live, one minute past the end is not
    #[test]
    fn prop_window_boundaries(schedule in schedule(), now in instant()) {
        let local = schedule.localize(now);
        let start = this_week_occurrence(schedule.start(), local).with_timezone(&Utc);
        let end = this_week_occurrence(schedule.end(), local).with_timezone(&Utc);

        prop_assert!(is_within_window(&schedule, start));
        prop_assert!(is_within_window(&schedule, end));

        let after = end + Duration::minutes(1);
        // Unless the minute after the end starts a new week
        if schedule.end().minute_of_week() < 7 * 1440 - 1 {
            prop_assert!(!is_within_window(&schedule, after));
        }
    }

    /// Property: formatted text lists one part per non-zero unit
    #[test]
    fn prop_format_has_one_part_per_unit(days in 0u32..7, hours in 0u32..24, minutes in 0u32..60) {
        let text = format_remaining(days, hours, minutes);
        let expected_parts = [days, hours, minutes].iter().filter(|v| **v != 0).count();

        if expected_parts == 0 {
            prop_assert_eq!(text, "");
        } else {
            prop_assert_eq!(text.split(", ").count(), expected_parts);
        }
    }
}
