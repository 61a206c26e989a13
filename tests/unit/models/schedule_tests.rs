// Unit tests for weekly schedule validation
// Table-driven checks of the day/time parsing and construction rules

use test_case::test_case;
use weekly_countdown::models::schedule::{
    parse_weekday, weekday_name, ScheduleError, WeeklySchedule, WeeklyTime,
};

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("sunday", 0; "sunday is zero")]
    #[test_case("Monday", 1; "monday")]
    #[test_case("TUESDAY", 2; "upper case")]
    #[test_case("Wed", 3; "abbreviation")]
    #[test_case("thursday", 4; "thursday")]
    #[test_case(" friday ", 5; "surrounding whitespace")]
    #[test_case("sat", 6; "saturday abbreviation")]
    fn test_parse_weekday(name: &str, expected: u8) {
        assert_eq!(parse_weekday(name), Ok(expected));
    }

    #[test]
    fn test_weekday_names_round_trip() {
        for day in 0..7u8 {
            let name = weekday_name(day).unwrap();
            assert_eq!(parse_weekday(name), Ok(day), "{name} should parse back to {day}");
        }
        assert_eq!(weekday_name(7), None);
    }

    #[test_case(0, 0; "first minute of the week")]
    #[test_case(6, 1439; "last minute of the week")]
    #[test_case(4, 19 * 60; "thursday evening")]
    fn test_valid_weekly_times(day: u8, minute: u16) {
        let time = WeeklyTime::new(day, minute).unwrap();
        assert_eq!(time.day(), day);
        assert_eq!(time.minute_of_day(), minute);
    }

    #[test_case(7, 0, ScheduleError::InvalidDay(7); "day seven")]
    #[test_case(255, 0, ScheduleError::InvalidDay(255); "day overflow")]
    #[test_case(0, 1440, ScheduleError::InvalidMinute(1440); "minute past midnight")]
    fn test_invalid_weekly_times(day: u8, minute: u16, expected: ScheduleError) {
        assert_eq!(WeeklyTime::new(day, minute), Err(expected));
    }

    #[test_case("thursday 19:00", "Thursday 19:00"; "full name")]
    #[test_case("thu 7:05", "Thursday 07:05"; "short name and hour")]
    #[test_case("  Sunday   00:00 ", "Sunday 00:00"; "extra spacing")]
    fn test_weekly_time_parse_display(input: &str, expected: &str) {
        assert_eq!(WeeklyTime::parse(input).unwrap().to_string(), expected);
    }

    #[test_case("thursday +7:00"; "plus sign on hour")]
    #[test_case("thursday 19:+5"; "plus sign on minute")]
    #[test_case("thursday 19: 00"; "split clock")]
    #[test_case("thursday 1a:00"; "letter in hour")]
    #[test_case("thursday ١٩:00"; "non ascii digits")]
    fn test_weekly_time_parse_requires_ascii_digits(input: &str) {
        assert_eq!(
            WeeklyTime::parse(input),
            Err(ScheduleError::MalformedTime(input.to_string()))
        );
    }

    #[test_case(4, 19 * 60, 4, 20 * 60, true; "one hour window")]
    #[test_case(4, 19 * 60, 4, 19 * 60, true; "zero length window")]
    #[test_case(5, 17 * 60, 6, 60, true; "overnight within week")]
    #[test_case(6, 22 * 60, 0, 60, false; "wraps past saturday")]
    #[test_case(4, 20 * 60, 4, 19 * 60, false; "end before start same day")]
    fn test_schedule_ordering(sd: u8, sm: u16, ed: u8, em: u16, valid: bool) {
        let schedule = WeeklySchedule::from_parts(sd, sm, ed, em, -300);
        assert_eq!(schedule.is_ok(), valid);
    }

    #[test_case(-720; "utc minus twelve")]
    #[test_case(0; "utc")]
    #[test_case(840; "utc plus fourteen")]
    fn test_schedule_accepts_real_offsets(offset: i32) {
        let schedule = WeeklySchedule::from_parts(4, 19 * 60, 4, 20 * 60, offset).unwrap();
        assert_eq!(schedule.utc_offset().local_minus_utc(), offset * 60);
    }

    #[test]
    fn test_schedule_error_messages() {
        let err = WeeklySchedule::from_parts(6, 22 * 60, 0, 60, 0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "window end (Sunday 01:00) precedes window start (Saturday 22:00) within the week"
        );
        assert_eq!(
            ScheduleError::InvalidDay(9).to_string(),
            "day 9 is out of range (expected 0-6, Sunday=0)"
        );
    }
}
