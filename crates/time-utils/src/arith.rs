//! Calendar and clock arithmetic.
//!
//! Day, month and year additions move the wall-clock date and keep the
//! wall-clock time (so `add_days(t, 1)` across a DST change is 23 or 25 hours
//! later). Hour, minute and second additions move the absolute instant.
//!
//! # Month-end policy
//!
//! When a month or year addition lands on a day the target month does not
//! have, the result is **clamped to the last day of that month**:
//! Jan 31 + 1 month is Feb 29 in a leap year and Feb 28 otherwise, and
//! Feb 29 + 1 year is Feb 28.
//!
//! # Panics
//!
//! Like chrono's own `+` operators, these functions panic if the result would
//! fall outside chrono's representable range (about ±262,000 years).

use chrono::{DateTime, Days, Duration, Months, TimeZone};

use crate::period::localize;

/// Add `days` calendar days (negative subtracts).
pub fn add_days<Tz: TimeZone>(t: &DateTime<Tz>, days: i64) -> DateTime<Tz> {
    let naive = t.naive_local();
    let shifted = if days >= 0 {
        naive + Days::new(days.unsigned_abs())
    } else {
        naive - Days::new(days.unsigned_abs())
    };
    localize(&t.timezone(), shifted)
}

/// Add `months` calendar months (negative subtracts), clamping the day.
pub fn add_months<Tz: TimeZone>(t: &DateTime<Tz>, months: i32) -> DateTime<Tz> {
    let naive = t.naive_local();
    let shifted = if months >= 0 {
        naive + Months::new(months.unsigned_abs())
    } else {
        naive - Months::new(months.unsigned_abs())
    };
    localize(&t.timezone(), shifted)
}

/// Add `years` calendar years (negative subtracts), clamping Feb 29.
pub fn add_years<Tz: TimeZone>(t: &DateTime<Tz>, years: i32) -> DateTime<Tz> {
    add_months(t, years.saturating_mul(12))
}

pub fn add_hours<Tz: TimeZone>(t: &DateTime<Tz>, hours: i64) -> DateTime<Tz> {
    t.clone() + Duration::hours(hours)
}

pub fn add_minutes<Tz: TimeZone>(t: &DateTime<Tz>, minutes: i64) -> DateTime<Tz> {
    t.clone() + Duration::minutes(minutes)
}

pub fn add_seconds<Tz: TimeZone>(t: &DateTime<Tz>, seconds: i64) -> DateTime<Tz> {
    t.clone() + Duration::seconds(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike, Utc};
    use chrono_tz::Tz;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn test_add_days_forward_and_back() {
        let t = utc(2024, 2, 28, 10, 0, 0);
        assert_eq!(add_days(&t, 1), utc(2024, 2, 29, 10, 0, 0));
        assert_eq!(add_days(&t, 2), utc(2024, 3, 1, 10, 0, 0));
        assert_eq!(add_days(&t, -28), utc(2024, 1, 31, 10, 0, 0));
    }

    #[test]
    fn test_add_days_keeps_wall_clock_across_dst() {
        // US spring forward on 2024-03-10.
        let tz: Tz = "America/New_York".parse().unwrap();
        let before = tz.with_ymd_and_hms(2024, 3, 9, 9, 0, 0).unwrap();
        let after = add_days(&before, 1);
        assert_eq!(after.hour(), 9);
        assert_eq!((after - before).num_hours(), 23);
    }

    #[test]
    fn test_add_months_clamps_to_month_end() {
        let jan31 = utc(2024, 1, 31, 8, 0, 0);
        assert_eq!(add_months(&jan31, 1), utc(2024, 2, 29, 8, 0, 0));
        assert_eq!(add_months(&utc(2023, 1, 31, 8, 0, 0), 1), utc(2023, 2, 28, 8, 0, 0));
        assert_eq!(add_months(&jan31, 3), utc(2024, 4, 30, 8, 0, 0));
    }

    #[test]
    fn test_add_months_negative() {
        let mar31 = utc(2024, 3, 31, 0, 0, 0);
        assert_eq!(add_months(&mar31, -1), utc(2024, 2, 29, 0, 0, 0));
        assert_eq!(add_months(&mar31, -15), utc(2022, 12, 31, 0, 0, 0));
    }

    #[test]
    fn test_add_months_across_year() {
        assert_eq!(add_months(&utc(2024, 11, 15, 0, 0, 0), 3), utc(2025, 2, 15, 0, 0, 0));
    }

    #[test]
    fn test_add_years_clamps_leap_day() {
        let leap = utc(2024, 2, 29, 12, 0, 0);
        assert_eq!(add_years(&leap, 1), utc(2025, 2, 28, 12, 0, 0));
        assert_eq!(add_years(&leap, 4), utc(2028, 2, 29, 12, 0, 0));
        assert_eq!(add_years(&leap, -1).day(), 28);
    }

    #[test]
    fn test_add_clock_units() {
        let t = utc(2024, 12, 31, 23, 0, 0);
        assert_eq!(add_hours(&t, 2), utc(2025, 1, 1, 1, 0, 0));
        assert_eq!(add_minutes(&t, -90), utc(2024, 12, 31, 21, 30, 0));
        assert_eq!(add_seconds(&t, 3600), utc(2025, 1, 1, 0, 0, 0));
    }

    #[test]
    fn test_add_hours_is_absolute_across_dst() {
        let tz: Tz = "America/New_York".parse().unwrap();
        let before = tz.with_ymd_and_hms(2024, 3, 10, 1, 30, 0).unwrap();
        let after = add_hours(&before, 1);
        // 01:30 EST + 1h = 03:30 EDT (02:30 does not exist)
        assert_eq!(after.hour(), 3);
        assert_eq!(after.minute(), 30);
    }
}
