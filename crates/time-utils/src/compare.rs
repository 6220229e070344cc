//! Comparison predicates and differences between instants.
//!
//! The `is_today` family takes a [`Clock`] and looks at "now" through the
//! target instant's own timezone, so a `DateTime<chrono_tz::Tz>` is compared
//! against that zone's calendar date, not the host's.

use chrono::{DateTime, Datelike, TimeZone, Weekday};

use crate::arith::add_days;
use crate::clock::Clock;

/// Whether `a` and `b` fall on the same calendar date, each read on its own
/// wall clock.
pub fn is_same_day<A: TimeZone, B: TimeZone>(a: &DateTime<A>, b: &DateTime<B>) -> bool {
    a.date_naive() == b.date_naive()
}

/// Whether `a` and `b` fall in the same ISO week (ISO year and week number),
/// so Monday 2024-12-30 and Wednesday 2025-01-01 share week 2025-W01.
pub fn is_same_week<A: TimeZone, B: TimeZone>(a: &DateTime<A>, b: &DateTime<B>) -> bool {
    a.iso_week() == b.iso_week()
}

pub fn is_same_month<A: TimeZone, B: TimeZone>(a: &DateTime<A>, b: &DateTime<B>) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

pub fn is_today<Tz: TimeZone>(t: &DateTime<Tz>, clock: &impl Clock) -> bool {
    is_same_day(t, &now_in(t, clock))
}

pub fn is_yesterday<Tz: TimeZone>(t: &DateTime<Tz>, clock: &impl Clock) -> bool {
    is_same_day(t, &add_days(&now_in(t, clock), -1))
}

pub fn is_tomorrow<Tz: TimeZone>(t: &DateTime<Tz>, clock: &impl Clock) -> bool {
    is_same_day(t, &add_days(&now_in(t, clock), 1))
}

/// Saturday or Sunday.
pub fn is_weekend<Tz: TimeZone>(t: &DateTime<Tz>) -> bool {
    matches!(t.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Strictly before.
pub fn is_before<A: TimeZone, B: TimeZone>(a: &DateTime<A>, b: &DateTime<B>) -> bool {
    a < b
}

/// Strictly after.
pub fn is_after<A: TimeZone, B: TimeZone>(a: &DateTime<A>, b: &DateTime<B>) -> bool {
    a > b
}

/// Whether `t` lies in `[start, end]`, inclusive on both ends.
pub fn is_between<Tz: TimeZone>(t: &DateTime<Tz>, start: &DateTime<Tz>, end: &DateTime<Tz>) -> bool {
    start <= t && t <= end
}

/// Signed number of calendar days from `from` to `to`, ignoring time of day.
///
/// Dates are read on each instant's own wall clock, so a 23-hour DST day
/// still counts as one day.
pub fn days_between<A: TimeZone, B: TimeZone>(from: &DateTime<A>, to: &DateTime<B>) -> i64 {
    (to.date_naive() - from.date_naive()).num_days()
}

/// Signed elapsed hours from `from` to `to`, with fractional part.
pub fn hours_between<A: TimeZone, B: TimeZone>(from: &DateTime<A>, to: &DateTime<B>) -> f64 {
    seconds_between(from, to) / 3600.0
}

/// Signed elapsed minutes from `from` to `to`, with fractional part.
pub fn minutes_between<A: TimeZone, B: TimeZone>(from: &DateTime<A>, to: &DateTime<B>) -> f64 {
    seconds_between(from, to) / 60.0
}

/// Signed elapsed seconds from `from` to `to`, with fractional part.
pub fn seconds_between<A: TimeZone, B: TimeZone>(from: &DateTime<A>, to: &DateTime<B>) -> f64 {
    let delta = to.naive_utc() - from.naive_utc();
    delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / 1e9
}

/// Age in whole years on the clock's current date.
///
/// A birthday that has not yet come round this year subtracts one; someone
/// born on Feb 29 turns a year older on Mar 1 in common years.
pub fn age<Tz: TimeZone>(birthday: &DateTime<Tz>, clock: &impl Clock) -> i32 {
    let today = now_in(birthday, clock).date_naive();
    let born = birthday.date_naive();
    let mut years = today.year() - born.year();
    if (today.month(), today.day()) < (born.month(), born.day()) {
        years -= 1;
    }
    years
}

fn now_in<Tz: TimeZone>(t: &DateTime<Tz>, clock: &impl Clock) -> DateTime<Tz> {
    clock.now().with_timezone(&t.timezone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{Duration, Utc};
    use chrono_tz::Tz;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    fn clock() -> FixedClock {
        // Friday
        FixedClock::new(utc(2024, 3, 15, 12, 0, 0))
    }

    #[test]
    fn test_same_day() {
        assert!(is_same_day(&utc(2024, 3, 15, 0, 0, 0), &utc(2024, 3, 15, 23, 59, 59)));
        assert!(!is_same_day(&utc(2024, 3, 15, 23, 59, 59), &utc(2024, 3, 16, 0, 0, 0)));
    }

    #[test]
    fn test_same_day_reads_each_wall_clock() {
        let tz: Tz = "Asia/Tokyo".parse().unwrap();
        let tokyo = tz.with_ymd_and_hms(2024, 3, 16, 1, 0, 0).unwrap();
        // Same instant as 2024-03-15 16:00 UTC, but a different wall-clock date.
        assert!(!is_same_day(&tokyo, &utc(2024, 3, 15, 16, 0, 0)));
        assert!(is_same_day(&tokyo, &utc(2024, 3, 16, 0, 0, 0)));
    }

    #[test]
    fn test_same_week_across_year_boundary() {
        // Monday 2024-12-30 and Wednesday 2025-01-01 are both in 2025-W01.
        assert!(is_same_week(&utc(2024, 12, 30, 0, 0, 0), &utc(2025, 1, 1, 0, 0, 0)));
        // Sunday 2024-12-29 is still 2024-W52.
        assert!(!is_same_week(&utc(2024, 12, 29, 0, 0, 0), &utc(2024, 12, 30, 0, 0, 0)));
    }

    #[test]
    fn test_same_week_ignores_same_number_different_year() {
        assert!(!is_same_week(&utc(2023, 3, 15, 0, 0, 0), &utc(2024, 3, 13, 0, 0, 0)));
    }

    #[test]
    fn test_same_month() {
        assert!(is_same_month(&utc(2024, 3, 1, 0, 0, 0), &utc(2024, 3, 31, 0, 0, 0)));
        assert!(!is_same_month(&utc(2023, 3, 1, 0, 0, 0), &utc(2024, 3, 1, 0, 0, 0)));
    }

    #[test]
    fn test_today_yesterday_tomorrow() {
        let clock = clock();
        assert!(is_today(&utc(2024, 3, 15, 0, 0, 0), &clock));
        assert!(!is_today(&utc(2024, 3, 16, 0, 0, 0), &clock));
        assert!(is_yesterday(&utc(2024, 3, 14, 23, 0, 0), &clock));
        assert!(is_tomorrow(&utc(2024, 3, 16, 1, 0, 0), &clock));
        assert!(!is_tomorrow(&utc(2024, 3, 17, 1, 0, 0), &clock));
    }

    #[test]
    fn test_today_uses_target_zone() {
        // 2024-03-15 12:00 UTC is already 2024-03-16 in Auckland (UTC+13).
        let tz: Tz = "Pacific/Auckland".parse().unwrap();
        let t = tz.with_ymd_and_hms(2024, 3, 16, 8, 0, 0).unwrap();
        assert!(is_today(&t, &clock()));
    }

    #[test]
    fn test_weekend() {
        assert!(is_weekend(&utc(2024, 3, 16, 0, 0, 0)));
        assert!(is_weekend(&utc(2024, 3, 17, 0, 0, 0)));
        assert!(!is_weekend(&utc(2024, 3, 15, 0, 0, 0)));
    }

    #[test]
    fn test_before_after_strict() {
        let a = utc(2024, 3, 15, 0, 0, 0);
        let b = a + Duration::nanoseconds(1);
        assert!(is_before(&a, &b));
        assert!(is_after(&b, &a));
        assert!(!is_before(&a, &a));
        assert!(!is_after(&a, &a));
    }

    #[test]
    fn test_between_inclusive() {
        let start = utc(2024, 3, 1, 0, 0, 0);
        let end = utc(2024, 3, 31, 0, 0, 0);
        assert!(is_between(&start, &start, &end));
        assert!(is_between(&end, &start, &end));
        assert!(is_between(&utc(2024, 3, 15, 0, 0, 0), &start, &end));
        assert!(!is_between(&utc(2024, 4, 1, 0, 0, 0), &start, &end));
    }

    #[test]
    fn test_days_between_ignores_time_of_day() {
        let a = utc(2024, 3, 1, 23, 0, 0);
        let b = utc(2024, 3, 3, 1, 0, 0);
        assert_eq!(days_between(&a, &b), 2);
        assert_eq!(days_between(&b, &a), -2);
    }

    #[test]
    fn test_fractional_differences() {
        let a = utc(2024, 3, 1, 0, 0, 0);
        let b = utc(2024, 3, 1, 1, 30, 0);
        assert_eq!(hours_between(&a, &b), 1.5);
        assert_eq!(minutes_between(&a, &b), 90.0);
        assert_eq!(seconds_between(&b, &a), -5400.0);
    }

    #[test]
    fn test_age() {
        let clock = clock();
        assert_eq!(age(&utc(1990, 3, 15, 0, 0, 0), &clock), 34);
        assert_eq!(age(&utc(1990, 3, 16, 0, 0, 0), &clock), 33);
        assert_eq!(age(&utc(1990, 1, 1, 0, 0, 0), &clock), 34);
    }

    #[test]
    fn test_age_leap_day_birthday() {
        let clock = FixedClock::new(utc(2023, 2, 28, 12, 0, 0));
        assert_eq!(age(&utc(2000, 2, 29, 0, 0, 0), &clock), 22);
        let clock = FixedClock::new(utc(2023, 3, 1, 12, 0, 0));
        assert_eq!(age(&utc(2000, 2, 29, 0, 0, 0), &clock), 23);
    }
}
