//! Period boundaries and calendar facts.
//!
//! Every `start_of_*` function zeroes the fields below its unit; every
//! `end_of_*` function returns the last nanosecond before the next unit
//! begins. All boundaries are computed on the instant's own wall clock, so a
//! `DateTime<chrono_tz::Tz>` gets the boundaries of *that* zone's calendar.
//!
//! # DST handling
//!
//! A wall-clock time that falls inside a DST gap resolves with the offset in
//! force before the gap; a time inside a DST fold resolves to the earlier of
//! the two instants. This keeps every boundary function total. The `end_*`
//! functions step back one nanosecond from the next unit's start, so they
//! land after the second pass through a fold at the end of a day.

use chrono::{
    DateTime, Datelike, Duration, LocalResult, Month, Months, NaiveDate, NaiveDateTime, NaiveTime,
    Offset, TimeZone,
};

const NANOS_PER_DAY: i64 = 86_400 * 1_000_000_000;

/// How weekday names are rendered by [`weekday_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekdayStyle {
    /// `星期一` … `星期日`
    #[default]
    Long,
    /// `周一` … `周日`
    Short,
}

// ── Boundaries ──────────────────────────────────────────────────────────────

/// Midnight at the start of the day containing `t`.
pub fn start_of_day<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    localize(&t.timezone(), midnight(t.date_naive()))
}

/// `23:59:59.999999999` on the day containing `t`.
pub fn end_of_day<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    end_before_next_day(&t.timezone(), t.date_naive())
}

/// Monday 00:00 of the ISO week containing `t`. Sunday counts as day 7, so
/// a Sunday belongs to the week that started six days earlier.
pub fn start_of_week<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    localize(&t.timezone(), midnight(week_start_date(t.date_naive())))
}

/// Sunday `23:59:59.999999999` of the ISO week containing `t`.
pub fn end_of_week<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    let sunday = week_start_date(t.date_naive()) + Duration::days(6);
    end_before_next_day(&t.timezone(), sunday)
}

/// The first day of `t`'s month at 00:00.
pub fn start_of_month<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    localize(&t.timezone(), midnight(month_start_date(t.date_naive())))
}

/// The last nanosecond of `t`'s month.
pub fn end_of_month<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    end_before_next_day(&t.timezone(), month_end_date(t.date_naive()))
}

/// The 1-based quarter containing `t`: January–March is 1, October–December is 4.
pub fn quarter<Tz: TimeZone>(t: &DateTime<Tz>) -> u32 {
    (t.month() - 1) / 3 + 1
}

/// The first day of `t`'s quarter at 00:00. Always lands on January, April,
/// July or October 1st.
pub fn start_of_quarter<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    localize(&t.timezone(), midnight(quarter_start_date(t.date_naive())))
}

/// The last nanosecond of `t`'s quarter.
pub fn end_of_quarter<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    let last_month = quarter_start_date(t.date_naive()) + Months::new(2);
    end_before_next_day(&t.timezone(), month_end_date(last_month))
}

/// January 1st of `t`'s year at 00:00.
pub fn start_of_year<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    let date = t.date_naive();
    let jan1 = date - Duration::days(i64::from(date.ordinal0()));
    localize(&t.timezone(), midnight(jan1))
}

/// December 31st `23:59:59.999999999` of `t`'s year.
pub fn end_of_year<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
    let date = t.date_naive();
    let remaining = i64::from(days_in_year(date.year())) - i64::from(date.ordinal());
    end_before_next_day(&t.timezone(), date + Duration::days(remaining))
}

// ── Calendar facts ──────────────────────────────────────────────────────────

/// Gregorian leap-year rule: divisible by 4, except centuries not divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` of `year`.
pub fn days_in_month(year: i32, month: Month) -> u32 {
    match month {
        Month::February if is_leap_year(year) => 29,
        Month::February => 28,
        Month::April | Month::June | Month::September | Month::November => 30,
        _ => 31,
    }
}

/// 366 for leap years, 365 otherwise.
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Chinese name of `t`'s weekday.
pub fn weekday_name<Tz: TimeZone>(t: &DateTime<Tz>, style: WeekdayStyle) -> &'static str {
    const LONG: [&str; 7] = ["星期一", "星期二", "星期三", "星期四", "星期五", "星期六", "星期日"];
    const SHORT: [&str; 7] = ["周一", "周二", "周三", "周四", "周五", "周六", "周日"];

    let idx = t.weekday().num_days_from_monday() as usize;
    match style {
        WeekdayStyle::Long => LONG[idx],
        WeekdayStyle::Short => SHORT[idx],
    }
}

// ── Internal helpers ────────────────────────────────────────────────────────

/// Attach `tz` to a wall-clock time, resolving DST gaps and folds.
pub(crate) fn localize<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            // Gaps are at most a few hours wide, so a day earlier is safely before it.
            let before = tz.offset_from_utc_datetime(&(naive - Duration::days(1)));
            let utc = naive - Duration::seconds(i64::from(before.fix().local_minus_utc()));
            tz.from_utc_datetime(&utc)
        }
    }
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn last_nanosecond(date: NaiveDate) -> NaiveDateTime {
    midnight(date) + Duration::nanoseconds(NANOS_PER_DAY - 1)
}

/// One nanosecond before the day after `last_day` starts. Going through the
/// next midnight keeps the result past both passes of a fold at day's end.
fn end_before_next_day<Tz: TimeZone>(tz: &Tz, last_day: NaiveDate) -> DateTime<Tz> {
    match last_day.succ_opt() {
        Some(next) => localize(tz, midnight(next)) - Duration::nanoseconds(1),
        None => localize(tz, last_nanosecond(last_day)),
    }
}

fn week_start_date(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

fn month_start_date(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

fn month_end_date(date: NaiveDate) -> NaiveDate {
    let last = days_in_month(date.year(), month_of(date));
    date + Duration::days(i64::from(last - date.day()))
}

fn quarter_start_date(date: NaiveDate) -> NaiveDate {
    month_start_date(date) - Months::new(date.month0() % 3)
}

fn month_of(date: NaiveDate) -> Month {
    // month() is always 1..=12, so the fallback is never taken.
    Month::try_from(date.month() as u8).unwrap_or(Month::January)
}

// ── Tests ───────────────────────────────────────────────────────────────────
