//! Day-by-day range enumeration.

use std::iter::FusedIterator;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone};

use crate::period::localize;

/// Iterator over the start of each calendar day from one date to another,
/// both ends inclusive.
///
/// The range is finite and `Clone`; clone it before iterating to replay the
/// sequence.
#[derive(Debug, Clone)]
pub struct DayRange<Tz: TimeZone> {
    tz: Tz,
    next: Option<NaiveDate>,
    last: NaiveDate,
}

impl<Tz: TimeZone> Iterator for DayRange<Tz> {
    type Item = DateTime<Tz>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.filter(|date| *date <= self.last)?;
        self.next = current.succ_opt();
        Some(localize(&self.tz, current.and_time(NaiveTime::MIN)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next {
            Some(date) if date <= self.last => (self.last - date).num_days() as usize + 1,
            _ => 0,
        };
        (remaining, Some(remaining))
    }
}

impl<Tz: TimeZone> ExactSizeIterator for DayRange<Tz> {}

impl<Tz: TimeZone> FusedIterator for DayRange<Tz> {}

/// Lazily enumerate the start of every day from `start`'s date to `end`'s
/// date, inclusive, in `start`'s timezone. Empty when `end`'s day is before
/// `start`'s.
pub fn days<Tz: TimeZone>(start: &DateTime<Tz>, end: &DateTime<Tz>) -> DayRange<Tz> {
    let tz = start.timezone();
    let first = start.date_naive();
    let last = end.with_timezone(&tz).date_naive();
    DayRange {
        tz,
        next: Some(first),
        last,
    }
}

/// Eagerly collect [`days`] into a `Vec`.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use time_utils::range::date_range;
///
/// let start = Utc.with_ymd_and_hms(2024, 1, 1, 15, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2024, 1, 3, 8, 0, 0).unwrap();
/// let dates = date_range(&start, &end);
/// assert_eq!(dates.len(), 3);
/// assert_eq!(dates[0], Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
/// assert_eq!(dates[2], Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap());
/// ```
pub fn date_range<Tz: TimeZone>(start: &DateTime<Tz>, end: &DateTime<Tz>) -> Vec<DateTime<Tz>> {
    days(start, end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Timelike, Utc};
    use chrono_tz::Tz;

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_three_day_range() {
        let dates = date_range(&utc(2024, 1, 1, 0), &utc(2024, 1, 3, 0));
        assert_eq!(
            dates,
            vec![utc(2024, 1, 1, 0), utc(2024, 1, 2, 0), utc(2024, 1, 3, 0)]
        );
    }

    #[test]
    fn test_endpoints_are_normalized() {
        let dates = date_range(&utc(2024, 1, 1, 23), &utc(2024, 1, 2, 1));
        assert_eq!(dates, vec![utc(2024, 1, 1, 0), utc(2024, 1, 2, 0)]);
    }

    #[test]
    fn test_same_day_yields_one() {
        let dates = date_range(&utc(2024, 5, 5, 8), &utc(2024, 5, 5, 20));
        assert_eq!(dates, vec![utc(2024, 5, 5, 0)]);
    }

    #[test]
    fn test_reversed_range_is_empty() {
        assert!(date_range(&utc(2024, 1, 3, 0), &utc(2024, 1, 1, 0)).is_empty());
        assert_eq!(days(&utc(2024, 1, 3, 0), &utc(2024, 1, 2, 23)).len(), 0);
    }

    #[test]
    fn test_range_crosses_month_and_leap_day() {
        let dates = date_range(&utc(2024, 2, 28, 0), &utc(2024, 3, 1, 0));
        assert_eq!(dates.len(), 3);
        assert_eq!(dates[1], utc(2024, 2, 29, 0));
    }

    #[test]
    fn test_range_is_replayable_by_clone() {
        let range = days(&utc(2024, 1, 1, 0), &utc(2024, 1, 10, 0));
        assert_eq!(range.len(), 10);
        let first_pass: Vec<_> = range.clone().collect();
        let second_pass: Vec<_> = range.collect();
        assert_eq!(first_pass, second_pass);
    }

    #[test]
    fn test_range_across_dst_stays_at_midnight() {
        let tz: Tz = "Europe/Berlin".parse().unwrap();
        let start = tz.with_ymd_and_hms(2024, 3, 30, 12, 0, 0).unwrap();
        let end = tz.with_ymd_and_hms(2024, 4, 1, 12, 0, 0).unwrap();
        let dates = date_range(&start, &end);
        assert_eq!(dates.len(), 3);
        assert!(dates.iter().all(|d| d.hour() == 0 && d.minute() == 0));
    }
}
