//! Human-readable rendering of durations and relative times (Chinese).

use chrono::{DateTime, Duration, TimeZone};

use crate::clock::Clock;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Render the magnitude of `d` in the coarsest unit that fits.
///
/// | span            | output            |
/// |-----------------|-------------------|
/// | under a minute  | `45秒`            |
/// | under an hour   | `1分钟`           |
/// | under a day     | `1小时` / `1小时1分钟` |
/// | otherwise       | `1天` / `1天1小时`   |
///
/// Lower units are truncated, never rounded. A negative span renders as its
/// absolute value.
///
/// ```
/// use chrono::Duration;
/// use time_utils::humanize::format_duration;
///
/// assert_eq!(format_duration(Duration::seconds(90)), "1分钟");
/// assert_eq!(format_duration(Duration::seconds(3661)), "1小时1分钟");
/// assert_eq!(format_duration(Duration::seconds(90000)), "1天1小时");
/// ```
pub fn format_duration(d: Duration) -> String {
    let secs = d.num_seconds().saturating_abs();

    if secs < MINUTE {
        return format!("{secs}秒");
    }
    if secs < HOUR {
        return format!("{}分钟", secs / MINUTE);
    }
    if secs < DAY {
        let hours = secs / HOUR;
        let minutes = (secs % HOUR) / MINUTE;
        return if minutes > 0 {
            format!("{hours}小时{minutes}分钟")
        } else {
            format!("{hours}小时")
        };
    }
    let days = secs / DAY;
    let hours = (secs % DAY) / HOUR;
    if hours > 0 {
        format!("{days}天{hours}小时")
    } else {
        format!("{days}天")
    }
}

/// Describe `t` relative to the clock's current instant.
///
/// Buckets are exclusive upper bounds checked from the smallest up; the
/// first match wins. Months are 30 days and years 365 days.
///
/// | distance   | past        | future      |
/// |------------|-------------|-------------|
/// | < 1 min    | `刚刚`      | `马上`      |
/// | < 1 hour   | `N分钟前`   | `N分钟后`   |
/// | < 1 day    | `N小时前`   | `N小时后`   |
/// | < 2 days   | `1天前`     | `1天后`     |
/// | < 7 days   | `N天前`     | `N天后`     |
/// | < 30 days  | `N周前`     | `N周后`     |
/// | < 365 days | `N个月前`   | `N个月后`   |
/// | otherwise  | `N年前`     | `N年后`     |
///
/// An instant exactly equal to "now" counts as future.
pub fn relative_time<Tz: TimeZone>(t: &DateTime<Tz>, clock: &impl Clock) -> String {
    let delta = t.naive_utc() - clock.now().naive_utc();
    let secs = delta.num_seconds();

    if delta < Duration::zero() {
        let secs = secs.saturating_abs();
        match bucket(secs) {
            Bucket::Moment => "刚刚".to_string(),
            Bucket::Units(n, unit) => format!("{n}{unit}前"),
        }
    } else {
        match bucket(secs) {
            Bucket::Moment => "马上".to_string(),
            Bucket::Units(n, unit) => format!("{n}{unit}后"),
        }
    }
}

enum Bucket {
    Moment,
    Units(i64, &'static str),
}

fn bucket(secs: i64) -> Bucket {
    match secs {
        s if s < MINUTE => Bucket::Moment,
        s if s < HOUR => Bucket::Units(s / MINUTE, "分钟"),
        s if s < DAY => Bucket::Units(s / HOUR, "小时"),
        // The "yesterday" / "tomorrow" bucket.
        s if s < 2 * DAY => Bucket::Units(1, "天"),
        s if s < WEEK => Bucket::Units(s / DAY, "天"),
        s if s < MONTH => Bucket::Units(s / WEEK, "周"),
        s if s < YEAR => Bucket::Units(s / MONTH, "个月"),
        s => Bucket::Units(s / YEAR, "年"),
    }
}
