//! # time-utils
//!
//! Calendar convenience functions over `chrono` instants.
//!
//! Every function takes and returns immutable values: an instant is a
//! `chrono::DateTime<Tz>` for any timezone, a span is a `chrono::Duration`.
//! Anything that depends on "now" takes a [`Clock`], and timezone lookup by
//! name goes through a [`TimezoneResolver`], so both can be replaced with
//! fixtures in tests.
//!
//! ## Modules
//!
//! - [`clock`] — current-time accessors and epoch-count conversions
//! - [`layout`] — named and custom layouts for formatting and parsing
//! - [`period`] — start/end of day, week, month, quarter, year; leap years
//! - [`compare`] — same-day/week/month, today/yesterday/tomorrow, between
//! - [`arith`] — add days, months, years, hours, minutes, seconds
//! - [`humanize`] — `1小时1分钟`, `3分钟前`
//! - [`range`] — day-by-day enumeration between two instants
//! - [`zone`] — timezone lookup and conversion
//! - [`error`] — Error types

pub mod arith;
pub mod clock;
pub mod compare;
pub mod error;
pub mod humanize;
pub mod layout;
pub mod period;
pub mod range;
pub mod zone;

pub use arith::{add_days, add_hours, add_minutes, add_months, add_seconds, add_years};
pub use clock::{from_unix, from_unix_millis, from_unix_nanos, Clock, FixedClock, SystemClock};
pub use compare::{
    age, days_between, hours_between, is_after, is_before, is_between, is_same_day, is_same_month,
    is_same_week, is_today, is_tomorrow, is_weekend, is_yesterday, minutes_between,
    seconds_between,
};
pub use error::TimeError;
pub use humanize::{format_duration, relative_time};
pub use layout::{
    format, format_custom, format_date, format_time, parse, parse_custom, parse_custom_in,
    parse_date, parse_in, parse_time, Layout,
};
pub use period::{
    days_in_month, days_in_year, end_of_day, end_of_month, end_of_quarter, end_of_week,
    end_of_year, is_leap_year, quarter, start_of_day, start_of_month, start_of_quarter,
    start_of_week, start_of_year, weekday_name, WeekdayStyle,
};
pub use range::{date_range, days, DayRange};
pub use zone::{set_timezone, to_local, to_utc, IanaResolver, StaticResolver, TimezoneResolver};
