//! Clock capability and epoch-count conversions.
//!
//! Every function that depends on "now" takes a [`Clock`] instead of reading
//! the system clock directly, so callers can substitute a [`FixedClock`] and
//! get deterministic results.

use chrono::{DateTime, Local, Utc};

use crate::error::{Result, TimeError};
use crate::period::start_of_day;

/// A source of the current instant.
pub trait Clock: Send + Sync {
    /// The current instant in UTC.
    fn now(&self) -> DateTime<Utc>;

    /// The current instant in the host's local timezone.
    fn now_local(&self) -> DateTime<Local> {
        self.now().with_timezone(&Local)
    }

    /// Seconds since the Unix epoch.
    fn now_unix(&self) -> i64 {
        self.now().timestamp()
    }

    /// Milliseconds since the Unix epoch.
    fn now_unix_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }

    /// Nanoseconds since the Unix epoch, or `None` outside the years
    /// 1677–2262 where the count no longer fits in an `i64`.
    fn now_unix_nanos(&self) -> Option<i64> {
        self.now().timestamp_nanos_opt()
    }

    /// Local midnight at the start of the current day.
    fn today(&self) -> DateTime<Local> {
        start_of_day(&self.now_local())
    }

    /// Local midnight at the start of the previous day.
    fn yesterday(&self) -> DateTime<Local> {
        start_of_day(&crate::arith::add_days(&self.now_local(), -1))
    }

    /// Local midnight at the start of the next day.
    fn tomorrow(&self) -> DateTime<Local> {
        start_of_day(&crate::arith::add_days(&self.now_local(), 1))
    }
}

/// Reads the operating system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(now)
    }
}

impl<Tz: chrono::TimeZone> From<DateTime<Tz>> for FixedClock {
    fn from(now: DateTime<Tz>) -> Self {
        Self(now.with_timezone(&Utc))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Reconstruct a local instant from whole seconds since the Unix epoch.
///
/// # Errors
///
/// Returns [`TimeError::OutOfRange`] if `secs` lies outside chrono's
/// representable range (roughly ±262,000 years).
pub fn from_unix(secs: i64) -> Result<DateTime<Local>> {
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.with_timezone(&Local))
        .ok_or_else(|| TimeError::OutOfRange(format!("{secs} seconds")))
}

/// Reconstruct a local instant from milliseconds since the Unix epoch.
///
/// # Errors
///
/// Returns [`TimeError::OutOfRange`] if `millis` is not representable.
pub fn from_unix_millis(millis: i64) -> Result<DateTime<Local>> {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.with_timezone(&Local))
        .ok_or_else(|| TimeError::OutOfRange(format!("{millis} milliseconds")))
}

/// Reconstruct a local instant from nanoseconds since the Unix epoch.
///
/// Every `i64` nanosecond count is representable, so this cannot fail.
pub fn from_unix_nanos(nanos: i64) -> DateTime<Local> {
    DateTime::from_timestamp_nanos(nanos).with_timezone(&Local)
}
