//! Timezone lookup and conversion.
//!
//! Name lookup goes through a [`TimezoneResolver`] so callers can swap the
//! IANA database for a fixed table in tests.

use std::collections::HashMap;

use chrono::{DateTime, Local, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{Result, TimeError};

/// Resolves a timezone name to a zone.
pub trait TimezoneResolver: Send + Sync {
    /// # Errors
    ///
    /// Returns [`TimeError::UnknownTimezone`] if `name` is not known.
    fn resolve(&self, name: &str) -> Result<Tz>;
}

/// Looks names up in the IANA database compiled into `chrono-tz`
/// (e.g. `"Asia/Shanghai"`, `"America/New_York"`, `"UTC"`).
#[derive(Debug, Clone, Copy, Default)]
pub struct IanaResolver;

impl TimezoneResolver for IanaResolver {
    fn resolve(&self, name: &str) -> Result<Tz> {
        name.trim()
            .parse::<Tz>()
            .map_err(|_| TimeError::UnknownTimezone(name.to_string()))
    }
}

/// A fixed name → zone table. Names are matched exactly.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    zones: HashMap<String, Tz>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `zone` under `name`, replacing any earlier entry.
    pub fn with(mut self, name: impl Into<String>, zone: Tz) -> Self {
        self.zones.insert(name.into(), zone);
        self
    }
}

impl TimezoneResolver for StaticResolver {
    fn resolve(&self, name: &str) -> Result<Tz> {
        self.zones
            .get(name)
            .copied()
            .ok_or_else(|| TimeError::UnknownTimezone(name.to_string()))
    }
}

/// Express `t` in the zone called `name`.
///
/// # Errors
///
/// Returns [`TimeError::UnknownTimezone`] if `resolver` does not know `name`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Timelike, Utc};
/// use time_utils::zone::{set_timezone, IanaResolver};
///
/// let t = Utc.with_ymd_and_hms(2026, 3, 15, 14, 0, 0).unwrap();
/// let ny = set_timezone(&t, "America/New_York", &IanaResolver).unwrap();
/// // March 15 2026 is EDT (UTC-4)
/// assert_eq!(ny.hour(), 10);
/// ```
pub fn set_timezone<T: TimeZone>(
    t: &DateTime<T>,
    name: &str,
    resolver: &impl TimezoneResolver,
) -> Result<DateTime<Tz>> {
    let tz = resolver.resolve(name)?;
    Ok(t.with_timezone(&tz))
}

pub fn to_utc<T: TimeZone>(t: &DateTime<T>) -> DateTime<Utc> {
    t.with_timezone(&Utc)
}

pub fn to_local<T: TimeZone>(t: &DateTime<T>) -> DateTime<Local> {
    t.with_timezone(&Local)
}
