//! Formatting and parsing with named or custom layouts.
//!
//! Named layouts are the closed [`Layout`] set; anything else is a strftime
//! pattern string passed to [`format_custom`] / [`parse_custom`].
//!
//! Parsing interprets wall-clock text in a target timezone: the host's local
//! zone for [`parse`], [`parse_time`], [`parse_date`] and [`parse_custom`],
//! or an explicit zone for the `*_in` variants. Text that carries its own
//! offset (ISO 8601, or a custom pattern with `%z`) is parsed as that exact
//! instant and then expressed in the target zone.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use chrono::format::{Item, StrftimeItems};
use chrono::{
    DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone,
};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TimeError};
use crate::period::localize;

/// A named text layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// `2006-01-02 15:04:05`
    #[default]
    #[serde(rename = "datetime")]
    DateTime,
    /// `2006-01-02`
    Date,
    /// `15:04:05`
    Time,
    /// `2006年01月02日 15:04:05`
    #[serde(rename = "datetime-cn")]
    DateTimeCn,
    /// `2006年01月02日`
    DateCn,
    /// `2006-01-02T15:04:05+08:00`, or `Z` for UTC
    Iso8601,
    /// `Mon Jan 02 15:04:05 MST 2006`
    Unix,
}

impl Layout {
    pub const ALL: [Layout; 7] = [
        Layout::DateTime,
        Layout::Date,
        Layout::Time,
        Layout::DateTimeCn,
        Layout::DateCn,
        Layout::Iso8601,
        Layout::Unix,
    ];

    /// The strftime pattern this layout renders with.
    pub fn pattern(self) -> &'static str {
        match self {
            Layout::DateTime => "%Y-%m-%d %H:%M:%S",
            Layout::Date => "%Y-%m-%d",
            Layout::Time => "%H:%M:%S",
            Layout::DateTimeCn => "%Y年%m月%d日 %H:%M:%S",
            Layout::DateCn => "%Y年%m月%d日",
            Layout::Iso8601 => "%Y-%m-%dT%H:%M:%S%:z",
            Layout::Unix => "%a %b %d %H:%M:%S %Z %Y",
        }
    }

    /// The kebab-case name used on the command line and in config files.
    pub fn name(self) -> &'static str {
        match self {
            Layout::DateTime => "datetime",
            Layout::Date => "date",
            Layout::Time => "time",
            Layout::DateTimeCn => "datetime-cn",
            Layout::DateCn => "date-cn",
            Layout::Iso8601 => "iso8601",
            Layout::Unix => "unix",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Layout {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self> {
        Layout::ALL
            .into_iter()
            .find(|layout| layout.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TimeError::InvalidLayout(s.to_string()))
    }
}

// ── Formatting ──────────────────────────────────────────────────────────────

/// Render `t` with a named layout.
pub fn format<Tz: TimeZone>(t: &DateTime<Tz>, layout: Layout) -> String
where
    Tz::Offset: fmt::Display,
{
    match layout {
        Layout::Iso8601 => t.to_rfc3339_opts(SecondsFormat::Secs, true),
        other => t.format(other.pattern()).to_string(),
    }
}

/// Render `t` as `YYYY-MM-DD HH:MM:SS`.
pub fn format_time<Tz: TimeZone>(t: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    format(t, Layout::DateTime)
}

/// Render `t` as `YYYY-MM-DD`.
pub fn format_date<Tz: TimeZone>(t: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    format(t, Layout::Date)
}

/// Render `t` with a strftime pattern.
///
/// # Errors
///
/// Returns [`TimeError::InvalidLayout`] if `pattern` contains an unknown
/// specifier, or uses one the value cannot supply.
pub fn format_custom<Tz: TimeZone>(t: &DateTime<Tz>, pattern: &str) -> Result<String>
where
    Tz::Offset: fmt::Display,
{
    let items = compile(pattern)?;
    let mut out = String::new();
    write!(out, "{}", t.format_with_items(items.iter()))
        .map_err(|_| TimeError::InvalidLayout(pattern.to_string()))?;
    Ok(out)
}

// ── Parsing ─────────────────────────────────────────────────────────────────

/// Parse `s` with a named layout in the local timezone.
///
/// # Errors
///
/// Returns [`TimeError::Parse`] if `s` does not match the layout.
pub fn parse(s: &str, layout: Layout) -> Result<DateTime<Local>> {
    parse_in(s, layout, &Local)
}

/// Parse `YYYY-MM-DD HH:MM:SS` in the local timezone.
pub fn parse_time(s: &str) -> Result<DateTime<Local>> {
    parse(s, Layout::DateTime)
}

/// Parse `YYYY-MM-DD` as local midnight.
pub fn parse_date(s: &str) -> Result<DateTime<Local>> {
    parse(s, Layout::Date)
}

/// Parse `s` with a strftime pattern in the local timezone.
///
/// # Errors
///
/// Returns [`TimeError::InvalidLayout`] for a malformed pattern and
/// [`TimeError::Parse`] if `s` does not match it.
pub fn parse_custom(s: &str, pattern: &str) -> Result<DateTime<Local>> {
    parse_custom_in(s, pattern, &Local)
}

/// Parse `s` with a named layout in the timezone `tz`.
///
/// # Errors
///
/// Returns [`TimeError::Parse`] if `s` does not match the layout.
pub fn parse_in<Tz: TimeZone>(s: &str, layout: Layout, tz: &Tz) -> Result<DateTime<Tz>> {
    match layout {
        Layout::Iso8601 => DateTime::parse_from_rfc3339(s.trim())
            .map(|dt| dt.with_timezone(tz))
            .map_err(|e| parse_error(s, layout.name(), e)),
        // chrono cannot parse zone abbreviations, so drop the `MST` field and
        // read the wall clock in `tz`.
        Layout::Unix => {
            let fields: Vec<&str> = s.split_whitespace().collect();
            if fields.len() != 6 {
                return Err(TimeError::Parse {
                    input: s.to_string(),
                    layout: layout.name().to_string(),
                    reason: format!("expected 6 fields, found {}", fields.len()),
                });
            }
            let without_zone = [&fields[..4], &fields[5..]].concat().join(" ");
            let naive = NaiveDateTime::parse_from_str(&without_zone, "%a %b %d %H:%M:%S %Y")
                .map_err(|e| parse_error(s, layout.name(), e))?;
            Ok(localize(tz, naive))
        }
        other => parse_wall_clock(s, other.pattern(), tz).map_err(|e| parse_error(s, other.name(), e)),
    }
}

/// Parse `s` with a strftime pattern in the timezone `tz`.
///
/// # Errors
///
/// Returns [`TimeError::InvalidLayout`] for a malformed pattern and
/// [`TimeError::Parse`] if `s` does not match it.
pub fn parse_custom_in<Tz: TimeZone>(s: &str, pattern: &str, tz: &Tz) -> Result<DateTime<Tz>> {
    compile(pattern)?;
    if let Ok(dt) = DateTime::<FixedOffset>::parse_from_str(s, pattern) {
        return Ok(dt.with_timezone(tz));
    }
    parse_wall_clock(s, pattern, tz).map_err(|e| parse_error(s, pattern, e))
}

// ── Internal helpers ────────────────────────────────────────────────────────

/// Parse `s` as a wall-clock time. Date-only patterns give midnight and
/// time-only patterns give that time on 0000-01-01.
fn parse_wall_clock<Tz: TimeZone>(
    s: &str,
    pattern: &str,
    tz: &Tz,
) -> std::result::Result<DateTime<Tz>, chrono::ParseError> {
    let naive = match NaiveDateTime::parse_from_str(s, pattern) {
        Ok(naive) => naive,
        Err(full_err) => NaiveDate::parse_from_str(s, pattern)
            .map(|date| date.and_time(NaiveTime::MIN))
            .or_else(|_| {
                NaiveTime::parse_from_str(s, pattern)
                    .map(|time| year_zero().and_time(time))
            })
            .map_err(|_| full_err)?,
    };
    Ok(localize(tz, naive))
}

/// Validate a strftime pattern up front so a bad specifier surfaces as
/// [`TimeError::InvalidLayout`] instead of a formatting panic.
fn compile(pattern: &str) -> Result<Vec<Item<'_>>> {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(TimeError::InvalidLayout(pattern.to_string()));
    }
    Ok(items)
}

fn parse_error(input: &str, layout: &str, err: impl fmt::Display) -> TimeError {
    TimeError::Parse {
        input: input.to_string(),
        layout: layout.to_string(),
        reason: err.to_string(),
    }
}

/// 0000-01-01, the date attached to time-only layouts.
fn year_zero() -> NaiveDate {
    NaiveDate::from_ymd_opt(0, 1, 1).unwrap_or(NaiveDate::MIN)
}
