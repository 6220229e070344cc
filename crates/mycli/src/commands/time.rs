use std::fmt;
use std::io::Write;

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Duration, Offset, TimeZone};
use chrono_tz::OffsetComponents;
use serde::Serialize;
use time_utils::{
    days, end_of_day, end_of_month, end_of_quarter, end_of_week, end_of_year, format,
    format_custom, format_duration, parse_in, relative_time, set_timezone, start_of_day,
    start_of_month, start_of_quarter, start_of_week, start_of_year, Clock, FixedClock,
    IanaResolver, Layout,
};

use crate::cli::{TimeCommand, Unit};

/// Layouts tried, in order, after the configured one fails to read an input.
const FALLBACK_LAYOUTS: [Layout; 3] = [Layout::Iso8601, Layout::DateTime, Layout::Date];

/// Where and how datetimes are read and printed.
#[derive(Debug, Clone)]
pub struct Settings<Tz> {
    pub tz: Tz,
    pub layout: Layout,
}

/// A datetime expressed in another timezone.
#[derive(Debug, Clone, Serialize)]
pub struct ConvertedDatetime {
    /// The instant in UTC (RFC 3339).
    pub utc: String,
    /// The instant in the target timezone (RFC 3339 with offset).
    pub local: String,
    /// The IANA timezone name used.
    pub timezone: String,
    /// The UTC offset at this instant (e.g., "-05:00").
    pub utc_offset: String,
    /// Whether Daylight Saving Time is active at this instant.
    pub dst_active: bool,
}

/// Run one `mycli time` subcommand, writing its output to `out`.
///
/// # Errors
///
/// Returns an error if an input cannot be read as a datetime, a pattern or
/// timezone name is invalid, or `out` cannot be written.
pub fn run_time<Tz, C, W>(
    cmd: &TimeCommand,
    settings: &Settings<Tz>,
    clock: &C,
    out: &mut W,
) -> Result<()>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
    C: Clock,
    W: Write,
{
    match cmd {
        TimeCommand::Now { layout, unix } => {
            if *unix {
                writeln!(out, "{}", clock.now_unix())?;
            } else {
                let now = clock.now().with_timezone(&settings.tz);
                writeln!(out, "{}", format(&now, layout.unwrap_or(settings.layout)))?;
            }
        }
        TimeCommand::Format {
            datetime,
            layout,
            pattern,
        } => {
            let t = parse_input(datetime, settings)?;
            let text = match pattern {
                Some(pattern) => format_custom(&t, pattern)?,
                None => format(&t, layout.unwrap_or(settings.layout)),
            };
            writeln!(out, "{text}")?;
        }
        TimeCommand::Period { datetime, unit } => {
            let t = parse_input(datetime, settings)?;
            let (start, end) = period(&t, *unit);
            writeln!(out, "{}", format(&start, settings.layout))?;
            writeln!(out, "{}", format(&end, settings.layout))?;
        }
        TimeCommand::Range { start, end } => {
            let start = parse_input(start, settings)?;
            let end = parse_input(end, settings)?;
            for day in days(&start, &end) {
                writeln!(out, "{}", format(&day, Layout::Date))?;
            }
        }
        TimeCommand::Relative { datetime, now } => {
            let t = parse_input(datetime, settings)?;
            let text = match now {
                Some(now) => relative_time(&t, &FixedClock::from(parse_input(now, settings)?)),
                None => relative_time(&t, clock),
            };
            writeln!(out, "{text}")?;
        }
        TimeCommand::Duration { seconds } => {
            let d = Duration::try_seconds(*seconds)
                .ok_or_else(|| anyhow!("{seconds} seconds is out of range"))?;
            writeln!(out, "{}", format_duration(d))?;
        }
        TimeCommand::Convert { datetime, to } => {
            let t = parse_input(datetime, settings)?;
            let converted = convert(&t, to)?;
            writeln!(out, "{}", serde_json::to_string_pretty(&converted)?)?;
        }
    }
    Ok(())
}

/// Read `s` with the configured layout, then with each fallback layout.
fn parse_input<Tz: TimeZone>(s: &str, settings: &Settings<Tz>) -> Result<DateTime<Tz>> {
    parse_in(s, settings.layout, &settings.tz)
        .or_else(|first| {
            FALLBACK_LAYOUTS
                .iter()
                .find_map(|layout| parse_in(s, *layout, &settings.tz).ok())
                .ok_or(first)
        })
        .with_context(|| format!("cannot read '{s}' as a datetime"))
}

fn period<Tz: TimeZone>(t: &DateTime<Tz>, unit: Unit) -> (DateTime<Tz>, DateTime<Tz>) {
    match unit {
        Unit::Day => (start_of_day(t), end_of_day(t)),
        Unit::Week => (start_of_week(t), end_of_week(t)),
        Unit::Month => (start_of_month(t), end_of_month(t)),
        Unit::Quarter => (start_of_quarter(t), end_of_quarter(t)),
        Unit::Year => (start_of_year(t), end_of_year(t)),
    }
}

fn convert<Tz: TimeZone>(t: &DateTime<Tz>, target: &str) -> Result<ConvertedDatetime> {
    let local = set_timezone(t, target, &IanaResolver)?;
    let dst_active = local.offset().dst_offset() != Duration::zero();

    Ok(ConvertedDatetime {
        utc: format(&local.with_timezone(&chrono::Utc), Layout::Iso8601),
        local: format(&local, Layout::Iso8601),
        timezone: target.to_string(),
        utc_offset: format_utc_offset(&local),
        dst_active,
    })
}

fn format_utc_offset<T: TimeZone>(dt: &DateTime<T>) -> String {
    let offset_secs = dt.offset().fix().local_minus_utc();
    let sign = if offset_secs >= 0 { "+" } else { "-" };
    let abs_secs = offset_secs.unsigned_abs();
    format!("{sign}{:02}:{:02}", abs_secs / 3600, (abs_secs % 3600) / 60)
}
