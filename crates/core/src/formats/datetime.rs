//! Korean date and time formats for unix timestamps.
//!
//! - datetime: `2021년 01월 01일 9시 05분 00초`
//! - date: `2021년 01월 01일`
//! - time: `9시 05분 00초`
//!
//! Month, day, minute and second are zero-padded to two digits; the hour is
//! 24-hour without padding. The time zone is always passed in explicitly;
//! the `*_local` helpers use the host's local zone.

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike, Utc};

use crate::error::FormatError;
use crate::format::{Format, FormatInfo};
use crate::types::{FormatOptions, TimeZoneSetting};

pub struct DateTimeFormat;
pub struct DateFormat;
pub struct TimeFormat;

#[derive(Debug, Clone, Copy)]
enum Pattern {
    DateTime,
    Date,
    Time,
}

fn to_zoned<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> Result<DateTime<Tz>, FormatError> {
    DateTime::from_timestamp(timestamp, 0)
        .map(|utc| utc.with_timezone(tz))
        .ok_or(FormatError::TimestampOutOfRange(timestamp))
}

/// Full year, zero-padded to at least four digits (`0999`, `-0044`).
fn year_field(year: i32) -> String {
    if year < 0 {
        format!("-{:04}", year.unsigned_abs())
    } else {
        format!("{:04}", year)
    }
}

fn render<Tz: TimeZone>(dt: &DateTime<Tz>, pattern: Pattern) -> String {
    let date = || {
        format!(
            "{}년 {:02}월 {:02}일",
            year_field(dt.year()),
            dt.month(),
            dt.day()
        )
    };
    let time = || format!("{}시 {:02}분 {:02}초", dt.hour(), dt.minute(), dt.second());

    match pattern {
        Pattern::DateTime => format!("{} {}", date(), time()),
        Pattern::Date => date(),
        Pattern::Time => time(),
    }
}

fn render_in(
    timestamp: i64,
    timezone: &TimeZoneSetting,
    pattern: Pattern,
) -> Result<String, FormatError> {
    tracing::trace!(timestamp, %timezone, ?pattern, "rendering timestamp");
    match timezone {
        TimeZoneSetting::Local => Ok(render(&to_zoned(timestamp, &Local)?, pattern)),
        TimeZoneSetting::Utc => Ok(render(&to_zoned(timestamp, &Utc)?, pattern)),
        TimeZoneSetting::Fixed(offset) => Ok(render(&to_zoned(timestamp, offset)?, pattern)),
    }
}

/// Format a unix timestamp as `Y년 m월 d일 G시 i분 s초` in `tz`.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use korstr_core::format_datetime;
///
/// assert_eq!(
///     format_datetime(0, &Utc).unwrap(),
///     "1970년 01월 01일 0시 00분 00초"
/// );
/// ```
pub fn format_datetime<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> Result<String, FormatError> {
    Ok(render(&to_zoned(timestamp, tz)?, Pattern::DateTime))
}

/// Format a unix timestamp as `Y년 m월 d일` in `tz`.
pub fn format_date<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> Result<String, FormatError> {
    Ok(render(&to_zoned(timestamp, tz)?, Pattern::Date))
}

/// Format a unix timestamp as `G시 i분 s초` in `tz`.
pub fn format_time<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> Result<String, FormatError> {
    Ok(render(&to_zoned(timestamp, tz)?, Pattern::Time))
}

/// [`format_datetime`] in the host's local time zone.
pub fn format_datetime_local(timestamp: i64) -> Result<String, FormatError> {
    format_datetime(timestamp, &Local)
}

/// [`format_date`] in the host's local time zone.
pub fn format_date_local(timestamp: i64) -> Result<String, FormatError> {
    format_date(timestamp, &Local)
}

/// [`format_time`] in the host's local time zone.
pub fn format_time_local(timestamp: i64) -> Result<String, FormatError> {
    format_time(timestamp, &Local)
}

fn to_timestamp(format: &'static str, value: i128) -> Result<i64, FormatError> {
    i64::try_from(value).map_err(|_| FormatError::OutOfRange { format, value })
}

impl Format for DateTimeFormat {
    fn id(&self) -> &'static str {
        "datetime"
    }

    fn name(&self) -> &'static str {
        "Korean date and time"
    }

    fn info(&self) -> FormatInfo {
        FormatInfo {
            id: self.id(),
            name: self.name(),
            category: "Time",
            description: "Unix timestamp as 년 월 일 시 분 초",
            examples: &[("1609459200", "2021년 01월 01일 0시 00분 00초 (UTC)")],
        }
    }

    fn format(&self, value: i128, options: &FormatOptions) -> Result<String, FormatError> {
        let timestamp = to_timestamp(self.id(), value)?;
        render_in(timestamp, &options.timezone, Pattern::DateTime)
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["dt"]
    }
}

impl Format for DateFormat {
    fn id(&self) -> &'static str {
        "date"
    }

    fn name(&self) -> &'static str {
        "Korean date"
    }

    fn info(&self) -> FormatInfo {
        FormatInfo {
            id: self.id(),
            name: self.name(),
            category: "Time",
            description: "Unix timestamp as 년 월 일",
            examples: &[("1609459200", "2021년 01월 01일 (UTC)")],
        }
    }

    fn format(&self, value: i128, options: &FormatOptions) -> Result<String, FormatError> {
        let timestamp = to_timestamp(self.id(), value)?;
        render_in(timestamp, &options.timezone, Pattern::Date)
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["d"]
    }
}

impl Format for TimeFormat {
    fn id(&self) -> &'static str {
        "time"
    }

    fn name(&self) -> &'static str {
        "Korean time of day"
    }

    fn info(&self) -> FormatInfo {
        FormatInfo {
            id: self.id(),
            name: self.name(),
            category: "Time",
            description: "Unix timestamp as 시 분 초 (24-hour)",
            examples: &[("1700000000", "22시 13분 20초 (UTC)")],
        }
    }

    fn format(&self, value: i128, options: &FormatOptions) -> Result<String, FormatError> {
        let timestamp = to_timestamp(self.id(), value)?;
        render_in(timestamp, &options.timezone, Pattern::Time)
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["t"]
    }
}
