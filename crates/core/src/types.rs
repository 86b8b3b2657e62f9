//! Core types for KorStr.
//!
//! Options passed to every format, the time zone selector used by the
//! datetime formats, and the serializable result of a registry call.

use std::fmt;
use std::str::FromStr;

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::error::FormatError;

const KST_OFFSET_SECONDS: i32 = 9 * 3600;

/// Which clock the datetime formats read calendar fields from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimeZoneSetting {
    /// The host's local time zone.
    #[default]
    Local,
    Utc,
    /// A fixed offset from UTC, e.g. `+09:00` for KST.
    Fixed(FixedOffset),
}

impl TimeZoneSetting {
    /// Korea Standard Time (`+09:00`).
    #[must_use]
    pub fn kst() -> Self {
        FixedOffset::east_opt(KST_OFFSET_SECONDS).map_or(Self::Utc, Self::Fixed)
    }

    /// Parse an offset body like `09:00`, `0900`, `9` (sign already removed).
    fn parse_offset_seconds(body: &str) -> Option<i32> {
        if !body.is_ascii() {
            return None;
        }
        let (hours, minutes) = if let Some((h, m)) = body.split_once(':') {
            (h, m)
        } else {
            match body.len() {
                1 | 2 => (body, "0"),
                4 => body.split_at(2),
                _ => return None,
            }
        };

        let is_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
        if !is_digits(hours) || !is_digits(minutes) {
            return None;
        }
        let hours: i32 = hours.parse().ok()?;
        let minutes: i32 = minutes.parse().ok()?;
        if hours > 23 || minutes > 59 {
            return None;
        }
        Some(hours * 3600 + minutes * 60)
    }
}

impl FromStr for TimeZoneSetting {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "local" => return Ok(Self::Local),
            "utc" | "z" | "gmt" => return Ok(Self::Utc),
            _ => {}
        }

        let invalid = || FormatError::InvalidTimeZone(s.to_string());
        let (sign, body) = if let Some(rest) = trimmed.strip_prefix('+') {
            (1, rest)
        } else if let Some(rest) = trimmed.strip_prefix('-') {
            (-1, rest)
        } else {
            return Err(invalid());
        };

        let seconds = Self::parse_offset_seconds(body).ok_or_else(invalid)?;
        FixedOffset::east_opt(sign * seconds)
            .map(Self::Fixed)
            .ok_or_else(invalid)
    }
}

impl fmt::Display for TimeZoneSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Utc => f.write_str("utc"),
            Self::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

impl TryFrom<String> for TimeZoneSetting {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeZoneSetting> for String {
    fn from(value: TimeZoneSetting) -> Self {
        value.to_string()
    }
}

/// Options shared by all formats.
///
/// Formats ignore options that do not apply to them, e.g. `unit` only
/// affects the number format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Join segments with a single space (`1만 2345`) or nothing (`1만2345`).
    pub use_space: bool,
    /// Trailing unit for numbers, e.g. `원`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub timezone: TimeZoneSetting,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            use_space: true,
            unit: None,
            timezone: TimeZoneSetting::Local,
        }
    }
}

/// Result of formatting a value through [`crate::KorStr`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formatted {
    /// Id of the format that produced the text
    pub format: String,
    pub input: i128,
    pub display: String,
}
