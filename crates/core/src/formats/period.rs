//! Korean period (duration) format.
//!
//! Converts a number of seconds into week/day/hour/minute/second groups:
//! - `90061` → `1일 1시간 1분 1초`
//! - `694861` → `1주 1일 1시간 1분 1초`
//! - `0` → `0초`

use std::time::Duration;

use crate::error::FormatError;
use crate::format::{Format, FormatInfo};
use crate::types::FormatOptions;

use super::{join_segments, to_unsigned};

pub struct PeriodFormat;

const UNITS: &[(u64, &str)] = &[
    (604_800, "주"),
    (86_400, "일"),
    (3_600, "시간"),
    (60, "분"),
];

/// Format a number of seconds as `1일 12시간 34분 56초`.
///
/// Zero groups are skipped. Leftover seconds are always labelled with `초`
/// and are emitted when nothing else was, so `0` renders as `"0초"`.
///
/// # Examples
///
/// ```
/// use korstr_core::format_period;
///
/// assert_eq!(format_period(90061, true), "1일 1시간 1분 1초");
/// assert_eq!(format_period(3600, false), "1시간");
/// ```
#[must_use]
pub fn format_period(seconds: u64, use_space: bool) -> String {
    let mut remaining = seconds;
    let mut segments = Vec::new();

    for &(divisor, label) in UNITS {
        if remaining >= divisor {
            segments.push(format!("{}{}", remaining / divisor, label));
            remaining %= divisor;
        }
    }

    if segments.is_empty() || remaining > 0 {
        segments.push(format!("{}초", remaining));
    }

    join_segments(&segments, use_space)
}

/// Format the whole seconds of a [`Duration`]; the sub-second part is dropped.
#[must_use]
pub fn format_period_duration(duration: &Duration, use_space: bool) -> String {
    format_period(duration.as_secs(), use_space)
}

impl Format for PeriodFormat {
    fn id(&self) -> &'static str {
        "period"
    }

    fn name(&self) -> &'static str {
        "Korean period"
    }

    fn info(&self) -> FormatInfo {
        FormatInfo {
            id: self.id(),
            name: self.name(),
            category: "Time",
            description: "Seconds as 주/일/시간/분/초",
            examples: &[("90061", "1일 1시간 1분 1초"), ("45", "45초")],
        }
    }

    fn format(&self, value: i128, options: &FormatOptions) -> Result<String, FormatError> {
        let seconds = to_unsigned(self.id(), value)?;
        Ok(format_period(seconds, options.use_space))
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["duration", "dur", "p"]
    }
}
