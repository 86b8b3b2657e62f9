//! Built-in format implementations.

mod datetime;
mod number;
mod period;

pub use datetime::{
    format_date, format_date_local, format_datetime, format_datetime_local, format_time,
    format_time_local, DateFormat, DateTimeFormat, TimeFormat,
};
pub use number::{format_number, NumberFormat};
pub use period::{format_period, format_period_duration, PeriodFormat};

use crate::error::FormatError;

/// Join rendered segments with a single space or nothing.
pub(crate) fn join_segments(segments: &[String], use_space: bool) -> String {
    segments.join(if use_space { " " } else { "" })
}

/// Narrow a registry input to the unsigned domain of a count-like format.
pub(crate) fn to_unsigned(format: &'static str, value: i128) -> Result<u64, FormatError> {
    if value < 0 {
        return Err(FormatError::Negative { format, value });
    }
    u64::try_from(value).map_err(|_| FormatError::OutOfRange { format, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_unsigned_bounds() {
        assert_eq!(to_unsigned("number", 0), Ok(0));
        assert_eq!(to_unsigned("number", u64::MAX as i128), Ok(u64::MAX));
        assert_eq!(
            to_unsigned("number", -1),
            Err(FormatError::Negative {
                format: "number",
                value: -1
            })
        );
        assert_eq!(
            to_unsigned("period", u64::MAX as i128 + 1),
            Err(FormatError::OutOfRange {
                format: "period",
                value: u64::MAX as i128 + 1
            })
        );
    }

    #[test]
    fn test_join_segments() {
        let parts = vec!["1만".to_string(), "2345".to_string()];
        assert_eq!(join_segments(&parts, true), "1만 2345");
        assert_eq!(join_segments(&parts, false), "1만2345");
        assert_eq!(join_segments(&[], true), "");
    }
}
