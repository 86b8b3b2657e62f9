//! Error types.

/// Errors raised when an input falls outside a format's domain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// Number or period was negative.
    #[error("{format} does not accept negative values: {value}")]
    Negative { format: &'static str, value: i128 },

    /// Value does not fit the integer type the format works with.
    #[error("{format} value out of range: {value}")]
    OutOfRange { format: &'static str, value: i128 },

    /// Timestamp cannot be represented as a calendar date.
    #[error("timestamp out of range: {0}")]
    TimestampOutOfRange(i64),

    #[error("unknown format: {0}")]
    UnknownFormat(String),

    #[error("invalid time zone '{0}' (expected local, utc or an offset like +09:00)")]
    InvalidTimeZone(String),
}
