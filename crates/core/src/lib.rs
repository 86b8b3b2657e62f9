//! KorStr Core
//!
//! Formats numbers, unix timestamps and durations as Korean text.
//!
//! # Quick Start
//!
//! ```
//! use chrono::Utc;
//! use korstr_core::{format_datetime, format_number, format_period};
//!
//! assert_eq!(format_number(120034005678, None, true), "1200억 3400만 5678");
//! assert_eq!(format_number(500, Some("원"), false), "500원");
//! assert_eq!(format_period(90061, true), "1일 1시간 1분 1초");
//! assert_eq!(
//!     format_datetime(1609459200, &Utc).unwrap(),
//!     "2021년 01월 01일 0시 00분 00초"
//! );
//! ```
//!
//! # Formatting by Name
//!
//! ```
//! use korstr_core::{FormatOptions, KorStr, TimeZoneSetting};
//!
//! let korstr = KorStr::with_options(FormatOptions {
//!     timezone: TimeZoneSetting::kst(),
//!     ..FormatOptions::default()
//! });
//!
//! let result = korstr.format("dt", 0).unwrap();
//! assert_eq!(result.format, "datetime");
//! assert_eq!(result.display, "1970년 01월 01일 9시 00분 00초");
//! ```

pub mod error;
pub mod format;
pub mod formats;
pub mod types;

pub use error::FormatError;
pub use format::{Format, FormatInfo};
pub use formats::{
    format_date, format_date_local, format_datetime, format_datetime_local, format_number,
    format_period, format_period_duration, format_time, format_time_local,
};
pub use types::*;

use formats::{DateFormat, DateTimeFormat, NumberFormat, PeriodFormat, TimeFormat};

/// Main entry point - a registry of the built-in formats plus the options
/// applied to every call.
pub struct KorStr {
    formats: Vec<Box<dyn Format>>,
    options: FormatOptions,
}

impl KorStr {
    /// Create a registry with all built-in formats and default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(FormatOptions::default())
    }

    /// Create a registry with custom options.
    #[must_use]
    pub fn with_options(options: FormatOptions) -> Self {
        Self {
            formats: Self::create_format_list(),
            options,
        }
    }

    /// Replace the options.
    #[must_use]
    pub fn set_options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    fn create_format_list() -> Vec<Box<dyn Format>> {
        vec![
            Box::new(NumberFormat),
            Box::new(DateTimeFormat),
            Box::new(DateFormat),
            Box::new(TimeFormat),
            Box::new(PeriodFormat),
        ]
    }

    /// Get info about all registered formats.
    #[must_use]
    pub fn format_infos(&self) -> Vec<FormatInfo> {
        self.formats.iter().map(|f| f.info()).collect()
    }

    /// Look up a format by id or alias.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&dyn Format> {
        let name = name.trim().to_ascii_lowercase();
        self.formats
            .iter()
            .find(|f| f.matches_name(&name))
            .map(|f| f.as_ref())
    }

    /// Get all format ids.
    #[must_use]
    pub fn format_ids(&self) -> Vec<&'static str> {
        self.formats.iter().map(|f| f.id()).collect()
    }

    /// Format `value` with the format named `name` (id or alias).
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::UnknownFormat`] if no format matches `name`, or
    /// the format's own error if `value` is outside its domain.
    pub fn format(&self, name: &str, value: i128) -> Result<Formatted, FormatError> {
        let format = self
            .find(name)
            .ok_or_else(|| FormatError::UnknownFormat(name.to_string()))?;

        let text = format.format(value, &self.options)?;
        tracing::debug!(format = format.id(), value = %value, output = %text, "formatted");

        Ok(Formatted {
            format: format.id().to_string(),
            input: value,
            display: text,
        })
    }
}

impl Default for KorStr {
    fn default() -> Self {
        Self::new()
    }
}
