//! Korean number format.
//!
//! Splits a number into myriad groups labelled with the Korean large-number
//! units:
//! - `12345` → `1만 2345`
//! - `120034005678` → `1200억 3400만 5678`
//! - `500` with unit `원` → `500 원` (or `500원` without spaces)

use crate::error::FormatError;
use crate::format::{Format, FormatInfo};
use crate::types::FormatOptions;

use super::{join_segments, to_unsigned};

pub struct NumberFormat;

/// Myriad units, largest first: 경 = 10^16, 조 = 10^12, 억 = 10^8, 만 = 10^4.
const UNITS: &[(u64, &str)] = &[
    (10_000_000_000_000_000, "경"),
    (1_000_000_000_000, "조"),
    (100_000_000, "억"),
    (10_000, "만"),
];

/// Format a number as Korean myriad groups, e.g. `1200억 3400만 5678`.
///
/// Groups that are zero are skipped. The remainder below 만 is appended
/// without a label, and always when nothing else was emitted so `0` renders
/// as `"0"`. A `unit` is appended as one more segment.
///
/// # Examples
///
/// ```
/// use korstr_core::format_number;
///
/// assert_eq!(format_number(12345, None, true), "1만 2345");
/// assert_eq!(format_number(500, Some("원"), false), "500원");
/// ```
#[must_use]
pub fn format_number(number: u64, unit: Option<&str>, use_space: bool) -> String {
    let mut remaining = number;
    let mut segments = Vec::new();

    for &(divisor, label) in UNITS {
        if remaining >= divisor {
            segments.push(format!("{}{}", remaining / divisor, label));
            remaining %= divisor;
        }
    }

    if segments.is_empty() || remaining > 0 {
        segments.push(remaining.to_string());
    }

    if let Some(unit) = unit {
        segments.push(unit.to_string());
    }

    join_segments(&segments, use_space)
}

impl Format for NumberFormat {
    fn id(&self) -> &'static str {
        "number"
    }

    fn name(&self) -> &'static str {
        "Korean number"
    }

    fn info(&self) -> FormatInfo {
        FormatInfo {
            id: self.id(),
            name: self.name(),
            category: "Numbers",
            description: "Myriad groups with 만/억/조/경 units",
            examples: &[
                ("12345", "1만 2345"),
                ("120034005678", "1200억 3400만 5678"),
            ],
        }
    }

    fn format(&self, value: i128, options: &FormatOptions) -> Result<String, FormatError> {
        let number = to_unsigned(self.id(), value)?;
        Ok(format_number(
            number,
            options.unit.as_deref(),
            options.use_space,
        ))
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["num", "su"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_zero() {
        assert_eq!(format_number(0, None, true), "0");
        assert_eq!(format_number(0, Some("원"), true), "0 원");
    }

    #[test]
    fn test_below_myriad() {
        assert_eq!(format_number(123, None, true), "123");
        assert_eq!(format_number(9999, None, true), "9999");
    }

    #[test]
    fn test_myriad_groups() {
        assert_eq!(format_number(10_000, None, true), "1만");
        assert_eq!(format_number(12_345, None, true), "1만 2345");
        assert_eq!(format_number(120_034_005_678, None, true), "1200억 3400만 5678");
        assert_eq!(format_number(100_000_001, None, true), "1억 1");
    }

    #[test]
    fn test_all_units() {
        assert_eq!(
            format_number(12_3456_7890_1234_5678, None, true),
            "12경 3456조 7890억 1234만 5678"
        );
        assert_eq!(
            format_number(1_0000_0000_0000_0000, None, false),
            "1경"
        );
    }

    #[test]
    fn test_max_value() {
        // 경 is the largest unit, so the leading group is not split further
        assert_eq!(
            format_number(u64::MAX, None, true),
            "1844경 6744조 737억 955만 1615"
        );
    }

    #[test]
    fn test_unit_and_spacing() {
        assert_eq!(format_number(500, Some("원"), true), "500 원");
        assert_eq!(format_number(500, Some("원"), false), "500원");
        assert_eq!(format_number(12_345, Some("개"), false), "1만2345개");
        assert_eq!(format_number(12_345, None, false), "1만2345");
    }

    #[test]
    fn test_format_trait() {
        let format = NumberFormat;
        let options = FormatOptions {
            unit: Some("원".to_string()),
            ..FormatOptions::default()
        };
        assert_eq!(format.format(12_345, &options).unwrap(), "1만 2345 원");
        assert!(matches!(
            format.format(-5, &options),
            Err(FormatError::Negative { value: -5, .. })
        ));
        assert!(format.matches_name("su"));
        assert!(!format.matches_name("period"));
    }
}
