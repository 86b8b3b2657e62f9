//! Format trait definition.

use crate::error::FormatError;
use crate::types::FormatOptions;

/// Metadata about a format for help/documentation.
#[derive(Debug, Clone)]
pub struct FormatInfo {
    /// Unique identifier (e.g., "number")
    pub id: &'static str,
    /// Human-readable name (e.g., "Korean number")
    pub name: &'static str,
    /// Category for grouping in help (e.g., "Numbers", "Time")
    pub category: &'static str,
    /// Short description
    pub description: &'static str,
    /// Example `(input, output)` pairs
    pub examples: &'static [(&'static str, &'static str)],
}

/// A Korean rendering of an integer input.
///
/// Each of the free functions in [`crate::formats`] is also exposed through
/// this trait so callers can pick a format by name at runtime.
pub trait Format: Send + Sync {
    /// Unique identifier for this format (e.g., "number", "period").
    fn id(&self) -> &'static str;

    /// Human-readable name.
    fn name(&self) -> &'static str;

    /// Get format metadata for help/documentation.
    fn info(&self) -> FormatInfo {
        FormatInfo {
            id: self.id(),
            name: self.name(),
            category: "Other",
            description: "",
            examples: &[],
        }
    }

    /// Render `value` as Korean text.
    ///
    /// The value is taken as `i128` so every format can validate its own
    /// domain and report out-of-range input instead of wrapping.
    fn format(&self, value: i128, options: &FormatOptions) -> Result<String, FormatError>;

    /// Short aliases for this format (e.g., "dur" for "period").
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Check if the given name matches this format's id or any alias.
    fn matches_name(&self, name: &str) -> bool {
        self.id() == name || self.aliases().contains(&name)
    }
}
