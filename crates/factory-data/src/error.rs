//! Error types for the factory-data crate.
//!
//! Generation is bounded random sampling over compiled-in tables, so failures
//! are rare. They surface when a parameter table is malformed or when date
//! arithmetic leaves the representable calendar.

use thiserror::Error;

/// Errors that can occur while sampling a telemetry record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// A sampling range is empty, inverted, or not finite.
    #[error("sampling range for '{field}' is empty or not finite")]
    InvalidRange {
        /// Name of the field whose range is invalid.
        field: &'static str,
    },

    /// An enumerated choice list has no options.
    #[error("no options configured for '{field}'")]
    EmptyChoice {
        /// Name of the field whose option list is empty.
        field: &'static str,
    },

    /// Offsetting the reference instant left the supported calendar range.
    #[error("date arithmetic for '{field}' is out of range")]
    TimestampOutOfRange {
        /// Name of the field whose date could not be derived.
        field: &'static str,
    },
}

/// A site identifier did not match any configured site.
///
/// Only strict parsing reports this; [`crate::SiteRegistry::resolve`] falls
/// back to the default site instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown site identifier '{identifier}'")]
pub struct UnknownSiteError {
    /// The identifier that failed to match.
    pub identifier: String,
}

/// A historical range tag was not one of `1h`, `24h`, or `7d`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown time range '{tag}'")]
pub struct UnknownTimeRangeError {
    /// The tag that failed to match.
    pub tag: String,
}
