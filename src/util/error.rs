//! Unified error types for StayScout.
//!
//! All fallible operations throughout the codebase return `Result<T, StayScoutError>`.
//! This ensures consistent error reporting and clean propagation via the `?` operator.
//!
//! Errors only arise at the coercion boundary, where stringly query values
//! are turned back into typed filter fields. Callers stay lenient: they log
//! a warning and fall back to the field default.

/// Unified error type used throughout StayScout.
///
/// Each variant captures enough context to produce an actionable message for
/// log output.
#[derive(Debug, thiserror::Error)]
pub enum StayScoutError {
    /// A date string in a query mapping could not be parsed as an ISO-8601
    /// calendar date.
    #[error("invalid date '{input}': {source}")]
    DateParse {
        /// The raw value as it appeared in the query mapping.
        input: String,
        /// The underlying chrono parse failure.
        #[source]
        source: chrono::format::ParseError,
    },

    /// A numeric filter value (price bound, star rating) could not be parsed.
    #[error("invalid {field} value '{value}'")]
    NumberParse {
        /// Which filter field the value belonged to.
        field: &'static str,
        /// The raw value as it appeared in the query mapping.
        value: String,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StayScoutError>;

/// Build a [`StayScoutError::NumberParse`] for the given field and raw value.
pub fn number_err(field: &'static str, value: impl Into<String>) -> StayScoutError {
    StayScoutError::NumberParse {
        field,
        value: value.into(),
    }
}
