//! Error types for race-time processing.
//!
//! Most of this crate is deliberately infallible: the lenient parser and the
//! formatters map bad input to a default value, and the validators report
//! failures as [`ValidationResult`](crate::validation::ValidationResult)
//! values. `TimeError` covers the remaining fallible surface:
//!
//! - **Strict parsing**: [`parse_time_checked`](crate::time::parse_time_checked)
//!   explains why an input is not a canonical `M:SS.ms` / `SS.ms` time
//! - **Configuration**: loading [`ValidationRules`](crate::validation::ValidationRules)
//!   from YAML
//!
//! ```rust
//! use swimtime::{TimeError, parse_time_checked};
//!
//! let error = parse_time_checked("1:2:3").unwrap_err();
//! assert!(matches!(error, TimeError::MultipleColons { .. }));
//! assert!(error.is_input_error());
//! ```

use thiserror::Error;

/// Result type alias for fallible time operations.
pub type Result<T, E = TimeError> = std::result::Result<T, E>;

/// Main error type for time operations.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    #[error("Time input is empty")]
    Empty,

    #[error("Time input '{input}' contains more than one ':'")]
    MultipleColons { input: String },

    #[error("Time input '{input}' is negative")]
    Negative { input: String },

    #[error("Malformed time input '{input}': {details}")]
    Malformed { input: String, details: String },

    #[error("Time input '{input}' does not evaluate to a finite number")]
    NonFinite { input: String },

    #[error("Configuration error in {context}: {details}")]
    Config { context: String, details: String },
}

impl TimeError {
    /// Returns whether the error was caused by user-entered text, as opposed
    /// to configuration supplied by the application.
    pub fn is_input_error(&self) -> bool {
        match self {
            TimeError::Empty
            | TimeError::MultipleColons { .. }
            | TimeError::Negative { .. }
            | TimeError::Malformed { .. }
            | TimeError::NonFinite { .. } => true,
            TimeError::Config { .. } => false,
        }
    }

    /// Helper constructor for malformed input.
    pub fn malformed(input: impl Into<String>, details: impl Into<String>) -> Self {
        TimeError::Malformed { input: input.into(), details: details.into() }
    }

    /// Helper constructor for configuration errors.
    pub fn config(context: impl Into<String>, details: impl Into<String>) -> Self {
        TimeError::Config { context: context.into(), details: details.into() }
    }
}

impl From<serde_yaml_ng::Error> for TimeError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        TimeError::Config { context: "YAML deserialization".to_string(), details: err.to_string() }
    }
}
