//! Error types for validation and validator construction
//!
//! Two errors live here:
//!
//! - [`ValidationError`] is the one and only failure a validator reports. It
//!   carries a human readable message. Combinators wrap a child's failure by
//!   prepending their own context, so the final message reads like a trail of
//!   breadcrumbs from the root validator down to the failing leaf.
//! - [`SchemaError`] is returned while *building* a validator, e.g. when a
//!   numeric minimum is bigger than its maximum.
//!
//! # Examples
//!
//! ```
//! use validata::ValidationError;
//!
//! let err = ValidationError::new("42 is not a boolean")
//!     .context("list position [2] ")
//!     .context("required member flags ");
//!
//! assert_eq!(
//!     err.message(),
//!     "required member flags list position [2] 42 is not a boolean"
//! );
//! ```

use serde_json::Value;
use thiserror::Error;

/// A validation failure with a descriptive message.
///
/// There is exactly one kind of validation failure; the message is the only
/// thing that tells failures apart. The single exception is the failure raised
/// by [`Unimplemented`](crate::Unimplemented), which can be recognised through
/// [`ValidationError::is_not_implemented`].
///
/// # Examples
///
/// ```
/// use validata::ValidationError;
///
/// let err = ValidationError::new("is not a string");
/// assert_eq!(err.to_string(), "is not a string");
/// assert!(!err.is_not_implemented());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
    not_implemented: bool,
}

impl ValidationError {
    /// Create a new validation error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        ValidationError {
            message: message.into(),
            not_implemented: false,
        }
    }

    /// Create the error raised by a validator that has no rule.
    ///
    /// ```
    /// use validata::ValidationError;
    ///
    /// let err = ValidationError::not_implemented();
    /// assert!(err.is_not_implemented());
    /// ```
    pub fn not_implemented() -> Self {
        ValidationError {
            message: "validate is not implemented".to_string(),
            not_implemented: true,
        }
    }

    /// Prepend a context prefix to the message.
    ///
    /// The prefix is inserted verbatim, so the caller decides about
    /// separating whitespace.
    ///
    /// ```
    /// use validata::ValidationError;
    ///
    /// let err = ValidationError::new("is not a string").context("[1]");
    /// assert_eq!(err.message(), "[1]is not a string");
    /// ```
    pub fn context(mut self, prefix: impl AsRef<str>) -> Self {
        self.message.insert_str(0, prefix.as_ref());
        self
    }

    /// The full message, including any context added by combinators.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consume the error and return its message.
    pub fn into_message(self) -> String {
        self.message
    }

    /// Whether this error was raised by a validator without a rule.
    pub fn is_not_implemented(&self) -> bool {
        self.not_implemented
    }
}

/// An error raised while configuring a validator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    /// Minimum bound is greater than the maximum bound.
    #[error("min value {min} bigger than max value {max}")]
    InvertedBounds {
        /// Rendered minimum.
        min: String,
        /// Rendered maximum.
        max: String,
    },

    /// A bound does not have the exact numeric kind of the validator.
    #[error("{bound} {value} is not a {expected}")]
    BoundKind {
        /// Which bound was rejected (`"minval"` or `"maxval"`).
        bound: &'static str,
        /// Display name of the expected kind.
        expected: String,
        /// Rendered offending bound.
        value: String,
    },

    /// The regular expression failed to compile.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A dictionary member was registered as both required and optional.
    #[error("member {name} registered as both required and optional")]
    DuplicateField {
        /// The member name.
        name: String,
    },
}

/// Render a candidate for an error message.
///
/// Strings appear without quotes, everything else as compact JSON.
pub(crate) fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_error() {
        let err = ValidationError::new("is not a dictionary");
        assert_eq!(err.message(), "is not a dictionary");
        assert!(!err.is_not_implemented());
    }

    #[test]
    fn test_context_accumulation() {
        let err = ValidationError::new("missing")
            .context("required member b ")
            .context("list position [0] ");

        assert_eq!(err.message(), "list position [0] required member b missing");
    }

    #[test]
    fn test_context_keeps_not_implemented_flag() {
        let err = ValidationError::not_implemented().context("[0]");
        assert!(err.is_not_implemented());
        assert_eq!(err.message(), "[0]validate is not implemented");
    }

    #[test]
    fn test_display_matches_message() {
        let err = ValidationError::new("port outside valid range");
        assert_eq!(format!("{}", err), "port outside valid range");
        assert_eq!(err.clone().into_message(), err.to_string());
    }

    #[test]
    fn test_error_trait() {
        use std::error::Error;

        let err = ValidationError::new("boom");
        let _: &dyn Error = &err;
        assert!(err.source().is_none());
    }

    #[test]
    fn test_schema_error_messages() {
        let err = SchemaError::InvertedBounds {
            min: "200".into(),
            max: "100".into(),
        };
        assert_eq!(err.to_string(), "min value 200 bigger than max value 100");

        let err = SchemaError::BoundKind {
            bound: "minval",
            expected: "integer".into(),
            value: "0.2".into(),
        };
        assert_eq!(err.to_string(), "minval 0.2 is not a integer");

        let err = SchemaError::DuplicateField { name: "a".into() };
        assert!(err.to_string().contains("both required and optional"));
    }

    #[test]
    fn test_pattern_error_from_regex() {
        let regex_err = regex::Regex::new("(").unwrap_err();
        let err: SchemaError = regex_err.into();
        assert!(matches!(err, SchemaError::Pattern(_)));
        assert!(err.to_string().starts_with("invalid pattern"));
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(&json!("blarg")), "blarg");
        assert_eq!(describe(&json!(42)), "42");
        assert_eq!(describe(&json!(null)), "null");
        assert_eq!(describe(&json!([1, "a"])), "[1,\"a\"]");
    }
}
