//! String validators
//!
//! [`Str`] accepts strings, optionally matching a regular expression anchored
//! at the start of the string. [`StrUuid`] accepts strings holding a UUID.

use std::fmt;

use regex::Regex;
use serde_json::Value;

use crate::error::{describe, SchemaError, ValidationError};
use crate::validator::Validator;

/// A compiled pattern, matched from the first character of the input.
#[derive(Clone)]
struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    fn compile(source: &str) -> Result<Self, SchemaError> {
        Ok(Pattern {
            source: source.to_string(),
            regex: Regex::new(source)?,
        })
    }

    // The leftmost match starts at 0 whenever any match does
    fn matches(&self, text: &str) -> bool {
        self.regex.find(text).is_some_and(|m| m.start() == 0)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}

/// Validates that an item is a string, optionally matching a pattern.
///
/// The pattern must match at the beginning of the string. A match further
/// into the string does not count unless the pattern itself allows leading
/// text (e.g. `.*foo`). The end of the string is not anchored.
///
/// ```rust
/// use serde_json::json;
/// use validata::{Str, Validator};
///
/// let test = Str::with_pattern("test.*").unwrap();
/// assert!(test.validate(&json!("test test")).is_ok());
/// assert!(test.validate(&json!("blargtest test")).is_err());
/// assert!(Str::new().validate(&json!(42)).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Str {
    pattern: Option<Pattern>,
}

impl Str {
    /// Create a validator accepting any string.
    pub fn new() -> Self {
        Str { pattern: None }
    }

    /// Create a validator accepting strings that match `pattern`.
    pub fn with_pattern(pattern: &str) -> Result<Self, SchemaError> {
        Ok(Str {
            pattern: Some(Pattern::compile(pattern)?),
        })
    }

    /// Replace or remove the pattern.
    ///
    /// On a compile error the previous pattern is kept.
    pub fn set_pattern(&mut self, pattern: Option<&str>) -> Result<(), SchemaError> {
        self.pattern = pattern.map(Pattern::compile).transpose()?;
        Ok(())
    }

    /// The pattern source, if one is set.
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_ref().map(|p| p.source.as_str())
    }
}

impl Validator for Str {
    fn validate(&self, item: &Value) -> Result<(), ValidationError> {
        let Value::String(text) = item else {
            return Err(ValidationError::new("is not a string"));
        };
        match &self.pattern {
            Some(pattern) if !pattern.matches(text) => Err(ValidationError::new(format!(
                "string: {} not matching pattern: {}",
                text, pattern.source
            ))),
            _ => Ok(()),
        }
    }
}

/// Validates that an item is a string holding a UUID.
///
/// Any version or variant is accepted, in hyphenated, simple, braced or URN
/// form.
///
/// ```rust
/// use serde_json::json;
/// use validata::{StrUuid, Validator};
///
/// assert!(StrUuid.validate(&json!("e7a5ff1c-ee5e-4ca9-a3d3-0106dd826dcd")).is_ok());
/// assert!(StrUuid.validate(&json!("e7a5ff1c-ee5e-4ca9-a3d3-0106ddblargd")).is_err());
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct StrUuid;

impl Validator for StrUuid {
    fn validate(&self, item: &Value) -> Result<(), ValidationError> {
        match item {
            Value::String(text) if uuid::Uuid::parse_str(text).is_ok() => Ok(()),
            other => Err(ValidationError::new(format!(
                "{} is not a uuid",
                describe(other)
            ))),
        }
    }
}
