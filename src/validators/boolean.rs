//! Boolean validator

use serde_json::Value;

use crate::error::{describe, ValidationError};
use crate::validator::Validator;

/// Validates that an item is a boolean.
///
/// Numbers are never accepted, not even `0` or `1`.
///
/// ```rust
/// use serde_json::json;
/// use validata::{Bool, Validator};
///
/// assert!(Bool.validate(&json!(false)).is_ok());
/// assert!(Bool.validate(&json!(1)).is_err());
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Bool;

impl Validator for Bool {
    fn validate(&self, item: &Value) -> Result<(), ValidationError> {
        match item {
            Value::Bool(_) => Ok(()),
            other => Err(ValidationError::new(format!(
                "{} is not a boolean",
                describe(other)
            ))),
        }
    }
}
