//! Choice validator

use serde_json::Value;

use crate::error::{describe, ValidationError};
use crate::validator::Validator;

/// Validates that an item equals one of a fixed list of choices.
///
/// Comparison is plain [`Value`] equality, so `1` and `1.0` are different
/// choices.
///
/// ```rust
/// use serde_json::json;
/// use validata::{Choice, Validator};
///
/// let answer = Choice::new(["yes", "no"]);
/// assert!(answer.validate(&json!("no")).is_ok());
/// assert_eq!(
///     answer.validate(&json!("blarg")).unwrap_err().message(),
///     r#"should be any of ["yes","no"] actually is: blarg"#
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Choice {
    choices: Vec<Value>,
}

impl Choice {
    /// Create a validator accepting exactly the given values.
    pub fn new<I>(choices: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Choice {
            choices: choices.into_iter().map(Into::into).collect(),
        }
    }

    /// The allowed values.
    pub fn choices(&self) -> &[Value] {
        &self.choices
    }
}

impl Validator for Choice {
    fn validate(&self, item: &Value) -> Result<(), ValidationError> {
        if self.choices.contains(item) {
            return Ok(());
        }
        Err(ValidationError::new(format!(
            "should be any of {} actually is: {}",
            Value::Array(self.choices.clone()),
            describe(item)
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate() {
        let choice = Choice::new(["yes", "no"]);
        assert!(choice.validate(&json!("no")).is_ok());
        assert!(choice.validate(&json!("yes")).is_ok());
    }

    #[test]
    fn test_validate_invalid() {
        let choice = Choice::new(["yes", "no"]);
        let err = choice.validate(&json!("blarg")).unwrap_err();
        assert!(err.message().contains("\"yes\""));
        assert!(err.message().ends_with("actually is: blarg"));
    }

    #[test]
    fn test_mixed_choices_use_exact_equality() {
        let choice = Choice::new(vec![json!(1), json!(null), json!("one")]);
        assert_eq!(choice.choices().len(), 3);
        assert!(choice.validate(&json!(1)).is_ok());
        assert!(choice.validate(&json!(null)).is_ok());
        assert!(choice.validate(&json!(1.0)).is_err());
        assert!(choice.validate(&json!(true)).is_err());
    }

    #[test]
    fn test_empty_choices_reject_everything() {
        let choice = Choice::new(Vec::<Value>::new());
        assert!(choice.validate(&json!("anything")).is_err());
    }
}
