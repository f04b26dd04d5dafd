//! Homogeneous list validator

use std::fmt;

use serde_json::Value;

use super::wrap;
use crate::error::ValidationError;
use crate::validator::{Opaque, Unimplemented, Validator};

/// Validates every element of an array with one validator.
///
/// An empty array always passes. A list created with [`List::default`] has
/// no element validator yet and rejects any non-empty array with a
/// "not implemented" failure until [`List::set_validator`] is called.
///
/// ```rust
/// use serde_json::json;
/// use validata::{Bool, List, Validator};
///
/// let flags = List::new(Bool);
/// assert!(flags.validate(&json!([true, false, true])).is_ok());
/// assert_eq!(
///     flags.validate(&json!([true, false, null])).unwrap_err().message(),
///     "list position [2] null is not a boolean"
/// );
/// ```
pub struct List {
    validator: Box<dyn Validator>,
}

impl List {
    /// Create a list validator applying `validator` to each element.
    pub fn new<V: Validator + 'static>(validator: V) -> Self {
        List {
            validator: Box::new(validator),
        }
    }

    /// The element validator.
    pub fn validator(&self) -> &dyn Validator {
        self.validator.as_ref()
    }

    /// Replace the element validator.
    pub fn set_validator<V: Validator + 'static>(&mut self, validator: V) {
        self.validator = Box::new(validator);
    }
}

impl Default for List {
    fn default() -> Self {
        List::new(Unimplemented)
    }
}

impl Validator for List {
    fn validate(&self, item: &Value) -> Result<(), ValidationError> {
        let Value::Array(elements) = item else {
            return Err(ValidationError::new("is not a list"));
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(len = elements.len(), "validating list");

        for (pos, element) in elements.iter().enumerate() {
            self.validator
                .validate(element)
                .map_err(|err| wrap(err, format!("list position [{}] ", pos)))?;
        }
        Ok(())
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("validator", &Opaque)
            .finish()
    }
}
