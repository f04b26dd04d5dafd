//! Fixed-arity tuple validator

use std::fmt;

use serde_json::Value;

use super::wrap;
use crate::error::ValidationError;
use crate::validator::Validator;

/// Validates a fixed-length array, one validator per position.
///
/// The array length must equal the number of elements. Position errors are
/// reported as `[<pos>]<message>`, without a separating space.
///
/// ```rust
/// use serde_json::json;
/// use validata::{Bool, Int, Str, Tuple, Validator};
///
/// let row = Tuple::new().element(Bool).element(Int::default()).element(Str::new());
///
/// assert!(row.validate(&json!([true, 42, "blarg"])).is_ok());
/// assert_eq!(
///     row.validate(&json!([true, false, "blarg"])).unwrap_err().message(),
///     "[1]false is not a integer"
/// );
/// assert_eq!(
///     row.validate(&json!([true, 42, "blarg", null])).unwrap_err().message(),
///     "unexpected length, expected 3 but is 4"
/// );
/// ```
#[derive(Default)]
pub struct Tuple {
    elements: Vec<Box<dyn Validator>>,
}

impl Tuple {
    /// An empty tuple validator, accepting only empty arrays.
    pub fn new() -> Self {
        Tuple {
            elements: Vec::new(),
        }
    }

    /// Append a position, builder style.
    pub fn element<V: Validator + 'static>(mut self, validator: V) -> Self {
        self.add_element(validator);
        self
    }

    /// Append a position.
    pub fn add_element<V: Validator + 'static>(&mut self, validator: V) {
        self.elements.push(Box::new(validator));
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether no positions are configured.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Validator for Tuple {
    fn validate(&self, item: &Value) -> Result<(), ValidationError> {
        let Value::Array(values) = item else {
            return Err(ValidationError::new("is not a list"));
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(len = values.len(), "validating tuple");

        if values.len() != self.elements.len() {
            return Err(ValidationError::new(format!(
                "unexpected length, expected {} but is {}",
                self.elements.len(),
                values.len()
            )));
        }

        for (pos, (validator, value)) in self.elements.iter().zip(values).enumerate() {
            validator
                .validate(value)
                .map_err(|err| wrap(err, format!("[{}]", pos)))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tuple")
            .field("len", &self.elements.len())
            .finish()
    }
}
