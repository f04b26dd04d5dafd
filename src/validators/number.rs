//! Numeric range validators
//!
//! [`BaseNumber`] checks that a candidate has an exact numeric kind and
//! optionally lies within inclusive bounds. [`Int`] and [`Float`] are the two
//! fixed specialisations.
//!
//! Kinds are exact: `true` is not an integer, `1.0` is not an integer and `1`
//! is not a float.

use std::cmp::Ordering;
use std::fmt;

use serde_json::{Number, Value};

use crate::error::{describe, SchemaError, ValidationError};
use crate::validator::Validator;

/// The numeric kind a [`BaseNumber`] expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumberKind {
    /// Integer representation (`i64` or `u64`).
    Integer,
    /// Floating point representation (`f64`).
    Float,
}

/// A number of a known kind, comparable only against its own kind.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Num {
    Int(i128),
    Float(f64),
}

impl Num {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(Self::from_number(n)),
            _ => None,
        }
    }

    fn from_number(n: &Number) -> Self {
        if let Some(i) = n.as_i64() {
            Num::Int(i128::from(i))
        } else if let Some(u) = n.as_u64() {
            Num::Int(i128::from(u))
        } else {
            // serde_json numbers are i64, u64 or finite f64
            Num::Float(n.as_f64().unwrap_or(f64::NAN))
        }
    }

    fn kind(&self) -> NumberKind {
        match self {
            Num::Int(_) => NumberKind::Integer,
            Num::Float(_) => NumberKind::Float,
        }
    }

    fn compare(&self, other: &Num) -> Option<Ordering> {
        match (self, other) {
            (Num::Int(a), Num::Int(b)) => Some(a.cmp(b)),
            (Num::Float(a), Num::Float(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Num::Int(i) => write!(f, "{}", i),
            Num::Float(x) => write!(f, "{:?}", x),
        }
    }
}

/// Validates that a value has an exact numeric kind and lies within bounds.
///
/// Bounds are inclusive and given as dynamic values so that a bound of the
/// wrong kind can be rejected at construction time.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use validata::{BaseNumber, NumberKind, Validator};
///
/// let percent = BaseNumber::new(
///     NumberKind::Integer,
///     "integer",
///     Some(json!(0)),
///     Some(json!(100)),
/// )
/// .unwrap();
///
/// assert!(percent.validate(&json!(10)).is_ok());
/// assert!(percent.validate(&json!(101)).is_err());
/// assert!(percent.validate(&json!(0.5)).is_err());
///
/// // A float bound on an integer validator is a configuration error
/// assert!(BaseNumber::new(NumberKind::Integer, "integer", Some(json!(0.2)), None).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BaseNumber {
    kind: NumberKind,
    type_name: String,
    min: Option<Num>,
    max: Option<Num>,
}

impl BaseNumber {
    /// Create a validator for `kind`, named `type_name` in error messages.
    ///
    /// Fails when a bound is not a number of exactly `kind`, or when the
    /// minimum is greater than the maximum.
    pub fn new(
        kind: NumberKind,
        type_name: impl Into<String>,
        min: Option<Value>,
        max: Option<Value>,
    ) -> Result<Self, SchemaError> {
        let type_name = type_name.into();
        let min = Self::check_bound("minval", kind, &type_name, min)?;
        let max = Self::check_bound("maxval", kind, &type_name, max)?;

        if let (Some(lo), Some(hi)) = (&min, &max) {
            if lo.compare(hi) == Some(Ordering::Greater) {
                let err = SchemaError::InvertedBounds {
                    min: lo.to_string(),
                    max: hi.to_string(),
                };
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %err, "rejected numeric bounds");
                return Err(err);
            }
        }

        Ok(BaseNumber {
            kind,
            type_name,
            min,
            max,
        })
    }

    fn check_bound(
        bound: &'static str,
        kind: NumberKind,
        type_name: &str,
        value: Option<Value>,
    ) -> Result<Option<Num>, SchemaError> {
        let Some(value) = value else {
            return Ok(None);
        };
        match Num::from_value(&value) {
            Some(num) if num.kind() == kind => Ok(Some(num)),
            _ => {
                let err = SchemaError::BoundKind {
                    bound,
                    expected: type_name.to_string(),
                    value: describe(&value),
                };
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %err, "rejected numeric bound");
                Err(err)
            }
        }
    }

    /// The expected numeric kind.
    pub fn kind(&self) -> NumberKind {
        self.kind
    }

    /// The display name used in error messages.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The minimum bound, if any.
    pub fn min(&self) -> Option<Value> {
        self.min.map(num_to_value)
    }

    /// The maximum bound, if any.
    pub fn max(&self) -> Option<Value> {
        self.max.map(num_to_value)
    }
}

fn num_to_value(num: Num) -> Value {
    match num {
        Num::Int(i) => i64::try_from(i)
            .map(Value::from)
            .or_else(|_| u64::try_from(i).map(Value::from))
            .unwrap_or(Value::Null),
        Num::Float(x) => Value::from(x),
    }
}

impl Validator for BaseNumber {
    fn validate(&self, item: &Value) -> Result<(), ValidationError> {
        let num = match Num::from_value(item) {
            Some(num) if num.kind() == self.kind => num,
            _ => {
                return Err(ValidationError::new(format!(
                    "{} is not a {}",
                    describe(item),
                    self.type_name
                )))
            }
        };

        if let Some(min) = &self.min {
            if num.compare(min) == Some(Ordering::Less) {
                return Err(ValidationError::new(format!(
                    "{} is smaller than minimum value {}",
                    num, min
                )));
            }
        }
        if let Some(max) = &self.max {
            if num.compare(max) == Some(Ordering::Greater) {
                return Err(ValidationError::new(format!(
                    "{} is bigger than maximum value {}",
                    num, max
                )));
            }
        }
        Ok(())
    }
}

/// Validates integers, with optional inclusive bounds.
///
/// ```rust
/// use serde_json::json;
/// use validata::{Int, Validator};
///
/// let port = Int::new(Some(1), Some(65535)).unwrap();
/// assert!(port.validate(&json!(3128)).is_ok());
/// assert!(port.validate(&json!(83128)).is_err());
/// assert!(Int::default().validate(&json!(true)).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Int(BaseNumber);

impl Int {
    /// Create an integer validator, failing if `min > max`.
    pub fn new(min: Option<i64>, max: Option<i64>) -> Result<Self, SchemaError> {
        BaseNumber::new(
            NumberKind::Integer,
            "integer",
            min.map(Value::from),
            max.map(Value::from),
        )
        .map(Int)
    }

    /// The range of TCP/UDP ports, 1 to 65535.
    pub(crate) fn port() -> Self {
        Int(BaseNumber {
            kind: NumberKind::Integer,
            type_name: "integer".to_string(),
            min: Some(Num::Int(1)),
            max: Some(Num::Int(65535)),
        })
    }

    /// The underlying range validator.
    pub fn as_base(&self) -> &BaseNumber {
        &self.0
    }
}

impl Default for Int {
    fn default() -> Self {
        Int(BaseNumber {
            kind: NumberKind::Integer,
            type_name: "integer".to_string(),
            min: None,
            max: None,
        })
    }
}

impl Validator for Int {
    #[inline]
    fn validate(&self, item: &Value) -> Result<(), ValidationError> {
        self.0.validate(item)
    }
}

/// Validates floats, with optional inclusive bounds.
///
/// A non-finite bound cannot be represented and is rejected.
///
/// ```rust
/// use serde_json::json;
/// use validata::{Float, Validator};
///
/// let ratio = Float::new(Some(0.0), Some(1.0)).unwrap();
/// assert!(ratio.validate(&json!(0.25)).is_ok());
/// assert!(ratio.validate(&json!(1)).is_err()); // integer, not float
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Float(BaseNumber);

impl Float {
    /// Create a float validator, failing if `min > max` or a bound is not finite.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Result<Self, SchemaError> {
        BaseNumber::new(
            NumberKind::Float,
            "float",
            min.map(Value::from),
            max.map(Value::from),
        )
        .map(Float)
    }

    /// The underlying range validator.
    pub fn as_base(&self) -> &BaseNumber {
        &self.0
    }
}

impl Default for Float {
    fn default() -> Self {
        Float(BaseNumber {
            kind: NumberKind::Float,
            type_name: "float".to_string(),
            min: None,
            max: None,
        })
    }
}

impl Validator for Float {
    #[inline]
    fn validate(&self, item: &Value) -> Result<(), ValidationError> {
        self.0.validate(item)
    }
}
