//! The validator capability
//!
//! Every validator, leaf or combinator, implements [`Validator`]: a single
//! fallible check of a candidate [`Value`]. Validators hold only immutable
//! configuration while validating, so one instance can be shared across
//! threads and called any number of times.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::error::ValidationError;

/// A check that a candidate value conforms to some constraint.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use validata::{Validator, ValidationError};
///
/// struct Even;
///
/// impl Validator for Even {
///     fn validate(&self, item: &serde_json::Value) -> Result<(), ValidationError> {
///         match item.as_i64() {
///             Some(n) if n % 2 == 0 => Ok(()),
///             _ => Err(ValidationError::new(format!("{} is not even", item))),
///         }
///     }
/// }
///
/// assert!(Even.validate(&json!(4)).is_ok());
/// assert!(Even.validate(&json!(5)).is_err());
/// ```
pub trait Validator: Send + Sync {
    /// Check `item`, returning a descriptive error on the first violation.
    fn validate(&self, item: &Value) -> Result<(), ValidationError>;
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    #[inline]
    fn validate(&self, item: &Value) -> Result<(), ValidationError> {
        (**self).validate(item)
    }
}

impl<V: Validator + ?Sized> Validator for &V {
    #[inline]
    fn validate(&self, item: &Value) -> Result<(), ValidationError> {
        (**self).validate(item)
    }
}

impl<V: Validator + ?Sized> Validator for Arc<V> {
    #[inline]
    fn validate(&self, item: &Value) -> Result<(), ValidationError> {
        (**self).validate(item)
    }
}

/// Extension methods available on every validator.
pub trait ValidatorExt: Validator + Sized {
    /// Return `true` when `item` passes.
    ///
    /// ```rust
    /// use serde_json::json;
    /// use validata::{Bool, ValidatorExt};
    ///
    /// assert!(Bool.is_valid(&json!(true)));
    /// assert!(!Bool.is_valid(&json!(1)));
    /// ```
    fn is_valid(&self, item: &Value) -> bool {
        self.validate(item).is_ok()
    }

    /// Box the validator for storage in a combinator.
    fn boxed(self) -> Box<dyn Validator>
    where
        Self: 'static,
    {
        Box::new(self)
    }

    /// Validate any serializable value by converting it to a [`Value`] first.
    ///
    /// ```rust
    /// use serde::Serialize;
    /// use validata::{Dict, Int, ValidatorExt};
    ///
    /// #[derive(Serialize)]
    /// struct Proxy {
    ///     port: i64,
    /// }
    ///
    /// let schema = Dict::builder()
    ///     .required("port", Int::new(Some(1), Some(65535)).unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// assert!(schema.validate_serialize(&Proxy { port: 3128 }).is_ok());
    /// assert!(schema.validate_serialize(&Proxy { port: 0 }).is_err());
    /// ```
    fn validate_serialize<T: Serialize + ?Sized>(&self, item: &T) -> Result<(), ValidationError> {
        let value = serde_json::to_value(item).map_err(|err| {
            ValidationError::new(format!("cannot be represented as a value: {}", err))
        })?;
        self.validate(&value)
    }
}

impl<V: Validator> ValidatorExt for V {}

/// A validator without a rule.
///
/// Always fails with [`ValidationError::not_implemented`]. It is the default
/// element validator of a [`List`](crate::List) that has not been configured,
/// so forgetting to configure one never lets data through silently.
///
/// ```rust
/// use serde_json::json;
/// use validata::{Unimplemented, Validator};
///
/// let err = Unimplemented.validate(&json!(null)).unwrap_err();
/// assert!(err.is_not_implemented());
/// ```
#[derive(Clone, Copy, Default, Debug)]
pub struct Unimplemented;

impl Validator for Unimplemented {
    fn validate(&self, _item: &Value) -> Result<(), ValidationError> {
        Err(ValidationError::not_implemented())
    }
}

/// A validator backed by a closure.
///
/// Created by [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnValidator<F>(F);

impl<F> Validator for FnValidator<F>
where
    F: Fn(&Value) -> Result<(), ValidationError> + Send + Sync,
{
    #[inline]
    fn validate(&self, item: &Value) -> Result<(), ValidationError> {
        (self.0)(item)
    }
}

impl<F> fmt::Debug for FnValidator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnValidator")
    }
}

/// Turn a closure into a validator.
///
/// ```rust
/// use serde_json::json;
/// use validata::{from_fn, Validator, ValidationError};
///
/// let not_null = from_fn(|item| {
///     if item.is_null() {
///         Err(ValidationError::new("is null"))
///     } else {
///         Ok(())
///     }
/// });
///
/// assert!(not_null.validate(&json!(0)).is_ok());
/// assert!(not_null.validate(&json!(null)).is_err());
/// ```
pub fn from_fn<F>(f: F) -> FnValidator<F>
where
    F: Fn(&Value) -> Result<(), ValidationError> + Send + Sync,
{
    FnValidator(f)
}

/// Debug helper for boxed children, which carry no `Debug` bound.
pub(crate) struct Opaque;

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<validator>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn non_null(item: &Value) -> Result<(), ValidationError> {
        if item.is_null() {
            Err(ValidationError::new("is null"))
        } else {
            Ok(())
        }
    }

    #[test]
    fn test_closure_is_validator() {
        let v = from_fn(|item: &Value| {
            if item.is_string() {
                Ok(())
            } else {
                Err(ValidationError::new("nope"))
            }
        });
        assert!(v.validate(&json!("x")).is_ok());
        assert_eq!(v.validate(&json!(1)).unwrap_err().message(), "nope");
    }

    #[test]
    fn test_fn_item_is_validator() {
        let v = from_fn(non_null);
        assert!(v.validate(&json!(0)).is_ok());
        assert!(v.validate(&json!(null)).is_err());
    }

    #[test]
    fn test_boxed_and_arc_delegate() {
        let boxed: Box<dyn Validator> = from_fn(non_null).boxed();
        assert!(boxed.validate(&json!(1)).is_ok());
        assert!(boxed.validate(&Value::Null).is_err());

        let shared: Arc<dyn Validator> = Arc::new(from_fn(non_null));
        assert!(shared.validate(&json!(1)).is_ok());
        assert!(shared.is_valid(&json!("a")));
    }

    #[test]
    fn test_reference_is_validator() {
        fn check<V: Validator>(validator: V, item: &Value) -> bool {
            validator.validate(item).is_ok()
        }

        let leaf = from_fn(non_null);
        assert!(check(&leaf, &json!(1)));
        assert!(!check(&leaf, &Value::Null));

        let erased: &dyn Validator = &leaf;
        assert!(check(erased, &json!("a")));
    }

    #[test]
    fn test_unimplemented_always_fails() {
        for item in [json!(null), json!(true), json!("x"), json!([1])] {
            let err = Unimplemented.validate(&item).unwrap_err();
            assert!(err.is_not_implemented());
        }
    }

    #[test]
    fn test_validate_serialize() {
        #[derive(serde::Serialize)]
        struct Wrapper {
            value: Option<u8>,
        }

        let v = from_fn(non_null);
        assert!(v.validate_serialize(&Wrapper { value: None }).is_ok());
        assert!(v.validate_serialize(&Option::<u8>::None).is_err());
    }

    #[test]
    fn test_validate_serialize_unrepresentable() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert((1, 2), "tuple keys are not representable");
        let err = from_fn(non_null).validate_serialize(&map).unwrap_err();
        assert!(err.message().starts_with("cannot be represented"));
    }
}
