//! Testing utilities for validators
//!
//! Assertion macros for checking validator outcomes, and with the `proptest`
//! feature, strategies for generating candidate values.
//!
//! # Examples
//!
//! ```rust
//! use serde_json::json;
//! use validata::{assert_invalid, assert_valid, Bool};
//!
//! assert_valid!(Bool, json!(true));
//! assert_invalid!(Bool, json!(1), "1 is not a boolean");
//!
//! let err = assert_invalid!(Bool, json!("x"));
//! assert_eq!(err.message(), "x is not a boolean");
//! ```

/// Assert that a validator accepts an item.
///
/// Panics with the failure message otherwise.
///
/// ```rust
/// use serde_json::json;
/// use validata::{assert_valid, Int};
///
/// assert_valid!(Int::default(), json!(3));
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($validator:expr, $item:expr) => {{
        use $crate::Validator as _;
        match ($validator).validate(&$item) {
            Ok(()) => {}
            Err(e) => {
                panic!("Expected valid, got failure: {}", e);
            }
        }
    }};
}

/// Assert that a validator rejects an item.
///
/// Evaluates to the [`ValidationError`](crate::ValidationError). With a third
/// argument the message must match exactly.
///
/// ```rust
/// use serde_json::json;
/// use validata::{assert_invalid, List, Bool};
///
/// assert_invalid!(List::new(Bool), json!([0]), "list position [0] 0 is not a boolean");
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($validator:expr, $item:expr) => {{
        use $crate::Validator as _;
        let item = $item;
        match ($validator).validate(&item) {
            Err(e) => e,
            Ok(()) => {
                panic!("Expected failure, got valid: {}", item);
            }
        }
    }};
    ($validator:expr, $item:expr, $message:expr) => {{
        let err = $crate::assert_invalid!($validator, $item);
        assert_eq!(err.message(), $message);
        err
    }};
}

/// Assert that a validator rejects an item with a message containing a fragment.
///
/// ```rust
/// use serde_json::json;
/// use validata::{assert_invalid_contains, Dict};
///
/// assert_invalid_contains!(Dict::strict(), json!({"x": 1}), "unknown members");
/// ```
#[macro_export]
macro_rules! assert_invalid_contains {
    ($validator:expr, $item:expr, $fragment:expr) => {{
        let err = $crate::assert_invalid!($validator, $item);
        assert!(
            err.message().contains($fragment),
            "Expected message containing {:?}, got {:?}",
            $fragment,
            err.message()
        );
        err
    }};
}

/// Proptest strategies for candidate values.
#[cfg(feature = "proptest")]
pub mod strategies {
    use proptest::prelude::*;
    use serde_json::Value;

    /// Scalars of every kind: null, booleans, integers, finite floats, strings.
    pub fn scalar() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::from),
            any::<i64>().prop_map(Value::from),
            any::<f64>()
                .prop_filter("finite", |x| x.is_finite())
                .prop_map(Value::from),
            "[a-zA-Z0-9 :.-]{0,16}".prop_map(Value::from),
        ]
    }

    /// Arbitrarily nested arrays and objects of scalars.
    pub fn value() -> impl Strategy<Value = Value> {
        scalar().prop_recursive(3, 48, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
                prop::collection::btree_map("[a-z]{1,6}", inner, 0..6)
                    .prop_map(|members| Value::Object(members.into_iter().collect())),
            ]
        })
    }

    /// Dotted-quad IPv4 address strings.
    pub fn ipv4() -> impl Strategy<Value = String> {
        any::<[u8; 4]>().prop_map(|o| format!("{}.{}.{}.{}", o[0], o[1], o[2], o[3]))
    }

    /// Valid port numbers.
    pub fn port() -> impl Strategy<Value = u16> {
        1..=u16::MAX
    }
}

#[cfg(test)]
mod tests {
    use crate::validators::{Bool, Int};
    use serde_json::json;

    #[test]
    fn assert_valid_macro() {
        assert_valid!(Bool, json!(false));
        let by_ref = &Int::default();
        assert_valid!(by_ref, json!(1));
    }

    #[test]
    fn assert_invalid_macro_returns_error() {
        let err = assert_invalid!(Bool, json!(0));
        assert_eq!(err.message(), "0 is not a boolean");
    }

    #[test]
    fn assert_invalid_macro_with_message() {
        assert_invalid!(Int::default(), json!(1.5), "1.5 is not a integer");
    }

    #[test]
    fn assert_invalid_contains_macro() {
        assert_invalid_contains!(Bool, json!("yes"), "not a boolean");
    }

    #[test]
    #[should_panic(expected = "Expected valid, got failure")]
    fn assert_valid_panics_on_failure() {
        assert_valid!(Bool, json!(null));
    }

    #[test]
    #[should_panic(expected = "Expected failure, got valid")]
    fn assert_invalid_panics_on_success() {
        assert_invalid!(Bool, json!(true));
    }

    #[test]
    #[should_panic(expected = "Expected message containing")]
    fn assert_invalid_contains_panics_on_other_message() {
        assert_invalid_contains!(Bool, json!(1), "dictionary");
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::super::strategies;
        use crate::validators::{Ipv4, Ipv4Port};
        use crate::Validator;
        use proptest::prelude::*;
        use serde_json::Value;

        proptest! {
            #[test]
            fn generated_ipv4_addresses_are_valid(addr in strategies::ipv4()) {
                prop_assert!(Ipv4.validate(&Value::from(addr)).is_ok());
            }

            #[test]
            fn generated_endpoints_are_valid(addr in strategies::ipv4(), port in strategies::port()) {
                let endpoint = format!("{}:{}", addr, port);
                prop_assert!(Ipv4Port::new().validate(&Value::from(endpoint)).is_ok());
            }

            #[test]
            fn generated_values_are_serializable(value in strategies::value()) {
                prop_assert!(serde_json::to_string(&value).is_ok());
            }
        }
    }
}
