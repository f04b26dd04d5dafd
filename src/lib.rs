//! # Validata
//!
//! Composable validators for dynamically-typed values.
//!
//! A validator checks that a candidate [`serde_json::Value`] conforms to a
//! type, shape or range constraint. Small leaf validators ([`Bool`], [`Int`],
//! [`Str`], [`Ip`], ...) are assembled into schemas with three structural
//! combinators: [`Dict`], [`List`] and [`Tuple`].
//!
//! Validation stops at the first violation. Each combinator prepends its own
//! context to the child's message, so the error reads as a path from the root
//! to the failing value.
//!
//! ## Quick Example
//!
//! ```rust
//! use serde_json::json;
//! use validata::prelude::*;
//!
//! let user = Dict::builder()
//!     .required("_id", StrUuid)
//!     .required("name", Str::new())
//!     .required("gender", Choice::new(["male", "female"]))
//!     .optional("hobbies", List::new(Str::new()))
//!     .ignore_unknown(false)
//!     .build()
//!     .unwrap();
//!
//! let paula = json!({
//!     "_id": "e7a5ff1c-ee5e-4ca9-a3d3-0106dd826dcd",
//!     "name": "Paula",
//!     "gender": "female",
//! });
//! assert!(user.validate(&paula).is_ok());
//!
//! let john = json!({
//!     "_id": "e7a5ff1c-ee5e-4ca9-a3d3-0106dd826dcd",
//!     "name": "John",
//!     "gender": "male",
//!     "hobbies": ["python", "blarg", 1],
//! });
//! assert_eq!(
//!     user.validate(&john).unwrap_err().message(),
//!     "optional member hobbies list position [2] is not a string"
//! );
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events when combinators wrap a child failure
//!   and when a validator is misconfigured.
//! - `proptest`: expose [`testing::strategies`] for property tests.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod combinators;
pub mod error;
pub mod testing;
pub mod validator;
pub mod validators;

// Re-exports
pub use combinators::{Dict, DictBuilder, List, Tuple};
pub use error::{SchemaError, ValidationError};
pub use validator::{from_fn, FnValidator, Unimplemented, Validator, ValidatorExt};
pub use validators::{
    AddrPort, BaseNumber, Bool, Choice, Float, Int, Ip, IpPort, Ipv4, Ipv4Port, Ipv6, Ipv6Port,
    NumberKind, Str, StrUuid,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::combinators::{Dict, List, Tuple};
    pub use crate::error::{SchemaError, ValidationError};
    pub use crate::validator::{Validator, ValidatorExt};
    pub use crate::validators::{
        BaseNumber, Bool, Choice, Float, Int, Ip, IpPort, Ipv4, Ipv4Port, Ipv6, Ipv6Port,
        NumberKind, Str, StrUuid,
    };
}
