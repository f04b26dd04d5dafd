//! Structural combinators
//!
//! Combinators validate containers by delegating to child validators:
//!
//! - [`Dict`]: named required and optional members, with an unknown-key policy
//! - [`List`]: one validator applied to every element
//! - [`Tuple`]: one validator per fixed position
//!
//! All three stop at the first failure and prepend their own context (member
//! name or position) to the child's message.

mod dict;
mod list;
mod tuple;

pub use dict::{Dict, DictBuilder};
pub use list::List;
pub use tuple::Tuple;

use crate::error::ValidationError;

/// Prepend `prefix` to a child failure.
fn wrap(err: ValidationError, prefix: String) -> ValidationError {
    #[cfg(feature = "tracing")]
    tracing::debug!(context = %prefix.trim_end(), error = %err, "child validator failed");
    err.context(prefix)
}
