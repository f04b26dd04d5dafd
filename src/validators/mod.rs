//! Leaf validators
//!
//! Leaves check a single value and hold no child validators:
//!
//! - [`Bool`]: exact boolean kind
//! - [`BaseNumber`], [`Int`], [`Float`]: exact numeric kind with optional bounds
//! - [`Choice`]: membership in a fixed list
//! - [`Str`], [`StrUuid`]: strings, optionally pattern-matched, and UUID strings
//! - [`Ipv4`], [`Ipv6`], [`Ip`] and the `address:port` forms built on [`AddrPort`]

mod boolean;
mod choice;
mod net;
mod number;
mod string;

pub use boolean::Bool;
pub use choice::Choice;
pub use net::{AddrPort, Ip, IpPort, Ipv4, Ipv4Port, Ipv6, Ipv6Port};
pub use number::{BaseNumber, Float, Int, NumberKind};
pub use string::{Str, StrUuid};
