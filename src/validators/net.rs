//! Network address validators
//!
//! Addresses are parsed with the standard library parsers from [`std::net`].
//! The `*Port` validators expect `address:port`, splitting on the last colon
//! so that IPv6 addresses keep their own colons.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use serde_json::Value;

use crate::error::{describe, ValidationError};
use crate::validator::Validator;
use crate::validators::number::Int;

fn as_text<'a>(item: &'a Value, message: &str) -> Result<&'a str, ValidationError> {
    item.as_str().ok_or_else(|| ValidationError::new(message))
}

/// Validates dotted-quad IPv4 addresses.
///
/// ```rust
/// use serde_json::json;
/// use validata::{Ipv4, Validator};
///
/// assert!(Ipv4.validate(&json!("127.0.0.1")).is_ok());
/// assert!(Ipv4.validate(&json!("256.0.0.1")).is_err());
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Ipv4;

impl Validator for Ipv4 {
    fn validate(&self, item: &Value) -> Result<(), ValidationError> {
        const MESSAGE: &str = "not a IPv4 address";
        as_text(item, MESSAGE)?
            .parse::<Ipv4Addr>()
            .map(|_| ())
            .map_err(|_| ValidationError::new(MESSAGE))
    }
}

/// Validates IPv6 addresses.
///
/// ```rust
/// use serde_json::json;
/// use validata::{Ipv6, Validator};
///
/// assert!(Ipv6.validate(&json!("::1")).is_ok());
/// assert!(Ipv6.validate(&json!("::1k12")).is_err());
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Ipv6;

impl Validator for Ipv6 {
    fn validate(&self, item: &Value) -> Result<(), ValidationError> {
        const MESSAGE: &str = "not a IPv6 address";
        as_text(item, MESSAGE)?
            .parse::<Ipv6Addr>()
            .map(|_| ())
            .map_err(|_| ValidationError::new(MESSAGE))
    }
}

/// Validates IPv4 or IPv6 addresses.
///
/// IPv4 is tried first. When both families reject the item a single
/// combined message is reported.
///
/// ```rust
/// use serde_json::json;
/// use validata::{Ip, Validator};
///
/// assert!(Ip::new().validate(&json!("127.0.0.1")).is_ok());
/// assert!(Ip::new().validate(&json!("::1")).is_ok());
/// assert_eq!(
///     Ip::new().validate(&json!("blarg")).unwrap_err().message(),
///     "not a IPv4 or IPv6 address"
/// );
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Ip {
    v4: Ipv4,
    v6: Ipv6,
}

impl Ip {
    /// Create an address validator for either family.
    pub fn new() -> Self {
        Ip { v4: Ipv4, v6: Ipv6 }
    }
}

impl Validator for Ip {
    fn validate(&self, item: &Value) -> Result<(), ValidationError> {
        self.v4
            .validate(item)
            .or_else(|_| self.v6.validate(item))
            .map_err(|_| ValidationError::new("not a IPv4 or IPv6 address"))
    }
}

/// Validates `address:port` strings.
///
/// The address part is checked with the owned address validator and its
/// failure is reported unchanged. The port part must be an integer from 1 to
/// 65535; anything else is reported as `port outside valid range`.
///
/// Use the [`IpPort`], [`Ipv4Port`] and [`Ipv6Port`] aliases for the built-in
/// families, or [`AddrPort::with_address`] for a custom address stage.
///
/// ```rust
/// use serde_json::json;
/// use validata::{IpPort, Validator};
///
/// let proxy = IpPort::new();
/// assert!(proxy.validate(&json!("127.0.0.1:3128")).is_ok());
/// assert!(proxy.validate(&json!("::1:3128")).is_ok());
/// assert_eq!(
///     proxy.validate(&json!("127.0.0.1:83128")).unwrap_err().message(),
///     "port outside valid range"
/// );
/// ```
pub struct AddrPort<A> {
    address: A,
    port: Int,
}

/// `address:port` where the address is IPv4 or IPv6.
pub type IpPort = AddrPort<Ip>;

/// `address:port` where the address is IPv4.
pub type Ipv4Port = AddrPort<Ipv4>;

/// `address:port` where the address is IPv6.
pub type Ipv6Port = AddrPort<Ipv6>;

impl<A: Validator + Default> AddrPort<A> {
    /// Create a validator using the default address validator of `A`.
    pub fn new() -> Self {
        Self::with_address(A::default())
    }
}

impl<A: Validator + Default> Default for AddrPort<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Validator> AddrPort<A> {
    /// Create a validator that checks the address part with `address`.
    pub fn with_address(address: A) -> Self {
        AddrPort {
            address,
            port: Int::port(),
        }
    }

    /// The owned address validator.
    pub fn address(&self) -> &A {
        &self.address
    }

    fn check_port(&self, port: &str) -> Result<(), ValidationError> {
        let port = port
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::new("port outside valid range"))?;
        self.port
            .validate(&Value::from(port))
            .map_err(|_| ValidationError::new("port outside valid range"))
    }
}

impl<A: Validator> Validator for AddrPort<A> {
    fn validate(&self, item: &Value) -> Result<(), ValidationError> {
        let text = item
            .as_str()
            .ok_or_else(|| ValidationError::new(format!("{} is not a string", describe(item))))?;
        let (address, port) = text.rsplit_once(':').ok_or_else(|| {
            ValidationError::new(format!("{} is not in address:port form", text))
        })?;

        self.address.validate(&Value::from(address))?;
        self.check_port(port)
    }
}

impl<A: fmt::Debug> fmt::Debug for AddrPort<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddrPort")
            .field("address", &self.address)
            .field("port", &self.port)
            .finish()
    }
}

impl<A: Clone> Clone for AddrPort<A> {
    fn clone(&self) -> Self {
        AddrPort {
            address: self.address.clone(),
            port: self.port.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::from_fn;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_ipv4_valid() {
        assert!(Ipv4.validate(&json!("127.0.0.1")).is_ok());
        assert!(Ipv4.validate(&json!("0.0.0.0")).is_ok());
    }

    #[test]
    fn test_ipv4_invalid() {
        let err = Ipv4.validate(&json!("256.0.0.1")).unwrap_err();
        assert_eq!(err.message(), "not a IPv4 address");
        assert!(Ipv4.validate(&json!("::1")).is_err());
        assert!(Ipv4.validate(&json!(127)).is_err());
    }

    #[test]
    fn test_ipv6_valid() {
        assert!(Ipv6.validate(&json!("::1")).is_ok());
        assert!(Ipv6.validate(&json!("fe80::1:2")).is_ok());
        assert!(Ipv6.validate(&json!("::ffff:127.0.0.1")).is_ok());
    }

    #[test]
    fn test_ipv6_invalid() {
        let err = Ipv6.validate(&json!("::1k12")).unwrap_err();
        assert_eq!(err.message(), "not a IPv6 address");
        assert!(Ipv6.validate(&json!("127.0.0.1")).is_err());
        assert!(Ipv6.validate(&json!(null)).is_err());
    }

    #[test]
    fn test_ip_either_family() {
        let ip = Ip::new();
        assert!(ip.validate(&json!("127.0.0.1")).is_ok());
        assert!(ip.validate(&json!("::1")).is_ok());
    }

    #[test]
    fn test_ip_neither_family() {
        let err = Ip::new().validate(&json!("blarg")).unwrap_err();
        assert_eq!(err.message(), "not a IPv4 or IPv6 address");
        assert!(Ip::new().validate(&json!(false)).is_err());
    }

    #[test]
    fn test_ip_port_valid() {
        let v = IpPort::new();
        assert!(v.validate(&json!("127.0.0.1:3128")).is_ok());
        assert!(v.validate(&json!("::1:3128")).is_ok());
        assert!(v.validate(&json!("10.0.0.1:1")).is_ok());
        assert!(v.validate(&json!("10.0.0.1:65535")).is_ok());
    }

    #[test]
    fn test_ip_port_wrong_port() {
        let v = IpPort::new();
        for item in [
            "127.0.0.1:83128",
            "::1:93128",
            "127.0.0.1:0",
            "127.0.0.1:-1",
            "127.0.0.1:http",
            "127.0.0.1:",
        ] {
            let err = v.validate(&json!(item)).unwrap_err();
            assert_eq!(err.message(), "port outside valid range", "{}", item);
        }
    }

    #[test]
    fn test_ip_port_wrong_address_is_not_rewrapped() {
        let v = IpPort::new();
        let err = v.validate(&json!("123123127.0.0.1:3128")).unwrap_err();
        assert_eq!(err.message(), "not a IPv4 or IPv6 address");
        let err = v.validate(&json!("123123123::1:3128")).unwrap_err();
        assert_eq!(err.message(), "not a IPv4 or IPv6 address");
    }

    #[test]
    fn test_ip_port_without_colon() {
        let err = IpPort::new().validate(&json!("127.0.0.1")).unwrap_err();
        assert_eq!(err.message(), "127.0.0.1 is not in address:port form");
    }

    #[test]
    fn test_ip_port_non_string() {
        let err = IpPort::new().validate(&json!(3128)).unwrap_err();
        assert_eq!(err.message(), "3128 is not a string");
    }

    #[test]
    fn test_ipv4_port() {
        let v = Ipv4Port::new();
        assert!(v.validate(&json!("127.0.0.1:3128")).is_ok());
        assert_eq!(
            v.validate(&json!("256.0.0.1:3128")).unwrap_err().message(),
            "not a IPv4 address"
        );
        assert_eq!(
            v.validate(&json!("127.0.0.1:83128")).unwrap_err().message(),
            "port outside valid range"
        );
        assert!(v.validate(&json!("::1:3128")).is_err());
    }

    #[test]
    fn test_ipv6_port() {
        let v = Ipv6Port::new();
        assert!(v.validate(&json!("::1:3128")).is_ok());
        assert_eq!(
            v.validate(&json!("::1iasd:3128")).unwrap_err().message(),
            "not a IPv6 address"
        );
        assert_eq!(
            v.validate(&json!("::1:83128")).unwrap_err().message(),
            "port outside valid range"
        );
    }

    #[test]
    fn test_custom_address_stage_sees_left_part() {
        let seen = AtomicUsize::new(0);
        let v = AddrPort::with_address(from_fn(|item: &Value| {
            seen.fetch_add(1, Ordering::SeqCst);
            if item == "host" {
                Ok(())
            } else {
                Err(ValidationError::new("custom address failure"))
            }
        }));

        assert!(v.validate(&json!("host:80")).is_ok());
        assert_eq!(
            v.validate(&json!("other:80")).unwrap_err().message(),
            "custom address failure"
        );
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_port_not_checked_when_address_fails() {
        let v = Ipv4Port::new();
        assert_eq!(
            v.validate(&json!("nope:99999")).unwrap_err().message(),
            "not a IPv4 address"
        );
    }

    #[test]
    fn test_boxed_address_stage() {
        let v = AddrPort::with_address(Box::new(Ipv4) as Box<dyn Validator>);
        assert!(v.validate(&json!("1.2.3.4:5")).is_ok());
        assert!(v.validate(&json!("::1:5")).is_err());
    }
}
