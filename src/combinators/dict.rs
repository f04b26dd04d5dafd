//! Dictionary validator

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde_json::Value;

use super::wrap;
use crate::error::{SchemaError, ValidationError};
use crate::validator::{Opaque, Validator};

type Fields = BTreeMap<String, Box<dyn Validator>>;

/// Validates objects member by member.
///
/// Required members must be present and pass their validator. Optional
/// members may be absent, but must pass when present. Members that are
/// neither are tolerated unless the dictionary was built with
/// `ignore_unknown(false)`.
///
/// Members are checked in name order: all required members, then all
/// optional members, then the unknown-member policy. Only the first failure
/// is reported.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use validata::{Bool, Dict, Validator};
///
/// let flags = Dict::builder()
///     .required("a", Bool)
///     .required("b", Bool)
///     .build()
///     .unwrap();
///
/// assert!(flags.validate(&json!({"a": true, "b": false})).is_ok());
/// assert_eq!(
///     flags.validate(&json!({"a": true})).unwrap_err().message(),
///     "required member b missing"
/// );
/// assert_eq!(
///     flags.validate(&json!({"a": true, "b": 42})).unwrap_err().message(),
///     "required member b 42 is not a boolean"
/// );
/// ```
pub struct Dict {
    required: Fields,
    optional: Fields,
    ignore_unknown: bool,
}

impl Dict {
    /// An empty dictionary validator that ignores unknown members.
    pub fn new() -> Self {
        Dict {
            required: Fields::new(),
            optional: Fields::new(),
            ignore_unknown: true,
        }
    }

    /// An empty dictionary validator that rejects unknown members.
    pub fn strict() -> Self {
        Dict {
            ignore_unknown: false,
            ..Dict::new()
        }
    }

    /// Start building a dictionary validator.
    pub fn builder() -> DictBuilder {
        DictBuilder::default()
    }

    /// Register or replace a required member.
    ///
    /// Fails if `name` is already an optional member.
    pub fn add_required<V>(
        &mut self,
        name: impl Into<String>,
        validator: V,
    ) -> Result<(), SchemaError>
    where
        V: Validator + 'static,
    {
        let name = name.into();
        if self.optional.contains_key(&name) {
            return Err(duplicate(name));
        }
        self.required.insert(name, Box::new(validator));
        Ok(())
    }

    /// Register or replace an optional member.
    ///
    /// Fails if `name` is already a required member.
    pub fn add_optional<V>(
        &mut self,
        name: impl Into<String>,
        validator: V,
    ) -> Result<(), SchemaError>
    where
        V: Validator + 'static,
    {
        let name = name.into();
        if self.required.contains_key(&name) {
            return Err(duplicate(name));
        }
        self.optional.insert(name, Box::new(validator));
        Ok(())
    }

    /// Names of the required members, in check order.
    pub fn required_fields(&self) -> impl Iterator<Item = &str> {
        self.required.keys().map(String::as_str)
    }

    /// Names of the optional members, in check order.
    pub fn optional_fields(&self) -> impl Iterator<Item = &str> {
        self.optional.keys().map(String::as_str)
    }

    /// Whether members outside the schema are tolerated.
    pub fn ignores_unknown(&self) -> bool {
        self.ignore_unknown
    }
}

fn duplicate(name: String) -> SchemaError {
    let err = SchemaError::DuplicateField { name };
    #[cfg(feature = "tracing")]
    tracing::debug!(error = %err, "rejected dictionary member");
    err
}

impl Default for Dict {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for Dict {
    fn validate(&self, item: &Value) -> Result<(), ValidationError> {
        let Value::Object(members) = item else {
            return Err(ValidationError::new("is not a dictionary"));
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(members = members.len(), "validating dictionary");

        let mut unknown: BTreeSet<&str> = members.keys().map(String::as_str).collect();

        for (name, validator) in &self.required {
            let Some(value) = members.get(name) else {
                return Err(wrap(
                    ValidationError::new("missing"),
                    format!("required member {} ", name),
                ));
            };
            validator
                .validate(value)
                .map_err(|err| wrap(err, format!("required member {} ", name)))?;
            unknown.remove(name.as_str());
        }

        for (name, validator) in &self.optional {
            if let Some(value) = members.get(name) {
                validator
                    .validate(value)
                    .map_err(|err| wrap(err, format!("optional member {} ", name)))?;
                unknown.remove(name.as_str());
            }
        }

        if !self.ignore_unknown && !unknown.is_empty() {
            let names: Vec<&str> = unknown.into_iter().collect();
            return Err(ValidationError::new(format!(
                "got unknown members: {}",
                Value::from(names)
            )));
        }
        Ok(())
    }
}

impl fmt::Debug for Dict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dict")
            .field("required", &FieldNames(&self.required))
            .field("optional", &FieldNames(&self.optional))
            .field("ignore_unknown", &self.ignore_unknown)
            .finish()
    }
}

struct FieldNames<'a>(&'a Fields);

impl fmt::Debug for FieldNames<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.0.keys().map(|name| (name, Opaque)))
            .finish()
    }
}

/// Builder for [`Dict`].
///
/// Registering the same name twice in one section replaces the earlier
/// validator. Registering a name in both sections makes [`build`] fail.
///
/// [`build`]: DictBuilder::build
///
/// ```rust
/// use serde_json::json;
/// use validata::{Dict, Str, Validator};
///
/// let user = Dict::builder()
///     .required("name", Str::new())
///     .optional("nick", Str::new())
///     .ignore_unknown(false)
///     .build()
///     .unwrap();
///
/// assert!(user.validate(&json!({"name": "John"})).is_ok());
/// assert!(user.validate(&json!({"name": "John", "age": 3})).is_err());
/// ```
pub struct DictBuilder {
    required: Fields,
    optional: Fields,
    ignore_unknown: bool,
}

impl Default for DictBuilder {
    fn default() -> Self {
        DictBuilder {
            required: Fields::new(),
            optional: Fields::new(),
            ignore_unknown: true,
        }
    }
}

impl DictBuilder {
    /// Add a required member.
    pub fn required<V>(mut self, name: impl Into<String>, validator: V) -> Self
    where
        V: Validator + 'static,
    {
        self.required.insert(name.into(), Box::new(validator));
        self
    }

    /// Add an optional member.
    pub fn optional<V>(mut self, name: impl Into<String>, validator: V) -> Self
    where
        V: Validator + 'static,
    {
        self.optional.insert(name.into(), Box::new(validator));
        self
    }

    /// Set whether members outside the schema are tolerated (default `true`).
    pub fn ignore_unknown(mut self, ignore: bool) -> Self {
        self.ignore_unknown = ignore;
        self
    }

    /// Finish the dictionary validator.
    pub fn build(self) -> Result<Dict, SchemaError> {
        if let Some(name) = self
            .required
            .keys()
            .find(|name| self.optional.contains_key(*name))
        {
            return Err(duplicate(name.clone()));
        }
        Ok(Dict {
            required: self.required,
            optional: self.optional,
            ignore_unknown: self.ignore_unknown,
        })
    }
}

impl fmt::Debug for DictBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DictBuilder")
            .field("required", &FieldNames(&self.required))
            .field("optional", &FieldNames(&self.optional))
            .field("ignore_unknown", &self.ignore_unknown)
            .finish()
    }
}
