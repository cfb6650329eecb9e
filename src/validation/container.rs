//! Keyed container validators: `table`, and its `array`/`map` shorthands.
//!
//! A table validator checks, in order: the value is a table; array/map
//! emptiness; the explicit `required` keys in listed order; every declared
//! field in declaration order; the hook. The first failure wins, and a field
//! failure is reported under the field's key.

use crate::traits::{Validate, ValidationResultExt};
use crate::types::{Checked, Code, Failure, Key, Table, Value};
use crate::validation::hook::{self, Hook, HookOutcome};
use crate::validation::{Definition, Validator};

/// Which keys a table must hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Required {
    /// These keys, checked in this order before any field is validated.
    Keys(Vec<Key>),
    /// Every declared field; a missing one fails when its turn comes.
    All,
}

/// Validates keyed containers and their declared fields.
///
/// Created by [`table`], [`array`] or [`map`].
#[derive(Debug, Clone, Default)]
pub struct TableValidator {
    array: bool,
    map: bool,
    empty: bool,
    required: Option<Required>,
    fields: Vec<(Key, Validator)>,
    func: Option<Hook>,
}

impl TableValidator {
    /// Requires a non-empty array part unless empty tables are allowed.
    pub fn array(mut self, enabled: bool) -> Self {
        self.array = enabled;
        self
    }

    /// Requires at least one entry unless empty tables are allowed.
    pub fn map(mut self, enabled: bool) -> Self {
        self.map = enabled;
        self
    }

    pub fn empty(mut self, allowed: bool) -> Self {
        self.empty = allowed;
        self
    }

    #[inline]
    pub fn allow_empty(self) -> Self {
        self.empty(true)
    }

    pub fn required<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        self.required = Some(Required::Keys(keys.into_iter().map(Into::into).collect()));
        self
    }

    pub fn required_all(mut self) -> Self {
        self.required = Some(Required::All);
        self
    }

    /// Declares a field. Fields are validated in declaration order; a field
    /// declared twice keeps its latest definition at its first position.
    pub fn field<K, D>(mut self, key: K, definition: D) -> Self
    where
        K: Into<Key>,
        D: Into<Definition>,
    {
        let key = key.into();
        let validator = definition.into().into_validator();
        match self.fields.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = validator,
            None => self.fields.push((key, validator)),
        }
        self
    }

    pub fn func<F, R>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> R + Send + Sync + 'static,
        R: Into<HookOutcome>,
    {
        self.func = Some(Hook::new(f));
        self
    }

    fn check_shape(&self, table: &Table, value: &Value) -> Result<(), Failure> {
        if self.empty {
            return Ok(());
        }
        if self.array && table.sequence_len() == 0 {
            return Err(Failure::new(Code::Empty, value.clone()));
        }
        if self.map && table.is_empty() {
            return Err(Failure::new(Code::Empty, value.clone()));
        }
        Ok(())
    }

    fn check_fields(&self, table: &Table) -> Result<(), Failure> {
        let every_field_required = matches!(self.required, Some(Required::All));
        for (key, validator) in &self.fields {
            match table.get_key(key) {
                Some(field) => {
                    validator.check(field).at_with(|| key.clone())?;
                }
                None if every_field_required => return Err(missing(key)),
                None => {}
            }
        }
        Ok(())
    }
}

fn missing(key: &Key) -> Failure {
    Failure::new(Code::Required, key.clone()).within(key.clone())
}

impl Validate for TableValidator {
    fn check(&self, value: &Value) -> Checked {
        let Value::Table(table) = value else {
            return Err(Failure::new(Code::Table, value.clone()));
        };
        self.check_shape(table, value)?;
        if let Some(Required::Keys(keys)) = &self.required {
            if let Some(key) = keys.iter().find(|key| !table.contains_key(key)) {
                return Err(missing(key));
            }
        }
        self.check_fields(table)?;
        hook::run(self.func.as_ref(), value)
    }
}

/// Accepts any table; add fields and options through the builder.
///
/// # Examples
///
/// ```
/// use schema_rail::prelude::*;
///
/// let point = table().required_all().field("x", number()).field("y", number());
///
/// assert!(point.is_valid(&table! { "x" => 1, "y" => 2 }));
///
/// let failure = point.validate(&table! { "x" => 1 }).unwrap_err();
/// assert_eq!(failure.code(), Code::Required);
/// assert_eq!(failure.bad_value(), &Value::from("y"));
/// assert_eq!(failure.path().to_vec(), vec![Segment::from("y")]);
/// ```
#[inline]
pub fn table() -> TableValidator {
    TableValidator::default()
}

/// A [`table`] whose array part must be non-empty unless empty tables are allowed.
#[inline]
pub fn array() -> TableValidator {
    table().array(true)
}

/// A [`table`] that must hold at least one entry unless empty tables are allowed.
///
/// # Examples
///
/// ```
/// use schema_rail::prelude::*;
///
/// assert_eq!(map().validate(&table! {}).unwrap_err().code(), Code::Empty);
/// assert!(map().allow_empty().is_valid(&table! {}));
/// ```
#[inline]
pub fn map() -> TableValidator {
    table().map(true)
}
