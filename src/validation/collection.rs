//! Homogeneous collection validators: `array_of` and `map_of`.

use crate::traits::{Validate, ValidationResultExt};
use crate::types::{Checked, Code, Failure, Value};
use crate::validation::hook::{self, Hook, HookOutcome};
use crate::validation::{Definition, Validator};
use std::collections::hash_map::{Entry, HashMap};

/// Validates arrays whose elements share one definition.
///
/// Checks run in order: the value is a table; emptiness; `minlen`; `maxlen`;
/// then each element of the array part in index order (definition, `each`
/// hook, uniqueness); finally the whole-array hook. The first failing index
/// wins.
///
/// Created by [`array_of`].
#[derive(Debug, Clone)]
pub struct ArrayOfValidator {
    element: Box<Validator>,
    minlen: usize,
    maxlen: Option<usize>,
    empty: Option<bool>,
    unique: bool,
    each: Option<Hook>,
    func: Option<Hook>,
}

impl ArrayOfValidator {
    pub fn new<D: Into<Definition>>(element: D) -> Self {
        Self {
            element: Box::new(element.into().into_validator()),
            minlen: 0,
            maxlen: None,
            empty: None,
            unique: false,
            each: None,
            func: None,
        }
    }

    pub fn minlen(mut self, minlen: usize) -> Self {
        self.minlen = minlen;
        self
    }

    pub fn maxlen(mut self, maxlen: usize) -> Self {
        self.maxlen = Some(maxlen);
        self
    }

    /// `true` accepts empty arrays regardless of `minlen`; `false` rejects
    /// them even when `minlen` is zero. Unset, empty arrays pass only when
    /// `minlen` is zero.
    pub fn empty(mut self, allowed: bool) -> Self {
        self.empty = Some(allowed);
        self
    }

    /// Rejects arrays holding the same scalar or function twice.
    ///
    /// Tables are never considered duplicates of one another.
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Hook run on every element after the element definition passes.
    pub fn each<F, R>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> R + Send + Sync + 'static,
        R: Into<HookOutcome>,
    {
        self.each = Some(Hook::new(f));
        self
    }

    /// Hook run on the whole array once every element has passed.
    pub fn func<F, R>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> R + Send + Sync + 'static,
        R: Into<HookOutcome>,
    {
        self.func = Some(Hook::new(f));
        self
    }

    fn effective_minlen(&self) -> usize {
        match self.empty {
            Some(true) => 0,
            _ => self.minlen,
        }
    }

    fn allows_empty(&self) -> bool {
        self.empty.unwrap_or(self.minlen == 0)
    }

    fn check_element(&self, index: usize, element: &Value) -> Result<(), Failure> {
        self.element.check(element).at(index)?;
        hook::run(self.each.as_ref(), element).at(index)?;
        Ok(())
    }
}

impl Validate for ArrayOfValidator {
    fn check(&self, value: &Value) -> Checked {
        let Value::Table(table) = value else {
            return Err(Failure::new(Code::Table, value.clone()));
        };
        let len = table.sequence_len();
        if len == 0 && !self.allows_empty() {
            return Err(Failure::new(Code::Empty, value.clone()));
        }
        if len < self.effective_minlen() {
            return Err(Failure::new(Code::MinLen, value.clone()));
        }
        if self.maxlen.is_some_and(|max| len > max) {
            return Err(Failure::new(Code::MaxLen, value.clone()));
        }

        let mut first_seen: HashMap<Identity<'_>, usize> = HashMap::new();
        for (index, element) in table.sequence().enumerate() {
            self.check_element(index, element)?;
            if !self.unique {
                continue;
            }
            let Some(identity) = Identity::of(element) else {
                continue;
            };
            match first_seen.entry(identity) {
                Entry::Occupied(first) => {
                    return Err(Failure::new(Code::Unique, element.clone())
                        .within(index)
                        .within(*first.get()));
                }
                Entry::Vacant(slot) => {
                    slot.insert(index);
                }
            }
        }

        hook::run(self.func.as_ref(), value)
    }
}

/// Equality key for uniqueness: type plus value for scalars, allocation for functions.
#[derive(PartialEq, Eq, Hash)]
enum Identity<'a> {
    Bool(bool),
    Number(u64),
    String(&'a str),
    Function(usize),
}

impl<'a> Identity<'a> {
    fn of(value: &'a Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Number(n) if n.is_nan() => None,
            // -0.0 and 0.0 are the same number
            Value::Number(n) => Some(Self::Number(if *n == 0.0 { 0 } else { n.to_bits() })),
            Value::String(s) => Some(Self::String(s)),
            Value::Function(f) => Some(Self::Function(f.addr())),
            Value::Table(_) => None,
        }
    }
}

/// Accepts arrays whose every element satisfies `element`.
///
/// # Examples
///
/// ```
/// use schema_rail::prelude::*;
///
/// let tags = array_of(string()).unique();
/// let failure = tags.validate(&array!["a", "b", "c", "c"]).unwrap_err();
///
/// assert_eq!(failure.code(), Code::Unique);
/// assert_eq!(failure.bad_value(), &Value::from("c"));
/// assert_eq!(failure.path().to_vec(), vec![Segment::from(2), Segment::from(3)]);
/// ```
#[inline]
pub fn array_of<D: Into<Definition>>(element: D) -> ArrayOfValidator {
    ArrayOfValidator::new(element)
}

/// Validates every key and every value of a table.
///
/// Pairs are visited in table key order. A key failure is reported under the
/// key; a value failure under the key followed by the value itself.
///
/// Created by [`map_of`].
#[derive(Debug, Clone, Default)]
pub struct MapOfValidator {
    keys: Option<Box<Validator>>,
    values: Option<Box<Validator>>,
    empty: bool,
    key_func: Option<Hook>,
    value_func: Option<Hook>,
}

impl MapOfValidator {
    /// Definition every key must satisfy; keys reach it as numbers or strings.
    pub fn keys<D: Into<Definition>>(mut self, definition: D) -> Self {
        self.keys = Some(Box::new(definition.into().into_validator()));
        self
    }

    /// Definition every value must satisfy.
    pub fn values<D: Into<Definition>>(mut self, definition: D) -> Self {
        self.values = Some(Box::new(definition.into().into_validator()));
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

    pub fn key_func<F, R>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> R + Send + Sync + 'static,
        R: Into<HookOutcome>,
    {
        self.key_func = Some(Hook::new(f));
        self
    }

    pub fn value_func<F, R>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> R + Send + Sync + 'static,
        R: Into<HookOutcome>,
    {
        self.value_func = Some(Hook::new(f));
        self
    }
}

fn check_optional(validator: Option<&Validator>, value: &Value) -> Checked {
    match validator {
        Some(validator) => validator.check(value),
        None => Ok(None),
    }
}

impl Validate for MapOfValidator {
    fn check(&self, value: &Value) -> Checked {
        let Value::Table(table) = value else {
            return Err(Failure::new(Code::Table, value.clone()));
        };
        if !self.empty && table.is_empty() {
            return Err(Failure::new(Code::Empty, value.clone()));
        }

        for (key, item) in table {
            let key_value = Value::from(key.clone());
            check_optional(self.keys.as_deref(), &key_value).at_with(|| key.clone())?;
            hook::run(self.key_func.as_ref(), &key_value).at_with(|| key.clone())?;

            let locate = |failure: Failure| failure.within(item.clone()).within(key.clone());
            check_optional(self.values.as_deref(), item).map_err(locate)?;
            hook::run(self.value_func.as_ref(), item).map_err(locate)?;
        }
        Ok(None)
    }
}

/// Accepts non-empty tables; constrain keys and values through the builder.
///
/// # Examples
///
/// ```
/// use schema_rail::prelude::*;
///
/// let scores = map_of().keys(string()).values(number().min(0.0));
/// let failure = scores.validate(&table! { "ann" => 3, "bob" => -1 }).unwrap_err();
///
/// assert_eq!(failure.code(), Code::Min);
/// assert_eq!(
///     failure.path().to_vec(),
///     vec![Segment::from("bob"), Segment::Value(Value::from(-1))]
/// );
/// ```
#[inline]
pub fn map_of() -> MapOfValidator {
    MapOfValidator::default()
}
