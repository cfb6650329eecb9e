//! Scalar validators: `literal`, `number`, `string`, `boolean` and `func`.
//!
//! Checks run in the documented order and stop at the first failure; the
//! hook runs only once every built-in check has passed.

use crate::traits::Validate;
use crate::types::{Checked, Code, Failure, Value};
use crate::validation::hook::{self, Hook, HookOutcome};
use crate::validation::logical::AnyOfValidator;
use crate::validation::pattern::{Pattern, PatternError};

/// Accepts values equal to a fixed literal.
///
/// Created by [`literal`].
#[derive(Debug, Clone)]
pub struct LiteralValidator {
    literal: Value,
    folded: Option<String>,
    func: Option<Hook>,
}

impl LiteralValidator {
    #[inline]
    pub fn new<V: Into<Value>>(literal: V) -> Self {
        Self { literal: literal.into(), folded: None, func: None }
    }

    /// Compares strings case-insensitively when both sides are strings.
    pub fn icase(mut self, enabled: bool) -> Self {
        self.folded = if enabled { self.literal.as_str().map(str::to_lowercase) } else { None };
        self
    }

    #[inline]
    pub fn ignore_case(self) -> Self {
        self.icase(true)
    }

    pub fn func<F, R>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> R + Send + Sync + 'static,
        R: Into<HookOutcome>,
    {
        self.func = Some(Hook::new(f));
        self
    }

    fn matches(&self, value: &Value) -> bool {
        match (&self.folded, value) {
            (Some(folded), Value::String(actual)) => *folded == actual.to_lowercase(),
            _ => self.literal == *value,
        }
    }
}

impl Validate for LiteralValidator {
    fn check(&self, value: &Value) -> Checked {
        if !self.matches(value) {
            return Err(Failure::new(Code::Literal, value.clone()));
        }
        hook::run(self.func.as_ref(), value)
    }
}

/// Accepts exactly `literal`.
///
/// # Examples
///
/// ```
/// use schema_rail::prelude::*;
///
/// assert!(literal("GET").ignore_case().is_valid(&Value::from("get")));
/// assert_eq!(literal(1).validate(&Value::from(2)).unwrap_err().code(), Code::Literal);
/// ```
#[inline]
pub fn literal<V: Into<Value>>(literal: V) -> LiteralValidator {
    LiteralValidator::new(literal)
}

/// Accepts numbers within an inclusive range.
///
/// Created by [`number`].
#[derive(Debug, Clone)]
pub struct NumberValidator {
    min: f64,
    max: f64,
    func: Option<Hook>,
}

impl Default for NumberValidator {
    fn default() -> Self {
        Self { min: f64::NEG_INFINITY, max: f64::INFINITY, func: None }
    }
}

impl NumberValidator {
    pub fn min(mut self, min: f64) -> Self {
        self.min = min;
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = max;
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
}

impl Validate for NumberValidator {
    fn check(&self, value: &Value) -> Checked {
        let Value::Number(n) = value else {
            return Err(Failure::new(Code::Number, value.clone()));
        };
        if *n < self.min {
            return Err(Failure::new(Code::Min, value.clone()));
        }
        if *n > self.max {
            return Err(Failure::new(Code::Max, value.clone()));
        }
        hook::run(self.func.as_ref(), value)
    }
}

/// Accepts numbers; bounds default to the whole real line.
#[inline]
pub fn number() -> NumberValidator {
    NumberValidator::default()
}

/// Accepts strings by length and pattern.
///
/// Lengths count Unicode scalar values.
///
/// Created by [`string`].
#[derive(Debug, Clone, Default)]
pub struct StringValidator {
    minlen: usize,
    maxlen: Option<usize>,
    pattern: Option<Pattern>,
    func: Option<Hook>,
}

impl StringValidator {
    pub fn minlen(mut self, minlen: usize) -> Self {
        self.minlen = minlen;
        self
    }

    pub fn maxlen(mut self, maxlen: usize) -> Self {
        self.maxlen = Some(maxlen);
        self
    }

    pub fn pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Compiles `source` and uses it as the pattern.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when `source` is not a valid regular expression.
    pub fn try_pattern(self, source: &str) -> Result<Self, PatternError> {
        Ok(self.pattern(Pattern::new(source)?))
    }

    pub fn func<F, R>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> R + Send + Sync + 'static,
        R: Into<HookOutcome>,
    {
        self.func = Some(Hook::new(f));
        self
    }
}

impl Validate for StringValidator {
    fn check(&self, value: &Value) -> Checked {
        let Value::String(s) = value else {
            return Err(Failure::new(Code::String, value.clone()));
        };
        let len = s.chars().count();
        if len < self.minlen {
            return Err(Failure::new(Code::MinLen, value.clone()));
        }
        if self.maxlen.is_some_and(|max| len > max) {
            return Err(Failure::new(Code::MaxLen, value.clone()));
        }
        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(s) {
                return Err(Failure::new(Code::Pattern, value.clone()));
            }
        }
        hook::run(self.func.as_ref(), value)
    }
}

/// Accepts strings; without options any string passes.
///
/// # Examples
///
/// ```
/// use schema_rail::prelude::*;
///
/// let pin = string().minlen(3).try_pattern(r"^\d+$").unwrap();
///
/// assert!(pin.is_valid(&Value::from("0420")));
/// assert_eq!(pin.validate(&Value::from(42)).unwrap_err().code(), Code::String);
/// assert_eq!(pin.validate(&Value::from("42")).unwrap_err().code(), Code::MinLen);
/// assert_eq!(pin.validate(&Value::from("abcd")).unwrap_err().code(), Code::Pattern);
/// ```
#[inline]
pub fn string() -> StringValidator {
    StringValidator::default()
}

/// Accepts exactly `true` or `false`.
///
/// Built as `any_of([literal(true), literal(false)])`, so a rejection carries
/// code `any` with both literal failures as branches.
#[inline]
pub fn boolean() -> AnyOfValidator {
    AnyOfValidator::new([literal(true), literal(false)])
}

/// Accepts callables.
///
/// Created by [`func`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionValidator;

impl Validate for FunctionValidator {
    fn check(&self, value: &Value) -> Checked {
        match value {
            Value::Function(_) => Ok(None),
            _ => Err(Failure::new(Code::Func, value.clone())),
        }
    }
}

/// Accepts [`Function`](crate::Function) values.
#[inline]
pub fn func() -> FunctionValidator {
    FunctionValidator
}
