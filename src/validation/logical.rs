//! Logical combinators: `any_of` and `all_of`.
//!
//! These are the only validators that aggregate several failures. Their
//! failure keeps the original input as bad value and lists every branch
//! failure, in branch order, under [`Failure::branches`].

use crate::traits::Validate;
use crate::types::{Checked, Code, Failure, Value};
use crate::validation::{Definition, Validator};

fn normalize<I, D>(definitions: I) -> Vec<Validator>
where
    I: IntoIterator<Item = D>,
    D: Into<Definition>,
{
    definitions.into_iter().map(|d| d.into().into_validator()).collect()
}

/// Accepts a value when at least one branch does.
///
/// Created by [`any_of`] (and [`boolean`](crate::boolean)).
#[derive(Debug, Clone)]
pub struct AnyOfValidator {
    branches: Vec<Validator>,
}

impl AnyOfValidator {
    pub fn new<I, D>(definitions: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<Definition>,
    {
        Self { branches: normalize(definitions) }
    }
}

impl Validate for AnyOfValidator {
    fn check(&self, value: &Value) -> Checked {
        let mut failures = Vec::with_capacity(self.branches.len());
        for branch in &self.branches {
            match branch.check(value) {
                // the input itself is accepted, whatever the branch substituted
                Ok(_) => return Ok(None),
                Err(failure) => failures.push(failure),
            }
        }
        Err(Failure::aggregate(Code::Any, value.clone(), failures))
    }
}

/// Tries each definition in order and stops at the first that accepts.
///
/// # Examples
///
/// ```
/// use schema_rail::prelude::*;
///
/// let port = any_of([Definition::from(number().min(1.0).max(65535.0)), "auto".into()]);
///
/// assert!(port.is_valid(&Value::from(8080)));
/// assert!(port.is_valid(&Value::from("auto")));
///
/// let failure = port.validate(&Value::from(0)).unwrap_err();
/// assert_eq!(failure.code(), Code::Any);
/// assert_eq!(failure.branches()[0].code(), Code::Min);
/// assert_eq!(failure.branches()[1].code(), Code::Literal);
/// ```
#[inline]
pub fn any_of<I, D>(definitions: I) -> AnyOfValidator
where
    I: IntoIterator<Item = D>,
    D: Into<Definition>,
{
    AnyOfValidator::new(definitions)
}

/// Accepts a value only when every branch does.
///
/// Created by [`all_of`].
#[derive(Debug, Clone)]
pub struct AllOfValidator {
    branches: Vec<Validator>,
}

impl AllOfValidator {
    pub fn new<I, D>(definitions: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<Definition>,
    {
        Self { branches: normalize(definitions) }
    }
}

impl Validate for AllOfValidator {
    fn check(&self, value: &Value) -> Checked {
        let failures: Vec<Failure> =
            self.branches.iter().filter_map(|branch| branch.check(value).err()).collect();
        if failures.is_empty() {
            Ok(None)
        } else {
            Err(Failure::aggregate(Code::All, value.clone(), failures))
        }
    }
}

/// Runs every definition and reports all of their failures together.
///
/// # Examples
///
/// ```
/// use schema_rail::prelude::*;
///
/// let code = all_of([
///     string().minlen(5),
///     string().try_pattern(r"^\d+$").unwrap(),
/// ]);
/// let failure = code.validate(&Value::from("abc")).unwrap_err();
///
/// assert_eq!(failure.code(), Code::All);
/// let codes: Vec<Code> = failure.branches().iter().map(Failure::code).collect();
/// assert_eq!(codes, vec![Code::MinLen, Code::Pattern]);
/// ```
#[inline]
pub fn all_of<I, D>(definitions: I) -> AllOfValidator
where
    I: IntoIterator<Item = D>,
    D: Into<Definition>,
{
    AllOfValidator::new(definitions)
}
