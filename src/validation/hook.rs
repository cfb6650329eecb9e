//! User hooks run after a validator's own checks pass.
//!
//! A hook sees the already checked value and answers with a [`HookOutcome`].
//! Terse answers are completed with defaults: a bare `true` keeps the input,
//! a bare `false` fails with [`Code::Func`] and the input as bad value.

use crate::types::{Checked, Code, Failure, Value};
use core::fmt;
use std::sync::Arc;

/// What a hook decided about a value.
///
/// # Examples
///
/// ```
/// use schema_rail::{Code, HookOutcome, Value};
///
/// assert_eq!(HookOutcome::from(true), HookOutcome::Pass(None));
/// assert_eq!(
///     HookOutcome::from(Err::<(), _>(Code::Max)),
///     HookOutcome::Fail { code: Some(Code::Max), bad_value: None }
/// );
/// assert_eq!(HookOutcome::replace("trimmed"), HookOutcome::Pass(Some(Value::from("trimmed"))));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum HookOutcome {
    /// Accepts the value, optionally substituting a transformed one.
    Pass(Option<Value>),
    /// Rejects the value; missing parts default to `func` and the input.
    Fail { code: Option<Code>, bad_value: Option<Value> },
}

impl HookOutcome {
    #[inline]
    pub fn pass() -> Self {
        Self::Pass(None)
    }

    #[inline]
    pub fn replace<V: Into<Value>>(value: V) -> Self {
        Self::Pass(Some(value.into()))
    }

    #[inline]
    pub fn fail() -> Self {
        Self::Fail { code: None, bad_value: None }
    }

    #[inline]
    pub fn fail_with(code: Code) -> Self {
        Self::Fail { code: Some(code), bad_value: None }
    }

    /// Sets the reported bad value of a failing outcome; passing outcomes are unchanged.
    #[inline]
    pub fn with_bad_value<V: Into<Value>>(self, value: V) -> Self {
        match self {
            Self::Fail { code, .. } => Self::Fail { code, bad_value: Some(value.into()) },
            pass => pass,
        }
    }
}

impl From<bool> for HookOutcome {
    #[inline]
    fn from(ok: bool) -> Self {
        if ok {
            Self::pass()
        } else {
            Self::fail()
        }
    }
}

impl From<Result<(), Code>> for HookOutcome {
    #[inline]
    fn from(result: Result<(), Code>) -> Self {
        match result {
            Ok(()) => Self::pass(),
            Err(code) => Self::fail_with(code),
        }
    }
}

impl From<Option<Value>> for HookOutcome {
    /// `Some` substitutes the value, `None` rejects.
    #[inline]
    fn from(replacement: Option<Value>) -> Self {
        match replacement {
            Some(value) => Self::Pass(Some(value)),
            None => Self::fail(),
        }
    }
}

type HookFn = dyn Fn(&Value) -> HookOutcome + Send + Sync;

/// Shared, thread-safe user hook.
#[derive(Clone)]
pub struct Hook(Arc<HookFn>);

impl Hook {
    pub fn new<F, R>(f: F) -> Self
    where
        F: Fn(&Value) -> R + Send + Sync + 'static,
        R: Into<HookOutcome>,
    {
        Self(Arc::new(move |value: &Value| f(value).into()))
    }

    /// Calls the hook and completes its answer into a [`Checked`] outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use schema_rail::{Code, Hook, Value};
    ///
    /// let even = Hook::new(|v: &Value| v.as_number().is_some_and(|n| n % 2.0 == 0.0));
    ///
    /// assert_eq!(even.invoke(&Value::from(4)), Ok(None));
    /// let failure = even.invoke(&Value::from(3)).unwrap_err();
    /// assert_eq!(failure.code(), Code::Func);
    /// assert_eq!(failure.bad_value(), &Value::from(3));
    /// ```
    pub fn invoke(&self, value: &Value) -> Checked {
        match (self.0)(value) {
            HookOutcome::Pass(replacement) => Ok(replacement),
            HookOutcome::Fail { code, bad_value } => {
                let code = code.unwrap_or(Code::Func);
                #[cfg(feature = "tracing")]
                tracing::trace!(code = %code, "hook rejected value");
                Err(Failure::new(code, bad_value.unwrap_or_else(|| value.clone())))
            }
        }
    }
}

impl fmt::Debug for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Hook(..)")
    }
}

/// Runs an optional hook; no hook accepts the value unchanged.
#[inline]
pub(crate) fn run(hook: Option<&Hook>, value: &Value) -> Checked {
    match hook {
        Some(hook) => hook.invoke(value),
        None => Ok(None),
    }
}
