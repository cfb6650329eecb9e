//! The single entry point every validator kind implements.

use crate::types::{Checked, ValidationResult, Value};

/// A validator: a pure check of a candidate [`Value`].
///
/// Implementors only provide [`check`](Validate::check); the public
/// [`validate`](Validate::validate) resolves the accepted value and, with the
/// `tracing` feature, records rejections.
///
/// # Examples
///
/// ```
/// use schema_rail::prelude::*;
///
/// let age = number().min(0.0).max(150.0);
///
/// assert_eq!(age.validate(&Value::from(42)), Ok(Value::from(42)));
/// assert_eq!(age.validate(&Value::from(-1)).unwrap_err().code(), Code::Min);
/// assert!(!age.is_valid(&Value::from("42")));
/// ```
pub trait Validate {
    /// Runs the check, returning `Ok(None)` when the input is accepted as is.
    fn check(&self, value: &Value) -> Checked;

    /// Runs the check and returns the accepted value: the input itself, or
    /// the replacement produced by a hook.
    fn validate(&self, value: &Value) -> ValidationResult {
        match self.check(value) {
            Ok(replacement) => Ok(replacement.unwrap_or_else(|| value.clone())),
            Err(failure) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    code = %failure.code(),
                    path = %failure.path(),
                    bad_value = %failure.bad_value(),
                    "value rejected"
                );
                Err(failure)
            }
        }
    }

    #[inline]
    fn is_valid(&self, value: &Value) -> bool {
        self.check(value).is_ok()
    }
}
