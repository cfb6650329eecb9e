//! Located validation failure.
//!
//! A [`Failure`] names the check that failed ([`Code`]), the value that failed
//! it, and where that value sits inside the input ([`Path`]). Failures of the
//! `any`/`all` combinators additionally carry one failure per branch.

use crate::types::error_formatter::{FailureFormatBuilder, ErrorFormatter};
use crate::types::{Code, Path, Segment, Value};
use core::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why and where a value failed validation.
///
/// # Examples
///
/// ```
/// use schema_rail::{Code, Failure, Segment, Value};
///
/// let failure = Failure::new(Code::Pattern, "bad-email").within("email");
///
/// assert_eq!(failure.code(), Code::Pattern);
/// assert_eq!(failure.bad_value(), &Value::from("bad-email"));
/// assert_eq!(failure.path().to_vec(), vec![Segment::from("email")]);
/// assert_eq!(failure.to_string(), r#"email -> pattern (got "bad-email")"#);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    pub(crate) code: Code,
    pub(crate) bad_value: Value,
    pub(crate) path: Path,
    // must stay on the heap; an inline buffer of `Failure` would be unsized
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub(crate) branches: Vec<Failure>,
}

impl Failure {
    /// Creates a failure located at the validated value itself.
    #[inline]
    pub fn new<V: Into<Value>>(code: Code, bad_value: V) -> Self {
        Self { code, bad_value: bad_value.into(), path: Path::root(), branches: Vec::new() }
    }

    /// Creates an `any`/`all` style failure that carries each branch's failure.
    #[inline]
    pub fn aggregate<V: Into<Value>>(code: Code, bad_value: V, branches: Vec<Failure>) -> Self {
        Self { code, bad_value: bad_value.into(), path: Path::root(), branches }
    }

    /// Moves the failure one level down, under `segment` of an enclosing container.
    #[inline]
    pub fn within<S: Into<Segment>>(mut self, segment: S) -> Self {
        self.path.wrap(segment);
        self
    }

    #[inline]
    pub fn code(&self) -> Code {
        self.code
    }

    #[inline]
    pub fn bad_value(&self) -> &Value {
        &self.bad_value
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Per-branch failures; empty unless [`Code::is_aggregate`] holds for the code.
    #[inline]
    pub fn branches(&self) -> &[Failure] {
        &self.branches
    }

    #[inline]
    pub fn into_parts(self) -> (Code, Value, Path, Vec<Failure>) {
        (self.code, self.bad_value, self.path, self.branches)
    }

    /// Leaf failures reached by descending through `any`/`all` branches,
    /// depth first in branch order. A non-aggregate failure is its own root cause.
    pub fn root_causes(&self) -> Vec<&Failure> {
        let mut leaves = Vec::new();
        let mut stack = vec![self];
        while let Some(failure) = stack.pop() {
            if failure.branches.is_empty() {
                leaves.push(failure);
            } else {
                stack.extend(failure.branches.iter().rev());
            }
        }
        leaves
    }

    /// Returns a builder for customizing how the failure is rendered.
    #[must_use]
    #[inline]
    pub fn fmt(&self) -> FailureFormatBuilder<'_> {
        FailureFormatBuilder::new(self)
    }

    /// Renders the path chain followed by the root cause.
    #[must_use]
    pub fn error_chain(&self) -> String {
        self.fmt().to_string()
    }

    /// Renders the chain with a custom formatter.
    #[must_use]
    pub fn error_chain_with<F: ErrorFormatter>(&self, formatter: F) -> String {
        let cause = Cause { failure: self, show_value: true };
        let mut items: Vec<&dyn fmt::Display> = Vec::with_capacity(self.path.len() + 1);
        for segment in self.path.iter() {
            items.push(segment as &dyn fmt::Display);
        }
        items.push(&cause);
        formatter.format_chain(items.into_iter())
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.fmt(), f)
    }
}

impl std::error::Error for Failure {}

/// The code and bad value of a failure, with its branches inlined.
pub(crate) struct Cause<'a> {
    pub(crate) failure: &'a Failure,
    pub(crate) show_value: bool,
}

impl fmt::Display for Cause<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let failure = self.failure;
        f.write_str(failure.code.as_str())?;
        if self.show_value {
            write!(f, " (got {})", failure.bad_value)?;
        }
        if !failure.branches.is_empty() {
            f.write_str(": [")?;
            for (i, branch) in failure.branches.iter().enumerate() {
                if i > 0 {
                    f.write_str("; ")?;
                }
                if !branch.path.is_root() {
                    write!(f, "{} -> ", branch.path)?;
                }
                write!(f, "{}", Cause { failure: branch, show_value: self.show_value })?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}
