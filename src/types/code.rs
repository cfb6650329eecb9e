//! The fixed vocabulary of failure codes.

use core::fmt;
use core::str::FromStr;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Machine-readable token naming the check that failed.
///
/// Codes are opaque identifiers, never prose; render them with
/// [`as_str`](Code::as_str) or `Display`.
///
/// # Examples
///
/// ```
/// use schema_rail::Code;
///
/// assert_eq!(Code::MinLen.as_str(), "minlen");
/// assert_eq!("required".parse::<Code>(), Ok(Code::Required));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Code {
    Literal,
    Number,
    Min,
    Max,
    String,
    MinLen,
    MaxLen,
    Pattern,
    Table,
    Empty,
    Required,
    Unique,
    Func,
    Any,
    All,
}

impl Code {
    pub const ALL: [Code; 15] = [
        Code::Literal,
        Code::Number,
        Code::Min,
        Code::Max,
        Code::String,
        Code::MinLen,
        Code::MaxLen,
        Code::Pattern,
        Code::Table,
        Code::Empty,
        Code::Required,
        Code::Unique,
        Code::Func,
        Code::Any,
        Code::All,
    ];

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Code::Literal => "literal",
            Code::Number => "number",
            Code::Min => "min",
            Code::Max => "max",
            Code::String => "string",
            Code::MinLen => "minlen",
            Code::MaxLen => "maxlen",
            Code::Pattern => "pattern",
            Code::Table => "table",
            Code::Empty => "empty",
            Code::Required => "required",
            Code::Unique => "unique",
            Code::Func => "func",
            Code::Any => "any",
            Code::All => "all",
        }
    }

    /// Whether failures with this code carry per-branch failures instead of
    /// a single located cause.
    #[inline]
    pub const fn is_aggregate(self) -> bool {
        matches!(self, Code::Any | Code::All)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a token outside the code vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCode(pub String);

impl fmt::Display for UnknownCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown failure code `{}`", self.0)
    }
}

impl std::error::Error for UnknownCode {}

impl FromStr for Code {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Code::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| UnknownCode(s.to_owned()))
    }
}
