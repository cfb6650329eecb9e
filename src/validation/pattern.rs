//! Compiled string patterns.

use core::fmt;
use core::str::FromStr;
use regex::Regex;

/// A regular expression a string must contain a match of.
///
/// Matching is a search: the pattern may match anywhere unless it is
/// anchored with `^`/`$`.
///
/// # Examples
///
/// ```
/// use schema_rail::Pattern;
///
/// let digits = Pattern::new(r"^\d+$").unwrap();
/// assert!(digits.is_match("2024"));
/// assert!(!digits.is_match("20x4"));
///
/// assert!(Pattern::new("(unclosed").is_err());
/// ```
#[derive(Clone)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(source: &str) -> Result<Self, PatternError> {
        Regex::new(source).map(Self).map_err(PatternError)
    }

    #[inline]
    pub fn is_match(&self, haystack: &str) -> bool {
        self.0.is_match(haystack)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.as_str()).finish()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<Regex> for Pattern {
    #[inline]
    fn from(regex: Regex) -> Self {
        Self(regex)
    }
}

/// A pattern that failed to compile while building a definition.
#[derive(Debug, Clone)]
pub struct PatternError(regex::Error);

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid pattern: {}", self.0)
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}
