//! Locations of failures inside nested values.

use crate::types::{ErrorVec, Key, Value};
use core::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One step of a [`Path`].
///
/// Containers contribute [`Key`] segments. A `map_of` value failure also
/// records the offending value itself right after its key.
///
/// With the `serde` feature a key segment is written as a plain integer or
/// string, and a value segment as `{"value": ...}`.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Key(Key),
    Value(Value),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => fmt::Display::fmt(key, f),
            Self::Value(value) => write!(f, "<{value}>"),
        }
    }
}

impl From<Key> for Segment {
    #[inline]
    fn from(key: Key) -> Self {
        Self::Key(key)
    }
}

impl From<&str> for Segment {
    #[inline]
    fn from(name: &str) -> Self {
        Self::Key(Key::from(name))
    }
}

impl From<i64> for Segment {
    #[inline]
    fn from(index: i64) -> Self {
        Self::Key(Key::Index(index))
    }
}

impl From<i32> for Segment {
    #[inline]
    fn from(index: i32) -> Self {
        Self::Key(Key::from(index))
    }
}

impl From<usize> for Segment {
    #[inline]
    fn from(index: usize) -> Self {
        Self::Key(Key::from(index))
    }
}

impl From<Value> for Segment {
    #[inline]
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

/// Outer-to-inner location of a failure.
///
/// Segments are pushed innermost first while a failure bubbles out through
/// its enclosing containers; every accessor presents them outermost first.
/// An empty path means the failure is about the value passed to the
/// outermost validator itself.
///
/// # Examples
///
/// ```
/// use schema_rail::{Path, Segment};
///
/// let mut path = Path::root();
/// path.wrap("street");
/// path.wrap("address");
///
/// assert_eq!(path.to_vec(), vec![Segment::from("address"), Segment::from("street")]);
/// assert_eq!(path.to_string(), "address.street");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<Segment>", into = "Vec<Segment>"))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    innermost_first: ErrorVec<Segment>,
}

impl Path {
    #[inline]
    pub fn root() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.innermost_first.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.innermost_first.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.is_root()
    }

    /// Places the path inside `segment`, making it the new outermost step.
    #[inline]
    pub fn wrap<S: Into<Segment>>(&mut self, segment: S) {
        self.innermost_first.push(segment.into());
    }

    /// Segments from the outermost container inwards.
    #[inline]
    pub fn iter(&self) -> core::iter::Rev<core::slice::Iter<'_, Segment>> {
        self.innermost_first.iter().rev()
    }

    #[inline]
    pub fn first(&self) -> Option<&Segment> {
        self.innermost_first.last()
    }

    #[inline]
    pub fn last(&self) -> Option<&Segment> {
        self.innermost_first.first()
    }

    pub fn to_vec(&self) -> Vec<Segment> {
        self.iter().cloned().collect()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.iter().enumerate() {
            let bracketed = matches!(segment, Segment::Key(Key::Index(_)) | Segment::Value(_));
            if i > 0 && !bracketed {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Builds a path from segments listed outermost first.
impl From<Vec<Segment>> for Path {
    fn from(outer_to_inner: Vec<Segment>) -> Self {
        Self { innermost_first: outer_to_inner.into_iter().rev().collect() }
    }
}

impl From<Path> for Vec<Segment> {
    fn from(path: Path) -> Self {
        path.innermost_first.into_iter().rev().collect()
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Segment;
    type IntoIter = core::iter::Rev<core::slice::Iter<'a, Segment>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
