//! Keyed container used for both maps and arrays.

use crate::types::Value;
use core::fmt;
use std::collections::btree_map::{self, BTreeMap};

/// Key of a [`Table`] entry: an integer index or a name.
///
/// Indices order before names, so iterating a table visits its array part
/// first, then its named fields alphabetically.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    Index(i64),
    Name(String),
}

impl Key {
    #[inline]
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Self::Index(i) => Some(*i),
            Self::Name(_) => None,
        }
    }

    #[inline]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Index(_) => None,
            Self::Name(name) => Some(name),
        }
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Name(name) => write!(f, "{name:?}"),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "[{i}]"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<&str> for Key {
    #[inline]
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for Key {
    #[inline]
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<&String> for Key {
    #[inline]
    fn from(name: &String) -> Self {
        Self::Name(name.clone())
    }
}

impl From<i64> for Key {
    #[inline]
    fn from(index: i64) -> Self {
        Self::Index(index)
    }
}

impl From<i32> for Key {
    #[inline]
    fn from(index: i32) -> Self {
        Self::Index(i64::from(index))
    }
}

/// Indices above `i64::MAX` saturate to `i64::MAX`.
impl From<usize> for Key {
    #[inline]
    fn from(index: usize) -> Self {
        Self::Index(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

/// Ordered associative container mapping [`Key`]s to [`Value`]s.
///
/// A table is an "array" when it holds entries under the contiguous indices
/// `0, 1, 2, ...`; [`sequence_len`](Table::sequence_len) measures that part.
///
/// # Examples
///
/// ```
/// use schema_rail::{Table, Value};
///
/// let mut t: Table = vec![Value::from("a"), Value::from("b")].into_iter().collect();
/// t.insert("name", "list");
///
/// assert_eq!(t.len(), 3);
/// assert_eq!(t.sequence_len(), 2);
/// assert_eq!(t.get("name"), Some(&Value::from("list")));
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct Table {
    entries: BTreeMap<Key, Value>,
    // always equal to the count of contiguous indices from 0
    sequence_len: usize,
}

impl Table {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, returning the value previously stored under `key`.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<Value>
    where
        K: Into<Key>,
        V: Into<Value>,
    {
        let key = key.into();
        let extends_sequence = key == Key::Index(self.sequence_len as i64);
        let previous = self.entries.insert(key, value.into());
        if extends_sequence {
            self.grow_sequence();
        }
        previous
    }

    /// Appends `value` right after the current array part.
    #[inline]
    pub fn push<V: Into<Value>>(&mut self, value: V) {
        self.entries.insert(Key::Index(self.sequence_len as i64), value.into());
        self.grow_sequence();
    }

    pub fn remove<K: Into<Key>>(&mut self, key: K) -> Option<Value> {
        let key = key.into();
        let removed = self.entries.remove(&key)?;
        if let Key::Index(index) = key {
            if (0..self.sequence_len as i64).contains(&index) {
                self.sequence_len = index as usize;
            }
        }
        Some(removed)
    }

    fn grow_sequence(&mut self) {
        while self.entries.contains_key(&Key::Index(self.sequence_len as i64)) {
            self.sequence_len += 1;
        }
    }

    #[inline]
    pub fn get<K: Into<Key>>(&self, key: K) -> Option<&Value> {
        self.entries.get(&key.into())
    }

    #[inline]
    pub fn get_key(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries, named and indexed alike.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length of the array part: the count of contiguous indices from `0`.
    #[inline]
    pub fn sequence_len(&self) -> usize {
        self.sequence_len
    }

    /// Iterates the array part in index order.
    #[inline]
    pub fn sequence(&self) -> impl Iterator<Item = &Value> + '_ {
        self.entries.range(Key::Index(0)..).take(self.sequence_len()).map(|(_, value)| value)
    }

    /// Iterates every entry in key order.
    #[inline]
    pub fn iter(&self) -> btree_map::Iter<'_, Key, Value> {
        self.entries.iter()
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl FromIterator<Value> for Table {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut table = Self::new();
        for value in iter {
            table.push(value);
        }
        table
    }
}

impl FromIterator<(Key, Value)> for Table {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        let mut table = Self { entries: iter.into_iter().collect(), sequence_len: 0 };
        table.grow_sequence();
        table
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = (&'a Key, &'a Value);
    type IntoIter = btree_map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Table {
    type Item = (Key, Value);
    type IntoIter = btree_map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
