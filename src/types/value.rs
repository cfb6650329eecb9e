//! Dynamically typed values accepted by the validators.
//!
//! [`Value`] models loosely typed external data: scalars, strings, keyed
//! [`Table`]s (which double as arrays through their integer keys) and opaque
//! callables. There is no "null" variant; an absent value is `None` at the
//! place where it is looked up.

use crate::types::{Key, Table};
use core::fmt;
use std::sync::Arc;

/// A candidate value handed to a validator.
///
/// # Examples
///
/// ```
/// use schema_rail::Value;
///
/// let v = Value::from("hello");
/// assert_eq!(v.as_str(), Some("hello"));
/// assert_eq!(v.type_name(), "string");
/// ```
#[derive(Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Number(f64),
    String(String),
    Table(Table),
    Function(Function),
}

impl Value {
    /// Returns the name of the value's type, as used in diagnostics.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Table(_) => "table",
            Self::Function(_) => "function",
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Self::Table(t) => Some(t),
            _ => None,
        }
    }

    #[inline]
    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(f) => Some(f),
            _ => None,
        }
    }

    #[inline]
    pub fn is_table(&self) -> bool {
        matches!(self, Self::Table(_))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Table(t) => fmt::Debug::fmt(t, f),
            Self::Function(func) => fmt::Debug::fmt(func, f),
        }
    }
}

/// Renders scalars plainly and strings quoted, so a bad value stays
/// distinguishable from the code it is reported with.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for Value {
    #[inline]
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Table> for Value {
    #[inline]
    fn from(value: Table) -> Self {
        Self::Table(value)
    }
}

impl From<Function> for Value {
    #[inline]
    fn from(value: Function) -> Self {
        Self::Function(value)
    }
}

impl From<Key> for Value {
    #[inline]
    fn from(key: Key) -> Self {
        match key {
            Key::Index(i) => Self::Number(i as f64),
            Key::Name(name) => Self::String(name),
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self::Table(items.into_iter().map(Into::into).collect())
    }
}

type NativeFn = dyn Fn(&[Value]) -> Option<Value> + Send + Sync;

/// A shared callable stored inside a [`Value`].
///
/// Two functions are equal only when they share the same allocation, so
/// cloning a `Function` keeps it equal to the original.
///
/// # Examples
///
/// ```
/// use schema_rail::{Function, Value};
///
/// let double = Function::new(|args| args.first()?.as_number().map(|n| Value::from(n * 2.0)));
/// assert_eq!(double.call(&[Value::from(21)]), Some(Value::from(42)));
/// assert_eq!(double.clone(), double);
/// ```
#[derive(Clone)]
pub struct Function(Arc<NativeFn>);

impl Function {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Option<Value> + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    #[inline]
    pub fn call(&self, args: &[Value]) -> Option<Value> {
        (self.0)(args)
    }

    /// Stable identity of the underlying allocation.
    #[inline]
    pub(crate) fn addr(&self) -> usize {
        Arc::as_ptr(&self.0) as *const () as usize
    }
}

impl PartialEq for Function {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "function: {:#x}", self.addr())
    }
}
