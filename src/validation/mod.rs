//! Validator kinds and the definitions that compose them.
//!
//! Each kind is a builder struct created by a free constructor ([`number`],
//! [`string`], [`table`], [`array_of`], [`any_of`], ...). Builders implement
//! [`Validate`] directly and convert into the [`Validator`] tagged union,
//! which is what containers and combinators store.
//!
//! Wherever a child definition is expected, a bare value may stand in for a
//! validator: it is lifted into a [`literal`] check when the enclosing
//! definition is built (see [`Definition`]).
//!
//! # Examples
//!
//! ```
//! use schema_rail::prelude::*;
//!
//! let contact = map()
//!     .required(["email"])
//!     .field("email", string().pattern(Pattern::new(r".+@.+\..+").unwrap()))
//!     .field("kind", any_of(["home", "work"]));
//!
//! let failure = contact
//!     .validate(&table! { "email" => "a@b.io", "kind" => "office" })
//!     .unwrap_err();
//!
//! assert_eq!(failure.code(), Code::Any);
//! assert_eq!(failure.path().to_vec(), vec![Segment::from("kind")]);
//! assert_eq!(failure.branches().len(), 2);
//! ```
pub mod collection;
pub mod container;
pub mod hook;
pub mod logical;
pub mod pattern;
pub mod primitive;

pub use self::collection::*;
pub use self::container::*;
pub use self::hook::{Hook, HookOutcome};
pub use self::logical::*;
pub use self::pattern::*;
pub use self::primitive::*;

use crate::traits::Validate;
use crate::types::{Checked, Function, Table, Value};

/// Any validator, as stored inside containers and combinators.
///
/// Cheap to clone; safe to share across threads and to reuse for any number
/// of validation calls.
#[derive(Debug, Clone)]
pub enum Validator {
    Literal(LiteralValidator),
    Number(NumberValidator),
    String(StringValidator),
    Function(FunctionValidator),
    Table(TableValidator),
    ArrayOf(ArrayOfValidator),
    MapOf(MapOfValidator),
    AnyOf(AnyOfValidator),
    AllOf(AllOfValidator),
}

impl Validate for Validator {
    fn check(&self, value: &Value) -> Checked {
        match self {
            Self::Literal(v) => v.check(value),
            Self::Number(v) => v.check(value),
            Self::String(v) => v.check(value),
            Self::Function(v) => v.check(value),
            Self::Table(v) => v.check(value),
            Self::ArrayOf(v) => v.check(value),
            Self::MapOf(v) => v.check(value),
            Self::AnyOf(v) => v.check(value),
            Self::AllOf(v) => v.check(value),
        }
    }
}

/// A child definition: a validator, or a literal value to compare against.
#[derive(Debug, Clone)]
pub enum Definition {
    Validator(Validator),
    Literal(Value),
}

impl Definition {
    /// Normalizes the definition, lifting a literal into a [`literal`] validator.
    #[inline]
    pub fn into_validator(self) -> Validator {
        match self {
            Self::Validator(validator) => validator,
            Self::Literal(value) => Validator::Literal(LiteralValidator::new(value)),
        }
    }
}

impl From<Validator> for Definition {
    #[inline]
    fn from(validator: Validator) -> Self {
        Self::Validator(validator)
    }
}

macro_rules! impl_literal_definition {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Definition {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::Literal(Value::from(value))
                }
            }
        )*
    };
}

impl_literal_definition!(Value, bool, f64, i32, i64, u32, u64, usize, &str, String, Table, Function);

macro_rules! impl_validator_kind {
    ($($variant:ident => $kind:ty),* $(,)?) => {
        $(
            impl From<$kind> for Validator {
                #[inline]
                fn from(kind: $kind) -> Self {
                    Self::$variant(kind)
                }
            }

            impl From<$kind> for Definition {
                #[inline]
                fn from(kind: $kind) -> Self {
                    Self::Validator(Validator::$variant(kind))
                }
            }
        )*
    };
}

impl_validator_kind!(
    Literal => LiteralValidator,
    Number => NumberValidator,
    String => StringValidator,
    Function => FunctionValidator,
    Table => TableValidator,
    ArrayOf => ArrayOfValidator,
    MapOf => MapOfValidator,
    AnyOf => AnyOfValidator,
    AllOf => AllOfValidator,
);
