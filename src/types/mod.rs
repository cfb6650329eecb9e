//! Data model shared by every validator.
//!
//! This module provides the dynamically typed [`Value`] validators inspect and
//! the [`Failure`] they report, together with its [`Code`] vocabulary and
//! [`Path`] of location segments.
//!
//! # Examples
//!
//! ```
//! use schema_rail::{Code, Failure};
//!
//! let failure = Failure::new(Code::Number, "12").within("age").within("user");
//!
//! println!("{}", failure.error_chain());
//! // Output: user -> age -> number (got "12")
//! ```
use smallvec::SmallVec;

pub mod code;
pub mod error_formatter;
pub mod failure;
pub mod path;
pub mod table;
pub mod value;
#[cfg(feature = "serde")]
mod value_serde;

pub use code::*;
pub use failure::*;
pub use path::*;
pub use table::*;
pub use value::*;

/// SmallVec-backed collection used for [`Path`] segments.
///
/// Uses inline storage for up to 1 elements to avoid heap allocations
/// in the common case of shallow nesting.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// Outcome of a public validation call: the accepted value, or why it was rejected.
pub type ValidationResult = Result<Value, Failure>;

/// Outcome of an internal check.
///
/// `Ok(None)` accepts the input unchanged; `Ok(Some(v))` accepts it with a
/// hook-substituted value `v`.
pub type Checked = Result<Option<Value>, Failure>;
