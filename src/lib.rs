//! Runtime schema validation that reports *where* and *why* a value fails.
//!
//! Schemas are trees of validators built once from definitions and reused
//! for any number of checks. Validating a [`Value`] either accepts it or
//! returns a single located [`Failure`]: a machine-readable [`Code`], the
//! offending sub-value, and the [`Path`] of keys and indices leading to it.
//! The `any_of`/`all_of` combinators are the only places several failures
//! are reported together, as branches of one failure.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `schema_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Nested Definitions
//!
//! ```
//! use schema_rail::prelude::*;
//!
//! let orders = map().field(
//!     "items",
//!     array_of(map().field("sku", string()).field("qty", number().min(1.0))),
//! );
//!
//! let input = table! {
//!     "items" => array![
//!         table! { "sku" => "A-1", "qty" => 2 },
//!         table! { "sku" => 42, "qty" => 1 },
//!     ],
//! };
//!
//! let failure = orders.validate(&input).unwrap_err();
//! assert_eq!(failure.code(), Code::String);
//! assert_eq!(failure.path().to_string(), "items[1].sku");
//! ```
//!
//! ## Hooks
//!
//! ```
//! use schema_rail::prelude::*;
//!
//! let trimmed = string().func(|v: &Value| {
//!     HookOutcome::replace(v.as_str().unwrap_or_default().trim())
//! });
//!
//! assert_eq!(trimmed.validate(&Value::from("  hi ")), Ok(Value::from("hi")));
//! ```
//!
//! ## Aggregated Failures
//!
//! ```
//! use schema_rail::prelude::*;
//!
//! let failure = boolean().validate(&Value::from("yes")).unwrap_err();
//!
//! assert_eq!(failure.code(), Code::Any);
//! assert_eq!(failure.root_causes().len(), 2);
//! ```
#![forbid(unsafe_code)]

/// Macros for building candidate values
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits for validation and failure composition
pub mod traits;
/// Value model, failure codes, paths and failures
pub mod types;
/// Validator kinds, definitions and hooks
pub mod validation;

pub use traits::*;
pub use types::{
    error_formatter::ErrorFormatConfig, Checked, Code, ErrorVec, Failure, Function, Key, Path,
    Segment, Table, ValidationResult, Value,
};
pub use validation::*;
