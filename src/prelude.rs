//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides everything needed to define and run schemas.
//! Import everything with:
//!
//! ```
//! use schema_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`table!`], [`array!`]
//! - **Constructors**: [`literal`], [`number`], [`string`], [`boolean`], [`func`],
//!   [`table()`], [`array()`], [`map`], [`array_of`], [`map_of`], [`any_of`], [`all_of`]
//! - **Types**: [`Value`], [`Key`], [`Table`], [`Failure`], [`Code`], [`Segment`],
//!   [`Pattern`], [`Definition`], [`Validator`], [`HookOutcome`]
//! - **Traits**: [`Validate`], [`ValidationResultExt`]
//!
//! # Examples
//!
//! ```
//! use schema_rail::prelude::*;
//!
//! let signup = map()
//!     .required(["email"])
//!     .field("email", string().try_pattern(r".+@.+\..+").unwrap())
//!     .field("phone", string().try_pattern(r"\d{3}-\d{3}-\d{4}").unwrap());
//!
//! let failure = signup
//!     .validate(&table! { "email" => "bad-email", "phone" => "123-456-7890" })
//!     .unwrap_err();
//!
//! assert_eq!(failure.code(), Code::Pattern);
//! assert_eq!(failure.bad_value(), &Value::from("bad-email"));
//! assert_eq!(failure.path().to_vec(), vec![Segment::from("email")]);
//! ```

// Macros, together with the `array`/`table` constructors of the same name
pub use crate::{array, table};

// Constructors
pub use crate::validation::{
    all_of, any_of, array_of, boolean, func, literal, map, map_of, number, string,
};

// Core types
pub use crate::types::{Code, Failure, Function, Key, Path, Segment, Table, ValidationResult, Value};
pub use crate::validation::{Definition, HookOutcome, Pattern, Validator};

// Traits
pub use crate::traits::{Validate, ValidationResultExt};
