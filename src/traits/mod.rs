//! Core traits for validation and failure composition.
//!
//! - [`Validate`]: the one-method interface every validator kind implements
//! - [`ValidationResultExt`]: prepends path segments to failing results
//!
//! # Examples
//!
//! ```
//! use schema_rail::traits::{Validate, ValidationResultExt};
//! use schema_rail::{string, Code, Value};
//!
//! let name = string().minlen(2);
//! let err = name.validate(&Value::from("a")).at("name").unwrap_err();
//!
//! assert_eq!(err.code(), Code::MinLen);
//! assert_eq!(err.path().to_string(), "name");
//! ```

pub mod result_ext;
pub mod validate;

pub use result_ext::ValidationResultExt;
pub use validate::Validate;
