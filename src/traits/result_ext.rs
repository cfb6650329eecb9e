//! Extension trait for locating failures as they leave a container.
//!
//! This module provides [`ValidationResultExt`], which prepends path
//! segments to failures without verbose `.map_err()` chains.
//!
//! # Examples
//!
//! ```
//! use schema_rail::traits::ValidationResultExt;
//! use schema_rail::{Code, Failure, Segment};
//!
//! let inner: Result<(), Failure> = Err(Failure::new(Code::String, 3));
//! let located = inner.at("name").at("user");
//!
//! assert_eq!(
//!     located.unwrap_err().path().to_vec(),
//!     vec![Segment::from("user"), Segment::from("name")]
//! );
//! ```

use crate::types::{Failure, Segment};

/// Extension trait for placing a failing result inside an enclosing container.
///
/// # Performance
///
/// [`at_with`](ValidationResultExt::at_with) builds the segment lazily,
/// so the success path of a container never clones its keys.
pub trait ValidationResultExt<T> {
    /// Wraps an error's path in `segment`.
    fn at<S: Into<Segment>>(self, segment: S) -> Result<T, Failure>;

    /// Wraps an error's path in a segment built only on failure.
    fn at_with<S, F>(self, segment: F) -> Result<T, Failure>
    where
        S: Into<Segment>,
        F: FnOnce() -> S;
}

impl<T> ValidationResultExt<T> for Result<T, Failure> {
    #[inline]
    fn at<S: Into<Segment>>(self, segment: S) -> Result<T, Failure> {
        self.map_err(|failure| failure.within(segment))
    }

    #[inline]
    fn at_with<S, F>(self, segment: F) -> Result<T, Failure>
    where
        S: Into<Segment>,
        F: FnOnce() -> S,
    {
        self.map_err(|failure| failure.within(segment()))
    }
}
