//! Type-aware assertion helpers for unit tests.
//!
//! The comparator at the center of this crate decides whether two scalar
//! values are equal, or how they order, across representations: `u64` against
//! `i32`, integers against floats, with no silent wraparound on mixed signs.
//! Strings and booleans only ever equal values of their own kind.
//!
//! The [`Expect`] trait builds test assertions on top of the comparator and
//! reports failures with the asserting call's `file:line`.
//!
//! ```
//! use std::cmp::Ordering;
//! use testexpect::{are_equal, compare};
//!
//! assert!(are_equal(&2.0f64, &2i32).unwrap());
//! assert!(!are_equal("1", &1).unwrap());
//! assert_eq!(compare(&0u64, &-1i64).unwrap(), Some(Ordering::Greater));
//! ```

pub mod compare;
pub mod error;
pub mod expect;
pub mod options;
pub mod report;
pub mod value;

pub use compare::{are_equal, compare};
pub use error::ExpectError;
pub use expect::{Context, Expect};
pub use options::Options;
pub use value::{Canonical, Category, ToValue, Value};
