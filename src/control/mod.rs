//! Control structures for optional values.
//!
//! - [`Maybe`]: A value that is either `Present` or `Absent`
//! - [`AbsentValueError`]: The error returned when forcing a value out of `Absent`
//!
//! # Examples
//!
//! ## Short-Circuiting Chains
//!
//! ```rust
//! use fs_maybe::control::Maybe;
//!
//! let checked_div = |divisor: i32| move |value: i32| {
//!     Maybe::from_nullable(value.checked_div(divisor))
//! };
//!
//! assert_eq!(Maybe::present(100).bind(checked_div(5)).bind(checked_div(2)), Maybe::Present(10));
//! assert_eq!(Maybe::present(100).bind(checked_div(0)).bind(checked_div(2)), Maybe::Absent);
//! ```
//!
//! ## Safe and Unsafe Extraction
//!
//! ```rust
//! use fs_maybe::control::{AbsentValueError, Maybe};
//!
//! let nothing: Maybe<i32> = Maybe::absent();
//! assert_eq!(nothing.value_or_default(0), 0);
//! assert_eq!(nothing.value_or_fail(), Err(AbsentValueError));
//! ```

mod error;
mod maybe;

pub use error::AbsentValueError;
pub use maybe::{Maybe, MaybeBool, MaybeBoolean, MaybeNumber, MaybeString};
