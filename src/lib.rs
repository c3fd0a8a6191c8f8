//! # fs-maybe
//!
//! An optional value type, [`Maybe`](control::Maybe), with monadic
//! combinators for composing computations that may or may not produce a
//! value.
//!
//! ## Overview
//!
//! - **`Maybe<V>`**: either `Present(V)` or `Absent`, with construction,
//!   inspection, mapping, chaining, defaulted and forced extraction, and
//!   two-callback unwrapping
//! - **Type Classes**: `Functor`, `Applicative` and `Monad` instances for
//!   `Maybe`
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (enabled by default)
//! - `serde`: Serialize `Maybe` the way `Option` is serialized
//! - `tracing`: Emit a debug event when `value_or_fail` meets `Absent`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fs_maybe::prelude::*;
//!
//! let result = Maybe::present(5)
//!     .fmap(|value| value * 2)
//!     .value_or_default(-1);
//! assert_eq!(result, 10);
//!
//! let nothing: Maybe<i32> = Maybe::absent();
//! assert_eq!(nothing.value_or_fail(), Err(AbsentValueError));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fs_maybe::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod control;

#[cfg(feature = "typeclass")]
pub mod typeclass;
