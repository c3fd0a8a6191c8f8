//! Type class traits for functional programming abstractions.
//!
//! This module provides the type classes (traits) that `Maybe` is an
//! instance of:
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Lifting values and combining independent contexts
//! - [`Monad`]: Sequencing computations with dependency
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate HKT
//! behavior, allowing Functor and Monad to be defined generically.
//!
//! # Examples
//!
//! ```rust
//! use fs_maybe::control::Maybe;
//! use fs_maybe::typeclass::{Applicative, Monad};
//!
//! let sum = Maybe::present(1).map2(Maybe::present(2), |x, y| x + y);
//! assert_eq!(sum, Maybe::Present(3));
//!
//! let halved = sum.flat_map(|n| if n % 2 == 0 { Maybe::present(n / 2) } else { Maybe::absent() });
//! assert_eq!(halved, Maybe::Absent);
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
