//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust does not natively support Higher-Kinded Types, so a trait cannot
//! abstract over `Maybe<_>` as a type constructor directly. This module uses
//! a GAT to work around that, which is what lets [`Functor`](super::Functor)
//! and [`Monad`](super::Monad) change the inner type of a `Maybe`.
//!
//! # Example
//!
//! ```rust
//! use fs_maybe::control::Maybe;
//! use fs_maybe::typeclass::TypeConstructor;
//!
//! fn transform_type<T: TypeConstructor>(value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let present: Maybe<i32> = Maybe::present(42);
//! let absent: Maybe<String> = transform_type(present);
//! assert_eq!(absent, Maybe::Absent);
//! ```

use crate::control::Maybe;

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` should be the same type as `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Maybe<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}
