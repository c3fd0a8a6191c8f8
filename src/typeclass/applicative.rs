//! Applicative type class - combining independent computations.
//!
//! `Applicative` extends [`Functor`] with the ability to lift a plain value
//! into the context and to combine several values that are each in the
//! context. For `Maybe`, a combination is `Present` only when every operand
//! is `Present`.
//!
//! # Laws
//!
//! ```text
//! pure(id).apply(v) == v                         (identity)
//! pure(f).apply(pure(x)) == pure(f(x))           (homomorphism)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fs_maybe::control::Maybe;
//! use fs_maybe::typeclass::Applicative;
//!
//! let width = Maybe::present(3);
//! let height = Maybe::present(4);
//! assert_eq!(width.map2(height, |w, h| w * h), Maybe::Present(12));
//!
//! let unknown: Maybe<i32> = Maybe::absent();
//! assert_eq!(width.map2(unknown, |w, h| w * h), Maybe::Absent);
//! ```

use super::functor::Functor;
use crate::control::Maybe;

/// A type class for functors that can lift values and combine contexts.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fs_maybe::control::Maybe;
    /// use fs_maybe::typeclass::Applicative;
    ///
    /// let x: Maybe<i32> = <Maybe<()>>::pure(42);
    /// assert_eq!(x, Maybe::Present(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Applies a function held in `self` to a value held in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fs_maybe::control::Maybe;
    /// use fs_maybe::typeclass::Applicative;
    ///
    /// let increment: Maybe<fn(i32) -> i32> = Maybe::present(|n| n + 1);
    /// assert_eq!(increment.apply(Maybe::present(1)), Maybe::Present(2));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;

    /// Pairs two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Present(a), Maybe::Present(b)) => Maybe::Present(function(a, b)),
            (Self::Present(_) | Self::Absent, Maybe::Absent) | (Self::Absent, Maybe::Present(_)) => {
                Maybe::Absent
            }
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}
