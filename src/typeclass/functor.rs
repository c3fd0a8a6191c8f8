//! Functor type class - mapping over container values.
//!
//! This module provides the `Functor` trait, which represents types that can
//! have a function applied to their inner value while preserving the structure.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fs_maybe::control::Maybe;
//! use fs_maybe::typeclass::Functor;
//!
//! fn describe<F: Functor<Inner = i32>>(container: F) -> F::WithType<String> {
//!     Functor::fmap(container, |n| n.to_string())
//! }
//!
//! assert_eq!(describe(Maybe::present(5)), Maybe::Present("5".to_string()));
//! assert_eq!(describe(Maybe::absent()), Maybe::Absent);
//! ```

use super::higher::TypeConstructor;
use crate::control::Maybe;

/// A type class for types that can have a function mapped over their contents.
///
/// The function is applied only where a value exists; the shape of the
/// container never changes. For `Maybe`, `Absent` stays `Absent` and the
/// function is never called.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fs_maybe::control::Maybe;
    /// use fs_maybe::typeclass::Functor;
    ///
    /// let x: Maybe<i32> = Maybe::present(5);
    /// let y: Maybe<i32> = Functor::fmap(x, |n| n * 2);
    /// assert_eq!(y, Maybe::Present(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fs_maybe::control::Maybe;
    /// use fs_maybe::typeclass::Functor;
    ///
    /// let x = Maybe::present("hello".to_string());
    /// let y: Maybe<usize> = x.fmap_ref(|s| s.len());
    /// assert_eq!(y, Maybe::Present(5));
    /// // x is still available here
    /// assert!(x.is_present());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fs_maybe::control::Maybe;
    /// use fs_maybe::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::present(5).replace("replaced"), Maybe::Present("replaced"));
    /// assert_eq!(Maybe::<i32>::absent().replace("replaced"), Maybe::Absent);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        Functor::fmap(self, |_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        Self::fmap(self, function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().fmap(function)
    }
}
