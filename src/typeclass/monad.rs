//! Monad type class - sequencing computations with dependency.
//!
//! A `Monad` chains computations where each step depends on the result of
//! the previous one and may itself fail to produce a value. For `Maybe`,
//! `flat_map` is [`Maybe::bind`]: the first `Absent` ends the chain.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fs_maybe::control::Maybe;
//! use fs_maybe::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Maybe<i32> {
//!     Maybe::from_nullable(text.parse().ok().filter(|n: &i32| *n > 0))
//! }
//!
//! let result = Maybe::present("42").flat_map(parse_positive);
//! assert_eq!(result, Maybe::Present(42));
//!
//! let result = Maybe::present("-1").flat_map(parse_positive);
//! assert_eq!(result, Maybe::Absent);
//! ```

use super::applicative::Applicative;
use crate::control::Maybe;

/// A type class for applicatives that support dependent sequencing.
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// In Haskell, this is `>>=` (bind).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fs_maybe::control::Maybe;
    /// use fs_maybe::typeclass::Monad;
    ///
    /// let x = Maybe::present(5);
    /// assert_eq!(x.flat_map(|n| Maybe::present(n * 2)), Maybe::Present(10));
    ///
    /// let y = Maybe::present(5);
    /// assert_eq!(y.flat_map(|n| if n > 10 { Maybe::present(n) } else { Maybe::absent() }), Maybe::Absent);
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` is the failing case, it propagates and `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fs_maybe::control::Maybe;
    /// use fs_maybe::typeclass::Monad;
    ///
    /// assert_eq!(Maybe::present(5).sequence(Maybe::present("next")), Maybe::Present("next"));
    /// assert_eq!(Maybe::<i32>::absent().sequence(Maybe::present("next")), Maybe::Absent);
    /// ```
    #[inline]
    fn sequence<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.bind(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn maybe_flat_map_present_to_present() {
        let result = Maybe::present(5).flat_map(|n| Maybe::present(n + 1));
        assert_eq!(result, Maybe::Present(6));
    }

    #[rstest]
    fn maybe_flat_map_present_to_absent() {
        let result: Maybe<i32> = Maybe::present(5).flat_map(|_| Maybe::absent());
        assert_eq!(result, Maybe::Absent);
    }

    #[rstest]
    fn maybe_flat_map_absent() {
        let result = Maybe::<i32>::absent().flat_map(|n| Maybe::present(n + 1));
        assert_eq!(result, Maybe::Absent);
    }

    #[rstest]
    fn maybe_sequence_present() {
        assert_eq!(Maybe::present(1).sequence(Maybe::present(2)), Maybe::Present(2));
    }

    #[rstest]
    fn maybe_sequence_propagates_absent_next() {
        let next: Maybe<i32> = Maybe::absent();
        assert_eq!(Maybe::present(1).sequence(next), Maybe::Absent);
    }
}
