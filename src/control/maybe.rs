//! Maybe type - a value that may or may not be present.
//!
//! This module provides the `Maybe<V>` type, which is either `Present(V)`,
//! holding exactly one value, or `Absent`, holding nothing. It is used to
//! compose computations that may produce no value without reaching for
//! sentinel values or panics.
//!
//! Once any step of a chain yields `Absent`, every following
//! [`bind`](Maybe::bind) or [`fmap`](Maybe::fmap) short-circuits and the
//! chain stays `Absent`.
//!
//! # Examples
//!
//! ```rust
//! use fs_maybe::control::Maybe;
//!
//! fn find(haystack: &[i32], needle: i32) -> Maybe<i32> {
//!     Maybe::from_nullable(haystack.iter().copied().find(|element| *element == needle))
//! }
//!
//! let numbers = [1, 2, 3, 4, 56, 7, 8, 9, 12];
//!
//! let found = find(&numbers, 12)
//!     .then(|value| Maybe::present(value + 32))
//!     .then(|value| find(&numbers, value))
//!     .then(|value| Maybe::present(value - 2));
//!
//! assert!(found.is_absent());
//! assert_eq!(found.value_or_default(0), 0);
//! ```

use std::fmt;

use super::error::AbsentValueError;

/// A value that is either present or absent.
///
/// `Maybe<V>` is a closed union of two variants. There is no third state,
/// and no operation changes the variant of an existing value: every
/// combinator consumes `self` and builds a new `Maybe`.
///
/// `Absent` carries no payload but is still typed over `V`, so chains of
/// combinators infer their types without annotations at every step.
///
/// # Type Parameters
///
/// * `V` - The type of the value held by `Present`
///
/// # Examples
///
/// ```rust
/// use fs_maybe::control::Maybe;
///
/// let five: Maybe<i32> = Maybe::present(5);
/// let doubled = five.fmap(|value| value * 2);
/// assert_eq!(doubled.value_or_default(-1), 10);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<V> {
    /// The variant holding a value.
    Present(V),
    /// The variant holding no value.
    Absent,
}

/// A `Maybe` holding a `String`.
pub type MaybeString = Maybe<String>;

/// A `Maybe` holding a floating point number.
pub type MaybeNumber = Maybe<f64>;

/// A `Maybe` holding a `bool`.
pub type MaybeBool = Maybe<bool>;

/// A `Maybe` holding a `bool`.
pub type MaybeBoolean = Maybe<bool>;

impl<V> Maybe<V> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value in `Present`.
    ///
    /// The value is stored verbatim, even when `V` is itself an `Option`:
    /// `Maybe::present(None::<i32>)` is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fs_maybe::control::Maybe;
    ///
    /// let nested: Maybe<Option<i32>> = Maybe::present(None);
    /// assert!(nested.is_present());
    /// ```
    #[inline]
    pub const fn present(value: V) -> Self {
        Self::Present(value)
    }

    /// Creates the `Absent` variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fs_maybe::control::Maybe;
    ///
    /// let nothing = Maybe::<i32>::absent();
    /// assert!(nothing.is_absent());
    /// ```
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Converts a nullable `Option` into a `Maybe`.
    ///
    /// `None` becomes `Absent` and `Some(value)` becomes `Present(value)`.
    /// This is the bridge from code that signals absence with `Option`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fs_maybe::control::Maybe;
    ///
    /// assert_eq!(Maybe::from_nullable(Some(5)), Maybe::Present(5));
    /// assert_eq!(Maybe::<i32>::from_nullable(None), Maybe::Absent);
    /// ```
    #[inline]
    pub fn from_nullable(input: Option<V>) -> Self {
        match input {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if this is a `Present` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fs_maybe::control::Maybe;
    ///
    /// assert!(Maybe::present(0).is_present());
    /// assert!(!Maybe::<i32>::absent().is_present());
    /// ```
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if this is the `Absent` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fs_maybe::control::Maybe;
    ///
    /// assert!(Maybe::<i32>::absent().is_absent());
    /// assert!(!Maybe::present(0).is_absent());
    /// ```
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Borrows the payload, producing a `Maybe<&V>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fs_maybe::control::Maybe;
    ///
    /// let name = Maybe::present("maybe".to_string());
    /// assert_eq!(name.as_ref().fmap(|text| text.len()), Maybe::Present(5));
    /// assert!(name.is_present());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&V> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the payload, or `default` if this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fs_maybe::control::Maybe;
    ///
    /// assert_eq!(Maybe::present(5).value_or_default(12), 5);
    /// assert_eq!(Maybe::absent().value_or_default(12), 12);
    /// ```
    #[inline]
    pub fn value_or_default(self, default: V) -> V {
        match self {
            Self::Present(value) => value,
            Self::Absent => default,
        }
    }

    /// Alias for [`value_or_default`](Self::value_or_default).
    #[inline]
    pub fn from_maybe(self, default: V) -> V {
        self.value_or_default(default)
    }

    /// Returns the payload, or the result of `function` if this is `Absent`.
    ///
    /// `function` is only invoked for `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fs_maybe::control::Maybe;
    ///
    /// let nothing: Maybe<String> = Maybe::absent();
    /// assert_eq!(nothing.value_or_else(|| "fallback".to_string()), "fallback");
    /// ```
    #[inline]
    pub fn value_or_else<F>(self, function: F) -> V
    where
        F: FnOnce() -> V,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => function(),
        }
    }

    /// Returns the payload, or an [`AbsentValueError`] if this is `Absent`.
    ///
    /// This is the unsafe extraction path: absence becomes a caller-visible
    /// failure. Use [`value_or_default`](Self::value_or_default) or
    /// [`match_with`](Self::match_with) for total handling.
    ///
    /// # Errors
    ///
    /// Returns [`AbsentValueError`] if this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fs_maybe::control::{AbsentValueError, Maybe};
    ///
    /// assert_eq!(Maybe::present(5).value_or_fail(), Ok(5));
    /// assert_eq!(Maybe::<i32>::absent().value_or_fail(), Err(AbsentValueError));
    /// ```
    #[inline]
    pub fn value_or_fail(self) -> Result<V, AbsentValueError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    value_type = std::any::type_name::<V>(),
                    "value_or_fail called on an Absent value"
                );
                Err(AbsentValueError)
            }
        }
    }

    /// Alias for [`value_or_fail`](Self::value_or_fail).
    ///
    /// # Errors
    ///
    /// Returns [`AbsentValueError`] if this is `Absent`.
    #[inline]
    pub fn from_just(self) -> Result<V, AbsentValueError> {
        self.value_or_fail()
    }

    /// Converts the `Maybe` back into an `Option`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fs_maybe::control::Maybe;
    ///
    /// assert_eq!(Maybe::present(1).into_option(), Some(1));
    /// assert_eq!(Maybe::<i32>::absent().into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(self) -> Option<V> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    // =========================================================================
    // Transformation and Composition
    // =========================================================================

    /// Applies a function to the payload if present.
    ///
    /// If this is `Present(v)`, returns `Present(function(v))`.
    /// If this is `Absent`, returns `Absent` without invoking `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fs_maybe::control::Maybe;
    ///
    /// assert_eq!(Maybe::present(5).fmap(|value| value * 2), Maybe::Present(10));
    /// assert_eq!(Maybe::<i32>::absent().fmap(|value| value * 2), Maybe::Absent);
    /// ```
    #[inline]
    pub fn fmap<Vo, F>(self, function: F) -> Maybe<Vo>
    where
        F: FnOnce(V) -> Vo,
    {
        match self {
            Self::Present(value) => Maybe::Present(function(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Alias for [`fmap`](Self::fmap).
    #[inline]
    pub fn map<Vo, F>(self, function: F) -> Maybe<Vo>
    where
        F: FnOnce(V) -> Vo,
    {
        self.fmap(function)
    }

    /// Chains a computation that may itself produce absence.
    ///
    /// If this is `Present(v)`, returns `function(v)` verbatim.
    /// If this is `Absent`, returns `Absent` without invoking `function`,
    /// so the rest of the chain stays `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fs_maybe::control::Maybe;
    ///
    /// let halve = |value: i32| {
    ///     if value % 2 == 0 { Maybe::present(value / 2) } else { Maybe::absent() }
    /// };
    ///
    /// assert_eq!(Maybe::present(8).bind(halve).bind(halve), Maybe::Present(2));
    /// assert_eq!(Maybe::present(6).bind(halve).bind(halve), Maybe::Absent);
    /// ```
    #[inline]
    pub fn bind<Vo, F>(self, function: F) -> Maybe<Vo>
    where
        F: FnOnce(V) -> Maybe<Vo>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Alias for [`bind`](Self::bind), reading naturally in method chains.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fs_maybe::control::Maybe;
    ///
    /// let result = Maybe::present(1)
    ///     .then(|value| Maybe::present(value + 1))
    ///     .then(|value| Maybe::present(value * 10));
    /// assert_eq!(result, Maybe::Present(20));
    /// ```
    #[inline]
    pub fn then<Vo, F>(self, function: F) -> Maybe<Vo>
    where
        F: FnOnce(V) -> Maybe<Vo>,
    {
        self.bind(function)
    }

    /// Alias for [`bind`](Self::bind) matching `Option::and_then`.
    #[inline]
    pub fn and_then<Vo, F>(self, function: F) -> Maybe<Vo>
    where
        F: FnOnce(V) -> Maybe<Vo>,
    {
        self.bind(function)
    }

    /// Continues with `function` regardless of the variant.
    ///
    /// The current value is discarded and `function` is invoked exactly
    /// once for both `Present` and `Absent`. Unlike [`bind`](Self::bind),
    /// this recovers from absence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fs_maybe::control::Maybe;
    ///
    /// let nothing: Maybe<i32> = Maybe::absent();
    /// assert_eq!(nothing.always(|| Maybe::present("next")), Maybe::Present("next"));
    /// ```
    #[inline]
    pub fn always<Vo, F>(self, function: F) -> Maybe<Vo>
    where
        F: FnOnce() -> Maybe<Vo>,
    {
        match self {
            Self::Present(_) | Self::Absent => function(),
        }
    }

    // =========================================================================
    // Total Unwrapping
    // =========================================================================

    /// Eliminates the `Maybe` by applying one of two callbacks.
    ///
    /// Exactly one callback runs, exactly once, and its result is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fs_maybe::control::Maybe;
    ///
    /// let describe = |maybe: Maybe<i32>| {
    ///     maybe.match_with(|value| format!("found {value}"), || "nothing".to_string())
    /// };
    ///
    /// assert_eq!(describe(Maybe::present(5)), "found 5");
    /// assert_eq!(describe(Maybe::absent()), "nothing");
    /// ```
    #[inline]
    pub fn match_with<Vo, F, G>(self, on_present: F, on_absent: G) -> Vo
    where
        F: FnOnce(V) -> Vo,
        G: FnOnce() -> Vo,
    {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent(),
        }
    }

    /// Same as [`match_with`](Self::match_with).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fs_maybe::control::Maybe;
    ///
    /// let nothing: Maybe<i32> = Maybe::absent();
    /// assert_eq!(nothing.unbox(|value| value, || 0), 0);
    /// ```
    #[inline]
    pub fn unbox<Vo, F, G>(self, on_present: F, on_absent: G) -> Vo
    where
        F: FnOnce(V) -> Vo,
        G: FnOnce() -> Vo,
    {
        self.match_with(on_present, on_absent)
    }
}

impl<V> Maybe<Maybe<V>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fs_maybe::control::Maybe;
    ///
    /// assert_eq!(Maybe::present(Maybe::present(1)).flatten(), Maybe::Present(1));
    /// assert_eq!(Maybe::present(Maybe::<i32>::absent()).flatten(), Maybe::Absent);
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<V> {
        self.bind(|inner| inner)
    }
}

impl<V> Default for Maybe<V> {
    /// Returns `Absent`.
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<V: fmt::Debug> fmt::Debug for Maybe<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => formatter.debug_tuple("Present").field(value).finish(),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<V> From<Option<V>> for Maybe<V> {
    /// Converts an `Option` into a `Maybe` via [`Maybe::from_nullable`].
    #[inline]
    fn from(input: Option<V>) -> Self {
        Self::from_nullable(input)
    }
}

impl<V> From<Maybe<V>> for Option<V> {
    #[inline]
    fn from(maybe: Maybe<V>) -> Self {
        maybe.into_option()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<V> serde::Serialize for Maybe<V>
where
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, V> serde::Deserialize<'de> for Maybe<V>
where
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Option<V> as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::from_nullable)
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Maybe<String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Maybe<std::rc::Rc<i32>>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_present_construction() {
        let value: Maybe<i32> = Maybe::present(42);
        assert!(value.is_present());
        assert!(!value.is_absent());
    }

    #[rstest]
    fn test_absent_construction() {
        let value: Maybe<i32> = Maybe::absent();
        assert!(value.is_absent());
        assert!(!value.is_present());
    }

    #[rstest]
    fn test_default_is_absent() {
        assert_eq!(Maybe::<String>::default(), Maybe::Absent);
    }

    #[rstest]
    #[case(Maybe::Present(3), "Present(3)")]
    #[case(Maybe::Absent, "Absent")]
    fn test_debug_format(#[case] maybe: Maybe<i32>, #[case] expected: &str) {
        assert_eq!(format!("{maybe:?}"), expected);
    }

    #[rstest]
    fn test_fmap_skips_function_on_absent() {
        let calls = Cell::new(0);
        let result = Maybe::<i32>::absent().fmap(|value| {
            calls.set(calls.get() + 1);
            value + 1
        });
        assert_eq!(result, Maybe::Absent);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_always_runs_for_both_variants() {
        let calls = Cell::new(0);
        let next = || {
            calls.set(calls.get() + 1);
            Maybe::present("next")
        };

        assert_eq!(Maybe::present(1).always(next), Maybe::Present("next"));
        assert_eq!(Maybe::<i32>::absent().always(next), Maybe::Present("next"));
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn test_option_conversion_roundtrip() {
        let some: Maybe<i32> = Some(42).into();
        let back: Option<i32> = some.into();
        assert_eq!(back, Some(42));

        let none: Maybe<i32> = None.into();
        let back: Option<i32> = none.into();
        assert_eq!(back, None);
    }
}
