//! Error type for forced extraction from a `Maybe`.
//!
//! [`Maybe::value_or_fail`](super::Maybe::value_or_fail) is the one partial
//! operation on `Maybe`. When it meets an `Absent` value it returns this
//! error instead of producing a value.

/// Represents an attempt to force a value out of an `Absent` maybe.
///
/// # Examples
///
/// ```rust
/// use fs_maybe::control::{AbsentValueError, Maybe};
///
/// let nothing: Maybe<i32> = Maybe::absent();
/// assert_eq!(nothing.value_or_fail(), Err(AbsentValueError));
/// assert_eq!(
///     format!("{}", AbsentValueError),
///     "value_or_fail called on an Absent value"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AbsentValueError;

impl std::fmt::Display for AbsentValueError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("value_or_fail called on an Absent value")
    }
}

impl std::error::Error for AbsentValueError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_absent_value_error_display() {
        assert_eq!(
            format!("{AbsentValueError}"),
            "value_or_fail called on an Absent value"
        );
    }

    #[rstest]
    fn test_absent_value_error_is_std_error() {
        fn describe(error: &dyn std::error::Error) -> String {
            error.to_string()
        }

        assert_eq!(
            describe(&AbsentValueError),
            "value_or_fail called on an Absent value"
        );
        assert!(std::error::Error::source(&AbsentValueError).is_none());
    }

    #[rstest]
    fn test_absent_value_error_boxes_into_dyn_error() {
        let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(AbsentValueError);
        assert_eq!(boxed.to_string(), "value_or_fail called on an Absent value");
    }
}
