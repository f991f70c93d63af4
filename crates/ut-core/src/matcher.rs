//! Closure adapter for the host matcher trait.

use std::fmt::{self, Debug, Display};

use hamcrest2::core::{MatchResult, Matcher};

/// Matcher built from a description and a predicate, see [`satisfies`].
pub struct Satisfies<F> {
    description: String,
    predicate: F,
}

/// Wraps `predicate` into a host matcher described by `description`.
///
/// ```
/// use hamcrest2::core::Matcher;
/// use ut_core::satisfies;
///
/// let even = satisfies("an even number", |n: &i32| n % 2 == 0);
/// assert!(Matcher::<i32>::matches(&even, 4).is_ok());
/// assert_eq!(Matcher::<i32>::matches(&even, 3), Err("was 3".to_string()));
/// ```
pub fn satisfies<F>(description: impl Into<String>, predicate: F) -> Satisfies<F> {
    Satisfies {
        description: description.into(),
        predicate,
    }
}

impl<F> Display for Satisfies<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

impl<T, F> Matcher<T> for Satisfies<F>
where
    T: Debug,
    F: Fn(&T) -> bool,
{
    fn matches(&self, actual: T) -> MatchResult {
        if (self.predicate)(&actual) {
            Ok(())
        } else {
            Err(format!("was {actual:?}"))
        }
    }
}
