//! Boolean and matcher assertions, plus unconditional failure.

use std::fmt::Debug;

use hamcrest2::core::Matcher;
use ut_core::check;

use crate::raise::{enforce, raise};

/// Requires `condition` to be true.
#[track_caller]
pub fn yes(condition: bool) {
    yes_msg(condition, "");
}

/// Requires `condition` to be true, failing with `message` otherwise.
#[track_caller]
pub fn yes_msg(condition: bool, message: &str) {
    enforce(check::yes(condition, message));
}

/// Requires `condition` to be false.
#[track_caller]
pub fn no(condition: bool) {
    no_msg(condition, "");
}

/// Requires `condition` to be false, failing with `message` otherwise.
#[track_caller]
pub fn no_msg(condition: bool, message: &str) {
    enforce(check::no(condition, message));
}

/// Requires `actual` to satisfy `matcher`.
///
/// ```should_panic
/// use hamcrest2::prelude::equal_to;
///
/// let n = 0;
/// ut::yes_that(n, equal_to(1));
/// // Expected: 1
/// //      but: was 0
/// ```
#[track_caller]
pub fn yes_that<T, M: Matcher<T>>(actual: T, matcher: M) {
    yes_that_msg(actual, matcher, "");
}

/// Like [`yes_that`], with `message` on the first line of the failure.
#[track_caller]
pub fn yes_that_msg<T, M: Matcher<T>>(actual: T, matcher: M, message: &str) {
    enforce(check::yes_that(actual, &matcher, message));
}

/// Requires `actual` **not** to satisfy `matcher`.
#[track_caller]
pub fn no_that<T: Debug, M: Matcher<T>>(actual: T, matcher: M) {
    no_that_msg(actual, matcher, "");
}

/// Like [`no_that`], with `message` on the first line of the failure.
#[track_caller]
pub fn no_that_msg<T: Debug, M: Matcher<T>>(actual: T, matcher: M, message: &str) {
    enforce(check::no_that(actual, &matcher, message));
}

/// Fails unconditionally with `message`.
#[track_caller]
pub fn fail(message: &str) -> ! {
    raise(check::fail(message))
}
