//! One check per facade operation.
//!
//! `message` is the already resolved user message, `""` when none was given.
//! Checks never panic: a false condition comes back as
//! [`AssertError::Assertion`], a caller bug as [`AssertError::Precondition`].

use std::fmt::Debug;
use std::ptr;

use hamcrest2::core::Matcher;

use crate::approx::Approx;
use crate::criteria::Criteria;
use crate::errors::{codes, AssertError, FailureInfo};
use crate::message::{above, or_default, prefixed};
use crate::operand::{Operand, View};
use crate::state::{Emptiness, Text};
use crate::tolerance::Tolerance;

fn failure(code: &str, message: String) -> AssertError {
    AssertError::assertion(code, message)
}

/// Passes when `condition` is true.
pub fn yes(condition: bool, message: &str) -> Result<(), AssertError> {
    if condition {
        return Ok(());
    }
    Err(failure(
        codes::CONDITION,
        or_default(message, || "expected condition to be true".to_string()),
    ))
}

/// Passes when `condition` is false.
pub fn no(condition: bool, message: &str) -> Result<(), AssertError> {
    if !condition {
        return Ok(());
    }
    Err(failure(
        codes::CONDITION,
        or_default(message, || "expected condition to be false".to_string()),
    ))
}

/// Passes when `matcher` accepts `actual`.
pub fn yes_that<T, M>(actual: T, matcher: &M, message: &str) -> Result<(), AssertError>
where
    M: Matcher<T> + ?Sized,
{
    match matcher.matches(actual) {
        Ok(()) => Ok(()),
        Err(reason) => {
            let detail = format!("Expected: {matcher}\n     but: {reason}");
            Err(AssertError::Assertion(
                FailureInfo::new(codes::MATCHER, above(message, &detail))
                    .with_context("matcher", matcher.to_string())
                    .with_context("reason", reason),
            ))
        }
    }
}

/// Passes when `matcher` rejects `actual`.
pub fn no_that<T, M>(actual: T, matcher: &M, message: &str) -> Result<(), AssertError>
where
    T: Debug,
    M: Matcher<T> + ?Sized,
{
    let shown = format!("{actual:?}");
    if matcher.matches(actual).is_err() {
        return Ok(());
    }
    let detail = format!("Expected: not {matcher}\n     but: was {shown}");
    Err(AssertError::Assertion(
        FailureInfo::new(codes::MATCHER, above(message, &detail))
            .with_context("matcher", matcher.to_string())
            .with_context("actual", shown),
    ))
}

/// The failure raised by an unconditional `fail`.
pub fn fail(message: &str) -> AssertError {
    failure(codes::FAIL, message.to_string())
}

/// Passes when both operands are structurally equal.
///
/// A null `expected` reduces to [`be_null`] on `actual`, message included.
/// Arrays are compared by runtime type, length and elements.
pub fn eq<E, A>(expected: &E, actual: &A, message: &str) -> Result<(), AssertError>
where
    E: Operand + ?Sized,
    A: Operand + ?Sized,
{
    if is_null(expected) {
        return be_null(actual, message);
    }
    Criteria::Exact
        .equals(expected, actual)
        .map_err(|mismatch| mismatch.into_failure(message))
}

/// Passes when the operands are not structurally equal.
///
/// A null `unexpected` reduces to [`not_null`] on `actual`, message included.
pub fn ne<U, A>(unexpected: &U, actual: &A, message: &str) -> Result<(), AssertError>
where
    U: Operand + ?Sized,
    A: Operand + ?Sized,
{
    if is_null(unexpected) {
        return not_null(actual, message);
    }
    if Criteria::Exact.equals(unexpected, actual).is_err() {
        return Ok(());
    }
    Err(identical(actual, message, "values should be different"))
}

fn identical<A: Debug + ?Sized>(actual: &A, message: &str, detail: &str) -> AssertError {
    let shown = format!("{actual:?}");
    AssertError::Assertion(
        FailureInfo::new(
            codes::EQUAL,
            prefixed(message, &format!("{detail}. Actual: {shown}")),
        )
        .with_context("actual", shown),
    )
}

/// Passes when the floats (or float slices) agree within `delta`.
///
/// A negative or NaN `delta` is a precondition violation.
pub fn eq_within<T: Approx>(
    expected: T,
    actual: T,
    delta: T::Delta,
    message: &str,
) -> Result<(), AssertError> {
    let tolerance = Tolerance::new(delta.into())?;
    expected
        .approx(&actual, tolerance)
        .map_err(|mismatch| mismatch.into_failure(message))
}

/// Passes when the floats (or float slices) differ by more than `delta` somewhere.
pub fn ne_within<T: Approx>(
    unexpected: T,
    actual: T,
    delta: T::Delta,
    message: &str,
) -> Result<(), AssertError> {
    let tolerance = Tolerance::new(delta.into())?;
    if unexpected.approx(&actual, tolerance).is_err() {
        return Ok(());
    }
    Err(identical(
        &actual,
        message,
        &format!("values should differ by more than {}", tolerance.delta()),
    ))
}

fn is_null<T: Operand + ?Sized>(value: &T) -> bool {
    matches!(value.view(), View::Null)
}

/// Passes when `value` is not null.
pub fn not_null<T: Operand + ?Sized>(value: &T, message: &str) -> Result<(), AssertError> {
    if !is_null(value) {
        return Ok(());
    }
    Err(failure(
        codes::NULLNESS,
        or_default(message, || "expected a value but was None".to_string()),
    ))
}

/// Passes when `value` is null.
pub fn be_null<T: Operand + ?Sized>(value: &T, message: &str) -> Result<(), AssertError> {
    if is_null(value) {
        return Ok(());
    }
    Err(failure(
        codes::NULLNESS,
        or_default(message, || format!("expected None but was:<{value:?}>")),
    ))
}

/// Passes when both references point at the same value.
pub fn same<T: Debug + ?Sized>(expected: &T, actual: &T, message: &str) -> Result<(), AssertError> {
    if ptr::eq(expected, actual) {
        return Ok(());
    }
    Err(failure(
        codes::IDENTITY,
        prefixed(
            message,
            &format!("expected same:<{expected:?}> was not:<{actual:?}>"),
        ),
    ))
}

/// Passes when the references point at different values.
pub fn not_same<T: Debug + ?Sized>(
    unexpected: &T,
    actual: &T,
    message: &str,
) -> Result<(), AssertError> {
    if !ptr::eq(unexpected, actual) {
        return Ok(());
    }
    Err(failure(
        codes::IDENTITY,
        prefixed(message, &format!("expected not same:<{actual:?}>")),
    ))
}

/// Passes when `value` holds at least one element or character.
pub fn not_empty<C>(value: &C, message: &str) -> Result<(), AssertError>
where
    C: Emptiness + Debug + ?Sized,
{
    if !value.emptiness()? {
        return Ok(());
    }
    Err(failure(
        codes::EMPTINESS,
        or_default(message, || format!("expected a non-empty value but was:<{value:?}>")),
    ))
}

/// Passes when `value` is empty; an absent string counts as empty.
pub fn is_empty<C>(value: &C, message: &str) -> Result<(), AssertError>
where
    C: Emptiness + Debug + ?Sized,
{
    if value.emptiness()? {
        return Ok(());
    }
    Err(failure(
        codes::EMPTINESS,
        or_default(message, || format!("expected an empty value but was:<{value:?}>")),
    ))
}

/// Passes when `value` has at least one non-whitespace character.
pub fn not_blank<S: Text + Debug + ?Sized>(value: &S, message: &str) -> Result<(), AssertError> {
    if !value.is_blank() {
        return Ok(());
    }
    Err(failure(
        codes::BLANKNESS,
        or_default(message, || format!("expected a non-blank string but was:<{value:?}>")),
    ))
}

/// Passes when `value` is absent, empty or only whitespace.
pub fn is_blank<S: Text + Debug + ?Sized>(value: &S, message: &str) -> Result<(), AssertError> {
    if value.is_blank() {
        return Ok(());
    }
    Err(failure(
        codes::BLANKNESS,
        or_default(message, || format!("expected a blank string but was:<{value:?}>")),
    ))
}
