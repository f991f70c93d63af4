//! Structural equality, with a delta for floats.
//!
//! `eq` and `ne` accept any [`Operand`]: scalars, text, user types registered
//! with [`scalar_operand!`](crate::scalar_operand), arrays and `Option`s. A
//! `None` on either side is compared as a null and never as an array.
//!
//! Arrays fail fast on a runtime element type mismatch, then on length, then
//! on the first differing element:
//!
//! ```text
//! hi junit: arrays type differed
//! Expected: [i32]
//! Actual  : [i16]
//! ```

use ut_core::{check, Approx, Operand};

use crate::raise::enforce;

/// Requires both operands to be structurally equal.
#[track_caller]
pub fn eq<E, A>(expected: &E, actual: &A)
where
    E: Operand + ?Sized,
    A: Operand + ?Sized,
{
    eq_msg(expected, actual, "");
}

/// Requires both operands to be structurally equal; `message` prefixes the failure.
#[track_caller]
pub fn eq_msg<E, A>(expected: &E, actual: &A, message: &str)
where
    E: Operand + ?Sized,
    A: Operand + ?Sized,
{
    enforce(check::eq(expected, actual, message));
}

/// Requires the operands to differ.
///
/// Arrays of different element types or lengths always differ; two `None`s
/// never do.
#[track_caller]
pub fn ne<U, A>(unexpected: &U, actual: &A)
where
    U: Operand + ?Sized,
    A: Operand + ?Sized,
{
    ne_msg(unexpected, actual, "");
}

/// Requires the operands to differ; `message` prefixes the failure.
#[track_caller]
pub fn ne_msg<U, A>(unexpected: &U, actual: &A, message: &str)
where
    U: Operand + ?Sized,
    A: Operand + ?Sized,
{
    enforce(check::ne(unexpected, actual, message));
}

/// Requires two floats, or two float slices element by element, to agree
/// within `delta`.
///
/// NaN equals NaN and an infinite expected value only matches the same
/// infinity. A negative or NaN `delta` raises a precondition violation.
///
/// ```
/// ut::eq_within(0.01, 0.010001, 0.0002);
/// ut::eq_within(&[0.01, 1.23037], &[0.010001, 1.23036], 0.0002);
/// ```
#[track_caller]
pub fn eq_within<T: Approx>(expected: T, actual: T, delta: T::Delta) {
    eq_within_msg(expected, actual, delta, "");
}

/// Like [`eq_within`]; `message` prefixes the failure.
#[track_caller]
pub fn eq_within_msg<T: Approx>(expected: T, actual: T, delta: T::Delta, message: &str) {
    enforce(check::eq_within(expected, actual, delta, message));
}

/// Strict negation of [`eq_within`].
#[track_caller]
pub fn ne_within<T: Approx>(unexpected: T, actual: T, delta: T::Delta) {
    ne_within_msg(unexpected, actual, delta, "");
}

/// Like [`ne_within`]; `message` prefixes the failure.
#[track_caller]
pub fn ne_within_msg<T: Approx>(unexpected: T, actual: T, delta: T::Delta, message: &str) {
    enforce(check::ne_within(unexpected, actual, delta, message));
}
