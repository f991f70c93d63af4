//! Nullness and reference identity.

use std::fmt::Debug;

use ut_core::{check, Operand};

use crate::raise::enforce;

/// Requires `value` to be present (not `None`).
#[track_caller]
pub fn not_null<T: Operand + ?Sized>(value: &T) {
    not_null_msg(value, "");
}

/// Requires `value` to be present; fails with `message` otherwise.
#[track_caller]
pub fn not_null_msg<T: Operand + ?Sized>(value: &T, message: &str) {
    enforce(check::not_null(value, message));
}

/// Requires `value` to be `None`.
#[track_caller]
pub fn be_null<T: Operand + ?Sized>(value: &T) {
    be_null_msg(value, "");
}

/// Requires `value` to be `None`; fails with `message` otherwise.
#[track_caller]
pub fn be_null_msg<T: Operand + ?Sized>(value: &T, message: &str) {
    enforce(check::be_null(value, message));
}

/// Requires both references to point at the same value.
///
/// This is identity, not equality: two equal values at different addresses
/// fail.
#[track_caller]
pub fn same<T: Debug + ?Sized>(expected: &T, actual: &T) {
    same_msg(expected, actual, "");
}

/// Like [`same`]; `message` prefixes the failure.
#[track_caller]
pub fn same_msg<T: Debug + ?Sized>(expected: &T, actual: &T, message: &str) {
    enforce(check::same(expected, actual, message));
}

/// Requires the references to point at different values.
#[track_caller]
pub fn not_same<T: Debug + ?Sized>(unexpected: &T, actual: &T) {
    not_same_msg(unexpected, actual, "");
}

/// Like [`not_same`]; `message` prefixes the failure.
#[track_caller]
pub fn not_same_msg<T: Debug + ?Sized>(unexpected: &T, actual: &T, message: &str) {
    enforce(check::not_same(unexpected, actual, message));
}
