//! String and collection state.
//!
//! A `None` string is empty and blank. A `None` collection cannot be asked
//! about: `not_empty` / `is_empty` raise a precondition violation for it
//! rather than an assertion failure.

use std::fmt::Debug;

use ut_core::{check, Emptiness, Text};

use crate::raise::enforce;

/// Requires `value` to hold at least one element or character.
#[track_caller]
pub fn not_empty<C: Emptiness + Debug + ?Sized>(value: &C) {
    not_empty_msg(value, "");
}

/// Like [`not_empty`]; fails with `message` when empty.
#[track_caller]
pub fn not_empty_msg<C: Emptiness + Debug + ?Sized>(value: &C, message: &str) {
    enforce(check::not_empty(value, message));
}

/// Requires `value` to be empty.
#[track_caller]
pub fn is_empty<C: Emptiness + Debug + ?Sized>(value: &C) {
    is_empty_msg(value, "");
}

/// Like [`is_empty`]; fails with `message` when not empty.
#[track_caller]
pub fn is_empty_msg<C: Emptiness + Debug + ?Sized>(value: &C, message: &str) {
    enforce(check::is_empty(value, message));
}

/// Requires a string with at least one non-whitespace character.
#[track_caller]
pub fn not_blank<S: Text + Debug + ?Sized>(value: &S) {
    not_blank_msg(value, "");
}

/// Like [`not_blank`]; fails with `message` when blank.
#[track_caller]
pub fn not_blank_msg<S: Text + Debug + ?Sized>(value: &S, message: &str) {
    enforce(check::not_blank(value, message));
}

/// Requires a `None`, empty or whitespace-only string.
#[track_caller]
pub fn is_blank<S: Text + Debug + ?Sized>(value: &S) {
    is_blank_msg(value, "");
}

/// Like [`is_blank`]; fails with `message` otherwise.
#[track_caller]
pub fn is_blank_msg<S: Text + Debug + ?Sized>(value: &S, message: &str) {
    enforce(check::is_blank(value, message));
}
