//! Failure message resolution.
//!
//! Messages arrive as an optional [`fmt::Arguments`] template built by the
//! facade macros and are resolved exactly once per check.

use std::fmt;

/// Resolves an optional message template into a literal string.
///
/// Returns `""` when no template was supplied.
pub fn resolve(template: Option<fmt::Arguments<'_>>) -> String {
    match template {
        Some(args) => fmt::format(args),
        None => String::new(),
    }
}

/// Whether the message is empty or consists only of whitespace.
pub fn is_blank(message: &str) -> bool {
    message.trim().is_empty()
}

/// Prepends the user message to a diagnostic detail.
///
/// ```
/// use ut_core::message::prefixed;
///
/// assert_eq!(prefixed("hi junit", "array lengths differed"), "hi junit: array lengths differed");
/// assert_eq!(prefixed("  ", "array lengths differed"), "array lengths differed");
/// ```
pub fn prefixed(user: &str, detail: &str) -> String {
    if is_blank(user) {
        detail.to_string()
    } else {
        format!("{user}: {detail}")
    }
}

/// Returns the user message verbatim, or `default` when it is blank.
pub fn or_default(user: &str, default: impl FnOnce() -> String) -> String {
    if is_blank(user) {
        default()
    } else {
        user.to_string()
    }
}

/// Puts the user message on its own line above a multi-line detail.
pub fn above(user: &str, detail: &str) -> String {
    if is_blank(user) {
        detail.to_string()
    } else {
        format!("{user}\n{detail}")
    }
}
