#![deny(missing_docs)]
//! Short-named assertions for tests.
//!
//! Each assertion comes as a plain function, a `*_msg` sibling taking a
//! resolved message, and a macro of the same name that formats the message:
//!
//! ```
//! use ut::{eq, yes};
//!
//! yes(1 + 1 == 2);
//! eq(&[1, 2, 3], &vec![1, 2, 3]);
//! ut::eq!("Hi", "Hi", "greeting for {}", "junit");
//! ```
//!
//! A failed assertion panics with the resolved message as a `String`
//! payload. Calling an assertion with arguments it cannot evaluate, such as
//! an absent collection, panics with an [`AssertError::Precondition`]
//! payload instead.

pub mod emptiness;
pub mod equality;
mod macros;
pub mod presence;
mod raise;
pub mod truth;

pub use emptiness::{
    is_blank, is_blank_msg, is_empty, is_empty_msg, not_blank, not_blank_msg, not_empty,
    not_empty_msg,
};
pub use equality::{eq, eq_msg, eq_within, eq_within_msg, ne, ne_msg, ne_within, ne_within_msg};
pub use presence::{
    be_null, be_null_msg, not_null, not_null_msg, not_same, not_same_msg, same, same_msg,
};
pub use truth::{fail, no, no_msg, no_that, no_that_msg, yes, yes_msg, yes_that, yes_that_msg};

pub use hamcrest2::core::Matcher;
pub use ut_core::{message, satisfies, scalar_operand};
pub use ut_core::{Approx, AssertError, Emptiness, FailureInfo, Label, Operand, Text, Tolerance};
