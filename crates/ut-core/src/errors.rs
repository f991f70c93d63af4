//! Structured error types shared by the checks and the facade.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable machine readable failure codes.
pub mod codes {
    /// A boolean condition did not hold.
    pub const CONDITION: &str = "condition";
    /// A matcher rejected (or unexpectedly accepted) a value.
    pub const MATCHER: &str = "matcher";
    /// Unconditional failure requested by the caller.
    pub const FAIL: &str = "fail";
    /// Two values expected to be equal were not.
    pub const NOT_EQUAL: &str = "not-equal";
    /// Two values expected to differ were equal.
    pub const EQUAL: &str = "equal";
    /// Arrays had different runtime element types.
    pub const ARRAY_TYPE: &str = "array-type";
    /// Arrays had different lengths.
    pub const ARRAY_LENGTH: &str = "array-length";
    /// Arrays differed at some element.
    pub const ARRAY_ELEMENT: &str = "array-element";
    /// A value was null when it should not be, or the reverse.
    pub const NULLNESS: &str = "nullness";
    /// Reference identity did not match the expectation.
    pub const IDENTITY: &str = "identity";
    /// Emptiness did not match the expectation.
    pub const EMPTINESS: &str = "emptiness";
    /// Blankness did not match the expectation.
    pub const BLANKNESS: &str = "blankness";
    /// A collection reference was absent where one is required.
    pub const ABSENT_COLLECTION: &str = "absent-collection";
    /// A tolerance was negative or NaN.
    pub const INVALID_TOLERANCE: &str = "invalid-tolerance";
}

/// Structured payload attached to every [`AssertError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureInfo {
    /// Stable machine readable failure code, see [`codes`].
    pub code: String,
    /// Fully resolved failure message.
    pub message: String,
    /// Contextual key value pairs (expected, actual, index, ...).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
}

impl FailureInfo {
    /// Creates a new payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }
}

// The message is what the test harness shows; context stays structured.
impl Display for FailureInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Canonical error type for every check.
///
/// `Assertion` is the expected outcome of a check whose condition is false.
/// `Precondition` flags a caller bug, such as asking whether an absent
/// collection is empty, and is never downgraded to an assertion failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum AssertError {
    /// The checked condition did not hold.
    #[error("{0}")]
    Assertion(FailureInfo),
    /// The check was called with arguments it cannot evaluate.
    #[error("precondition violated: {0}")]
    Precondition(FailureInfo),
}

impl AssertError {
    /// Builds an assertion failure.
    pub fn assertion(code: &str, message: impl Into<String>) -> Self {
        AssertError::Assertion(FailureInfo::new(code, message))
    }

    /// Builds a precondition violation.
    pub fn precondition(code: &str, message: impl Into<String>) -> Self {
        AssertError::Precondition(FailureInfo::new(code, message))
    }

    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &FailureInfo {
        match self {
            AssertError::Assertion(info) | AssertError::Precondition(info) => info,
        }
    }

    /// Returns the resolved failure message.
    pub fn message(&self) -> &str {
        &self.info().message
    }

    /// Whether this is a plain assertion failure.
    pub fn is_assertion(&self) -> bool {
        matches!(self, AssertError::Assertion(_))
    }

    /// Whether this is a precondition violation.
    pub fn is_precondition(&self) -> bool {
        matches!(self, AssertError::Precondition(_))
    }
}
