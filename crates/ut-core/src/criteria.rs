//! Exact and inexact comparison of operands, including arrays.
//!
//! Arrays are compared by runtime type, then length, then element by element.
//! Nested arrays recurse and the reported element path grows (`[1][0]`).

use std::fmt::{self, Debug, Display};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::errors::{codes, AssertError, FailureInfo};
use crate::message::prefixed;
use crate::operand::{Operand, Scalar, View};
use crate::tolerance::Tolerance;

/// How floats are compared; every other value is compared exactly.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Criteria {
    /// Floats must be identical; NaN equals NaN.
    #[default]
    Exact,
    /// Floats may differ by at most `tolerance`.
    Inexact {
        /// Maximum admitted absolute difference.
        tolerance: Tolerance,
    },
}

/// The first difference found between two operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    /// The expected operand is an array and the actual one has another runtime type.
    Types {
        /// Type label of the expected operand.
        expected: String,
        /// Type label of the actual operand.
        actual: String,
    },
    /// Arrays (possibly nested at `path`) have different lengths.
    Lengths {
        /// Element path of the nested array, empty at the top level.
        path: Vec<usize>,
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },
    /// Arrays differ at the element addressed by `path`.
    Element {
        /// Element path, outermost index first.
        path: Vec<usize>,
        /// Debug rendering of the expected element.
        expected: String,
        /// Debug rendering of the actual element.
        actual: String,
    },
    /// Non-array values differ.
    Values {
        /// Debug rendering of the expected value.
        expected: String,
        /// Debug rendering of the actual value.
        actual: String,
    },
}

fn render_path(path: &[usize]) -> String {
    path.iter().map(|index| format!("[{index}]")).collect()
}

impl Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::Types { expected, actual } => write!(
                f,
                "arrays type differed\nExpected: {expected}\nActual  : {actual}"
            ),
            Mismatch::Lengths {
                path,
                expected,
                actual,
            } => {
                if !path.is_empty() {
                    write!(f, "arrays first differed at element {}; ", render_path(path))?;
                }
                write!(
                    f,
                    "array lengths differed, expected.length={expected} actual.length={actual}"
                )
            }
            Mismatch::Element {
                path,
                expected,
                actual,
            } => write!(
                f,
                "arrays first differed at element {}; expected:<{expected}> but was:<{actual}>",
                render_path(path)
            ),
            Mismatch::Values { expected, actual } => {
                write!(f, "expected:<{expected}> but was:<{actual}>")
            }
        }
    }
}

impl Mismatch {
    /// Stable failure code for this kind of difference.
    pub fn code(&self) -> &'static str {
        match self {
            Mismatch::Types { .. } => codes::ARRAY_TYPE,
            Mismatch::Lengths { .. } => codes::ARRAY_LENGTH,
            Mismatch::Element { .. } => codes::ARRAY_ELEMENT,
            Mismatch::Values { .. } => codes::NOT_EQUAL,
        }
    }

    /// Turns the difference into an assertion failure carrying `user` as prefix.
    pub fn into_failure(self, user: &str) -> AssertError {
        let info = FailureInfo::new(self.code(), prefixed(user, &self.to_string()));
        let info = match self {
            Mismatch::Types { expected, actual } => info
                .with_context("expected_type", expected)
                .with_context("actual_type", actual),
            Mismatch::Lengths {
                path,
                expected,
                actual,
            } => info
                .with_context("path", render_path(&path))
                .with_context("expected_length", expected.to_string())
                .with_context("actual_length", actual.to_string()),
            Mismatch::Element {
                path,
                expected,
                actual,
            } => info
                .with_context("path", render_path(&path))
                .with_context("expected", expected)
                .with_context("actual", actual),
            Mismatch::Values { expected, actual } => info
                .with_context("expected", expected)
                .with_context("actual", actual),
        };
        AssertError::Assertion(info)
    }
}

fn values<E, A>(expected: &E, actual: &A) -> Mismatch
where
    E: Debug + ?Sized,
    A: Debug + ?Sized,
{
    Mismatch::Values {
        expected: format!("{expected:?}"),
        actual: format!("{actual:?}"),
    }
}

impl Criteria {
    /// Inexact criteria with the given tolerance.
    pub fn inexact(tolerance: Tolerance) -> Self {
        Criteria::Inexact { tolerance }
    }

    /// Tolerance applied to floats under these criteria.
    pub fn tolerance(&self) -> Tolerance {
        match self {
            Criteria::Exact => Tolerance::EXACT,
            Criteria::Inexact { tolerance } => *tolerance,
        }
    }

    /// Compares two operands and reports the first difference.
    ///
    /// A null on either side is a plain value check and never reaches the
    /// array comparison.
    pub fn equals<E, A>(&self, expected: &E, actual: &A) -> Result<(), Mismatch>
    where
        E: Operand + ?Sized,
        A: Operand + ?Sized,
    {
        let outcome = self.compare(expected, actual);
        if let Err(mismatch) = &outcome {
            trace!(code = mismatch.code(), criteria = ?self, "operands differ");
        }
        outcome
    }

    fn compare<E, A>(&self, expected: &E, actual: &A) -> Result<(), Mismatch>
    where
        E: Operand + ?Sized,
        A: Operand + ?Sized,
    {
        match (expected.view(), actual.view()) {
            (View::Null, View::Null) => Ok(()),
            (View::Null, _) | (_, View::Null) => Err(values(expected, actual)),
            (View::Array(expected_items), View::Array(actual_items)) => {
                let (expected_type, actual_type) = (expected.type_label(), actual.type_label());
                if expected_type != actual_type {
                    return Err(Mismatch::Types {
                        expected: expected_type.into_owned(),
                        actual: actual_type.into_owned(),
                    });
                }
                self.arrays_equal(&mut Vec::new(), &expected_items, &actual_items)
            }
            (View::Array(_), _) => Err(Mismatch::Types {
                expected: expected.type_label().into_owned(),
                actual: actual.type_label().into_owned(),
            }),
            (expected_view, actual_view) => {
                if self.views_equal(&expected_view, &actual_view) {
                    Ok(())
                } else {
                    Err(values(expected, actual))
                }
            }
        }
    }

    fn arrays_equal(
        &self,
        path: &mut Vec<usize>,
        expected: &[&dyn Operand],
        actual: &[&dyn Operand],
    ) -> Result<(), Mismatch> {
        if expected.len() != actual.len() {
            return Err(Mismatch::Lengths {
                path: path.clone(),
                expected: expected.len(),
                actual: actual.len(),
            });
        }
        for (index, (expected_item, actual_item)) in expected.iter().zip(actual).enumerate() {
            path.push(index);
            match (expected_item.view(), actual_item.view()) {
                (View::Array(nested_expected), View::Array(nested_actual)) => {
                    self.arrays_equal(path, &nested_expected, &nested_actual)?;
                }
                (expected_view, actual_view) => {
                    if !self.views_equal(&expected_view, &actual_view) {
                        return Err(Mismatch::Element {
                            path: path.clone(),
                            expected: format!("{expected_item:?}"),
                            actual: format!("{actual_item:?}"),
                        });
                    }
                }
            }
            path.pop();
        }
        Ok(())
    }

    fn views_equal(&self, expected: &View<'_>, actual: &View<'_>) -> bool {
        match (expected, actual) {
            (View::Null, View::Null) => true,
            (View::Text(expected), View::Text(actual)) => expected == actual,
            (View::F32(expected), View::F32(actual)) => self
                .tolerance()
                .admits(f64::from(*expected), f64::from(*actual)),
            (View::F64(expected), View::F64(actual)) => {
                self.tolerance().admits(*expected, *actual)
            }
            (View::Scalar(expected), View::Scalar(actual)) => Scalar::scalar_eq(*expected, *actual),
            _ => false,
        }
    }
}
