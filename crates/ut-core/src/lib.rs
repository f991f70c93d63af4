#![deny(missing_docs)]
#![doc = "Assertion engine behind the `ut` facade. Every check returns a `Result` so it can be composed without unwinding."]

pub mod approx;
pub mod check;
pub mod criteria;
pub mod errors;
pub mod matcher;
pub mod message;
pub mod operand;
pub mod state;
pub mod tolerance;

pub use approx::Approx;
pub use criteria::{Criteria, Mismatch};
pub use errors::{AssertError, FailureInfo};
pub use matcher::{satisfies, Satisfies};
pub use operand::{Label, Operand, Scalar, View};
pub use state::{Emptiness, Text};
pub use tolerance::Tolerance;
