use std::panic::{self, Location};

use tracing::{debug, error};
use ut_core::AssertError;

/// Turns a failed check into the failure signal.
#[track_caller]
pub(crate) fn enforce(outcome: Result<(), AssertError>) {
    if let Err(err) = outcome {
        raise(err);
    }
}

/// Assertion failures panic with their message; precondition violations keep
/// the typed payload so callers can tell the two apart.
#[track_caller]
pub(crate) fn raise(err: AssertError) -> ! {
    match err {
        AssertError::Assertion(info) => {
            debug!(code = %info.code, "assertion failed");
            panic!("{}", info.message);
        }
        AssertError::Precondition(info) => {
            error!(code = %info.code, detail = %info.message, "assertion called with invalid arguments");
            let err = AssertError::Precondition(info);
            // The panic hook only prints string payloads.
            eprintln!("{}", violation_report(&err, Location::caller()));
            panic::panic_any(err);
        }
    }
}

fn violation_report(err: &AssertError, location: &Location<'_>) -> String {
    format!("{err} at {location}")
}
