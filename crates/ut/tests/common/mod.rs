#![allow(dead_code)]

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use ut::AssertError;

/// Runs `f` and returns the message of the assertion failure it raised.
pub fn failure_of(f: impl FnOnce()) -> String {
    let payload = panic::catch_unwind(AssertUnwindSafe(f)).expect_err("expected an assertion failure");
    message_of(payload)
}

/// Runs `f` and returns the precondition violation it raised.
pub fn violation_of(f: impl FnOnce()) -> AssertError {
    let payload =
        panic::catch_unwind(AssertUnwindSafe(f)).expect_err("expected a precondition violation");
    match payload.downcast::<AssertError>() {
        Ok(err) => *err,
        Err(payload) => panic!("expected an AssertError payload, got {:?}", message_of(payload)),
    }
}

fn message_of(payload: Box<dyn Any + Send>) -> String {
    match payload.downcast::<String>() {
        Ok(message) => *message,
        Err(payload) => match payload.downcast::<&'static str>() {
            Ok(message) => message.to_string(),
            Err(_) => panic!("expected a message payload"),
        },
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Foo {
    pub id: String,
    pub n: i32,
}

ut::scalar_operand!(Foo);

pub fn foo(id: &str, n: i32) -> Foo {
    Foo {
        id: id.to_string(),
        n,
    }
}
