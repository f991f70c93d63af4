mod common;

use common::{failure_of, foo};
use hamcrest2::prelude::{equal_to, not};

#[test]
fn yes_passes_on_true() {
    ut::yes(true);
    ut::yes_msg(true, "any message");
    ut::yes!(true, "any {}", "message");
}

#[test]
fn yes_fails_on_false() {
    let message = failure_of(|| ut::yes(false));
    assert_eq!(message, "expected condition to be true");
}

#[test]
fn yes_fails_with_the_formatted_message() {
    let message = failure_of(|| ut::yes!(false, "Hello {}", "junit"));
    assert_eq!(message, "Hello junit");
}

#[test]
fn no_passes_on_false() {
    ut::no(false);
    ut::no_msg(false, "any message");
    ut::no!(false);
}

#[test]
fn no_fails_with_the_formatted_message() {
    assert_eq!(failure_of(|| ut::no(true)), "expected condition to be false");
    assert_eq!(failure_of(|| ut::no!(true, "Hello {}", "junit")), "Hello junit");
}

#[test]
fn blank_message_falls_back_to_the_default() {
    assert_eq!(failure_of(|| ut::yes_msg(false, "  ")), "expected condition to be true");
}

#[test]
fn fail_raises_exactly_the_formatted_message() {
    assert_eq!(failure_of(|| ut::fail!("Hello {}", "junit")), "Hello junit");
    assert_eq!(failure_of(|| ut::fail("It shall raise here")), "It shall raise here");
}

#[test]
fn yes_that_passes_when_the_matcher_accepts() {
    ut::yes_that(1, equal_to(1));
    ut::yes!(1, equal_to(1), "hi {}", "junit");
    ut::yes!("hi junit", ut::satisfies("starts with hi", |s: &&str| s.starts_with("hi")));
    ut::yes!(foo("hi", 5), equal_to(foo("hi", 5)));
}

#[test]
fn yes_that_describes_the_mismatch() {
    let message = failure_of(|| ut::yes_that(1, equal_to(0)));
    assert!(message.starts_with("Expected: "), "{message}");
    assert!(message.contains("\n     but: "), "{message}");
    assert!(message.ends_with('1'), "{message}");
}

#[test]
fn yes_that_puts_the_user_message_first() {
    let message = failure_of(|| ut::yes!(1, equal_to(0), "hi {}", "junit"));
    assert!(message.starts_with("hi junit\nExpected: "), "{message}");
}

#[test]
fn no_that_passes_when_the_matcher_rejects() {
    ut::no_that(1, equal_to(0));
    ut::no!("hi junit", ut::satisfies("starts with bye", |s: &&str| s.starts_with("bye ")));
    ut::no!(1, not(equal_to(1)), "hi {}", "junit");
}

#[test]
fn no_that_fails_when_the_matcher_accepts() {
    let message = failure_of(|| ut::no_that(1, equal_to(1)));
    assert!(message.starts_with("Expected: not "), "{message}");
    assert!(message.ends_with("but: was 1"), "{message}");

    let message = failure_of(|| ut::no!(1, equal_to(1), "hi {}", "junit"));
    assert!(message.starts_with("hi junit"), "{message}");
}
