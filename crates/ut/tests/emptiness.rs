mod common;

use std::collections::{BTreeMap, HashSet};

use common::{failure_of, violation_of};

#[test]
fn strings() {
    ut::not_empty(&"hi");
    ut::is_empty(&"");
    ut::is_empty(&String::new());
    ut::not_empty(&" ");
    let message = failure_of(|| ut::not_empty(&""));
    assert!(message.starts_with("expected a non-empty value"), "{message}");
    assert_eq!(failure_of(|| ut::is_empty!("hi", "hi {}", "junit")), "hi junit");
}

#[test]
fn absent_string_counts_as_empty() {
    let none: Option<&str> = None;
    ut::is_empty(&none);
    assert_eq!(failure_of(|| ut::not_empty!(none, "hi {}", "junit")), "hi junit");
}

#[test]
fn collections() {
    ut::not_empty(&vec![1]);
    ut::is_empty(&Vec::<i32>::new());
    ut::is_empty(&BTreeMap::<i32, i32>::new());
    ut::not_empty(&HashSet::from([1]));
    ut::not_empty(&[1, 2][..]);
    ut::is_empty(&Some(Vec::<u8>::new()));
    failure_of(|| ut::is_empty(&vec![1]));
}

#[test]
fn absent_collection_is_a_precondition_violation() {
    let none: Option<Vec<i32>> = None;
    let err = violation_of(|| ut::not_empty(&none));
    assert!(err.is_precondition());
    assert_eq!(err.info().code, "absent-collection");
    assert_eq!(
        err.to_string(),
        "precondition violated: emptiness of an absent collection is undefined"
    );
    violation_of(|| ut::is_empty(&none));
}

#[test]
fn blankness() {
    ut::not_blank(&"hi");
    ut::not_blank(&" x ");
    ut::is_blank(&"");
    ut::is_blank(&" \t\n");
    ut::is_blank(&String::from("\u{2003}"));
    ut::is_blank(&None::<String>);

    let message = failure_of(|| ut::not_blank(&"  "));
    assert!(message.starts_with("expected a non-blank string"), "{message}");
    assert_eq!(failure_of(|| ut::is_blank!("hi", "hi {}", "junit")), "hi junit");
    assert_eq!(failure_of(|| ut::not_blank!(None::<&str>, "hi {}", "junit")), "hi junit");
}
