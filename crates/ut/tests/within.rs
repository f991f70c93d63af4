mod common;

use common::{failure_of, violation_of};

#[test]
fn doubles_within_delta_pass() {
    ut::eq_within(0.01, 0.010001, 0.0002);
    ut::eq_within!(0.01, 0.010001, 0.0002, "hi {}", "junit");
    ut::ne_within(0.01, 0.010001, 0.0000002);
    ut::ne_within!(0.01, 0.010001, 0.0000002, "hi {}", "junit");
}

#[test]
fn doubles_outside_delta_fail() {
    let message = failure_of(|| ut::eq_within!(0.01, 0.010001, 0.0000002, "hi {}", "junit"));
    assert!(message.starts_with("hi junit"), "{message}");
    let message = failure_of(|| ut::ne_within!(0.01, 0.010001, 0.0002, "hi {}", "junit"));
    assert!(message.starts_with("hi junit"), "{message}");
}

#[test]
fn double_arrays_within_delta() {
    let a1 = [0.01, 1.23037];
    let a2 = [0.010001, 1.23036];
    ut::eq_within(&a1, &a2, 0.0002);
    ut::eq_within!(&a1, &a2, 0.0002, "hi {}", "junit");
    ut::ne_within(&a1, &a2, 0.0000002);
    ut::ne_within!(&a1, &a2, 0.0000002, "hi {}", "junit");

    let message = failure_of(|| ut::ne_within!(&a1, &a2, 0.0002, "hi {}", "junit"));
    assert!(message.starts_with("hi junit"), "{message}");
    let message = failure_of(|| ut::eq_within!(&a1, &a2, 0.0000002, "hi {}", "junit"));
    assert!(
        message.starts_with("hi junit: arrays first differed at element [0]"),
        "{message}"
    );
}

#[test]
fn float_arrays_within_delta() {
    let a1 = [0.01f32, 1.23037];
    let a2 = [0.010001f32, 1.23036];
    ut::eq_within(&a1, &a2, 0.0002);
    failure_of(|| ut::eq_within(&a1, &a2, 0.0000002));
    let message = failure_of(|| ut::eq_within!(&a1, &a2, 0.0000002, "hi {}", "junit"));
    assert!(
        message.starts_with("hi junit: arrays first differed at element"),
        "{message}"
    );
}

#[test]
fn slices_and_vectors_compare_within_delta() {
    let expected = vec![1.0, 2.0, 3.0];
    let actual = vec![1.05, 2.0, 2.95];
    ut::eq_within(&expected, &actual, 0.1);
    ut::eq_within(expected.as_slice(), actual.as_slice(), 0.1);
    assert_eq!(
        failure_of(|| ut::eq_within(&expected, &vec![1.0, 2.0], 0.1)),
        "array lengths differed, expected.length=3 actual.length=2"
    );
}

#[test]
fn nan_and_infinities() {
    ut::eq_within(f64::NAN, f64::NAN, 0.0);
    ut::eq_within(f64::INFINITY, f64::INFINITY, 0.0);
    failure_of(|| ut::eq_within(f64::INFINITY, f64::NEG_INFINITY, 1.0));
    failure_of(|| ut::eq_within(1.0, f64::NAN, 1.0));
}

#[test]
fn invalid_delta_is_a_precondition_violation() {
    let err = violation_of(|| ut::eq_within(1.0, 1.0, -0.1));
    assert!(err.is_precondition());
    assert_eq!(err.info().code, "invalid-tolerance");

    let err = violation_of(|| ut::ne_within(&[1.0f32], &[2.0f32], f32::NAN));
    assert_eq!(err.info().code, "invalid-tolerance");
}
