use ut_core::errors::{codes, AssertError, FailureInfo};

fn sample_info(code: &str, message: &str) -> FailureInfo {
    FailureInfo::new(code, message)
        .with_context("expected", "1")
        .with_context("actual", "2")
}

#[test]
fn assertion_displays_message_only() {
    let err = AssertError::Assertion(sample_info(codes::NOT_EQUAL, "expected:<1> but was:<2>"));
    assert_eq!(err.to_string(), "expected:<1> but was:<2>");
    assert_eq!(err.message(), "expected:<1> but was:<2>");
    assert!(err.is_assertion());
    assert!(!err.is_precondition());
    assert!(err.info().context.contains_key("expected"));
}

#[test]
fn precondition_is_a_separate_family() {
    let err = AssertError::precondition(codes::ABSENT_COLLECTION, "no collection");
    assert!(err.is_precondition());
    assert!(!err.is_assertion());
    assert_eq!(err.info().code, codes::ABSENT_COLLECTION);
    assert_eq!(err.to_string(), "precondition violated: no collection");
}

#[test]
fn errors_round_trip_json() {
    let err = AssertError::Assertion(sample_info(codes::ARRAY_ELEMENT, "arrays first differed"));
    let json = serde_json::to_string_pretty(&err).expect("serialize");
    assert!(json.contains("\"family\": \"Assertion\""));
    let decoded: AssertError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}

#[test]
fn missing_context_defaults_to_empty() {
    let decoded: FailureInfo =
        serde_json::from_str(r#"{"code":"fail","message":"boom"}"#).expect("deserialize");
    assert_eq!(decoded, FailureInfo::new(codes::FAIL, "boom"));
}
