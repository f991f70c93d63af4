use ut_core::message::{above, is_blank, or_default, prefixed, resolve};

#[test]
fn absent_template_resolves_to_empty() {
    assert_eq!(resolve(None), "");
}

#[test]
fn template_arguments_are_substituted_in_order() {
    let resolved = resolve(Some(format_args!("Hello {} from {}", "junit", 42)));
    assert_eq!(resolved, "Hello junit from 42");
}

#[test]
fn blank_detection_covers_whitespace() {
    assert!(is_blank(""));
    assert!(is_blank(" \t\n"));
    assert!(!is_blank(" x "));
}

#[test]
fn blank_user_message_is_omitted_from_prefix() {
    assert_eq!(prefixed("", "arrays type differed"), "arrays type differed");
    assert_eq!(prefixed(" ", "arrays type differed"), "arrays type differed");
    assert_eq!(
        prefixed("hi junit", "arrays type differed"),
        "hi junit: arrays type differed"
    );
}

#[test]
fn user_message_wins_over_default() {
    assert_eq!(or_default("hi junit", || "default".to_string()), "hi junit");
    assert_eq!(or_default("", || "default".to_string()), "default");
}

#[test]
fn multi_line_detail_goes_below_user_message() {
    assert_eq!(above("hi", "Expected: x"), "hi\nExpected: x");
    assert_eq!(above("", "Expected: x"), "Expected: x");
}
