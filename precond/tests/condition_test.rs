use precond::{is_false, is_required_that, is_true, ViolationKind};

#[test]
fn is_true_passes_when_true() {
    assert!(is_true(true, None).is_ok());
}

#[test]
fn is_true_when_false_uses_given_message() {
    let err = is_true(false, Some("Condition must evaluate to true.")).unwrap_err();
    assert_eq!(err.to_string(), "Condition must evaluate to true.");
    assert_eq!(err.kind(), ViolationKind::Condition);
}

#[test]
fn is_true_when_false_and_no_message_uses_default() {
    let err = is_true(false, None).unwrap_err();
    assert_eq!(err.to_string(), "Condition must be true.");
}

#[test]
fn is_false_passes_when_false() {
    assert!(is_false(false, None).is_ok());
}

#[test]
fn is_false_when_true_uses_given_message() {
    let err = is_false(true, Some("Condition must evaluate to false.")).unwrap_err();
    assert_eq!(err.to_string(), "Condition must evaluate to false.");
}

#[test]
fn is_false_when_true_and_no_message_uses_default() {
    let err = is_false(true, None).unwrap_err();
    assert_eq!(err.to_string(), "Condition must be false.");
}

#[test]
fn is_required_that_when_false_uses_given_message() {
    let err = is_required_that(false, Some("Condition must evaluate to true.")).unwrap_err();
    assert_eq!(err.to_string(), "Condition must evaluate to true.");
}

#[test]
fn is_required_that_when_false_and_no_message_uses_default() {
    let err = is_required_that(false, None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "The required argument expectation was not met."
    );
}

#[test]
fn empty_message_is_kept() {
    let err = is_required_that(false, Some("")).unwrap_err();
    assert_eq!(err.to_string(), "");
}
