use precond::{
    is_greater_than, is_greater_than_or_equal_to, is_in_range, is_in_range_exclusive,
    is_less_than, is_less_than_or_equal_to, is_not_default, is_not_in_range,
    is_not_in_range_exclusive, is_not_null_or_whitespace, BlankReason, GuardError, ViolationKind,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn passing_checks_return_the_input(v in any::<i64>(), b in any::<i64>()) {
        if v > b {
            prop_assert_eq!(is_greater_than(v, b, Some("v")).unwrap(), v);
        }
        if v >= b {
            prop_assert_eq!(is_greater_than_or_equal_to(v, b, Some("v")).unwrap(), v);
        }
        if v < b {
            prop_assert_eq!(is_less_than(v, b, Some("v")).unwrap(), v);
        }
        if v <= b {
            prop_assert_eq!(is_less_than_or_equal_to(v, b, Some("v")).unwrap(), v);
        }
    }

    #[test]
    fn in_range_matches_inclusive_predicate(v in -50i32..50, s in -50i32..50, e in -50i32..50) {
        let expected = s <= v && v <= e;
        prop_assert_eq!(is_in_range(v, s, e, Some("v")).is_ok(), expected);
    }

    #[test]
    fn in_range_exclusive_matches_predicate(v in -50i32..50, s in -50i32..50, e in -50i32..50) {
        let expected = s < v && v < e;
        prop_assert_eq!(is_in_range_exclusive(v, s, e, Some("v")).is_ok(), expected);
    }

    #[test]
    fn not_in_range_is_complement_of_in_range(v in -50i32..50, s in -50i32..50, e in -50i32..50) {
        prop_assert_ne!(
            is_not_in_range(v, s, e, Some("v")).is_ok(),
            is_in_range(v, s, e, Some("v")).is_ok()
        );
    }

    #[test]
    fn not_in_range_exclusive_is_complement_of_exclusive(v in -50i32..50, s in -50i32..50, e in -50i32..50) {
        prop_assert_ne!(
            is_not_in_range_exclusive(v, s, e, Some("v")).is_ok(),
            is_in_range_exclusive(v, s, e, Some("v")).is_ok()
        );
    }

    #[test]
    fn range_failures_render_the_actual_value(v in any::<i32>(), s in any::<i32>(), e in any::<i32>()) {
        if let Err(err) = is_in_range(v, s, e, Some("v")) {
            prop_assert_eq!(err.kind(), ViolationKind::Range);
            let suffix = format!("but was '{}'.", v);
            prop_assert!(err.to_string().ends_with(&suffix));
        }
    }

    #[test]
    fn checks_are_idempotent(v in any::<i32>(), s in any::<i32>(), e in any::<i32>()) {
        let first = is_in_range(v, s, e, Some("v"));
        let second = is_in_range(v, s, e, Some("v"));
        prop_assert_eq!(&first, &second);
        if let Ok(value) = first {
            prop_assert_eq!(is_in_range(value, s, e, Some("v")), Ok(v));
        }
    }

    #[test]
    fn not_in_range_checks_are_idempotent(v in -50i32..50, s in -50i32..50, e in -50i32..50) {
        let first = is_not_in_range(v, s, e, Some("v"));
        prop_assert_eq!(&first, &is_not_in_range(v, s, e, Some("v")));
        if let Ok(value) = first {
            prop_assert_eq!(is_not_in_range(value, s, e, Some("v")), Ok(v));
        }

        let first = is_not_in_range_exclusive(v, s, e, Some("v"));
        prop_assert_eq!(&first, &is_not_in_range_exclusive(v, s, e, Some("v")));
        if let Ok(value) = first {
            prop_assert_eq!(is_not_in_range_exclusive(value, s, e, Some("v")), Ok(v));
        }
    }

    #[test]
    fn comparison_checks_are_idempotent(v in any::<i64>(), b in any::<i64>()) {
        let first = is_greater_than(v, b, Some("v"));
        prop_assert_eq!(&first, &is_greater_than(v, b, Some("v")));
        if let Ok(value) = first {
            prop_assert_eq!(is_greater_than(value, b, Some("v")), Ok(v));
        }

        let first = is_less_than_or_equal_to(v, b, Some("v"));
        prop_assert_eq!(&first, &is_less_than_or_equal_to(v, b, Some("v")));
        if let Ok(value) = first {
            prop_assert_eq!(is_less_than_or_equal_to(value, b, Some("v")), Ok(v));
        }
    }

    #[test]
    fn whitespace_check_is_idempotent(text in "[ \ta-z]{0,20}") {
        let first = is_not_null_or_whitespace(Some(text.clone()), Some("t"));
        prop_assert_eq!(&first, &is_not_null_or_whitespace(Some(text.clone()), Some("t")));
        if let Ok(value) = first {
            prop_assert_eq!(is_not_null_or_whitespace(Some(value), Some("t")), Ok(text));
        }
    }

    #[test]
    fn default_check_is_idempotent(v in any::<u32>(), label in "[a-z]{0,8}") {
        let first = is_not_default(v, Some("v"));
        prop_assert_eq!(&first, &is_not_default(v, Some("v")));
        if let Ok(value) = first {
            prop_assert_eq!(is_not_default(value, Some("v")), Ok(v));
        }

        let first = is_not_default(label.clone(), Some("label"));
        prop_assert_eq!(&first, &is_not_default(label.clone(), Some("label")));
        if let Ok(value) = first {
            prop_assert_eq!(is_not_default(value, Some("label")), Ok(label));
        }
    }

    #[test]
    fn whitespace_only_text_is_rejected(text in "[ \t\r\n]{1,20}") {
        let err = is_not_null_or_whitespace(Some(text.as_str()), Some("t")).unwrap_err();
        let whitespace_only = matches!(
            err,
            GuardError::Blank { reason: BlankReason::WhitespaceOnly, .. }
        );
        prop_assert!(whitespace_only);
    }

    #[test]
    fn text_with_content_passes(prefix in "[ \t]{0,5}", word in "[a-z]{1,10}", suffix in "[ \t]{0,5}") {
        let text = format!("{prefix}{word}{suffix}");
        prop_assert_eq!(is_not_null_or_whitespace(Some(text.clone()), Some("t")).unwrap(), text);
    }

    #[test]
    fn missing_name_always_uses_sentinel(v in any::<u8>()) {
        if let Err(err) = is_greater_than(v, 200, None) {
            prop_assert_eq!(err.name(), Some("[Unknown Argument Name]"));
        }
    }
}
