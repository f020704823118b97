use metacsv_format::number::{group_number, normalize_number};

#[test]
fn normalizes_plain_and_signed_numbers() {
    assert_eq!(normalize_number("42", None, None, false).as_deref(), Some("42"));
    assert_eq!(normalize_number("-42", None, None, false).as_deref(), Some("-42"));
    assert_eq!(normalize_number("+42", None, None, false).as_deref(), Some("42"));
    assert_eq!(normalize_number("12.50", None, Some("."), false).as_deref(), Some("12.50"));
    assert_eq!(normalize_number(".5", None, Some("."), false).as_deref(), Some("0.5"));
}

#[test]
fn strips_well_placed_thousands_separators() {
    assert_eq!(
        normalize_number("1,234,567", Some(","), None, false).as_deref(),
        Some("1234567")
    );
    assert_eq!(
        normalize_number("-1.234,5", Some("."), Some(","), false).as_deref(),
        Some("-1234.5")
    );
    assert_eq!(
        normalize_number("1\u{a0}234,5", Some("\u{a0}"), Some(","), false).as_deref(),
        Some("1234.5")
    );
}

#[test]
fn rejects_misplaced_separators_and_garbage() {
    let cases: &[(&str, Option<&str>, Option<&str>)] = &[
        ("12..3", None, Some(".")),
        ("1.2.3", None, Some(".")),
        ("1,23", Some(","), None),
        ("1,2345", Some(","), None),
        (",123", Some(","), None),
        ("1234,567", Some(","), None),
        ("12a", None, None),
        (" 12", None, None),
        ("12 ", None, None),
        ("", None, None),
        ("-", None, None),
        ("1.5", None, None),
        ("1,5.2", Some(","), Some(".")),
        ("5.", None, Some(".")),
        ("-1,234.", Some(","), Some(".")),
        (".", None, Some(".")),
    ];
    for (text, thousands, decimal) in cases {
        assert_eq!(
            normalize_number(text, *thousands, *decimal, false),
            None,
            "{text:?} should be rejected"
        );
    }
}

#[test]
fn exponents_are_only_accepted_when_allowed() {
    assert_eq!(
        normalize_number("1.5E-3", None, Some("."), true).as_deref(),
        Some("1.5e-3")
    );
    assert_eq!(normalize_number("2e10", None, Some("."), true).as_deref(), Some("2e10"));
    assert_eq!(normalize_number("1.5E-3", None, Some("."), false), None);
    assert_eq!(normalize_number("1.5e", None, Some("."), true), None);
    assert_eq!(normalize_number("e5", None, Some("."), true), None);
    assert_eq!(normalize_number("5.e3", None, Some("."), true), None);
}

#[test]
fn groups_numbers_for_output() {
    assert_eq!(group_number("1234567", Some(","), "."), "1,234,567");
    assert_eq!(group_number("-1234.5", Some("."), ","), "-1.234,5");
    assert_eq!(group_number("12.5", None, ","), "12,5");
    assert_eq!(group_number("999", Some(" "), "."), "999");
}
