#![cfg(feature = "serde")]

//! Integration tests for serde support in fs-maybe.
//!
//! `Maybe` serializes exactly like `Option`: `Absent` as `null` and
//! `Present(v)` as `v`.

use fs_maybe::control::Maybe;
use rstest::rstest;
use std::collections::BTreeMap;

#[rstest]
fn test_maybe_json_roundtrip() {
    let present: Maybe<i32> = Maybe::present(42);
    let absent: Maybe<i32> = Maybe::absent();

    let present_json = serde_json::to_string(&present).unwrap();
    let absent_json = serde_json::to_string(&absent).unwrap();

    assert_eq!(present_json, "42");
    assert_eq!(absent_json, "null");

    let restored_present: Maybe<i32> = serde_json::from_str(&present_json).unwrap();
    let restored_absent: Maybe<i32> = serde_json::from_str(&absent_json).unwrap();

    assert_eq!(present, restored_present);
    assert_eq!(absent, restored_absent);
}

#[rstest]
fn test_maybe_serializes_like_option() {
    let maybe = Maybe::present(vec!["a".to_string(), "b".to_string()]);
    let option = Some(vec!["a".to_string(), "b".to_string()]);

    assert_eq!(
        serde_json::to_value(&maybe).unwrap(),
        serde_json::to_value(&option).unwrap()
    );
}

#[rstest]
fn test_maybe_fields_in_map() {
    let json = r#"{"found": 12, "missing": null}"#;
    let fields: BTreeMap<String, Maybe<i32>> = serde_json::from_str(json).unwrap();

    assert_eq!(fields["found"], Maybe::Present(12));
    assert_eq!(fields["missing"], Maybe::Absent);
}

#[rstest]
fn test_maybe_rejects_wrong_payload_type() {
    let result: Result<Maybe<i32>, _> = serde_json::from_str("\"twelve\"");
    assert!(result.is_err());
}
