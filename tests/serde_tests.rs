#![cfg(feature = "serde")]

//! Integration tests for the serde adapters.
//!
//! Sets encode as plain element sequences; decoding is all-or-nothing and
//! collapses duplicate elements silently.

use rstest::rstest;
use syncset::{LocalSet, SyncSet};

// =============================================================================
// Serialization
// =============================================================================

#[rstest]
fn test_serialize_empty_sets() {
    let local: LocalSet<i32> = LocalSet::new();
    let sync: SyncSet<i32> = SyncSet::new();
    assert_eq!(serde_json::to_string(&local).unwrap(), "[]");
    assert_eq!(serde_json::to_string(&sync).unwrap(), "[]");
}

#[rstest]
fn test_serialize_single_element() {
    let set: SyncSet<i32> = [42].into();
    assert_eq!(serde_json::to_string(&set).unwrap(), "[42]");
}

#[rstest]
fn test_serialized_sequence_covers_membership() {
    let set: SyncSet<i32> = [1, 2, 3].into();
    let json = serde_json::to_string(&set).unwrap();
    let mut parsed: Vec<i32> = serde_json::from_str(&json).unwrap();
    parsed.sort_unstable();
    assert_eq!(parsed, vec![1, 2, 3]);
}

// =============================================================================
// Deserialization
// =============================================================================

#[rstest]
fn test_deserialize_into_both_flavors() {
    let json = "[1,2,3]";

    let local: LocalSet<i32> = serde_json::from_str(json).unwrap();
    assert_eq!(local.len(), 3);
    assert!(local.contains(&2));

    let sync: SyncSet<i32> = serde_json::from_str(json).unwrap();
    assert_eq!(sync.len(), 3);
    assert!(sync.contains(&2));
}

#[rstest]
fn test_deserialize_collapses_duplicates() {
    let set: SyncSet<i32> = serde_json::from_str("[7,7,7]").unwrap();
    assert_eq!(set.len(), 1);
}

#[rstest]
fn test_deserialize_failure_is_all_or_nothing() {
    // The third element fails to decode as i32; the caller gets an error
    // and no set value at all, not a prefix-populated one.
    let result: Result<SyncSet<i32>, _> = serde_json::from_str(r#"[1,2,"three",4]"#);
    assert!(result.is_err());

    let result: Result<LocalSet<i32>, _> = serde_json::from_str(r#"[1,2,"three",4]"#);
    assert!(result.is_err());
}

#[rstest]
fn test_deserialize_rejects_non_sequences() {
    let result: Result<SyncSet<i32>, _> = serde_json::from_str(r#"{"not":"a sequence"}"#);
    assert!(result.is_err());
}

// =============================================================================
// Round-trips
// =============================================================================

#[rstest]
fn test_roundtrip_preserves_equality() {
    let original: SyncSet<i32> = (0..100).collect();
    let json = serde_json::to_string(&original).unwrap();
    let restored: SyncSet<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(original, restored);
}

#[rstest]
fn test_roundtrip_string_elements() {
    let original: LocalSet<String> = ["alpha", "beta", "gamma"]
        .into_iter()
        .map(str::to_string)
        .collect();
    let json = serde_json::to_string(&original).unwrap();
    let restored: LocalSet<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(original, restored);
}

#[rstest]
fn test_roundtrip_across_flavors() {
    let original: SyncSet<i32> = [1, 2, 3].into();
    let json = serde_json::to_string(&original).unwrap();
    let as_local: LocalSet<i32> = serde_json::from_str(&json).unwrap();

    assert_eq!(as_local.len(), 3);
    for element in original.to_vec() {
        assert!(as_local.contains(&element));
    }
}

#[rstest]
fn test_serialization_leaves_the_set_usable() {
    let set: SyncSet<i32> = [1].into();
    let _json = serde_json::to_string(&set).unwrap();
    assert!(set.insert(2));
    assert_eq!(set.len(), 2);
}
