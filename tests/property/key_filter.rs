//! Property-based tests for key filtering guarantees

use errshape::diagnostics::RecordingDiagnostics;
use errshape::structure::{ErrorKey, Structure, StructureOptions};
use proptest::prelude::*;

const SUPPORTED: [&str; 6] = ["code", "file", "function", "line", "message", "module"];

/// Mix of supported identifiers and arbitrary lowercase words.
fn identifier_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::sample::select(SUPPORTED.to_vec()).prop_map(str::to_string),
        "[a-z]{1,10}",
    ]
}

fn request_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(identifier_strategy(), 0..12)
}

fn filtered_keys(request: Vec<String>) -> Vec<ErrorKey> {
    let sink = RecordingDiagnostics::new();
    Structure::new_with(StructureOptions::new().keys(request), &sink).keys
}

/// The result is a sub-sequence of the request: original relative order, no
/// additions.
#[test]
fn test_filter_is_order_preserving_subsequence() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&request_strategy(), |request| {
            let keys = filtered_keys(request.clone());

            let mut remaining = request.iter();
            for key in &keys {
                assert!(
                    remaining.any(|identifier| identifier == key.as_str()),
                    "{:?} is not a sub-sequence of {:?}",
                    keys,
                    request
                );
            }

            Ok(())
        })
        .unwrap();
}

/// Every element of the result is a member of the supported set.
#[test]
fn test_filter_emits_only_supported_keys() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&request_strategy(), |request| {
            for key in filtered_keys(request) {
                assert!(SUPPORTED.contains(&key.as_str()));
            }
            Ok(())
        })
        .unwrap();
}

/// The filter behaves exactly like per-element membership filtering: same
/// elements, same order, same multiplicity.
#[test]
fn test_filter_matches_membership_filter() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&request_strategy(), |request| {
            let keys = filtered_keys(request.clone());

            let expected: Vec<&str> = request
                .iter()
                .map(String::as_str)
                .filter(|identifier| SUPPORTED.contains(identifier))
                .collect();
            let actual: Vec<&str> = keys.iter().map(ErrorKey::as_str).collect();

            assert_eq!(actual, expected);
            Ok(())
        })
        .unwrap();
}

/// Duplicate supported keys survive filtering.
#[test]
fn test_filter_preserves_duplicates() {
    let mut runner = proptest::test_runner::TestRunner::default();

    let supported_only = proptest::collection::vec(
        proptest::sample::select(SUPPORTED.to_vec()).prop_map(str::to_string),
        1..12,
    );

    runner
        .run(&supported_only, |request| {
            let keys = filtered_keys(request.clone());
            assert_eq!(keys.len(), request.len());
            Ok(())
        })
        .unwrap();
}

/// A warning fires exactly when the filtered result is empty.
#[test]
fn test_warning_fires_iff_result_is_empty() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&request_strategy(), |request| {
            let sink = RecordingDiagnostics::new();
            let structure =
                Structure::new_with(StructureOptions::new().keys(request), &sink);

            if structure.keys.is_empty() {
                assert_eq!(sink.messages().len(), 1);
            } else {
                assert!(sink.messages().is_empty());
            }
            Ok(())
        })
        .unwrap();
}

/// A single identifier behaves like a one-element sequence.
#[test]
fn test_single_identifier_normalization() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&identifier_strategy(), |identifier| {
            let sink = RecordingDiagnostics::new();
            let as_one = Structure::new_with(
                StructureOptions::new().keys(identifier.as_str()),
                &sink,
            );
            let as_many = Structure::new_with(
                StructureOptions::new().keys(vec![identifier.clone()]),
                &sink,
            );

            assert_eq!(as_one.keys, as_many.keys);
            Ok(())
        })
        .unwrap();
}
