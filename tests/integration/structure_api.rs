//! Integration tests for the structure descriptor API

use errshape::config::StaticDefaults;
use errshape::diagnostics::RecordingDiagnostics;
use errshape::structure::{ErrorKey, Structure, StructureOptions, StructureOverrides};

#[test]
fn test_create_then_update_flow() {
    let sink = RecordingDiagnostics::new();

    let base = Structure::new_with(
        StructureOptions::new().node("err").keys("code"),
        &sink,
    );
    assert_eq!(base.node.as_deref(), Some("err"));
    assert_eq!(base.prefix, None);
    assert_eq!(base.keys, vec![ErrorKey::Code]);

    let updated = base.update_with(
        StructureOverrides::new()
            .node("error")
            .prefix("err")
            .keys("message"),
        &sink,
    );
    assert_eq!(updated.node.as_deref(), Some("error"));
    assert_eq!(updated.prefix.as_deref(), Some("err"));
    assert_eq!(updated.keys, vec![ErrorKey::Message]);

    // Both descriptors carried supported keys, so nothing was reported.
    assert!(sink.messages().is_empty());
}

#[test]
fn test_unsupported_keys_are_dropped_end_to_end() {
    let sink = RecordingDiagnostics::new();

    let structure = Structure::new_with(
        StructureOptions::new().keys(vec!["code", "bogus", "message", "code"]),
        &sink,
    );
    assert_eq!(
        structure.keys,
        vec![ErrorKey::Code, ErrorKey::Message, ErrorKey::Code]
    );
    assert!(sink.messages().is_empty());
}

#[test]
fn test_entirely_unsupported_keys_warn_once() {
    let sink = RecordingDiagnostics::new();

    let structure = Structure::new_with(
        StructureOptions::new().node("error").keys(vec!["bogus", "nope"]),
        &sink,
    );
    assert_eq!(structure.node.as_deref(), Some("error"));
    assert!(structure.keys.is_empty());

    let messages = sink.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("bogus"));
}

#[test]
fn test_update_keeps_untouched_fields_across_chain() {
    let sink = RecordingDiagnostics::new();

    let base = Structure::new_with(
        StructureOptions::new()
            .node("error")
            .prefix("err")
            .keys(vec!["code", "line"]),
        &sink,
    );

    let narrowed = base.update_with(StructureOverrides::new().keys("message"), &sink);
    let cleared = narrowed.update_with(StructureOverrides::new().clear_prefix(), &sink);

    assert_eq!(cleared.node.as_deref(), Some("error"));
    assert_eq!(cleared.prefix, None);
    assert_eq!(cleared.keys, vec![ErrorKey::Message]);

    // Each intermediate value is its own descriptor.
    assert_eq!(base.keys, vec![ErrorKey::Code, ErrorKey::Line]);
    assert_eq!(narrowed.prefix.as_deref(), Some("err"));
}

#[test]
fn test_from_defaults_through_provider_seam() {
    let sink = RecordingDiagnostics::new();
    let provider = StaticDefaults::new(Some(
        StructureOptions::new().node("error").keys(vec!["code", "message"]),
    ));

    let from_defaults = Structure::from_defaults_with(&provider, &sink);
    let from_options = Structure::new_with(
        StructureOptions::new().node("error").keys(vec!["code", "message"]),
        &sink,
    );
    assert_eq!(from_defaults, from_options);
}

#[test]
fn test_from_defaults_with_empty_provider_warns() {
    let sink = RecordingDiagnostics::new();
    let provider = StaticDefaults::new(None);

    let structure = Structure::from_defaults_with(&provider, &sink);
    assert_eq!(structure, Structure::default());
    assert_eq!(sink.messages().len(), 1);
}
