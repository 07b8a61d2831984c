//
// error_tests.rs
//
// Copyright (C) 2025 Posit Software, PBC. All rights reserved.
// Licensed under the Elastic License 2.0. See LICENSE.txt for license information.
//

//! Tests for decode failures and the file helpers

use std::io::Write;

use kcresources::{Kernel, KernelSpec, KernelSpecs, Resource, ResourceError, Session, Terminal};
use serde_json::json;

#[test]
fn test_malformed_json_is_rejected() {
    for source in ["", "{", r#"{"name": "x""#, "{name: 1}", "not json"] {
        match Terminal::from_json_str(source) {
            Err(ResourceError::MalformedDocument { kind, .. }) => assert_eq!(kind, "terminal"),
            other => panic!("Expected a malformed document error for {:?}, got {:?}", source, other),
        }
    }
}

#[test]
fn test_wrong_known_field_type_is_rejected() {
    let err = Kernel::from_json_str(r#"{"id": "k", "connections": "five"}"#).unwrap_err();
    assert!(
        matches!(err, ResourceError::TypeMismatch { kind: "kernel", .. }),
        "Unexpected error: {:?}",
        err
    );
    assert_eq!(err.code(), "KR-2");
    assert_eq!(err.kind(), "kernel");
}

#[test]
fn test_wrong_nested_field_type_fails_the_whole_decode() {
    let err = Session::from_json_str(r#"{"id": "s", "kernel": {"connections": 1, "env": []}}"#)
        .unwrap_err();
    assert!(matches!(err, ResourceError::TypeMismatch { .. }));

    let err = KernelSpec::from_json_str(r#"{"name": "n", "spec": {"argv": "python -m ipykernel"}}"#)
        .unwrap_err();
    assert!(matches!(err, ResourceError::TypeMismatch { .. }));

    let err = KernelSpec::from_json_str(r#"{"name": "n", "resources": {"logo": 7}}"#).unwrap_err();
    assert!(matches!(err, ResourceError::TypeMismatch { .. }));
}

#[test]
fn test_non_object_documents_are_rejected() {
    for source in ["[]", "null", "42", r#""kernelspecs""#] {
        let err = KernelSpecs::from_json_str(source).unwrap_err();
        assert!(
            matches!(err, ResourceError::TypeMismatch { .. }),
            "Unexpected error for {:?}: {:?}",
            source,
            err
        );
    }
}

#[test]
fn test_error_codes_and_messages() {
    let err = Terminal::from_json_str("{").unwrap_err();
    assert_eq!(err.code(), "KR-1");
    assert!(err.to_string().starts_with("Malformed terminal document"));
    err.log();

    let err = Terminal::from_file("/nonexistent/terminal.json").unwrap_err();
    assert_eq!(err.code(), "KR-4");
    assert!(matches!(err, ResourceError::Io { kind: "terminal", .. }));
}

#[test]
fn test_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kernel.json");

    let source = json!({
        "id": "k1",
        "name": "python3",
        "connections": 2,
        "env": {"PYTHONPATH": "/opt/lib", "DEPTH": 3},
        "server_extension": {"pid": 4242}
    });
    let kernel = Kernel::from_json_str(&source.to_string()).unwrap();
    kernel.to_file(&path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains('\n'), "to_file should write pretty JSON");

    let read_back = Kernel::from_file(&path).unwrap();
    assert_eq!(read_back, kernel);
    assert_eq!(read_back.raw_field("server_extension"), Some(&json!({"pid": 4242})));
}

#[test]
fn test_reader_and_writer() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"name": "t1", "last_activity": "2024-01-01T00:00:00Z"}}"#).unwrap();

    let terminal = Terminal::from_reader(std::fs::File::open(file.path()).unwrap()).unwrap();
    assert_eq!(terminal.id, "t1");

    let mut buffer = Vec::new();
    terminal.to_writer(&mut buffer, false).unwrap();
    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        r#"{"name":"t1","last_activity":"2024-01-01T00:00:00Z"}"#
    );
}

#[test]
fn test_duplicate_known_field_is_rejected() {
    let err = Terminal::from_json_str(r#"{"name": "a", "name": "b"}"#).unwrap_err();
    assert!(
        matches!(err, ResourceError::TypeMismatch { kind: "terminal", .. }),
        "Unexpected error: {:?}",
        err
    );
    assert!(err.to_string().contains("duplicate field"), "Unexpected message: {}", err);
}

#[test]
fn test_duplicate_unknown_field_keeps_the_last_value() {
    let terminal = Terminal::from_json_str(r#"{"name": "t", "x": 1, "x": 2}"#).unwrap();
    assert_eq!(terminal.raw_fields().len(), 1);
    assert_eq!(terminal.raw_field("x"), Some(&json!(2)));
    assert_eq!(terminal.to_json_string().unwrap(), r#"{"name":"t","x":2}"#);
}
