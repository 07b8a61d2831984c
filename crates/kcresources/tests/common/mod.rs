//
// mod.rs
//
// Copyright (C) 2025 Posit Software, PBC. All rights reserved.
// Licensed under the Elastic License 2.0. See LICENSE.txt for license information.
//

//! Common helpers for the resource round-trip tests

#![allow(dead_code)]

use std::fmt::Debug;

use kcresources::Resource;
use serde_json::Value;

/// Parse a document as a generic JSON value.
pub fn generic(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).expect("document should be valid JSON")
}

/// Deep equality of two JSON values in which numbers are compared by their
/// numeric value, so `1` and `1.0` are equal. Object key order is ignored.
pub fn json_equivalent(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| json_equivalent(a, b))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, a)| b.get(key).is_some_and(|b| json_equivalent(a, b)))
        }
        (a, b) => a == b,
    }
}

/// Decode `source` as `R`, encode it, and check that:
///
/// * the encoded document decodes to an equal record,
/// * the encoded document is equivalent to the source as generic JSON,
/// * encoding is idempotent.
///
/// Returns the decoded record and its encoding for further checks.
pub fn assert_round_trip<R>(description: &str, source: &str) -> (R, Vec<u8>)
where
    R: Resource + PartialEq + Debug,
{
    let decoded = R::from_json_str(source)
        .unwrap_or_else(|e| panic!("Failed to decode the source for {:?}: {}", description, e));
    let output = decoded
        .to_vec()
        .unwrap_or_else(|e| panic!("Failed to encode the record for {:?}: {}", description, e));

    let redecoded = R::from_slice(&output)
        .unwrap_or_else(|e| panic!("Failed to decode the output for {:?}: {}", description, e));
    assert_eq!(
        redecoded, decoded,
        "Record changed across a round trip for {:?}",
        description
    );

    let source_value = generic(source.as_bytes());
    let output_value = generic(&output);
    assert!(
        json_equivalent(&source_value, &output_value),
        "Output for {:?} is not equivalent to the source.\n  source: {}\n  output: {}",
        description,
        source_value,
        output_value
    );

    let again = redecoded.to_vec().expect("re-encoding should succeed");
    assert_eq!(
        String::from_utf8_lossy(&again),
        String::from_utf8_lossy(&output),
        "Encoding is not idempotent for {:?}",
        description
    );

    (decoded, output)
}
