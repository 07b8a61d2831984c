//
// error.rs
//
// Copyright (C) 2025 Posit Software, PBC. All rights reserved.
// Licensed under the Elastic License 2.0. See LICENSE.txt for license information.
//
//

use log::error;
use serde_json::error::Category;
use thiserror::Error;

/// Errors raised while decoding or encoding a resource document.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The input is not valid JSON (syntax error or truncated document).
    #[error("Malformed {kind} document: {source}")]
    MalformedDocument {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The input is valid JSON, but a known field (or the document itself)
    /// has the wrong shape, e.g. a string where a number is expected.
    #[error("Unexpected value in {kind} document: {source}")]
    TypeMismatch {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The record could not be serialized.
    #[error("Failed to encode {kind}: {source}")]
    Encode {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing the underlying stream failed.
    #[error("I/O error while processing {kind}: {source}")]
    Io {
        kind: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl ResourceError {
    /// Classify a decode failure from `serde_json` for the given record kind.
    pub fn decode(kind: &'static str, source: serde_json::Error) -> Self {
        match source.classify() {
            Category::Syntax | Category::Eof => ResourceError::MalformedDocument { kind, source },
            Category::Data => ResourceError::TypeMismatch { kind, source },
            Category::Io => ResourceError::Io {
                kind,
                source: source.into(),
            },
        }
    }

    /// Classify an encode failure from `serde_json` for the given record kind.
    pub fn encode(kind: &'static str, source: serde_json::Error) -> Self {
        match source.classify() {
            Category::Io => ResourceError::Io {
                kind,
                source: source.into(),
            },
            _ => ResourceError::Encode { kind, source },
        }
    }

    /// A stable, machine-readable code for the error, e.g. `KR-2`.
    pub fn code(&self) -> String {
        let n = match self {
            ResourceError::MalformedDocument { .. } => 1,
            ResourceError::TypeMismatch { .. } => 2,
            ResourceError::Encode { .. } => 3,
            ResourceError::Io { .. } => 4,
        };
        format!("KR-{}", n)
    }

    /// The kind of record that was being processed.
    pub fn kind(&self) -> &'static str {
        match self {
            ResourceError::MalformedDocument { kind, .. }
            | ResourceError::TypeMismatch { kind, .. }
            | ResourceError::Encode { kind, .. }
            | ResourceError::Io { kind, .. } => kind,
        }
    }

    pub fn log(&self) {
        error!("Error {}: {}", self.code(), self);
    }
}
