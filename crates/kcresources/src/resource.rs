//
// resource.rs
//
// Copyright (C) 2025 Posit Software, PBC. All rights reserved.
// Licensed under the Elastic License 2.0. See LICENSE.txt for license information.
//
//

//! The extensible record pattern shared by every resource type.
//!
//! A resource is a struct of known fields plus a bag of raw fields. The raw
//! bag is a flattened `serde_json::Map`, so decoding routes every key that
//! does not name a known field into the bag, and encoding writes the known
//! fields (in declaration order) followed by the raw fields (in source
//! order).

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::ResourceError;

/// Fields present in a decoded document that are not part of a record's
/// known schema, keyed by their original JSON key. Keeps source order.
pub type RawFields = serde_json::Map<String, Value>;

/// A JSON record with a fixed set of known fields and an open-ended set of
/// raw fields that survive a decode/encode round trip.
pub trait Resource: Serialize + DeserializeOwned {
    /// The name of the record kind, used in log messages and errors
    const KIND: &'static str;

    /// The fields from the source document that are not known to this
    /// record. Empty when the record was constructed directly.
    fn raw_fields(&self) -> &RawFields;

    /// Look up a single raw field by its JSON key.
    fn raw_field(&self, key: &str) -> Option<&Value> {
        self.raw_fields().get(key)
    }

    /// Decode a record from a JSON byte buffer.
    fn from_slice(bytes: &[u8]) -> Result<Self, ResourceError> {
        let resource: Self =
            serde_json::from_slice(bytes).map_err(|e| ResourceError::decode(Self::KIND, e))?;
        log::trace!(
            "Decoded {} ({} bytes, {} raw field(s))",
            Self::KIND,
            bytes.len(),
            resource.raw_fields().len()
        );
        Ok(resource)
    }

    /// Decode a record from a JSON string.
    fn from_json_str(json: &str) -> Result<Self, ResourceError> {
        Self::from_slice(json.as_bytes())
    }

    /// Decode a record from a reader. The reader is consumed to the end.
    fn from_reader<R: Read>(reader: R) -> Result<Self, ResourceError> {
        let resource: Self =
            serde_json::from_reader(reader).map_err(|e| ResourceError::decode(Self::KIND, e))?;
        log::trace!(
            "Decoded {} from reader ({} raw field(s))",
            Self::KIND,
            resource.raw_fields().len()
        );
        Ok(resource)
    }

    /// Decode a record from a JSON file.
    fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ResourceError> {
        let file = File::open(path.as_ref()).map_err(|e| ResourceError::Io {
            kind: Self::KIND,
            source: e,
        })?;
        log::debug!("Reading {} from {}", Self::KIND, path.as_ref().display());
        Self::from_reader(BufReader::new(file))
    }

    /// Encode the record as compact JSON.
    fn to_vec(&self) -> Result<Vec<u8>, ResourceError> {
        serde_json::to_vec(self).map_err(|e| ResourceError::encode(Self::KIND, e))
    }

    /// Encode the record as pretty-printed JSON.
    fn to_vec_pretty(&self) -> Result<Vec<u8>, ResourceError> {
        serde_json::to_vec_pretty(self).map_err(|e| ResourceError::encode(Self::KIND, e))
    }

    /// Encode the record as a compact JSON string.
    fn to_json_string(&self) -> Result<String, ResourceError> {
        serde_json::to_string(self).map_err(|e| ResourceError::encode(Self::KIND, e))
    }

    /// Encode the record into a writer, optionally pretty-printed.
    fn to_writer<W: Write>(&self, writer: W, pretty: bool) -> Result<(), ResourceError> {
        let result = if pretty {
            serde_json::to_writer_pretty(writer, self)
        } else {
            serde_json::to_writer(writer, self)
        };
        result.map_err(|e| ResourceError::encode(Self::KIND, e))
    }

    /// Write the record to disk as pretty-printed JSON.
    fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ResourceError> {
        let file = File::create(path.as_ref()).map_err(|e| ResourceError::Io {
            kind: Self::KIND,
            source: e,
        })?;
        log::debug!("Writing {} to {}", Self::KIND, path.as_ref().display());
        self.to_writer(file, true)
    }
}

