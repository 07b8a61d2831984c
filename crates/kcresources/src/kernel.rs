//
// kernel.rs
//
// Copyright (C) 2025 Posit Software, PBC. All rights reserved.
// Licensed under the Elastic License 2.0. See LICENSE.txt for license information.
//
//

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::DefaultOnNull;

use crate::resource::{RawFields, Resource};

/// A running kernel, as reported by a Jupyter server's `/api/kernels`
/// endpoint.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Kernel {
    /// A unique identifier for the kernel
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "id", skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// The ID of the kernel spec the kernel was started from; serialized as
    /// `name`
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "name", skip_serializing_if = "String::is_empty")]
    pub spec_id: String,

    /// When the kernel last did something, as reported by the server
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "last_activity", skip_serializing_if = "String::is_empty")]
    pub last_activity: String,

    /// The number of clients connected to the kernel. Always serialized.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "connections")]
    pub connections: i64,

    /// The kernel's execution state (e.g. "idle", "busy")
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "execution_state", skip_serializing_if = "String::is_empty")]
    pub execution_state: String,

    /// Environment variables the kernel was started with. JSON numbers are
    /// kept as JSON numbers.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "env", skip_serializing_if = "serde_json::Map::is_empty")]
    pub env: serde_json::Map<String, Value>,

    /// Free-form metadata attached to the kernel
    #[serde(rename = "metadata")]
    pub metadata: Option<serde_json::Map<String, Value>>,

    #[serde(flatten)]
    raw_fields: RawFields,
}

impl Kernel {
    pub fn new(id: String, spec_id: String) -> Kernel {
        Kernel {
            id,
            spec_id,
            ..Kernel::default()
        }
    }
}

impl Resource for Kernel {
    const KIND: &'static str = "kernel";

    fn raw_fields(&self) -> &RawFields {
        &self.raw_fields
    }
}
