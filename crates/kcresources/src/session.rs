//
// session.rs
//
// Copyright (C) 2025 Posit Software, PBC. All rights reserved.
// Licensed under the Elastic License 2.0. See LICENSE.txt for license information.
//
//

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_with::DefaultOnNull;

use crate::kernel::Kernel;
use crate::resource::{RawFields, Resource};

/// A session binds a kernel to a document (a notebook, console or file), as
/// reported by a Jupyter server's `/api/sessions` endpoint.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Session {
    /// A unique identifier for the session
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "id", skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// A human-readable name for the session
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "name", skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// The path of the document the session is attached to
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "path", skip_serializing_if = "String::is_empty")]
    pub path: String,

    /// The session type, e.g. "notebook" or "console"
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub session_type: String,

    /// The kernel backing the session
    #[serde(rename = "kernel")]
    pub kernel: Option<Kernel>,

    /// Legacy notebook description (`path`, `name`)
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "notebook", skip_serializing_if = "BTreeMap::is_empty")]
    pub notebook: BTreeMap<String, String>,

    #[serde(flatten)]
    raw_fields: RawFields,
}

impl Session {
    pub fn new(id: String, name: String, path: String, session_type: String) -> Session {
        Session {
            id,
            name,
            path,
            session_type,
            ..Session::default()
        }
    }
}

impl Resource for Session {
    const KIND: &'static str = "session";

    fn raw_fields(&self) -> &RawFields {
        &self.raw_fields
    }
}
