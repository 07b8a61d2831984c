//
// terminal.rs
//
// Copyright (C) 2025 Posit Software, PBC. All rights reserved.
// Licensed under the Elastic License 2.0. See LICENSE.txt for license information.
//
//

use serde::{Deserialize, Serialize};
use serde_with::DefaultOnNull;

use crate::resource::{RawFields, Resource};

/// A terminal, as reported by a Jupyter server's `/api/terminals` endpoint.
#[serde_with::serde_as]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Terminal {
    /// The terminal's ID; serialized as `name`
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "name", skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(flatten)]
    raw_fields: RawFields,
}

impl Terminal {
    pub fn new(id: String) -> Terminal {
        Terminal {
            id,
            raw_fields: RawFields::new(),
        }
    }
}

impl Resource for Terminal {
    const KIND: &'static str = "terminal";

    fn raw_fields(&self) -> &RawFields {
        &self.raw_fields
    }
}
