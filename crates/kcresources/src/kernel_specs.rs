//
// kernel_specs.rs
//
// Copyright (C) 2025 Posit Software, PBC. All rights reserved.
// Licensed under the Elastic License 2.0. See LICENSE.txt for license information.
//
//

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_with::DefaultOnNull;

use crate::kernel_spec::KernelSpec;
use crate::ordering;
use crate::resource::{RawFields, Resource};

/// The collection of kernel specs known to a server, along with the ID of
/// the default one.
#[serde_with::serde_as]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct KernelSpecs {
    /// The ID of the default kernel spec
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "default", skip_serializing_if = "String::is_empty")]
    pub default: String,

    /// Kernel specs keyed by ID. Always serialized, even when empty, with the
    /// entries in display order.
    #[serde(
        rename = "kernelspecs",
        serialize_with = "ordering::serialize_sorted",
        deserialize_with = "serde_with::As::<DefaultOnNull>::deserialize"
    )]
    pub kernelspecs: HashMap<String, KernelSpec>,

    #[serde(flatten)]
    raw_fields: RawFields,
}

impl KernelSpecs {
    pub fn new(default: String) -> KernelSpecs {
        KernelSpecs {
            default,
            kernelspecs: HashMap::new(),
            raw_fields: RawFields::new(),
        }
    }

    /// Add a kernel spec, keyed by its own ID. Returns the spec previously
    /// stored under that ID, if any.
    pub fn insert(&mut self, spec: KernelSpec) -> Option<KernelSpec> {
        self.kernelspecs.insert(spec.id.clone(), spec)
    }

    /// The kernel spec named by `default`, if it is present.
    pub fn default_spec(&self) -> Option<&KernelSpec> {
        self.kernelspecs.get(&self.default)
    }

    /// The kernel specs in display order (grouped by endpoint parent
    /// resource, then by display name, then by ID).
    pub fn sorted(&self) -> Vec<(&String, &KernelSpec)> {
        ordering::sorted(&self.kernelspecs)
    }
}

impl Resource for KernelSpecs {
    const KIND: &'static str = "kernel specs";

    fn raw_fields(&self) -> &RawFields {
        &self.raw_fields
    }
}
