//
// kernel_spec.rs
//
// Copyright (C) 2025 Posit Software, PBC. All rights reserved.
// Licensed under the Elastic License 2.0. See LICENSE.txt for license information.
//
//

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_with::DefaultOnNull;

use crate::resource::{RawFields, Resource};

/// The resource key naming the parent of the endpoint that serves a kernel
/// spec (e.g. a cluster or a serverless session). Kernel specs are grouped
/// by this value when listed.
pub const ENDPOINT_PARENT_RESOURCE: &str = "endpointParentResource";

/// The launch description of a kernel, from the Jupyter documentation for
/// [Kernel Specs](https://jupyter-client.readthedocs.io/en/stable/kernels.html#kernel-specs).
#[serde_with::serde_as]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Spec {
    /// The kernel's language
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "language", skip_serializing_if = "String::is_empty")]
    pub language: String,

    /// List of command line arguments to be used to start the kernel
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "argv", skip_serializing_if = "Vec::is_empty")]
    pub argv: Vec<String>,

    /// The kernel name as it should be displayed in the UI
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "display_name", skip_serializing_if = "String::is_empty")]
    pub display_name: String,

    #[serde(flatten)]
    raw_fields: RawFields,
}

impl Spec {
    pub fn new(language: String, argv: Vec<String>, display_name: String) -> Spec {
        Spec {
            language,
            argv,
            display_name,
            raw_fields: RawFields::new(),
        }
    }
}

impl Resource for Spec {
    const KIND: &'static str = "spec";

    fn raw_fields(&self) -> &RawFields {
        &self.raw_fields
    }
}

/// A named kernel spec, as served by a Jupyter server's `/api/kernelspecs`
/// endpoint.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct KernelSpec {
    /// The kernel spec's ID; serialized as `name`
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "name", skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// How to launch the kernel
    #[serde(rename = "spec")]
    pub spec: Option<Spec>,

    /// Additional resources (logos, parent resource names, ...)
    #[serde_as(as = "DefaultOnNull")]
    #[serde(rename = "resources", skip_serializing_if = "BTreeMap::is_empty")]
    pub resources: BTreeMap<String, String>,

    #[serde(flatten)]
    raw_fields: RawFields,
}

impl KernelSpec {
    pub fn new(id: String) -> KernelSpec {
        KernelSpec {
            id,
            spec: None,
            resources: BTreeMap::new(),
            raw_fields: RawFields::new(),
        }
    }

    /// The parent resource of the endpoint serving this spec, or the empty
    /// string if there is none.
    pub fn endpoint_parent_resource(&self) -> &str {
        self.resources
            .get(ENDPOINT_PARENT_RESOURCE)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// The display name from the nested spec, or the empty string if there
    /// is no spec.
    pub fn display_name(&self) -> &str {
        self.spec
            .as_ref()
            .map(|spec| spec.display_name.as_str())
            .unwrap_or_default()
    }
}

impl Resource for KernelSpec {
    const KIND: &'static str = "kernel spec";

    fn raw_fields(&self) -> &RawFields {
        &self.raw_fields
    }
}
