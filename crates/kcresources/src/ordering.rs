//
// ordering.rs
//
// Copyright (C) 2025 Posit Software, PBC. All rights reserved.
// Licensed under the Elastic License 2.0. See LICENSE.txt for license information.
//
//

//! Display ordering for collections of kernel specs.
//!
//! Kernel specs are ordered by the parent resource of their endpoint, then by
//! display name, then by ID. Specs served from the same parent end up next to
//! each other and the order is fully deterministic. The order is computed
//! whenever it is needed and never stored; the collection itself stays a
//! plain hash map.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serializer;

use crate::kernel_spec::KernelSpec;

/// The composite sort key of a kernel spec entry: (endpoint parent resource,
/// display name, spec ID). Missing values sort as the empty string.
pub fn sort_key<'a>(id: &'a str, spec: &'a KernelSpec) -> (&'a str, &'a str, &'a str) {
    (spec.endpoint_parent_resource(), spec.display_name(), id)
}

/// Compare two `(spec ID, kernel spec)` entries in display order.
pub fn kernelspec_order(a: (&str, &KernelSpec), b: (&str, &KernelSpec)) -> Ordering {
    sort_key(a.0, a.1).cmp(&sort_key(b.0, b.1))
}

/// The entries of a kernel spec map, in display order.
pub fn sorted(specs: &HashMap<String, KernelSpec>) -> Vec<(&String, &KernelSpec)> {
    let mut entries: Vec<_> = specs.iter().collect();
    entries.sort_by(|a, b| kernelspec_order((a.0.as_str(), a.1), (b.0.as_str(), b.1)));
    entries
}

/// Serialize a kernel spec map as a JSON object whose members appear in
/// display order.
pub(crate) fn serialize_sorted<S>(
    specs: &HashMap<String, KernelSpec>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    log::trace!("Serializing {} kernel spec(s) in display order", specs.len());
    serializer.collect_map(sorted(specs))
}
