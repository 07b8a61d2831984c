//! Schema-preserving JSON records for the resources a Jupyter server exposes:
//! kernel specs, kernels, sessions and terminals.
//!
//! Every record keeps the fields it does not know about, so a document can be
//! decoded, modified and encoded again without losing data. See
//! [`resource::Resource`].

pub mod error;

/// The running kernel record
pub mod kernel;

/// Kernel spec and launch spec records
pub mod kernel_spec;

/// The kernel spec collection record
pub mod kernel_specs;

/// Display ordering for kernel spec collections
pub mod ordering;

pub mod resource;

/// The session record
pub mod session;

/// The terminal record
pub mod terminal;

pub use error::ResourceError;
pub use kernel::Kernel;
pub use kernel_spec::{KernelSpec, Spec, ENDPOINT_PARENT_RESOURCE};
pub use kernel_specs::KernelSpecs;
pub use resource::{RawFields, Resource};
pub use session::Session;
pub use terminal::Terminal;
