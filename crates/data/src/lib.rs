//! Namespaced action-dispatch registry.
//!
//! Stores group related state-mutating actions under a namespace key
//! (e.g. `core/block-editor`). Consumers resolve a namespace to its
//! [`ActionMap`] through [`StoreRegistry::dispatch`], which routes the
//! request through a chain of [`DispatchPlugin`]s before falling back to
//! the registry's own store snapshot. Plugins can rewrap the resolved
//! actions (instrumentation, auditing) but never mutate the stored map.
//!
//! Registry reads are lock-free snapshot loads; registration uses a
//! copy-on-write swap, so dispatch can be called concurrently from any
//! number of call sites without caller-side locking.

mod action;
mod error;
mod namespace;
mod registry;

pub use action::{Action, ActionError, ActionMap, ActionResult};
pub use error::RegistryError;
pub use namespace::{NamespaceRef, StoreDescriptor};
pub use registry::{Dispatch, DispatchPlugin, StoreDef, StoreRegistry};
// Action arguments and return values are dynamic; re-export the value type
// so downstream crates don't need their own serde_json dependency.
pub use serde_json::Value;
