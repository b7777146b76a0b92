//! Namespace identification and normalization.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Descriptor object form of a store reference.
///
/// Store modules typically export a descriptor alongside the raw key so
/// consumers can pass either to [`StoreRegistry::dispatch`]. Only the `name`
/// field participates in resolution.
///
/// [`StoreRegistry::dispatch`]: crate::StoreRegistry::dispatch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreDescriptor {
	/// The namespace key this descriptor resolves to.
	pub name: String,
}

impl StoreDescriptor {
	/// Creates a descriptor for the given namespace key.
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into() }
	}
}

/// A namespace reference as accepted at the dispatch boundary: either the
/// plain string key or a [`StoreDescriptor`].
///
/// [`NamespaceRef::key`] normalizes both forms to the string key; every
/// lookup goes through it, so the two forms always resolve identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamespaceRef {
	/// Plain namespace key, e.g. `core/block-editor`.
	Key(String),
	/// Descriptor object carrying the key in its `name` field.
	Descriptor(StoreDescriptor),
}

impl NamespaceRef {
	/// The normalized string key for lookups.
	#[inline]
	pub fn key(&self) -> &str {
		match self {
			NamespaceRef::Key(key) => key,
			NamespaceRef::Descriptor(descriptor) => &descriptor.name,
		}
	}
}

impl fmt::Display for NamespaceRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.key())
	}
}

impl From<&str> for NamespaceRef {
	fn from(key: &str) -> Self {
		NamespaceRef::Key(key.to_owned())
	}
}

impl From<String> for NamespaceRef {
	fn from(key: String) -> Self {
		NamespaceRef::Key(key)
	}
}

impl From<StoreDescriptor> for NamespaceRef {
	fn from(descriptor: StoreDescriptor) -> Self {
		NamespaceRef::Descriptor(descriptor)
	}
}
