use thiserror::Error;

/// Errors raised while resolving or mutating the registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
	/// No store is registered under the requested namespace key.
	#[error("unknown namespace: {0}")]
	UnknownNamespace(Box<str>),
	/// A store is already registered under this namespace key.
	#[error("store already registered: {0}")]
	DuplicateStore(Box<str>),
}
