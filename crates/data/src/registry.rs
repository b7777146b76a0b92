//! Store registration and pluggable dispatch resolution.

use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::RwLock;
use rustc_hash::FxHashMap as HashMap;
use serde_json::Value;
use tracing::debug;

use crate::action::{Action, ActionMap, ActionResult};
use crate::error::RegistryError;
use crate::namespace::NamespaceRef;

/// The dispatch capability handed to plugins.
///
/// Takes the already-normalized namespace key and resolves it to the
/// namespace's [`ActionMap`]. Implementors must be cheap to call; the
/// registry's own implementation is a lock-free snapshot lookup.
pub trait Dispatch: Send + Sync {
	/// Resolves `namespace` to its action map.
	fn dispatch(&self, namespace: &str) -> Result<ActionMap, RegistryError>;
}

/// Extension point over namespace dispatch resolution.
///
/// Plugins are installed once at startup via [`StoreRegistry::use_plugin`]
/// and live for the registry's lifetime. Each plugin receives the raw
/// [`NamespaceRef`] (string or descriptor) and the `inner` capability that
/// resolves the rest of the chain; it may return the inner result untouched
/// or a rewrapped copy, but must never mutate the registry's stored map.
pub trait DispatchPlugin: Send + Sync {
	/// Resolves dispatch for `namespace`, delegating to `inner` for the base map.
	fn resolve_dispatch(
		&self,
		inner: &dyn Dispatch,
		namespace: &NamespaceRef,
	) -> Result<ActionMap, RegistryError>;
}

/// A named store: a namespace key plus its registered actions.
pub struct StoreDef {
	name: Box<str>,
	actions: ActionMap,
}

impl StoreDef {
	/// Creates a store with an initial action map.
	pub fn new(name: impl Into<Box<str>>, actions: ActionMap) -> Self {
		Self { name: name.into(), actions }
	}

	/// Creates an empty store for builder-style construction via [`StoreDef::action`].
	pub fn named(name: impl Into<Box<str>>) -> Self {
		Self::new(name, ActionMap::new())
	}

	/// Adds an action callable to the store.
	pub fn action(
		mut self,
		name: impl Into<Box<str>>,
		f: impl Fn(&[Value]) -> ActionResult + Send + Sync + 'static,
	) -> Self {
		self.actions.insert(name, Action::new(f));
		self
	}

	/// The namespace key this store registers under.
	#[inline]
	pub fn name(&self) -> &str {
		&self.name
	}
}

#[derive(Clone, Default)]
struct RegistrySnapshot {
	stores: HashMap<Box<str>, ActionMap>,
}

/// Reference registry implementation.
///
/// Stores live in a copy-on-write snapshot (reads never block writers and
/// vice versa). Dispatch requests route through the installed plugin chain,
/// outermost plugin first, with the registry's snapshot lookup as the
/// innermost capability.
pub struct StoreRegistry {
	snap: ArcSwap<RegistrySnapshot>,
	plugins: RwLock<Vec<Arc<dyn DispatchPlugin>>>,
}

impl StoreRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self {
			snap: ArcSwap::from_pointee(RegistrySnapshot::default()),
			plugins: RwLock::new(Vec::new()),
		}
	}

	/// Registers a store under its namespace key.
	///
	/// Fails with [`RegistryError::DuplicateStore`] if the key is taken.
	pub fn register(&self, store: StoreDef) -> Result<(), RegistryError> {
		loop {
			let cur = self.snap.load_full();
			if cur.stores.contains_key(store.name()) {
				return Err(RegistryError::DuplicateStore(store.name.clone()));
			}

			let mut next = (*cur).clone();
			next.stores.insert(store.name.clone(), store.actions.clone());

			let prev = self.snap.compare_and_swap(&cur, Arc::new(next));
			if Arc::ptr_eq(&prev, &cur) {
				debug!(namespace = &*store.name, actions = store.actions.len(), "store registered");
				return Ok(());
			}
		}
	}

	/// Installs a dispatch plugin.
	///
	/// The most recently installed plugin is outermost: it sees dispatch
	/// requests first and the previously installed chain as its `inner`.
	pub fn use_plugin(&self, plugin: Arc<dyn DispatchPlugin>) {
		self.plugins.write().push(plugin);
	}

	/// Resolves a namespace (key or descriptor) to its action map, routing
	/// through the plugin chain.
	pub fn dispatch(&self, namespace: impl Into<NamespaceRef>) -> Result<ActionMap, RegistryError> {
		let namespace = namespace.into();
		let plugins = self.plugins.read().clone();
		self.dispatch_chain(&plugins, &namespace)
	}

	fn dispatch_chain(
		&self,
		plugins: &[Arc<dyn DispatchPlugin>],
		namespace: &NamespaceRef,
	) -> Result<ActionMap, RegistryError> {
		match plugins.split_last() {
			Some((outer, rest)) => {
				let inner = ChainedDispatch { registry: self, rest };
				outer.resolve_dispatch(&inner, namespace)
			}
			None => self.base_dispatch(namespace.key()),
		}
	}

	fn base_dispatch(&self, key: &str) -> Result<ActionMap, RegistryError> {
		let snap = self.snap.load();
		snap.stores
			.get(key)
			.cloned()
			.ok_or_else(|| RegistryError::UnknownNamespace(key.into()))
	}
}

impl Default for StoreRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl Dispatch for StoreRegistry {
	fn dispatch(&self, namespace: &str) -> Result<ActionMap, RegistryError> {
		self.base_dispatch(namespace)
	}
}

/// Inner capability handed to a plugin: the remainder of the chain below it.
struct ChainedDispatch<'a> {
	registry: &'a StoreRegistry,
	rest: &'a [Arc<dyn DispatchPlugin>],
}

impl Dispatch for ChainedDispatch<'_> {
	fn dispatch(&self, namespace: &str) -> Result<ActionMap, RegistryError> {
		self.registry.dispatch_chain(self.rest, &NamespaceRef::from(namespace))
	}
}
