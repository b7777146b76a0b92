//! Tracking configuration: which actions are instrumented, and how.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use mosaic_data::Value;
use rustc_hash::FxHashMap as HashMap;
use serde::{Deserialize, Serialize};

/// Custom tracker callable, invoked with the action's arguments.
///
/// Side effects only; the return value exists so failures can be reported
/// through the diagnostic sink. Errors never reach the dispatching caller.
pub type ObserverFn = Arc<dyn Fn(&[Value]) -> anyhow::Result<()> + Send + Sync>;

/// How one action is tracked.
#[derive(Clone)]
pub enum TrackerSpec {
	/// Record a named event through the [`EventRecorder`](crate::EventRecorder).
	Label(Box<str>),
	/// Invoke a custom observer with the action's arguments.
	Observer(ObserverFn),
}

impl fmt::Debug for TrackerSpec {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			TrackerSpec::Label(label) => f.debug_tuple("Label").field(label).finish(),
			TrackerSpec::Observer(_) => f.write_str("Observer(..)"),
		}
	}
}

/// Immutable table of tracked actions: namespace key to action name to
/// [`TrackerSpec`].
///
/// Built once at startup and handed to the proxy by value; nothing mutates
/// it afterwards, which is what makes concurrent dispatch lock-free.
#[derive(Debug, Clone, Default)]
pub struct TrackingTable {
	namespaces: HashMap<Box<str>, HashMap<Box<str>, TrackerSpec>>,
}

impl TrackingTable {
	/// Starts building a table.
	pub fn builder() -> TrackingTableBuilder {
		TrackingTableBuilder::default()
	}

	/// Compiles the serde-facing [`TrackingSpec`] into a runtime table.
	///
	/// Config files can only express label trackers; observers are
	/// registered in code through the builder.
	pub fn from_spec(spec: &TrackingSpec) -> Self {
		let mut builder = Self::builder();
		for (namespace, actions) in &spec.0 {
			for (action, label) in actions {
				builder = builder.label(namespace, action, label);
			}
		}
		builder.build()
	}

	/// The tracking map for a namespace, if it has one.
	#[inline]
	pub fn trackers(&self, namespace: &str) -> Option<&HashMap<Box<str>, TrackerSpec>> {
		self.namespaces.get(namespace)
	}

	/// The tracker for one action, if configured.
	pub fn tracker(&self, namespace: &str, action: &str) -> Option<&TrackerSpec> {
		self.namespaces.get(namespace)?.get(action)
	}

	/// Number of tracked namespaces.
	#[inline]
	pub fn len(&self) -> usize {
		self.namespaces.len()
	}

	/// Returns true if no namespace is tracked.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.namespaces.is_empty()
	}
}

/// Builder for [`TrackingTable`].
#[derive(Default)]
pub struct TrackingTableBuilder {
	namespaces: HashMap<Box<str>, HashMap<Box<str>, TrackerSpec>>,
}

impl TrackingTableBuilder {
	/// Tracks `namespace.action` with a named event label.
	pub fn label(mut self, namespace: &str, action: &str, label: &str) -> Self {
		self.insert(namespace, action, TrackerSpec::Label(label.into()));
		self
	}

	/// Tracks `namespace.action` with a custom observer function.
	pub fn observer(
		mut self,
		namespace: &str,
		action: &str,
		observe: impl Fn(&[Value]) -> anyhow::Result<()> + Send + Sync + 'static,
	) -> Self {
		self.insert(namespace, action, TrackerSpec::Observer(Arc::new(observe)));
		self
	}

	fn insert(&mut self, namespace: &str, action: &str, spec: TrackerSpec) {
		self.namespaces
			.entry(namespace.into())
			.or_default()
			.insert(action.into(), spec);
	}

	/// Finalizes the table.
	pub fn build(self) -> TrackingTable {
		TrackingTable { namespaces: self.namespaces }
	}
}

/// Serde-facing form of the table: namespace to action to event label.
///
/// ```json
/// { "core/block-editor": { "insertBlock": "editor_block_inserted" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingSpec(pub BTreeMap<String, BTreeMap<String, String>>);
