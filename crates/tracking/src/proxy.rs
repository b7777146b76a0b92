//! The dispatch interception proxy.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use mosaic_data::{
	Action, ActionMap, Dispatch, DispatchPlugin, NamespaceRef, RegistryError, StoreRegistry,
};
use tracing::{error, info};

use crate::recorder::EventRecorder;
use crate::table::{TrackerSpec, TrackingTable};

/// Dispatch plugin that installs tracking wrappers over configured actions.
///
/// For namespaces absent from the table, dispatch is a pass-through: the
/// returned map's entries are the identical callables the store registered.
/// For tracked actions the entry is replaced, on a local copy and never on
/// the registry's own map, with a wrapper that records the event and then
/// delegates to the original.
pub struct TrackingProxy {
	table: TrackingTable,
	recorder: Arc<dyn EventRecorder>,
}

impl TrackingProxy {
	/// Creates a proxy over an immutable tracking table.
	pub fn new(table: TrackingTable, recorder: Arc<dyn EventRecorder>) -> Self {
		Self { table, recorder }
	}

	/// Installs the proxy on a registry's dispatch resolution path.
	///
	/// Done once at startup; the proxy then wraps every subsequent dispatch
	/// request for the registry's lifetime.
	pub fn install(self, registry: &StoreRegistry) {
		registry.use_plugin(Arc::new(self));
	}
}

impl DispatchPlugin for TrackingProxy {
	fn resolve_dispatch(
		&self,
		inner: &dyn Dispatch,
		namespace: &NamespaceRef,
	) -> Result<ActionMap, RegistryError> {
		let key = namespace.key();
		// Exactly one base resolution per dispatch, tracked or not. A
		// resolution failure propagates before any side effect. The map
		// handed back is already a shallow copy of the stored one, so
		// wrappers below never touch the registry's own entries.
		let mut actions = inner.dispatch(key)?;

		let Some(trackers) = self.table.trackers(key) else {
			return Ok(actions);
		};

		for (name, tracker) in trackers {
			// Configured names missing from the store are skipped rather
			// than installed as wrappers around nothing.
			let Some(original) = actions.get(name).cloned() else {
				continue;
			};
			let wrapped = instrument(name, original, tracker.clone(), Arc::clone(&self.recorder));
			actions.insert(name.clone(), wrapped);
		}
		Ok(actions)
	}
}

/// Wraps `original` so each invocation records its tracking event first.
///
/// The tracking step is bounded by a recover scope: an `Err` or a panic is
/// logged and swallowed, and the original action runs regardless. The
/// original's result, success or failure, is returned unmodified.
fn instrument(
	name: &str,
	original: Action,
	tracker: TrackerSpec,
	recorder: Arc<dyn EventRecorder>,
) -> Action {
	let name: Box<str> = name.into();
	Action::new(move |args| {
		info!(action = &*name, args = ?args, "tracked action dispatched");

		let tracked = catch_unwind(AssertUnwindSafe(|| match &tracker {
			TrackerSpec::Label(label) => recorder.record(label),
			TrackerSpec::Observer(observe) => observe(args),
		}));
		match tracked {
			Ok(Ok(())) => {}
			Ok(Err(err)) => error!(action = &*name, error = %err, "tracker failed"),
			Err(_) => error!(action = &*name, "tracker panicked"),
		}

		original.call(args)
	})
}
