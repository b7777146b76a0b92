//! End-to-end coverage of the interception contract: transparency,
//! best-effort tracking, and pass-through for untracked dispatch.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::anyhow;
use mosaic_data::{
	ActionMap, Dispatch, DispatchPlugin, NamespaceRef, RegistryError, StoreDef, StoreDescriptor,
	StoreRegistry, Value,
};
use mosaic_tracking::{EventRecorder, TrackingProxy, TrackingTable};
use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use serde_json::json;

const EDITOR: &str = "core/block-editor";

/// Recorder that remembers every label and can be told to fail.
#[derive(Default)]
struct TestRecorder {
	labels: Mutex<Vec<String>>,
	fail: bool,
}

impl TestRecorder {
	fn failing() -> Self {
		Self { labels: Mutex::new(Vec::new()), fail: true }
	}

	fn recorded(&self) -> Vec<String> {
		self.labels.lock().clone()
	}
}

impl EventRecorder for TestRecorder {
	fn record(&self, label: &str) -> anyhow::Result<()> {
		self.labels.lock().push(label.to_owned());
		if self.fail {
			return Err(anyhow!("recorder offline"));
		}
		Ok(())
	}
}

/// Registry with one editor store whose `insertBlock` counts invocations
/// and echoes its first argument.
fn editor_registry(calls: Arc<AtomicUsize>) -> StoreRegistry {
	let registry = StoreRegistry::new();
	registry
		.register(
			StoreDef::named(EDITOR)
				.action("insertBlock", move |args| {
					calls.fetch_add(1, Ordering::SeqCst);
					Ok(args.first().cloned().unwrap_or(Value::Null))
				})
				.action("selectBlock", |_| Ok(Value::Bool(true))),
		)
		.unwrap();
	registry
}

fn install(registry: &StoreRegistry, table: TrackingTable, recorder: Arc<TestRecorder>) {
	TrackingProxy::new(table, recorder).install(registry);
}

#[test]
fn untracked_namespace_passes_through() {
	let registry = editor_registry(Arc::new(AtomicUsize::new(0)));
	registry
		.register(StoreDef::named("core/editor").action("save", |_| Ok(Value::Bool(true))))
		.unwrap();

	let base = Dispatch::dispatch(&registry, "core/editor").unwrap();
	install(
		&registry,
		TrackingTable::builder().label(EDITOR, "insertBlock", "x").build(),
		Arc::new(TestRecorder::default()),
	);

	let resolved = registry.dispatch("core/editor").unwrap();
	assert_eq!(resolved.len(), base.len());
	for (name, action) in resolved.iter() {
		assert!(action.same_callable(base.get(name).unwrap()));
	}
}

#[test]
fn untracked_action_in_tracked_namespace_passes_through() {
	let registry = editor_registry(Arc::new(AtomicUsize::new(0)));
	let base = Dispatch::dispatch(&registry, EDITOR).unwrap();
	install(
		&registry,
		TrackingTable::builder().label(EDITOR, "insertBlock", "x").build(),
		Arc::new(TestRecorder::default()),
	);

	let resolved = registry.dispatch(EDITOR).unwrap();
	assert!(resolved.get("selectBlock").unwrap().same_callable(base.get("selectBlock").unwrap()));
	assert!(!resolved.get("insertBlock").unwrap().same_callable(base.get("insertBlock").unwrap()));
}

#[test]
fn tracked_action_delegates_with_same_args_and_result() {
	let calls = Arc::new(AtomicUsize::new(0));
	let registry = editor_registry(Arc::clone(&calls));
	let recorder = Arc::new(TestRecorder::default());
	install(
		&registry,
		TrackingTable::builder().label(EDITOR, "insertBlock", "editor_block_inserted").build(),
		Arc::clone(&recorder),
	);

	let block = json!({ "name": "core/paragraph", "attributes": { "content": "hi" } });
	let actions = registry.dispatch(EDITOR).unwrap();
	let result = actions.get("insertBlock").unwrap().call(std::slice::from_ref(&block));

	assert_eq!(result, Ok(block));
	assert_eq!(calls.load(Ordering::SeqCst), 1);
	assert_eq!(recorder.recorded(), vec!["editor_block_inserted".to_owned()]);
}

#[test]
fn label_recorder_called_once_per_invocation_regardless_of_args() {
	let registry = editor_registry(Arc::new(AtomicUsize::new(0)));
	let recorder = Arc::new(TestRecorder::default());
	install(
		&registry,
		TrackingTable::builder().label(EDITOR, "insertBlock", "editor_block_inserted").build(),
		Arc::clone(&recorder),
	);

	let actions = registry.dispatch(EDITOR).unwrap();
	let insert = actions.get("insertBlock").unwrap();
	insert.call(&[]).unwrap();
	insert.call(&[json!(1), json!(2), json!(3)]).unwrap();

	assert_eq!(recorder.recorded().len(), 2);
}

#[test]
fn recorder_failure_never_propagates() {
	// Scenario from the contract: insertBlock is tracked, the recorder
	// throws, and the caller must notice nothing.
	let calls = Arc::new(AtomicUsize::new(0));
	let registry = editor_registry(Arc::clone(&calls));
	let recorder = Arc::new(TestRecorder::failing());
	install(
		&registry,
		TrackingTable::builder().label(EDITOR, "insertBlock", "test").build(),
		Arc::clone(&recorder),
	);

	let block = json!({ "name": "core/heading" });
	let result = registry
		.dispatch(EDITOR)
		.unwrap()
		.get("insertBlock")
		.unwrap()
		.call(std::slice::from_ref(&block));

	assert_eq!(result, Ok(block));
	assert_eq!(calls.load(Ordering::SeqCst), 1);
	assert_eq!(recorder.recorded(), vec!["test".to_owned()]);
}

#[test]
fn failing_observer_still_runs_original() {
	let calls = Arc::new(AtomicUsize::new(0));
	let registry = editor_registry(Arc::clone(&calls));
	let observed = Arc::new(Mutex::new(Vec::<Vec<Value>>::new()));
	let seen = Arc::clone(&observed);
	install(
		&registry,
		TrackingTable::builder()
			.observer(EDITOR, "insertBlock", move |args| {
				seen.lock().push(args.to_vec());
				Err(anyhow!("observer broke"))
			})
			.build(),
		Arc::new(TestRecorder::default()),
	);

	let result =
		registry.dispatch(EDITOR).unwrap().get("insertBlock").unwrap().call(&[json!("block")]);

	assert_eq!(result, Ok(json!("block")));
	assert_eq!(calls.load(Ordering::SeqCst), 1);
	// The observer saw the same arguments the original received.
	assert_eq!(observed.lock().clone(), vec![vec![json!("block")]]);
}

#[test]
fn panicking_observer_still_runs_original() {
	let calls = Arc::new(AtomicUsize::new(0));
	let registry = editor_registry(Arc::clone(&calls));
	install(
		&registry,
		TrackingTable::builder()
			.observer(EDITOR, "insertBlock", |_| panic!("tracker bug"))
			.build(),
		Arc::new(TestRecorder::default()),
	);

	let result =
		registry.dispatch(EDITOR).unwrap().get("insertBlock").unwrap().call(&[json!("block")]);

	assert_eq!(result, Ok(json!("block")));
	assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn original_action_failure_propagates() {
	let registry = StoreRegistry::new();
	registry
		.register(StoreDef::named(EDITOR).action("removeBlock", |_| {
			Err(mosaic_data::ActionError::Failed("no such block".into()))
		}))
		.unwrap();
	install(
		&registry,
		TrackingTable::builder().label(EDITOR, "removeBlock", "editor_block_removed").build(),
		Arc::new(TestRecorder::default()),
	);

	let result = registry.dispatch(EDITOR).unwrap().get("removeBlock").unwrap().call(&[]);
	assert_eq!(result, Err(mosaic_data::ActionError::Failed("no such block".into())));
}

#[test]
fn descriptor_and_key_resolve_to_identical_configuration() {
	let registry = editor_registry(Arc::new(AtomicUsize::new(0)));
	let recorder = Arc::new(TestRecorder::default());
	install(
		&registry,
		TrackingTable::builder().label(EDITOR, "insertBlock", "editor_block_inserted").build(),
		Arc::clone(&recorder),
	);

	let by_key = registry.dispatch(EDITOR).unwrap();
	let by_descriptor = registry.dispatch(StoreDescriptor::new(EDITOR)).unwrap();

	by_key.get("insertBlock").unwrap().call(&[]).unwrap();
	by_descriptor.get("insertBlock").unwrap().call(&[]).unwrap();
	assert_eq!(recorder.recorded().len(), 2);
}

#[test]
fn registry_resolution_failure_propagates_unmodified() {
	let registry = StoreRegistry::new();
	install(
		&registry,
		TrackingTable::builder().label(EDITOR, "insertBlock", "x").build(),
		Arc::new(TestRecorder::default()),
	);

	assert_eq!(
		registry.dispatch(EDITOR),
		Err(RegistryError::UnknownNamespace(EDITOR.into())),
	);
}

/// Inner dispatcher that counts base resolutions.
struct CountingDispatch {
	actions: ActionMap,
	resolutions: AtomicUsize,
}

impl Dispatch for CountingDispatch {
	fn dispatch(&self, _namespace: &str) -> Result<ActionMap, RegistryError> {
		self.resolutions.fetch_add(1, Ordering::SeqCst);
		Ok(self.actions.clone())
	}
}

#[test]
fn base_dispatch_resolved_exactly_once_per_call() {
	let mut actions = ActionMap::new();
	actions.insert("insertBlock", mosaic_data::Action::new(|_| Ok(Value::Null)));
	let inner = CountingDispatch { actions, resolutions: AtomicUsize::new(0) };

	// Tracked namespace.
	let proxy = TrackingProxy::new(
		TrackingTable::builder().label(EDITOR, "insertBlock", "x").build(),
		Arc::new(TestRecorder::default()),
	);
	proxy.resolve_dispatch(&inner, &NamespaceRef::from(EDITOR)).unwrap();
	assert_eq!(inner.resolutions.load(Ordering::SeqCst), 1);

	// Untracked namespace.
	proxy.resolve_dispatch(&inner, &NamespaceRef::from("core/editor")).unwrap();
	assert_eq!(inner.resolutions.load(Ordering::SeqCst), 2);
}
