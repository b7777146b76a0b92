//! Host-side lifecycle seam.
//!
//! The application shell owns a [`LifecycleHooks`] instance and drives it
//! at the matching points of its own lifecycle: [`emit_pre_render`] before
//! the editor surface mounts, [`emit_render`] when it mounts with props,
//! and [`apply_props_filters`] over the launch props it is about to hand
//! to the editor. Integration code only registers callbacks; how the shell
//! schedules these phases is its own concern.
//!
//! Hooks run in priority order (lower first); ties keep registration
//! order.
//!
//! [`emit_pre_render`]: LifecycleHooks::emit_pre_render
//! [`emit_render`]: LifecycleHooks::emit_render
//! [`apply_props_filters`]: LifecycleHooks::apply_props_filters

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::connection::ConnectionState;
use crate::experiments::Capabilities;
use crate::props::EditorProps;

/// Props the shell passes to render hooks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderProps {
	/// Connected-service state, if the shell has any.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub connection: Option<ConnectionState>,
	/// Feature capabilities granted by the shell.
	pub capabilities: Capabilities,
}

type PreRenderHook = Box<dyn Fn() + Send + Sync>;
type RenderHook = Box<dyn Fn(&RenderProps) + Send + Sync>;
type PropsFilter = Box<dyn Fn(EditorProps) -> EditorProps + Send + Sync>;

struct Entry<H> {
	id: Box<str>,
	priority: i16,
	hook: H,
}

/// Registered lifecycle callbacks, grouped by phase.
#[derive(Default)]
pub struct LifecycleHooks {
	pre_render: Vec<Entry<PreRenderHook>>,
	render: Vec<Entry<RenderHook>>,
	props_filters: Vec<Entry<PropsFilter>>,
}

impl LifecycleHooks {
	/// Creates an empty hook set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a callback for the pre-render phase.
	pub fn on_pre_render(&mut self, id: &str, priority: i16, hook: impl Fn() + Send + Sync + 'static) {
		insert(&mut self.pre_render, id, priority, Box::new(hook));
	}

	/// Registers a callback for the render phase.
	pub fn on_render(
		&mut self,
		id: &str,
		priority: i16,
		hook: impl Fn(&RenderProps) + Send + Sync + 'static,
	) {
		insert(&mut self.render, id, priority, Box::new(hook));
	}

	/// Registers a filter over the editor launch props.
	pub fn add_props_filter(
		&mut self,
		id: &str,
		priority: i16,
		filter: impl Fn(EditorProps) -> EditorProps + Send + Sync + 'static,
	) {
		insert(&mut self.props_filters, id, priority, Box::new(filter));
	}

	/// Runs all pre-render callbacks.
	pub fn emit_pre_render(&self) {
		for entry in &self.pre_render {
			trace!(hook = &*entry.id, "pre-render hook");
			(entry.hook)();
		}
	}

	/// Runs all render callbacks with the shell's props.
	pub fn emit_render(&self, props: &RenderProps) {
		for entry in &self.render {
			trace!(hook = &*entry.id, "render hook");
			(entry.hook)(props);
		}
	}

	/// Threads the launch props through every registered filter.
	pub fn apply_props_filters(&self, mut props: EditorProps) -> EditorProps {
		for entry in &self.props_filters {
			props = (entry.hook)(props);
		}
		props
	}
}

fn insert<H>(entries: &mut Vec<Entry<H>>, id: &str, priority: i16, hook: H) {
	let pos = entries.partition_point(|entry| entry.priority <= priority);
	entries.insert(pos, Entry { id: id.into(), priority, hook });
}
