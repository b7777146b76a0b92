//! Integration entry point.

use std::sync::Arc;

use mosaic_data::StoreRegistry;
use mosaic_tracking::{EventRecorder, TrackingProxy};
use parking_lot::RwLock;
use tracing::info;

use crate::connection::ConnectionState;
use crate::experiments::ExperimentFlags;
use crate::lifecycle::LifecycleHooks;
use crate::props::with_dev_defaults;
use crate::text::{TextDefaults, correct_text_defaults};
use crate::tracking::default_tracking_table;

/// Handle to the session state the lifecycle hooks maintain.
///
/// The shell keeps this around to read back what the hooks decided:
/// corrected text defaults, the resolved connection state, and the
/// enabled experiments.
#[derive(Clone, Default)]
pub struct MobileEditor {
	text_defaults: Arc<RwLock<TextDefaults>>,
	connection: Arc<RwLock<Option<ConnectionState>>>,
	experiments: Arc<RwLock<ExperimentFlags>>,
}

impl MobileEditor {
	/// Current text defaults.
	pub fn text_defaults(&self) -> TextDefaults {
		self.text_defaults.read().clone()
	}

	/// Seeds the platform's text defaults; the pre-render hook corrects them.
	pub fn set_text_defaults(&self, defaults: TextDefaults) {
		*self.text_defaults.write() = defaults;
	}

	/// Connection state resolved by the render hook, if it ran.
	pub fn connection(&self) -> Option<ConnectionState> {
		*self.connection.read()
	}

	/// Experiments enabled by the render hook.
	pub fn experiments(&self) -> ExperimentFlags {
		*self.experiments.read()
	}
}

/// Wires the mobile integration into the shell and the store registry.
///
/// Called once at startup. Registers the pre-render font-weight
/// correction, the render-phase session setup (connection state falls
/// back to [`ConnectionState::default`] when the shell passes none, and
/// capabilities gate the experiment flags), the development-mode props
/// filter, and installs the [`TrackingProxy`] over the registry's
/// dispatch path with the default tracking table.
pub fn setup(
	hooks: &mut LifecycleHooks,
	registry: &StoreRegistry,
	recorder: Arc<dyn EventRecorder>,
	dev: bool,
) -> MobileEditor {
	let editor = MobileEditor::default();

	let text = Arc::clone(&editor.text_defaults);
	hooks.on_pre_render("mosaic-mobile::correct_font_weight", 10, move || {
		correct_text_defaults(&mut text.write());
	});

	let connection = Arc::clone(&editor.connection);
	let experiments = Arc::clone(&editor.experiments);
	hooks.on_render("mosaic-mobile::session_setup", 10, move |props| {
		let state = props.connection.unwrap_or_default();
		let flags = ExperimentFlags::from_capabilities(&props.capabilities);
		info!(
			site = state.site_id,
			active = state.active,
			experiments = ?flags.enabled(),
			"editor session configured"
		);
		*connection.write() = Some(state);
		*experiments.write() = flags;
	});

	hooks.add_props_filter("mosaic-mobile::dev_content", 10, move |props| {
		if dev { with_dev_defaults(props) } else { props }
	});

	TrackingProxy::new(default_tracking_table(), recorder).install(registry);

	editor
}
