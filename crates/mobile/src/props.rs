//! Editor launch props and development-mode defaults.

use serde::{Deserialize, Serialize};

use crate::content::STARTER_CONTENT;

/// Title shown when a development build opens the editor without one.
pub const WELCOME_TITLE: &str = "Welcome to the mobile block editor!";

/// Props the shell passes when it mounts the editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorProps {
	/// Document title to open with.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub initial_title: Option<String>,
	/// Serialized block content to open with.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub initial_content: Option<String>,
}

/// Fills unset props with development defaults.
///
/// Fields the shell did set are never overridden; the filter only covers
/// the empty-launch case so a development build always opens on a
/// populated document.
pub fn with_dev_defaults(mut props: EditorProps) -> EditorProps {
	if props.initial_title.is_none() {
		props.initial_title = Some(WELCOME_TITLE.to_owned());
	}
	if props.initial_content.is_none() {
		props.initial_content = Some(STARTER_CONTENT.to_owned());
	}
	props
}
